//! Mutable per-session state: playback and playlists
//!
//! Both live for the process lifetime only. The catalog is passed
//! into each operation that needs to resolve a video id; the
//! session never owns it.

mod playback;
mod playlists;

pub use playback::{PlayOutcome, PlayState, PlaybackSession};
pub use playlists::PlaylistCollection;
