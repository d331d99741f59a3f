//! Data model for the video catalog
//!
//! This module defines data structures that are independent of
//! both the catalog input format and the REPL presentation layer.

mod playlist;
mod video;

pub use playlist::Playlist;
pub use video::Video;
