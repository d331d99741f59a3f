//! Video Console - in-memory video catalog with playback and playlists
//!
//! This library holds a video catalog loaded from a JSON file and
//! drives a single-user playback session (play/pause/stop, named
//! playlists, search and flagging) through a line-based REPL.

pub mod catalog;
pub mod error;
pub mod model;
pub mod repl;
pub mod session;

pub use catalog::{load_catalog, VideoCatalog};
pub use repl::Repl;
