//! Error types for catalog, playback and playlist operations
//!
//! All of these are user-facing and non-fatal: the REPL maps each
//! variant to a status line and carries on.

use thiserror::Error;

/// An error raised by a playback operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The requested video id is not in the catalog.
    #[error("video {0} does not exist")]
    NotFound(String),
    /// No video is currently loaded.
    #[error("no video is currently playing")]
    NothingPlaying,
    /// The current video is already paused.
    #[error("video is already paused")]
    AlreadyPaused,
    /// The current video is playing, not paused.
    #[error("video is not paused")]
    NotPaused,
    /// Random play found no eligible video.
    #[error("no videos available")]
    EmptyCatalog,
}

/// An error raised by a playlist operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    /// A playlist with the same name (case-insensitive) already exists.
    #[error("a playlist named {0} already exists")]
    DuplicateName(String),
    #[error("playlist {0} does not exist")]
    PlaylistNotFound(String),
    /// The video id is not in the catalog.
    #[error("video {0} does not exist")]
    VideoNotFound(String),
    #[error("video {0} is already in the playlist")]
    AlreadyInPlaylist(String),
    #[error("video {0} is not in the playlist")]
    NotInPlaylist(String),
}

/// An error raised by a catalog mutation or load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two catalog records share the same id (load time only).
    #[error("duplicate video id {0} in catalog")]
    DuplicateId(String),
    #[error("video {0} does not exist")]
    VideoNotFound(String),
    #[error("video {0} is already flagged")]
    AlreadyFlagged(String),
    #[error("video {0} is not flagged")]
    NotFlagged(String),
}
