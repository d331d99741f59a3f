use crate::catalog::VideoCatalog;
use crate::error::PlaybackError;
use crate::model::Video;

/// Whether the current video is running or paused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    Paused,
}

/// Result of a successful play: the title that started, plus the
/// title that was implicitly stopped, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub stopped: Option<String>,
    pub started: String,
}

/// Playback state machine: at most one current video, optionally paused
///
/// Invariant: `paused` is only true while a current video is set.
#[derive(Debug, Clone, Default)]
pub struct PlaybackSession {
    current: Option<String>,
    paused: bool,
}

impl PlaybackSession {
    /// Create a session with nothing playing
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playing a video by id, implicitly stopping any current one.
    /// Flagged videos are playable directly by id.
    pub fn play(
        &mut self,
        catalog: &VideoCatalog,
        video_id: &str,
    ) -> Result<PlayOutcome, PlaybackError> {
        let video = catalog
            .get(video_id)
            .ok_or_else(|| PlaybackError::NotFound(video_id.to_string()))?;

        let stopped = self.stop(catalog).ok();
        self.current = Some(video.id.clone());
        self.paused = false;

        Ok(PlayOutcome {
            stopped,
            started: video.title.clone(),
        })
    }

    /// Stop the current video, returning its title
    pub fn stop(&mut self, catalog: &VideoCatalog) -> Result<String, PlaybackError> {
        let id = self.current.take().ok_or(PlaybackError::NothingPlaying)?;
        self.paused = false;
        Ok(resolve_title(catalog, id))
    }

    /// Play a uniformly random unflagged video
    pub fn play_random(&mut self, catalog: &VideoCatalog) -> Result<PlayOutcome, PlaybackError> {
        let id = catalog
            .random_unflagged()
            .map(|v| v.id.clone())
            .ok_or(PlaybackError::EmptyCatalog)?;
        self.play(catalog, &id)
    }

    /// Pause the current video, returning its title
    pub fn pause(&mut self, catalog: &VideoCatalog) -> Result<String, PlaybackError> {
        let id = self
            .current
            .clone()
            .ok_or(PlaybackError::NothingPlaying)?;
        if self.paused {
            return Err(PlaybackError::AlreadyPaused);
        }
        self.paused = true;
        Ok(resolve_title(catalog, id))
    }

    /// Resume a paused video, returning its title
    pub fn resume(&mut self, catalog: &VideoCatalog) -> Result<String, PlaybackError> {
        let id = self
            .current
            .clone()
            .ok_or(PlaybackError::NothingPlaying)?;
        if !self.paused {
            return Err(PlaybackError::NotPaused);
        }
        self.paused = false;
        Ok(resolve_title(catalog, id))
    }

    /// Read-only projection of the current state
    pub fn current_status<'a>(&self, catalog: &'a VideoCatalog) -> Option<(&'a Video, PlayState)> {
        let id = self.current.as_deref()?;
        let state = if self.paused {
            PlayState::Paused
        } else {
            PlayState::Playing
        };
        catalog.get(id).map(|video| (video, state))
    }

    /// Title of the currently paused video, if any
    pub fn paused_title(&self, catalog: &VideoCatalog) -> Option<String> {
        if !self.paused {
            return None;
        }
        self.current.clone().map(|id| resolve_title(catalog, id))
    }
}

/// Catalog entries are never removed, so the id always resolves;
/// fall back to the raw id if that ever changes.
fn resolve_title(catalog: &VideoCatalog, id: String) -> String {
    match catalog.get(&id) {
        Some(video) => video.title.clone(),
        None => id,
    }
}
