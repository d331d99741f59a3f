//! Video catalog store and query surface
//!
//! The catalog is loaded once at startup and only mutated through
//! flag/unflag. Flagged videos stay in the store but are excluded
//! from listings, search and random play; they remain playable
//! directly by id.

mod loader;

pub use loader::load_catalog;

use crate::error::CatalogError;
use crate::model::Video;
use rand::seq::SliceRandom;
use std::collections::HashMap;

/// Default flag reason when the user supplies none
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Complete video catalog, indexed by video id
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    videos: HashMap<String, Video>,
}

impl VideoCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video to the catalog
    pub fn insert(&mut self, video: Video) -> Result<(), CatalogError> {
        if self.videos.contains_key(&video.id) {
            return Err(CatalogError::DuplicateId(video.id));
        }
        self.videos.insert(video.id.clone(), video);
        Ok(())
    }

    /// Get a video by id, flagged or not
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// Whether a video id exists in the catalog, flagged or not
    pub fn contains(&self, id: &str) -> bool {
        self.videos.contains_key(id)
    }

    /// Total number of videos, including flagged ones
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// All unflagged videos sorted by title, ties broken by id
    pub fn list_all(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.values().filter(|v| !v.is_flagged()).collect();
        sort_by_title(&mut videos);
        videos
    }

    /// Unflagged videos whose title contains the term, case-insensitive,
    /// sorted by title then id
    pub fn search_by_title(&self, term: &str) -> Vec<&Video> {
        let term = term.to_lowercase();
        let mut videos: Vec<&Video> = self
            .videos
            .values()
            .filter(|v| !v.is_flagged() && v.title.to_lowercase().contains(&term))
            .collect();
        sort_by_title(&mut videos);
        videos
    }

    /// Unflagged videos carrying the exact tag, case-insensitive,
    /// sorted by title then id
    pub fn search_by_tag(&self, tag: &str) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self
            .videos
            .values()
            .filter(|v| {
                !v.is_flagged() && v.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
            })
            .collect();
        sort_by_title(&mut videos);
        videos
    }

    /// Pick a uniformly random unflagged video, None if there is none
    pub fn random_unflagged(&self) -> Option<&Video> {
        let eligible: Vec<&Video> = self.videos.values().filter(|v| !v.is_flagged()).collect();
        eligible.choose(&mut rand::thread_rng()).copied()
    }

    /// Flag a video, hiding it from listings and search
    pub fn flag(&mut self, id: &str, reason: Option<String>) -> Result<&Video, CatalogError> {
        let video = self
            .videos
            .get_mut(id)
            .ok_or_else(|| CatalogError::VideoNotFound(id.to_string()))?;
        if video.is_flagged() {
            return Err(CatalogError::AlreadyFlagged(id.to_string()));
        }
        video.flag_reason = Some(reason.unwrap_or_else(|| DEFAULT_FLAG_REASON.to_string()));
        Ok(video)
    }

    /// Remove the flag from a video
    pub fn unflag(&mut self, id: &str) -> Result<&Video, CatalogError> {
        let video = self
            .videos
            .get_mut(id)
            .ok_or_else(|| CatalogError::VideoNotFound(id.to_string()))?;
        if !video.is_flagged() {
            return Err(CatalogError::NotFlagged(id.to_string()));
        }
        video.flag_reason = None;
        Ok(video)
    }
}

/// Sort by title, ties broken by id
fn sort_by_title(videos: &mut [&Video]) {
    videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
}
