/// Represents a playlist
///
/// The display name keeps the casing the user typed at creation;
/// name uniqueness is enforced case-insensitively by the owning
/// collection, not here.
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Playlist name as originally typed
    pub name: String,

    /// Video ids in insertion order, duplicates disallowed
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    /// Append a video id, returning false if it is already present
    pub fn add(&mut self, video_id: String) -> bool {
        if self.contains(&video_id) {
            return false;
        }
        self.video_ids.push(video_id);
        true
    }

    /// Remove a video id, returning false if it was not present
    pub fn remove(&mut self, video_id: &str) -> bool {
        match self.video_ids.iter().position(|id| id == video_id) {
            Some(index) => {
                self.video_ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove all videos, keeping the playlist itself
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Whether the playlist contains a video id
    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Video ids in insertion order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}
