use serde::{Deserialize, Serialize};

/// Represents a single video with its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Video title
    pub title: String,

    /// Tags in the order the catalog lists them
    #[serde(default)]
    pub tags: Vec<String>,

    /// Flag reason when the video is flagged; flagged videos are
    /// hidden from listings, search and random play. Never present
    /// in the catalog file, only set at runtime.
    #[serde(skip)]
    pub flag_reason: Option<String>,
}

impl Video {
    /// Create an unflagged video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
            flag_reason: None,
        }
    }

    /// Whether this video is currently flagged
    pub fn is_flagged(&self) -> bool {
        self.flag_reason.is_some()
    }
}
