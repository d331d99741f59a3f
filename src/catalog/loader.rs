//! Catalog file (catalog.json) loader
//!
//! The catalog file is a JSON array of video records:
//! `[{"id": "...", "title": "...", "tags": ["#tag", ...]}, ...]`.
//! Flag state is runtime-only and never read from the file.

use super::VideoCatalog;
use crate::model::Video;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a catalog file and build the in-memory catalog
pub fn load_catalog(path: &Path) -> Result<VideoCatalog> {
    let file =
        File::open(path).with_context(|| format!("Failed to open catalog file: {:?}", path))?;

    let videos: Vec<Video> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse catalog file: {:?}", path))?;

    let mut catalog = VideoCatalog::new();
    for video in videos {
        catalog
            .insert(video)
            .with_context(|| format!("Invalid catalog file: {:?}", path))?;
    }

    log::info!("Loaded {} videos from catalog", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write catalog");
        file
    }

    #[test]
    fn test_load_valid_catalog() {
        let file = write_catalog(
            r##"[
                {"id": "cat_video_id", "title": "Amazing Cats", "tags": ["#cat", "#animal"]},
                {"id": "dog_video_id", "title": "Funny Dogs"}
            ]"##,
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("cat_video_id").unwrap().tags.len(), 2);
        // missing tags field defaults to empty
        assert!(catalog.get("dog_video_id").unwrap().tags.is_empty());
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let file = write_catalog(
            r#"[
                {"id": "cat_video_id", "title": "Amazing Cats", "tags": []},
                {"id": "cat_video_id", "title": "Copy Cats", "tags": []}
            ]"#,
        );

        assert!(load_catalog(file.path()).is_err());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let file = write_catalog("not json");
        assert!(load_catalog(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_catalog(Path::new("/nonexistent/catalog.json")).is_err());
    }
}
