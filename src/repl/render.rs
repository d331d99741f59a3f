//! Status-line rendering
//!
//! Small formatting helpers shared by the command dispatcher. The
//! core never prints; everything user-visible is built here.

use crate::model::{Playlist, Video};

/// One-line video summary: `Title (id) [tag1 tag2]`, with a FLAGGED
/// suffix when applicable
pub fn video_line(video: &Video) -> String {
    let mut line = format!("{} ({}) [{}]", video.title, video.id, video.tags.join(" "));
    if let Some(reason) = &video.flag_reason {
        line.push_str(&format!(" - FLAGGED (reason: {})", reason));
    }
    line
}

/// Header plus one video per line
pub fn video_listing(header: &str, videos: &[&Video]) -> String {
    let mut out = header.to_string();
    for video in videos {
        out.push('\n');
        out.push_str(&video_line(video));
    }
    out
}

/// Numbered search results, or a no-results line
pub fn search_results(term: &str, videos: &[&Video]) -> String {
    if videos.is_empty() {
        return format!("No search results for {}", term);
    }
    let mut out = format!("Here are the results for {}:", term);
    for (index, video) in videos.iter().enumerate() {
        out.push_str(&format!("\n  {}) {}", index + 1, video_line(video)));
    }
    out
}

/// Playlist header plus its resolved videos, in playlist order
pub fn playlist_contents(
    playlist: &Playlist,
    resolve: impl Fn(&str) -> Option<Video>,
) -> String {
    let mut out = format!("Showing playlist: {}", playlist.name);
    if playlist.is_empty() {
        out.push_str("\nNo videos here yet");
        return out;
    }
    for id in playlist.video_ids() {
        out.push('\n');
        match resolve(id) {
            Some(video) => out.push_str(&video_line(&video)),
            // insertion-time validation means this only happens if the
            // catalog ever learns to forget videos
            None => out.push_str(id),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_line_format() {
        let video = Video::new(
            "cat_video_id",
            "Amazing Cats",
            vec!["#cat".to_string(), "#animal".to_string()],
        );
        assert_eq!(
            video_line(&video),
            "Amazing Cats (cat_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn test_video_line_no_tags() {
        let video = Video::new("id", "Title", Vec::new());
        assert_eq!(video_line(&video), "Title (id) []");
    }

    #[test]
    fn test_video_line_flagged() {
        let mut video = Video::new("id", "Title", Vec::new());
        video.flag_reason = Some("dont_like".to_string());
        assert_eq!(
            video_line(&video),
            "Title (id) [] - FLAGGED (reason: dont_like)"
        );
    }

    #[test]
    fn test_search_results_numbering() {
        let a = Video::new("a_id", "Alpha", Vec::new());
        let b = Video::new("b_id", "Beta", Vec::new());
        let out = search_results("a", &[&a, &b]);
        assert_eq!(
            out,
            "Here are the results for a:\n  1) Alpha (a_id) []\n  2) Beta (b_id) []"
        );
    }

    #[test]
    fn test_search_results_empty() {
        assert_eq!(search_results("xyz", &[]), "No search results for xyz");
    }
}
