//! Command dispatch: parsed commands in, status lines out
//!
//! The REPL owns the catalog and all per-session state. Every
//! command produces exactly one status block; failures are rendered,
//! never propagated.

mod command;
mod render;

pub use command::{Command, ParseError};
pub use render::video_line;

use crate::catalog::VideoCatalog;
use crate::error::{CatalogError, PlaybackError, PlaylistError};
use crate::session::{PlayState, PlaybackSession, PlaylistCollection};

const HELP_TEXT: &str = "\
Available commands:
  NUM_VIDEOS | SHOW_ALL_VIDEOS | PLAY <id> | PLAY_RANDOM | STOP | PAUSE | CONTINUE | SHOW_PLAYING
  CREATE_PLAYLIST <name> | ADD_TO_PLAYLIST <name> <id> | REMOVE_FROM_PLAYLIST <name> <id>
  CLEAR_PLAYLIST <name> | DELETE_PLAYLIST <name> | SHOW_PLAYLIST <name> | SHOW_ALL_PLAYLISTS
  SEARCH_VIDEOS <term> | SEARCH_VIDEOS_WITH_TAG <tag> | FLAG_VIDEO <id> [reason] | ALLOW_VIDEO <id>
  HELP | EXIT";

/// One interactive session: catalog plus mutable playback/playlist state
pub struct Repl {
    catalog: VideoCatalog,
    session: PlaybackSession,
    playlists: PlaylistCollection,
}

impl Repl {
    /// Create a session over a loaded catalog
    pub fn new(catalog: VideoCatalog) -> Self {
        Self {
            catalog,
            session: PlaybackSession::new(),
            playlists: PlaylistCollection::new(),
        }
    }

    /// Execute one command line and return the rendered status block.
    /// Returns None when the session should end (EXIT).
    pub fn execute(&mut self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return Some(String::new());
        }

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(error) => return Some(error.to_string()),
        };
        log::debug!("Executing command: {:?}", command);

        let output = match command {
            Command::Exit => return None,
            Command::Help => HELP_TEXT.to_string(),

            Command::NumVideos => format!("{} videos in the library", self.catalog.len()),
            Command::ShowAllVideos => render::video_listing(
                "Here's a list of all available videos:",
                &self.catalog.list_all(),
            ),

            Command::Play { video_id } => self.play(&video_id),
            Command::PlayRandom => self.play_random(),
            Command::Stop => match self.session.stop(&self.catalog) {
                Ok(title) => format!("Stopping video: {}", title),
                Err(_) => "Cannot stop video: No video is currently playing".to_string(),
            },
            Command::Pause => self.pause(),
            Command::Continue => match self.session.resume(&self.catalog) {
                Ok(title) => format!("Continuing video: {}", title),
                Err(PlaybackError::NotPaused) => {
                    "Cannot continue video: Video is not paused".to_string()
                }
                Err(_) => "Cannot continue video: No video is currently playing".to_string(),
            },
            Command::ShowPlaying => match self.session.current_status(&self.catalog) {
                Some((video, PlayState::Playing)) => {
                    format!("Currently playing: {}", video_line(video))
                }
                Some((video, PlayState::Paused)) => {
                    format!("Currently playing: {} - PAUSED", video_line(video))
                }
                None => "No video is currently playing".to_string(),
            },

            Command::CreatePlaylist { name } => match self.playlists.create(&name) {
                Ok(()) => format!("Successfully created new playlist: {}", name),
                Err(_) => {
                    "Cannot create playlist: A playlist with the same name already exists"
                        .to_string()
                }
            },
            Command::AddToPlaylist { name, video_id } => {
                match self.playlists.add_video(&self.catalog, &name, &video_id) {
                    Ok(title) => format!("Added video to {}: {}", name, title),
                    Err(error) => {
                        format!("Cannot add video to {}: {}", name, playlist_cause(&error))
                    }
                }
            }
            Command::RemoveFromPlaylist { name, video_id } => {
                match self.playlists.remove_video(&self.catalog, &name, &video_id) {
                    Ok(title) => format!("Removed video from {}: {}", name, title),
                    Err(error) => format!(
                        "Cannot remove video from {}: {}",
                        name,
                        playlist_cause(&error)
                    ),
                }
            }
            Command::ClearPlaylist { name } => match self.playlists.clear(&name) {
                Ok(()) => format!("Successfully removed all videos from {}", name),
                Err(_) => format!("Cannot clear playlist {}: Playlist does not exist", name),
            },
            Command::DeletePlaylist { name } => match self.playlists.delete(&name) {
                Ok(()) => format!("Deleted playlist: {}", name),
                Err(_) => format!("Cannot delete playlist {}: Playlist does not exist", name),
            },
            Command::ShowPlaylist { name } => match self.playlists.find(&name) {
                Some(playlist) => render::playlist_contents(playlist, |id| {
                    self.catalog.get(id).cloned()
                }),
                None => format!("Cannot show playlist {}: Playlist does not exist", name),
            },
            Command::ShowAllPlaylists => {
                if self.playlists.is_empty() {
                    "No playlists exist yet".to_string()
                } else {
                    let mut out = "Showing all playlists:".to_string();
                    for playlist in self.playlists.list() {
                        out.push('\n');
                        out.push_str(&playlist.name);
                    }
                    out
                }
            }

            Command::SearchVideos { term } => {
                render::search_results(&term, &self.catalog.search_by_title(&term))
            }
            Command::SearchVideosWithTag { tag } => {
                render::search_results(&tag, &self.catalog.search_by_tag(&tag))
            }
            Command::FlagVideo { video_id, reason } => {
                match self.catalog.flag(&video_id, reason) {
                    Ok(video) => format!(
                        "Successfully flagged video: {} (reason: {})",
                        video.title,
                        video.flag_reason.as_deref().unwrap_or_default()
                    ),
                    Err(CatalogError::AlreadyFlagged(_)) => {
                        "Cannot flag video: Video is already flagged".to_string()
                    }
                    Err(_) => "Cannot flag video: Video does not exist".to_string(),
                }
            }
            Command::AllowVideo { video_id } => match self.catalog.unflag(&video_id) {
                Ok(video) => format!("Successfully removed flag from video: {}", video.title),
                Err(CatalogError::NotFlagged(_)) => {
                    "Cannot remove flag from video: Video is not flagged".to_string()
                }
                Err(_) => "Cannot remove flag from video: Video does not exist".to_string(),
            },
        };

        Some(output)
    }

    fn play(&mut self, video_id: &str) -> String {
        match self.session.play(&self.catalog, video_id) {
            Ok(outcome) => {
                let mut out = String::new();
                if let Some(stopped) = outcome.stopped {
                    out.push_str(&format!("Stopping video: {}\n", stopped));
                }
                out.push_str(&format!("Playing video: {}", outcome.started));
                out
            }
            Err(_) => "Cannot play video: Video does not exist".to_string(),
        }
    }

    fn play_random(&mut self) -> String {
        match self.session.play_random(&self.catalog) {
            Ok(outcome) => {
                let mut out = String::new();
                if let Some(stopped) = outcome.stopped {
                    out.push_str(&format!("Stopping video: {}\n", stopped));
                }
                out.push_str(&format!("Playing video: {}", outcome.started));
                out
            }
            Err(_) => "No videos available".to_string(),
        }
    }

    fn pause(&mut self) -> String {
        match self.session.pause(&self.catalog) {
            Ok(title) => format!("Pausing video: {}", title),
            Err(PlaybackError::AlreadyPaused) => {
                // the failed pause leaves state untouched, so the paused
                // title is still available
                let title = self.session.paused_title(&self.catalog).unwrap_or_default();
                format!("Video already paused: {}", title)
            }
            Err(_) => "Cannot pause video: No video is currently playing".to_string(),
        }
    }
}

/// Cause text shared by the add/remove playlist failures
fn playlist_cause(error: &PlaylistError) -> &'static str {
    match error {
        PlaylistError::PlaylistNotFound(_) => "Playlist does not exist",
        PlaylistError::VideoNotFound(_) => "Video does not exist",
        PlaylistError::AlreadyInPlaylist(_) => "Video already added",
        PlaylistError::NotInPlaylist(_) => "Video is not in this playlist",
        PlaylistError::DuplicateName(_) => "A playlist with the same name already exists",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Video;

    fn create_test_repl() -> Repl {
        let mut catalog = VideoCatalog::new();
        catalog
            .insert(Video::new(
                "cat_video_id",
                "Amazing Cats",
                vec!["#cat".to_string(), "#animal".to_string()],
            ))
            .unwrap();
        catalog
            .insert(Video::new(
                "dog_video_id",
                "Funny Dogs",
                vec!["#dog".to_string(), "#animal".to_string()],
            ))
            .unwrap();
        Repl::new(catalog)
    }

    fn run(repl: &mut Repl, line: &str) -> String {
        repl.execute(line).expect("unexpected exit")
    }

    #[test]
    fn test_num_videos() {
        let mut repl = create_test_repl();
        assert_eq!(run(&mut repl, "NUM_VIDEOS"), "2 videos in the library");
    }

    #[test]
    fn test_play_and_implicit_stop() {
        let mut repl = create_test_repl();
        assert_eq!(
            run(&mut repl, "PLAY cat_video_id"),
            "Playing video: Amazing Cats"
        );
        assert_eq!(
            run(&mut repl, "PLAY dog_video_id"),
            "Stopping video: Amazing Cats\nPlaying video: Funny Dogs"
        );
    }

    #[test]
    fn test_pause_twice_reports_already_paused() {
        let mut repl = create_test_repl();
        run(&mut repl, "PLAY cat_video_id");
        assert_eq!(run(&mut repl, "PAUSE"), "Pausing video: Amazing Cats");
        assert_eq!(run(&mut repl, "PAUSE"), "Video already paused: Amazing Cats");
    }

    #[test]
    fn test_show_playing_paused_suffix() {
        let mut repl = create_test_repl();
        run(&mut repl, "PLAY cat_video_id");
        run(&mut repl, "PAUSE");
        assert_eq!(
            run(&mut repl, "SHOW_PLAYING"),
            "Currently playing: Amazing Cats (cat_video_id) [#cat #animal] - PAUSED"
        );
    }

    #[test]
    fn test_playlist_round_trip() {
        let mut repl = create_test_repl();
        assert_eq!(
            run(&mut repl, "CREATE_PLAYLIST my_playlist"),
            "Successfully created new playlist: my_playlist"
        );
        assert_eq!(
            run(&mut repl, "ADD_TO_PLAYLIST my_playlist cat_video_id"),
            "Added video to my_playlist: Amazing Cats"
        );
        assert_eq!(
            run(&mut repl, "SHOW_PLAYLIST my_playlist"),
            "Showing playlist: my_playlist\nAmazing Cats (cat_video_id) [#cat #animal]"
        );
        assert_eq!(
            run(&mut repl, "REMOVE_FROM_PLAYLIST my_playlist cat_video_id"),
            "Removed video from my_playlist: Amazing Cats"
        );
        assert_eq!(
            run(&mut repl, "SHOW_PLAYLIST my_playlist"),
            "Showing playlist: my_playlist\nNo videos here yet"
        );
    }

    #[test]
    fn test_duplicate_playlist_name_case_insensitive() {
        let mut repl = create_test_repl();
        run(&mut repl, "CREATE_PLAYLIST Movies");
        assert_eq!(
            run(&mut repl, "CREATE_PLAYLIST movies"),
            "Cannot create playlist: A playlist with the same name already exists"
        );
    }

    #[test]
    fn test_search_then_flag_hides_video() {
        let mut repl = create_test_repl();
        assert_eq!(
            run(&mut repl, "SEARCH_VIDEOS cats"),
            "Here are the results for cats:\n  1) Amazing Cats (cat_video_id) [#cat #animal]"
        );
        assert_eq!(
            run(&mut repl, "FLAG_VIDEO cat_video_id dont_like_cats"),
            "Successfully flagged video: Amazing Cats (reason: dont_like_cats)"
        );
        assert_eq!(
            run(&mut repl, "SEARCH_VIDEOS cats"),
            "No search results for cats"
        );
        assert_eq!(
            run(&mut repl, "ALLOW_VIDEO cat_video_id"),
            "Successfully removed flag from video: Amazing Cats"
        );
    }

    #[test]
    fn test_flag_without_reason_uses_default() {
        let mut repl = create_test_repl();
        assert_eq!(
            run(&mut repl, "FLAG_VIDEO cat_video_id"),
            "Successfully flagged video: Amazing Cats (reason: Not supplied)"
        );
    }

    #[test]
    fn test_unknown_command() {
        let mut repl = create_test_repl();
        assert_eq!(run(&mut repl, "REWIND"), "Please enter a valid command");
    }

    #[test]
    fn test_blank_line_produces_no_output() {
        let mut repl = create_test_repl();
        assert_eq!(run(&mut repl, "   "), "");
    }

    #[test]
    fn test_exit_ends_session() {
        let mut repl = create_test_repl();
        assert_eq!(repl.execute("EXIT"), None);
    }
}
