//! Command-line parsing for the REPL
//!
//! One command per line, whitespace-separated arguments. Command
//! words are case-insensitive; arguments keep their casing.

use thiserror::Error;

/// A parsed REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play { video_id: String },
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowPlaylist { name: String },
    ShowAllPlaylists,
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo { video_id: String },
    ShowAllVideos,
    NumVideos,
    Help,
    Exit,
}

/// A command line that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Please enter a valid command")]
    Unknown(String),
    #[error("Incorrect usage: expected {0}")]
    MissingArgs(&'static str),
}

impl Command {
    /// Parse a non-empty command line
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let word = tokens
            .first()
            .ok_or_else(|| ParseError::Unknown(String::new()))?
            .to_uppercase();

        let arg = |index: usize, usage: &'static str| -> Result<String, ParseError> {
            tokens
                .get(index)
                .map(|t| t.to_string())
                .ok_or(ParseError::MissingArgs(usage))
        };

        let command = match word.as_str() {
            "PLAY" => Command::Play {
                video_id: arg(1, "PLAY <video_id>")?,
            },
            "STOP" => Command::Stop,
            "PLAY_RANDOM" => Command::PlayRandom,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => Command::CreatePlaylist {
                name: arg(1, "CREATE_PLAYLIST <playlist_name>")?,
            },
            "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
                name: arg(1, "ADD_TO_PLAYLIST <playlist_name> <video_id>")?,
                video_id: arg(2, "ADD_TO_PLAYLIST <playlist_name> <video_id>")?,
            },
            "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
                name: arg(1, "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>")?,
                video_id: arg(2, "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>")?,
            },
            "CLEAR_PLAYLIST" => Command::ClearPlaylist {
                name: arg(1, "CLEAR_PLAYLIST <playlist_name>")?,
            },
            "DELETE_PLAYLIST" => Command::DeletePlaylist {
                name: arg(1, "DELETE_PLAYLIST <playlist_name>")?,
            },
            "SHOW_PLAYLIST" => Command::ShowPlaylist {
                name: arg(1, "SHOW_PLAYLIST <playlist_name>")?,
            },
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SEARCH_VIDEOS" => Command::SearchVideos {
                term: arg(1, "SEARCH_VIDEOS <search_term>")?,
            },
            "SEARCH_VIDEOS_WITH_TAG" => Command::SearchVideosWithTag {
                tag: arg(1, "SEARCH_VIDEOS_WITH_TAG <video_tag>")?,
            },
            "FLAG_VIDEO" => {
                let video_id = arg(1, "FLAG_VIDEO <video_id> [flag_reason]")?;
                let reason = if tokens.len() > 2 {
                    Some(tokens[2..].join(" "))
                } else {
                    None
                };
                Command::FlagVideo { video_id, reason }
            }
            "ALLOW_VIDEO" => Command::AllowVideo {
                video_id: arg(1, "ALLOW_VIDEO <video_id>")?,
            },
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "NUM_VIDEOS" => Command::NumVideos,
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(ParseError::Unknown(word)),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_on_command_word() {
        assert_eq!(
            Command::parse("play cat_video_id"),
            Ok(Command::Play {
                video_id: "cat_video_id".to_string()
            })
        );
    }

    #[test]
    fn test_parse_keeps_argument_casing() {
        assert_eq!(
            Command::parse("CREATE_PLAYLIST MyPlaylist"),
            Ok(Command::CreatePlaylist {
                name: "MyPlaylist".to_string()
            })
        );
    }

    #[test]
    fn test_parse_two_argument_command() {
        assert_eq!(
            Command::parse("ADD_TO_PLAYLIST movies cat_video_id"),
            Ok(Command::AddToPlaylist {
                name: "movies".to_string(),
                video_id: "cat_video_id".to_string()
            })
        );
    }

    #[test]
    fn test_parse_missing_argument() {
        assert_eq!(
            Command::parse("PLAY"),
            Err(ParseError::MissingArgs("PLAY <video_id>"))
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            Command::parse("REWIND"),
            Err(ParseError::Unknown("REWIND".to_string()))
        );
    }

    #[test]
    fn test_parse_flag_reason_is_optional() {
        assert_eq!(
            Command::parse("FLAG_VIDEO cat_video_id"),
            Ok(Command::FlagVideo {
                video_id: "cat_video_id".to_string(),
                reason: None
            })
        );
        assert_eq!(
            Command::parse("FLAG_VIDEO cat_video_id dont_like_cats"),
            Ok(Command::FlagVideo {
                video_id: "cat_video_id".to_string(),
                reason: Some("dont_like_cats".to_string())
            })
        );
    }
}
