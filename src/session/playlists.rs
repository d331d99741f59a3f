use crate::catalog::VideoCatalog;
use crate::error::PlaylistError;
use crate::model::Playlist;

/// All playlists for one session, names unique case-insensitively
#[derive(Debug, Clone, Default)]
pub struct PlaylistCollection {
    playlists: Vec<Playlist>,
}

impl PlaylistCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty playlist, keeping the typed casing for display
    pub fn create(&mut self, name: &str) -> Result<(), PlaylistError> {
        if self.find(name).is_some() {
            return Err(PlaylistError::DuplicateName(name.to_string()));
        }
        self.playlists.push(Playlist::new(name.to_string()));
        Ok(())
    }

    /// Append a video to a playlist, validating the id against the catalog.
    /// Returns the video title on success.
    pub fn add_video(
        &mut self,
        catalog: &VideoCatalog,
        name: &str,
        video_id: &str,
    ) -> Result<String, PlaylistError> {
        // check order matters for the reported error: playlist first,
        // then video, then membership
        if self.find(name).is_none() {
            return Err(PlaylistError::PlaylistNotFound(name.to_string()));
        }
        let video = catalog
            .get(video_id)
            .ok_or_else(|| PlaylistError::VideoNotFound(video_id.to_string()))?;
        let title = video.title.clone();

        let playlist = self.find_mut(name).expect("playlist checked above");
        if !playlist.add(video_id.to_string()) {
            return Err(PlaylistError::AlreadyInPlaylist(video_id.to_string()));
        }
        Ok(title)
    }

    /// Remove a video from a playlist, returning its title
    pub fn remove_video(
        &mut self,
        catalog: &VideoCatalog,
        name: &str,
        video_id: &str,
    ) -> Result<String, PlaylistError> {
        if self.find(name).is_none() {
            return Err(PlaylistError::PlaylistNotFound(name.to_string()));
        }
        let video = catalog
            .get(video_id)
            .ok_or_else(|| PlaylistError::VideoNotFound(video_id.to_string()))?;
        let title = video.title.clone();

        let playlist = self.find_mut(name).expect("playlist checked above");
        if !playlist.remove(video_id) {
            return Err(PlaylistError::NotInPlaylist(video_id.to_string()));
        }
        Ok(title)
    }

    /// Empty a playlist without deleting it
    pub fn clear(&mut self, name: &str) -> Result<(), PlaylistError> {
        let playlist = self
            .find_mut(name)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;
        playlist.clear();
        Ok(())
    }

    /// Delete a playlist entirely
    pub fn delete(&mut self, name: &str) -> Result<(), PlaylistError> {
        let index = self
            .playlists
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;
        self.playlists.remove(index);
        Ok(())
    }

    /// Look up a playlist by name, case-insensitive
    pub fn find(&self, name: &str) -> Option<&Playlist> {
        self.playlists
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// All playlists sorted by name, case-insensitive
    pub fn list(&self) -> Vec<&Playlist> {
        let mut playlists: Vec<&Playlist> = self.playlists.iter().collect();
        playlists.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        playlists
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Check if no playlists exist
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
