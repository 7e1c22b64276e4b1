// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application session.
//!
//! A [`Session`] owns everything a running application shares between its
//! views: configuration, the catalog, playback state, the signed-in user and
//! their playlist. Views receive it (or the pieces they need) explicitly
//! instead of reaching for globals.

use std::sync::Arc;

use tracing::info;

use crate::{
    catalog::{CatalogError, CatalogService, CatalogSource, HttpCatalog},
    config::AppConfig,
    model::{UserProfile, playlist::Playlist},
    playback::PlaybackManager,
};

pub struct Session {
    config: AppConfig,
    catalog: Arc<CatalogService>,
    playback: PlaybackManager,
    user: UserProfile,
    playlist: Playlist,
}

impl Session {
    pub fn create(config: AppConfig, source: Arc<dyn CatalogSource>) -> Self {
        let catalog = Arc::new(CatalogService::new(&config, source));

        Self {
            config,
            catalog,
            playback: PlaybackManager::new(),
            user: UserProfile::default(),
            playlist: Playlist::new(),
        }
    }

    /// Creates a session reading from the configured catalog endpoint.
    pub fn connect(config: AppConfig) -> Result<Self, CatalogError> {
        let source = HttpCatalog::new(&config.catalog_base_url)?;
        info!(url = %config.catalog_base_url, "Using catalog endpoint");
        Ok(Self::create(config, Arc::new(source)))
    }

    pub async fn initialize(&self) {
        self.catalog.initialize().await;
    }

    pub fn dispose(self) {
        info!(
            queued = self.playback.snapshot().queue.len(),
            "Session closed"
        );
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<CatalogService> {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackManager {
        &self.playback
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn set_user(&mut self, user: UserProfile) {
        self.user = user;
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn playlist_mut(&mut self) -> &mut Playlist {
        &mut self.playlist
    }

    /// Queues every playlist track and starts from the first one.
    pub fn play_playlist(&self) {
        let tracks = self.playlist.tracks();
        for track in tracks {
            self.playback.play_track(track);
        }
        if let Some(first) = tracks.first() {
            self.playback.play_track(first);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::queue::tests::track;

    #[test]
    fn connect_rejects_bad_base_url() {
        let config = AppConfig {
            catalog_base_url: "not a url".into(),
            ..AppConfig::default()
        };

        assert!(matches!(
            Session::connect(config),
            Err(CatalogError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn play_playlist_queues_and_starts_first() {
        let mut session = Session::connect(AppConfig::default()).unwrap();
        session.playlist_mut().add(track("a"));
        session.playlist_mut().add(track("b"));
        session.playlist_mut().add(track("c"));

        session.play_playlist();

        let state = session.playback().snapshot();
        assert_eq!(state.current_track.unwrap().id, "a");
        assert_eq!(state.queue.len(), 3);
        assert!(state.is_playing);
    }

    #[test]
    fn user_profile_can_be_replaced() {
        let mut session = Session::connect(AppConfig::default()).unwrap();
        assert_eq!(session.user().name, "Alice Example");

        session.set_user(UserProfile {
            name: "Bo".into(),
            email: "bo@example.com".into(),
            is_artist: true,
        });

        assert!(session.user().is_artist);
        session.dispose();
    }
}
