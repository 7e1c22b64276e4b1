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

//! Catalog cache and fetch layer.
//!
//! [`CatalogService`] sits between a [`CatalogSource`] and the views. It
//! fetches artists and tracks, keeps them in memory for the rest of the
//! session, and serves synchronous reads from that cache.
//!
//! # Startup
//!
//! [`CatalogService::initialize`] loads both collections concurrently under
//! one timeout. Whatever is still empty afterwards is filled from the
//! built-in fallback catalog, so once initialization resolves the cache is
//! always populated and no catalog error reaches the UI.
//!
//! # Cache
//!
//! Each collection is replaced as a whole behind an [`Arc`], readers always
//! get a complete snapshot. The first successful load wins; the cache is
//! never refreshed within a session.

mod error;
mod fallback;
mod normalize;
mod report;
pub mod source;

use std::{
    future::Future,
    sync::{Arc, PoisonError, RwLock},
    time::Duration,
};

use reqwest::Url;
use tokio::{
    sync::{OnceCell, watch},
    time::timeout,
};
use tracing::{info, warn};

pub use error::CatalogError;
pub use source::{CatalogSource, HttpCatalog};

use crate::{
    config::AppConfig,
    model::{
        Artist, Community, CommunityStory, PlatformStat, RoyaltyReport, RoyaltySplit, Track,
        search,
    },
};

const FEATURED_COUNT: usize = 3;

pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    base_url: Option<Url>,
    fetch_timeout: Duration,
    init_timeout: Duration,
    royalty_splits: Vec<RoyaltySplit>,
    listening_minutes: f64,

    artists: RwLock<Arc<Vec<Artist>>>,
    tracks: RwLock<Arc<Vec<Track>>>,

    init: OnceCell<()>,
    ready_tx: watch::Sender<bool>,
}

impl CatalogService {
    pub fn new(config: &AppConfig, source: Arc<dyn CatalogSource>) -> Self {
        let base_url = match Url::parse(&config.catalog_base_url) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(
                    url = %config.catalog_base_url,
                    "Invalid catalog base URL, track URLs will not be resolved: {}", e
                );
                None
            }
        };

        let (ready_tx, _) = watch::channel(false);

        Self {
            source,
            base_url,
            fetch_timeout: config.fetch_timeout(),
            init_timeout: config.init_timeout(),
            royalty_splits: config.royalty_splits.clone(),
            listening_minutes: config.listening_minutes,
            artists: RwLock::new(Arc::new(vec![])),
            tracks: RwLock::new(Arc::new(vec![])),
            init: OnceCell::new(),
            ready_tx,
        }
    }

    /// Loads the catalog, substituting the fallback catalog for anything that
    /// could not be loaded in time.
    ///
    /// Only the first call does any work, later and concurrent callers wait
    /// for it to finish.
    pub async fn initialize(&self) {
        self.init
            .get_or_init(|| async {
                let load = async { tokio::join!(self.fetch_artists(), self.fetch_tracks()) };

                match timeout(self.init_timeout, load).await {
                    Ok((artists, tracks)) => {
                        if let Err(e) = artists {
                            warn!("Failed to load artists: {}", e);
                        }
                        if let Err(e) = tracks {
                            warn!("Failed to load tracks: {}", e);
                        }
                    }
                    Err(_) => warn!("Catalog load timed out after {:?}", self.init_timeout),
                }

                if store_if_empty(&self.artists, fallback::fallback_artists()) {
                    info!("Using fallback artists");
                }
                let tracks = self.normalized(fallback::fallback_tracks());
                if store_if_empty(&self.tracks, tracks) {
                    info!("Using fallback tracks");
                }

                self.ready_tx.send_replace(true);
                info!(
                    artists = self.read_artists_cached().len(),
                    tracks = self.read_tracks_cached().len(),
                    "Catalog ready"
                );
            })
            .await;
    }

    pub fn is_ready(&self) -> bool {
        *self.ready_tx.borrow()
    }

    /// Resolves once [`Self::initialize`] has completed.
    pub async fn wait_until_ready(&self) {
        let mut ready_rx = self.ready_tx.subscribe();
        // The sender lives as long as `self`, so this cannot fail
        let _ = ready_rx.wait_for(|ready| *ready).await;
    }

    /// Returns the artist collection, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::FetchTimeout`] if the source does not answer
    /// within the fetch timeout, or [`CatalogError::FetchFailed`] if the
    /// request fails.
    pub async fn fetch_artists(&self) -> Result<Arc<Vec<Artist>>, CatalogError> {
        let cached = self.read_artists_cached();
        if !cached.is_empty() {
            return Ok(cached);
        }

        let artists = self.bounded(self.source.artists()).await?;
        store_if_empty(&self.artists, artists);

        Ok(self.read_artists_cached())
    }

    /// Returns the track collection, loading it on first use.
    ///
    /// # Errors
    ///
    /// As for [`Self::fetch_artists`].
    pub async fn fetch_tracks(&self) -> Result<Arc<Vec<Track>>, CatalogError> {
        let cached = self.read_tracks_cached();
        if !cached.is_empty() {
            return Ok(cached);
        }

        let tracks = self.bounded(self.source.tracks()).await?;
        store_if_empty(&self.tracks, self.normalized(tracks));

        Ok(self.read_tracks_cached())
    }

    pub fn read_artists_cached(&self) -> Arc<Vec<Artist>> {
        read(&self.artists)
    }

    pub fn read_tracks_cached(&self) -> Arc<Vec<Track>> {
        read(&self.tracks)
    }

    /// Finds an artist, going to the source only while nothing is cached.
    pub async fn lookup_artist(&self, id: &str) -> Result<Option<Artist>, CatalogError> {
        let artists = self.read_artists_cached();
        if !artists.is_empty() {
            return Ok(artists.iter().find(|a| a.id == id).cloned());
        }

        self.bounded(self.source.artist(id)).await
    }

    pub async fn lookup_tracks_for_artist(&self, artist_id: &str) -> Result<Vec<Track>, CatalogError> {
        let tracks = self.read_tracks_cached();
        if !tracks.is_empty() {
            return Ok(tracks
                .iter()
                .filter(|t| t.artist_id == artist_id)
                .cloned()
                .collect());
        }

        let tracks = self.bounded(self.source.artist_tracks(artist_id)).await?;
        Ok(self.normalized(tracks))
    }

    pub async fn lookup_track(&self, id: &str) -> Result<Option<Track>, CatalogError> {
        let tracks = self.read_tracks_cached();
        if !tracks.is_empty() {
            return Ok(tracks.iter().find(|t| t.id == id).cloned());
        }

        let track = self.bounded(self.source.track(id)).await?;
        Ok(track.map(|t| normalize::normalize_track(t, self.base_url.as_ref())))
    }

    pub fn compute_royalty_report(&self) -> RoyaltyReport {
        report::royalty_report(
            &self.read_artists_cached(),
            &self.royalty_splits,
            self.listening_minutes,
        )
    }

    pub fn featured_tracks(&self) -> Vec<Track> {
        self.read_tracks_cached()
            .iter()
            .take(FEATURED_COUNT)
            .cloned()
            .collect()
    }

    pub fn platform_stats(&self) -> Vec<PlatformStat> {
        vec![
            PlatformStat {
                label: "Artists".to_string(),
                value: self.read_artists_cached().len(),
            },
            PlatformStat {
                label: "Tracks".to_string(),
                value: self.read_tracks_cached().len(),
            },
        ]
    }

    pub fn search_tracks(&self, query: &str) -> Vec<Track> {
        search::filter_tracks(&self.read_tracks_cached(), query)
    }

    pub fn community_stories(&self) -> Vec<CommunityStory> {
        fallback::community_stories()
    }

    pub fn communities(&self) -> Vec<Community> {
        report::communities(&self.read_artists_cached())
    }

    async fn bounded<T>(
        &self,
        request: impl Future<Output = Result<T, CatalogError>>,
    ) -> Result<T, CatalogError> {
        timeout(self.fetch_timeout, request)
            .await
            .map_err(|_| CatalogError::FetchTimeout(self.fetch_timeout))?
    }

    fn normalized(&self, tracks: Vec<Track>) -> Vec<Track> {
        tracks
            .into_iter()
            .map(|t| normalize::normalize_track(t, self.base_url.as_ref()))
            .collect()
    }
}

fn read<T>(slot: &RwLock<Arc<Vec<T>>>) -> Arc<Vec<T>> {
    Arc::clone(&slot.read().unwrap_or_else(PoisonError::into_inner))
}

/// Replaces the collection in `slot` with `items` unless it already holds
/// something. Returns whether the store happened.
fn store_if_empty<T>(slot: &RwLock<Arc<Vec<T>>>, items: Vec<T>) -> bool {
    if items.is_empty() {
        return false;
    }

    let mut current = slot.write().unwrap_or_else(PoisonError::into_inner);
    if !current.is_empty() {
        return false;
    }
    *current = Arc::new(items);
    true
}
