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

//! Remote catalog access.
//!
//! [`CatalogSource`] is the seam between the catalog cache and wherever the
//! catalog actually lives. [`HttpCatalog`] talks to the catalog HTTP endpoint:
//!
//! * `GET /artists`
//! * `GET /artists/{id}`
//! * `GET /artists/{id}/tracks`
//! * `GET /tracks`
//! * `GET /tracks/{id}`

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    catalog::CatalogError,
    model::{Artist, Track},
};

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn artists(&self) -> Result<Vec<Artist>, CatalogError>;

    async fn artist(&self, id: &str) -> Result<Option<Artist>, CatalogError>;

    async fn artist_tracks(&self, artist_id: &str) -> Result<Vec<Track>, CatalogError>;

    async fn tracks(&self) -> Result<Vec<Track>, CatalogError>;

    async fn track(&self, id: &str) -> Result<Option<Track>, CatalogError>;
}

/// A [`CatalogSource`] backed by the catalog HTTP endpoint.
pub struct HttpCatalog {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        let base_url =
            Url::parse(base_url).map_err(|e| CatalogError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Issues a GET and decodes the JSON body, mapping 404 to `None`.
    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<T>, CatalogError> {
        let url = self.endpoint(segments);
        debug!(%url, "catalog request");

        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CatalogError::FetchFailed {
                status: Some(status.as_u16()),
                reason: format!("{} returned {}", url, status),
            });
        }

        Ok(Some(resp.json::<T>().await?))
    }

    async fn get_collection<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Vec<T>, CatalogError> {
        self.get_json(segments).await?.ok_or_else(|| CatalogError::FetchFailed {
            status: Some(StatusCode::NOT_FOUND.as_u16()),
            reason: format!("{} not found", self.endpoint(segments)),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn artists(&self) -> Result<Vec<Artist>, CatalogError> {
        self.get_collection(&["artists"]).await
    }

    async fn artist(&self, id: &str) -> Result<Option<Artist>, CatalogError> {
        self.get_json(&["artists", id]).await
    }

    async fn artist_tracks(&self, artist_id: &str) -> Result<Vec<Track>, CatalogError> {
        // An unknown artist is answered with 404, which reads as no tracks
        Ok(self
            .get_json(&["artists", artist_id, "tracks"])
            .await?
            .unwrap_or_default())
    }

    async fn tracks(&self) -> Result<Vec<Track>, CatalogError> {
        self.get_collection(&["tracks"]).await
    }

    async fn track(&self, id: &str) -> Result<Option<Track>, CatalogError> {
        self.get_json(&["tracks", id]).await
    }
}
