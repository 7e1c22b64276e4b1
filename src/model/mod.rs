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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, such as
//! Artists, Tracks and royalty reports, representing the data schema served by
//! the catalog endpoint and consumed by playback.

pub mod playlist;
pub mod queue;
pub mod search;

use serde::{Deserialize, Serialize};

/// A labelled external link shown on an artist profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    /// Older catalog payloads spell this `imageUrl`, both are accepted.
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub links: Vec<ArtistLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    #[serde(alias = "artistId")]
    pub artist_id: String,
    #[serde(alias = "artistName")]
    pub artist_name: String,
    #[serde(default)]
    pub genre: String,
    pub url: String,
    #[serde(default)]
    pub file_type: String,
}

/// A condensed artist reference, used when grouping artists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: String,
    pub name: String,
}

impl From<&Artist> for ArtistSummary {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id.clone(),
            name: artist.name.clone(),
        }
    }
}

/// A regional grouping of artists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Community {
    pub name: String,
    pub artists: Vec<ArtistSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunityStory {
    pub author: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformStat {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub is_artist: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Alice Example".to_string(),
            email: "alice@example.com".to_string(),
            is_artist: false,
        }
    }
}

/// One row of the pre-agreed royalty split table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoyaltySplit {
    pub artist_name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoyaltyShare {
    pub artist_name: String,
    pub amount: f64,
}

/// How a listener's contribution is allocated across artists.
///
/// The sum of `breakdown` amounts always equals `total_amount`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoyaltyReport {
    pub total_minutes: f64,
    pub total_amount: f64,
    pub breakdown: Vec<RoyaltyShare>,
}

impl RoyaltyReport {
    /// Builds a report from the shares, deriving the total from them.
    pub fn from_shares(total_minutes: f64, breakdown: Vec<RoyaltyShare>) -> Self {
        let total_amount = breakdown.iter().map(|s| s.amount).sum();
        Self {
            total_minutes,
            total_amount,
            breakdown,
        }
    }

    /// Percentage of the total allocated to `share`, or zero for an empty
    /// report.
    pub fn share_percent(&self, share: &RoyaltyShare) -> f64 {
        if self.total_amount > 0.0 {
            share.amount / self.total_amount * 100.0
        } else {
            0.0
        }
    }
}
