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

//! Track search.
//!
//! Matches tracks against a free-text query on title, artist name or genre.

use crate::model::Track;

/// Returns the tracks matching `query`, case-insensitively, in catalog order.
///
/// A blank query matches everything.
pub fn filter_tracks(tracks: &[Track], query: &str) -> Vec<Track> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tracks.to_vec();
    }

    tracks
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&needle)
                || t.artist_name.to_lowercase().contains(&needle)
                || t.genre.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
