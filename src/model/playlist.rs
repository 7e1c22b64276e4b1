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

//! User playlist building.
//!
//! This module provides state for a playlist the user assembles by hand,
//! holding each track at most once in the order it was added.

use crate::model::Track;

#[derive(Debug, Default, Clone)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `track`, returning `false` if it was already present.
    pub fn add(&mut self, track: Track) -> bool {
        if self.tracks.iter().any(|t| t.id == track.id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    pub fn remove(&mut self, track_id: &str) {
        self.tracks.retain(|t| t.id != track_id);
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::queue::tests::track;

    #[test]
    fn add_ignores_duplicates() {
        let mut playlist = Playlist::new();

        assert!(playlist.add(track("a")));
        assert!(playlist.add(track("b")));
        assert!(!playlist.add(track("a")));

        let ids: Vec<_> = playlist.tracks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn remove_drops_matching_track() {
        let mut playlist = Playlist::new();
        playlist.add(track("a"));
        playlist.add(track("b"));

        playlist.remove("a");
        playlist.remove("missing");

        assert_eq!(playlist.tracks().len(), 1);
        assert_eq!(playlist.tracks()[0].id, "b");

        playlist.clear();
        assert!(playlist.is_empty());
    }
}
