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

//! Built-in catalog used when the catalog endpoint cannot be reached.

use crate::model::{Artist, CommunityStory, Track};

const SAMPLE_URL: &str = "/assets/sample.mp3";

fn artist(id: &str, name: &str, bio: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        bio: Some(bio.to_string()),
        image_url: None,
        links: vec![],
    }
}

fn track(id: &str, title: &str, artist_id: &str, artist_name: &str, genre: &str) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist_id: artist_id.to_string(),
        artist_name: artist_name.to_string(),
        genre: genre.to_string(),
        url: SAMPLE_URL.to_string(),
        file_type: "mp3".to_string(),
    }
}

pub(crate) fn fallback_artists() -> Vec<Artist> {
    vec![
        artist(
            "1",
            "Tester Artist",
            "An indie folk band bringing campfire vibes to the stage.",
        ),
        artist(
            "2",
            "Bluesy Bob",
            "A blues artist known for soulful guitar solos.",
        ),
        artist(
            "3",
            "Classical Collective",
            "A group of musicians making classical music accessible.",
        ),
    ]
}

/// Track URLs are relative here, they are resolved when loaded into the cache.
pub(crate) fn fallback_tracks() -> Vec<Track> {
    vec![
        track("1", "Embers in the Dark", "1", "Tester Artist", "Folk"),
        track("2", "Midnight Blues", "2", "Bluesy Bob", "Blues"),
        track("3", "Sunrise Serenade", "1", "Tester Artist", "Folk"),
        track("4", "Symphony of Lights", "3", "Classical Collective", "Classical"),
        track("5", "Electric Night", "2", "Bluesy Bob", "Rock"),
    ]
}

pub(crate) fn community_stories() -> Vec<CommunityStory> {
    [
        (
            "Jane D.",
            "Campfire introduced me to amazing indie artists I would have never found!",
        ),
        (
            "Sam G.",
            "I love how Campfire shows exactly where my money goes. Transparency is key!",
        ),
    ]
    .into_iter()
    .map(|(author, message)| CommunityStory {
        author: author.to_string(),
        message: message.to_string(),
    })
    .collect()
}
