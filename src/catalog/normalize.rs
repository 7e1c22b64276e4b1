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

//! Track record clean-up applied as tracks enter the cache.

use reqwest::Url;
use tracing::warn;

use crate::model::Track;

/// Makes the media URL absolute against `base` and fills a missing file type
/// from the URL's extension.
pub(crate) fn normalize_track(mut track: Track, base: Option<&Url>) -> Track {
    if Url::parse(&track.url).is_err() {
        match base.map(|b| b.join(&track.url)) {
            Some(Ok(absolute)) => track.url = absolute.into(),
            Some(Err(e)) => warn!(url = %track.url, "Failed to resolve track URL: {}", e),
            None => {}
        }
    }

    if track.file_type.is_empty() {
        track.file_type = file_extension(&track.url).unwrap_or_default();
    }

    track
}

fn file_extension(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next()?;
    let name = path.rsplit('/').next()?;
    let (stem, ext) = name.rsplit_once('.')?;

    if stem.is_empty() || ext.is_empty() {
        None
    } else {
        Some(ext.to_lowercase())
    }
}
