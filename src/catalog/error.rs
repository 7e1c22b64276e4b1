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

use std::time::Duration;

use thiserror::Error;

/// Failures reaching the remote catalog.
///
/// A lookup that finds nothing is not an error, it yields an empty result.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog request timed out after {0:?}")]
    FetchTimeout(Duration),

    #[error("catalog request failed: {reason}")]
    FetchFailed { status: Option<u16>, reason: String },

    #[error("invalid catalog base URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        Self::FetchFailed {
            status: e.status().map(|s| s.as_u16()),
            reason: e.to_string(),
        }
    }
}
