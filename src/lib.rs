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

//! # Campfire.
//!
//! The core of a music streaming front end: browsing artists and tracks,
//! playback control, and royalty transparency.
//!
//! It is organised around two shared services:
//!
//! * The **Catalog** ([`catalog::CatalogService`]) fetches artists and tracks
//!   from the catalog endpoint, caches them for the session, and falls back to
//!   a built-in catalog when the endpoint is unavailable.
//! * **Playback** ([`playback::PlaybackManager`]) is the single writer of what
//!   is playing and what is queued. Views read it, and the
//!   [`player::PlayerBar`] follows it to drive the audio output.
//!
//! ## Architecture
//!
//! A [`session::Session`] owns both services with an explicit create,
//! initialize and dispose lifecycle. Front ends feed user input and media
//! notifications into [`actions::events::process_events`] over a `tokio`
//! channel.

pub mod actions;
pub mod catalog;
pub mod config;
pub mod model;
pub mod playback;
pub mod player;
pub mod session;
pub mod util;
