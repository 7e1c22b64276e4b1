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

//! Application event distribution.
//!
//! This module defines the events a front end sends in response to user
//! input or media element notifications, and the loop that applies them.
//!
//! # Architecture
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: [`process_events`] applies each event to the [`Session`]
//!    and the [`PlayerBar`].
//! 3. **Sync**: After each event the player bar is brought in line with the
//!    playback state, so the audio output always follows the single writer.

use tokio::sync::mpsc::Receiver;
use tracing::{debug, info};

use crate::{
    model::Track,
    player::{AudioOutput, MediaEvent, PlayerBar},
    session::Session,
};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    PlayTrack(Track),
    Pause,
    Resume,
    TogglePlay,
    Next,
    Previous,

    Media(MediaEvent),

    SetVolume(f64),
    ToggleMute,
    Seek(f64),

    AddToPlaylist(Track),
    RemoveFromPlaylist(String),
    PlayPlaylist,

    Exit,
}

/// Runs the event loop until [`AppEvent::Exit`] is received or every sender
/// has been dropped.
pub async fn process_events<O: AudioOutput>(
    session: &mut Session,
    player: &mut PlayerBar<O>,
    event_rx: &mut Receiver<AppEvent>,
) {
    while let Some(event) = event_rx.recv().await {
        if matches!(event, AppEvent::Exit) {
            info!("Exit requested");
            break;
        }

        debug!(?event, "processing");
        process_event(session, player, event);
        player.sync(&session.playback().snapshot());
    }
}

fn process_event<O: AudioOutput>(session: &mut Session, player: &mut PlayerBar<O>, event: AppEvent) {
    match event {
        AppEvent::PlayTrack(track) => session.playback().play_track(&track),
        AppEvent::Pause => session.playback().pause(),
        AppEvent::Resume => session.playback().resume(),
        AppEvent::TogglePlay => {
            let tracks = session.catalog().read_tracks_cached();
            player.toggle_play(session.playback(), &tracks);
        }
        AppEvent::Next => session.playback().play_next(),
        AppEvent::Previous => session.playback().play_prev(),

        AppEvent::Media(media_event) => player.handle_media_event(media_event, session.playback()),

        AppEvent::SetVolume(level) => player.set_volume(level),
        AppEvent::ToggleMute => player.toggle_mute(),
        AppEvent::Seek(seconds) => player.seek(seconds),

        AppEvent::AddToPlaylist(track) => {
            session.playlist_mut().add(track);
        }
        AppEvent::RemoveFromPlaylist(id) => session.playlist_mut().remove(&id),
        AppEvent::PlayPlaylist => session.play_playlist(),

        AppEvent::Exit => {}
    }
}
