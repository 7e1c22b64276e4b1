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

//! Playback queue state.
//!
//! This module provides the state of the playback queue: the current track,
//! whether it is playing, and the ordered list of tracks the listener has
//! triggered. Every transition is a pure function returning the next state;
//! invalid transitions return an unchanged copy rather than failing.

use crate::model::Track;

/// Coarse view of the playback state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Stopped,
    Paused,
    Playing,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackState {
    pub current_track: Option<Track>,
    pub is_playing: bool,
    pub queue: Vec<Track>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_state(&self) -> PlayerState {
        match (&self.current_track, self.is_playing) {
            (None, _) => PlayerState::Stopped,
            (Some(_), false) => PlayerState::Paused,
            (Some(_), true) => PlayerState::Playing,
        }
    }

    fn current_id(&self) -> Option<&str> {
        self.current_track.as_ref().map(|t| t.id.as_str())
    }

    /// Selects `track` and starts playing it, adding it to the queue unless a
    /// track with the same id is already queued.
    ///
    /// Selecting the current track again only resumes it.
    pub fn play_track(&self, track: &Track) -> Self {
        let mut next = self.clone();
        next.is_playing = true;

        if self.current_id() != Some(track.id.as_str()) {
            next.current_track = Some(track.clone());
            if !next.queue.iter().any(|t| t.id == track.id) {
                next.queue.push(track.clone());
            }
        }

        next
    }

    pub fn pause(&self) -> Self {
        Self {
            is_playing: false,
            ..self.clone()
        }
    }

    /// Resumes playback, ignored when nothing is loaded.
    pub fn resume(&self) -> Self {
        Self {
            is_playing: self.current_track.is_some(),
            ..self.clone()
        }
    }

    /// Advances to the next queued track, wrapping to the first.
    pub fn play_next(&self) -> Self {
        self.step(|index, len| match index {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        })
    }

    /// Steps back to the previous queued track, wrapping to the last.
    pub fn play_prev(&self) -> Self {
        self.step(|index, len| match index {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        })
    }

    // `select` maps the current queue position (if found) to the new one.
    fn step(&self, select: impl Fn(Option<usize>, usize) -> usize) -> Self {
        let Some(current_id) = self.current_id() else {
            return self.clone();
        };
        if self.queue.is_empty() {
            return self.clone();
        }

        let index = self.queue.iter().position(|t| t.id == current_id);
        let target = select(index, self.queue.len());

        Self {
            current_track: Some(self.queue[target].clone()),
            is_playing: true,
            queue: self.queue.clone(),
        }
    }
}
