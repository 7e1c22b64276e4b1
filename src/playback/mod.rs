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

//! Shared playback state management.
//!
//! This module provides [`PlaybackManager`], the single writer of the
//! session's [`PlaybackState`]. Views read snapshots or subscribe to changes;
//! the manager itself never touches audio output, that is left to the
//! [`crate::player::PlayerBar`] observing it.

use tokio::sync::watch;
use tracing::debug;

use crate::model::{Track, queue::PlaybackState};

pub struct PlaybackManager {
    state_tx: watch::Sender<PlaybackState>,
}

impl Default for PlaybackManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackManager {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(PlaybackState::new());
        Self { state_tx }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> PlaybackState {
        self.state_tx.borrow().clone()
    }

    /// Subscribes to state changes. Only transitions that actually change the
    /// state mark the receiver as changed.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        self.state_tx.subscribe()
    }

    pub fn play_track(&self, track: &Track) {
        debug!(track = %track.title, "play track");
        self.apply(|s| s.play_track(track));
    }

    pub fn pause(&self) {
        debug!("pause");
        self.apply(PlaybackState::pause);
    }

    pub fn resume(&self) {
        debug!("resume");
        self.apply(PlaybackState::resume);
    }

    pub fn play_next(&self) {
        self.apply(PlaybackState::play_next);
        debug!(track = ?self.current_title(), "play next");
    }

    pub fn play_prev(&self) {
        self.apply(PlaybackState::play_prev);
        debug!(track = ?self.current_title(), "play previous");
    }

    fn current_title(&self) -> Option<String> {
        self.state_tx
            .borrow()
            .current_track
            .as_ref()
            .map(|t| t.title.clone())
    }

    fn apply(&self, transition: impl FnOnce(&PlaybackState) -> PlaybackState) {
        self.state_tx.send_if_modified(|state| {
            let next = transition(state);
            if next == *state {
                false
            } else {
                *state = next;
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::queue::tests::track;

    #[test]
    fn snapshot_reflects_transitions() {
        let manager = PlaybackManager::new();
        manager.play_track(&track("a"));
        manager.play_track(&track("b"));
        manager.play_prev();

        let state = manager.snapshot();
        assert_eq!(state.current_track.unwrap().id, "a");
        assert_eq!(state.queue.len(), 2);
        assert!(state.is_playing);
    }

    #[test]
    fn subscribers_only_see_real_changes() {
        let manager = PlaybackManager::new();
        let mut rx = manager.subscribe();

        manager.play_next();
        manager.resume();
        assert!(!rx.has_changed().unwrap());

        manager.play_track(&track("a"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().current_track.as_ref().unwrap().id, "a");

        manager.play_track(&track("a"));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn pause_is_idempotent() {
        let manager = PlaybackManager::new();
        manager.play_track(&track("a"));
        manager.pause();
        let mut rx = manager.subscribe();

        manager.pause();

        assert!(!rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_playing);
    }
}
