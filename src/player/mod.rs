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

//! Persistent player bar.
//!
//! This module provides the [`PlayerBar`], which observes the shared
//! [`PlaybackState`] and drives an [`AudioOutput`] to match it. It also owns
//! the bits of state that only matter to the bar itself: progress, duration,
//! volume and mute.
//!
//! Media notifications flow back in as [`MediaEvent`]s; the end of a track
//! advances the queue through the [`PlaybackManager`].

pub mod commands;

use tracing::debug;

use crate::{
    model::{
        Track,
        queue::{PlaybackState, PlayerState},
    },
    playback::PlaybackManager,
    util::format::format_time,
};

/// An addressable media element.
pub trait AudioOutput {
    fn set_source(&mut self, url: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, seconds: f64);
    fn set_volume(&mut self, level: f64);
}

/// Notifications emitted by the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    PositionAdvanced(f64),
    DurationKnown(f64),
    Ended,
}

pub struct PlayerBar<O: AudioOutput> {
    output: O,
    loaded_track_id: Option<String>,
    player_state: PlayerState,
    progress: f64,
    duration: Option<f64>,
    volume: f64,
    muted: bool,
}

impl<O: AudioOutput> PlayerBar<O> {
    pub fn new(mut output: O, volume: f64) -> Self {
        let volume = volume.clamp(0.0, 1.0);
        output.set_volume(volume);

        Self {
            output,
            loaded_track_id: None,
            player_state: PlayerState::Stopped,
            progress: 0.0,
            duration: None,
            volume,
            muted: false,
        }
    }

    /// Brings the output in line with `state`: loads a newly selected track,
    /// then plays or pauses.
    pub fn sync(&mut self, state: &PlaybackState) {
        let Some(track) = &state.current_track else {
            return;
        };

        if self.loaded_track_id.as_deref() != Some(track.id.as_str()) {
            debug!(track = %track.title, url = %track.url, "loading");
            self.output.set_source(&track.url);
            self.loaded_track_id = Some(track.id.clone());
            self.progress = 0.0;
            self.duration = None;
            self.player_state = PlayerState::Stopped;
        }

        let target = state.player_state();
        if target != self.player_state {
            match target {
                PlayerState::Playing => self.output.play(),
                PlayerState::Paused => self.output.pause(),
                PlayerState::Stopped => {}
            }
            self.player_state = target;
        }
    }

    pub fn handle_media_event(&mut self, event: MediaEvent, playback: &PlaybackManager) {
        match event {
            MediaEvent::PositionAdvanced(seconds) => self.progress = seconds.max(0.0),
            MediaEvent::DurationKnown(seconds) if seconds.is_finite() && seconds >= 0.0 => {
                self.duration = Some(seconds)
            }
            MediaEvent::DurationKnown(_) => {}
            MediaEvent::Ended => {
                // The element is idle now, so the next sync must issue play
                // again even when the queue re-selects the same track
                self.player_state = PlayerState::Stopped;
                self.progress = 0.0;
                playback.play_next();
            }
        }
    }

    /// The play/pause button. With nothing loaded it starts the first of
    /// `tracks`, if any.
    pub fn toggle_play(&mut self, playback: &PlaybackManager, tracks: &[Track]) {
        let state = playback.snapshot();

        if state.is_playing {
            playback.pause();
        } else if state.current_track.is_none() {
            if let Some(first) = tracks.first() {
                playback.play_track(first);
            }
        } else {
            playback.resume();
        }
    }

    /// Sets the volume, clamped to `0.0..=1.0`. Zero counts as muted.
    pub fn set_volume(&mut self, level: f64) {
        let level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };
        self.volume = level;
        self.muted = level == 0.0;
        self.output.set_volume(level);
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        let level = if self.muted { 0.0 } else { self.volume };
        self.output.set_volume(level);
    }

    /// Seeks within the loaded track, clamped to its duration once known.
    pub fn seek(&mut self, seconds: f64) {
        if self.loaded_track_id.is_none() || seconds.is_nan() {
            return;
        }

        let upper = self.duration.unwrap_or(f64::INFINITY).max(0.0);
        let target = seconds.clamp(0.0, upper);
        self.output.seek(target);
        self.progress = target;
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Volume as it should be displayed, zero while muted.
    pub fn effective_volume(&self) -> f64 {
        if self.muted { 0.0 } else { self.volume }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn progress_label(&self) -> String {
        format_time(self.progress)
    }

    pub fn duration_label(&self) -> String {
        format_time(self.duration.unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::Receiver;

    use super::{
        commands::{AudioCommand, ChannelOutput},
        *,
    };
    use crate::model::queue::tests::track;

    fn player() -> (PlayerBar<ChannelOutput>, Receiver<AudioCommand>) {
        let (output, rx) = ChannelOutput::new();
        let bar = PlayerBar::new(output, 0.8);
        assert_eq!(rx.try_recv(), Ok(AudioCommand::SetVolume(0.8)));
        (bar, rx)
    }

    fn drain(rx: &Receiver<AudioCommand>) -> Vec<AudioCommand> {
        rx.try_iter().collect()
    }

    #[test]
    fn sync_loads_and_plays_new_track() {
        let (mut bar, rx) = player();
        let playback = PlaybackManager::new();
        playback.play_track(&track("a"));

        bar.sync(&playback.snapshot());

        assert_eq!(
            drain(&rx),
            [
                AudioCommand::SetSource("http://localhost/a.mp3".into()),
                AudioCommand::Play
            ]
        );
    }

    #[test]
    fn sync_without_track_does_nothing() {
        let (mut bar, rx) = player();

        bar.sync(&PlaybackState::new());

        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn sync_pause_does_not_reload() {
        let (mut bar, rx) = player();
        let playback = PlaybackManager::new();
        playback.play_track(&track("a"));
        bar.sync(&playback.snapshot());
        drain(&rx);

        playback.pause();
        bar.sync(&playback.snapshot());
        bar.sync(&playback.snapshot());

        assert_eq!(drain(&rx), [AudioCommand::Pause]);
    }

    #[test]
    fn ended_advances_queue() {
        let (mut bar, rx) = player();
        let playback = PlaybackManager::new();
        playback.play_track(&track("a"));
        playback.play_track(&track("b"));
        bar.sync(&playback.snapshot());
        bar.handle_media_event(MediaEvent::DurationKnown(180.0), &playback);
        bar.handle_media_event(MediaEvent::PositionAdvanced(179.5), &playback);
        drain(&rx);

        bar.handle_media_event(MediaEvent::Ended, &playback);
        bar.sync(&playback.snapshot());

        assert_eq!(playback.snapshot().current_track.unwrap().id, "a");
        assert_eq!(bar.progress(), 0.0);
        assert_eq!(bar.duration(), None);
        assert_eq!(
            drain(&rx),
            [
                AudioCommand::SetSource("http://localhost/a.mp3".into()),
                AudioCommand::Play
            ]
        );
    }

    #[test]
    fn toggle_play_starts_first_track_when_idle() {
        let (mut bar, _rx) = player();
        let playback = PlaybackManager::new();
        let tracks = vec![track("x"), track("y")];

        bar.toggle_play(&playback, &tracks);
        assert_eq!(playback.snapshot().current_track.unwrap().id, "x");

        bar.toggle_play(&playback, &tracks);
        assert!(!playback.snapshot().is_playing);

        bar.toggle_play(&playback, &tracks);
        assert!(playback.snapshot().is_playing);
    }

    #[test]
    fn toggle_play_with_empty_catalog_is_ignored() {
        let (mut bar, _rx) = player();
        let playback = PlaybackManager::new();

        bar.toggle_play(&playback, &[]);

        assert_eq!(playback.snapshot(), PlaybackState::new());
    }

    #[test]
    fn mute_restores_volume() {
        let (mut bar, rx) = player();

        bar.set_volume(0.5);
        bar.toggle_mute();
        assert_eq!(bar.effective_volume(), 0.0);
        bar.toggle_mute();

        assert!(!bar.is_muted());
        assert_eq!(
            drain(&rx),
            [
                AudioCommand::SetVolume(0.5),
                AudioCommand::SetVolume(0.0),
                AudioCommand::SetVolume(0.5)
            ]
        );
    }

    #[test]
    fn volume_is_clamped_and_zero_mutes() {
        let (mut bar, _rx) = player();

        bar.set_volume(1.7);
        assert_eq!(bar.effective_volume(), 1.0);

        bar.set_volume(0.0);
        assert!(bar.is_muted());
    }

    #[test]
    fn seek_clamps_to_duration() {
        let (mut bar, rx) = player();
        let playback = PlaybackManager::new();

        bar.seek(10.0);
        assert!(drain(&rx).is_empty());

        playback.play_track(&track("a"));
        bar.sync(&playback.snapshot());
        bar.handle_media_event(MediaEvent::DurationKnown(125.0), &playback);
        drain(&rx);

        bar.seek(300.0);

        assert_eq!(drain(&rx), [AudioCommand::Seek(125.0)]);
        assert_eq!(bar.progress_label(), "2:05");
        assert_eq!(bar.duration_label(), "2:05");
    }

    #[test]
    fn negative_duration_is_ignored() {
        let (mut bar, rx) = player();
        let playback = PlaybackManager::new();
        playback.play_track(&track("a"));
        bar.sync(&playback.snapshot());
        drain(&rx);

        bar.handle_media_event(MediaEvent::DurationKnown(-1.0), &playback);
        bar.seek(10.0);

        assert_eq!(bar.duration(), None);
        assert_eq!(drain(&rx), [AudioCommand::Seek(10.0)]);
    }

    #[test]
    fn ended_replays_single_track() {
        let (mut bar, rx) = player();
        let playback = PlaybackManager::new();
        playback.play_track(&track("a"));
        bar.sync(&playback.snapshot());
        bar.handle_media_event(MediaEvent::PositionAdvanced(42.0), &playback);
        drain(&rx);

        bar.handle_media_event(MediaEvent::Ended, &playback);
        bar.sync(&playback.snapshot());

        assert!(playback.snapshot().is_playing);
        assert_eq!(bar.progress(), 0.0);
        assert_eq!(drain(&rx), [AudioCommand::Play]);
    }
}
