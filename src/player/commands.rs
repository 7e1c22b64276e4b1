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

//! Command-channel audio output.
//!
//! [`ChannelOutput`] turns every [`AudioOutput`] call into an
//! [`AudioCommand`] sent to whatever owns the real media element, so the
//! player bar never blocks on audio.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::debug;

use crate::player::AudioOutput;

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    SetSource(String),
    Play,
    Pause,
    Seek(f64),
    SetVolume(f64),
}

pub struct ChannelOutput {
    command_tx: Sender<AudioCommand>,
}

impl ChannelOutput {
    pub fn new() -> (Self, Receiver<AudioCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        (Self { command_tx }, command_rx)
    }

    fn send(&self, command: AudioCommand) {
        // A closed channel means the media element has gone away
        if self.command_tx.send(command).is_err() {
            debug!("Audio output closed, command dropped");
        }
    }
}

impl AudioOutput for ChannelOutput {
    fn set_source(&mut self, url: &str) {
        self.send(AudioCommand::SetSource(url.to_string()));
    }

    fn play(&mut self) {
        self.send(AudioCommand::Play);
    }

    fn pause(&mut self) {
        self.send(AudioCommand::Pause);
    }

    fn seek(&mut self, seconds: f64) {
        self.send(AudioCommand::Seek(seconds));
    }

    fn set_volume(&mut self, level: f64) {
        self.send(AudioCommand::SetVolume(level));
    }
}
