//! Footstep audio source state
//!
//! Симуляция владеет только флагом play/stop. Клиент зеркалит его
//! на реальный AudioSink (looping footstep clip).

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FootstepAudio {
    is_playing: bool,
}

impl FootstepAudio {
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn play(&mut self) {
        self.is_playing = true;
    }

    pub fn stop(&mut self) {
        self.is_playing = false;
    }
}
