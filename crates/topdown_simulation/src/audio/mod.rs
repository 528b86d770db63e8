//! Footstep audio toggle

use bevy::prelude::*;

use crate::components::{FootstepAudio, Player};
use crate::input::{InputActions, MOVE_ACTION};

/// Play/stop looping footstep по состоянию "Move"
///
/// Работает каждый frame (Update). Play только если ещё не играет,
/// чтобы не перезапускать клип каждый кадр.
pub fn toggle_footsteps(
    actions: Res<InputActions>,
    mut query: Query<&mut FootstepAudio, With<Player>>,
) {
    let moving = actions.is_pressed(MOVE_ACTION);

    for mut footsteps in query.iter_mut() {
        if moving && !footsteps.is_playing() {
            footsteps.play();
        } else if !moving && footsteps.is_playing() {
            footsteps.stop();
        }
    }
}
