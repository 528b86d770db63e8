//! Player movement systems
//!
//! - `handle_move_events` (Update): MoveActionEvent → MoveDirection + Animator
//! - `apply_movement_velocity` (FixedUpdate): MoveDirection → rigid body velocity
//! - `apply_starting_position` (PreUpdate): Transform из StartingPosition при спавне

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::animation::update_move_animation;
use crate::components::{Animator, MoveDirection, Player, PlayerMovement, StartingPosition};
use crate::input::MoveActionEvent;

/// Обрабатывает performed/canceled фазы "Move"
///
/// Performed → direction = value, Canceled → direction = ZERO.
/// После каждой фазы обновляем параметры аниматора (если он есть).
pub fn handle_move_events(
    mut move_events: EventReader<MoveActionEvent>,
    mut query: Query<(&mut MoveDirection, Option<&mut Animator>), With<Player>>,
) {
    for event in move_events.read() {
        let direction = match *event {
            MoveActionEvent::Performed(value) => value,
            MoveActionEvent::Canceled => Vec2::ZERO,
        };

        for (mut move_direction, animator) in query.iter_mut() {
            move_direction.0 = direction;

            if let Some(mut animator) = animator {
                update_move_animation(&mut animator, direction);
            }
        }
    }
}

/// Fixed-step: velocity = direction * (min(speed, max_speed) * fixed_dt)
pub fn apply_movement_velocity(
    mut query: Query<(&MoveDirection, &PlayerMovement, &mut Velocity), With<Player>>,
    time: Res<Time<Fixed>>,
) {
    let fixed_delta = time.delta_secs();

    for (direction, movement, mut velocity) in query.iter_mut() {
        velocity.linvel = movement.velocity_for(direction.0, fixed_delta);
    }
}

/// Ставит только что заспавненного игрока в стартовую позицию
///
/// Z сохраняем (sprite layering).
pub fn apply_starting_position(
    starting_position: Res<StartingPosition>,
    mut query: Query<&mut Transform, Added<Player>>,
) {
    for mut transform in query.iter_mut() {
        transform.translation.x = starting_position.initial_value.x;
        transform.translation.y = starting_position.initial_value.y;
        crate::logger::log(&format!(
            "Player placed at starting position {:?}",
            starting_position.initial_value
        ));
    }
}
