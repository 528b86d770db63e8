//! Player physics body (Rapier 2D)
//!
//! Архитектура:
//! - RigidBody::Dynamic, скорость пишем сами каждый FixedUpdate
//! - GravityScale(0): top-down, гравитации по Y нет
//! - Вращение заблокировано (спрайт не должен крутиться от столкновений)

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::{Animator, FootstepAudio, MoveDirection, Player, PlayerMovement};
use crate::config::MovementConfig;

/// Capsule коллайдер персонажа (в world units)
pub const PLAYER_HALF_HEIGHT: f32 = 0.25;
pub const PLAYER_RADIUS: f32 = 0.3;

/// Spawn helper для player персонажа
///
/// Создает entity с полным набором компонентов:
/// - Transform (позиция выставится из StartingPosition в первом кадре)
/// - Player + MoveDirection + PlayerMovement (из config; невалидный → defaults,
///   так же как в TopDownPlugin)
/// - Animator + FootstepAudio
/// - Rapier: RigidBody + Collider + Velocity
pub fn spawn_player_character(commands: &mut Commands, config: &MovementConfig) -> Entity {
    let (config, _) = config.validated_or_default();

    commands
        .spawn((
            Transform::default(),

            // Наши компоненты
            Player,
            MoveDirection::default(),
            PlayerMovement {
                speed: config.speed,
                max_speed: config.max_speed,
            },
            Animator::default(),
            FootstepAudio::default(),

            // Rapier physics
            RigidBody::Dynamic,
            Collider::capsule_y(PLAYER_HALF_HEIGHT, PLAYER_RADIUS),
            Velocity::zero(),
            GravityScale(0.0),
            LockedAxes::ROTATION_LOCKED,
        ))
        .id()
}

/// Интеграция velocity → Transform (headless режим, без Rapier step)
///
/// Напрямую применяет Velocity.linvel к Transform.translation.
/// Клиент вместо этого добавляет RapierPhysicsPlugin.
pub fn integrate_velocity_to_transform(
    mut query: Query<(&Velocity, &mut Transform), With<Player>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (velocity, mut transform) in query.iter_mut() {
        transform.translation += velocity.linvel.extend(0.0) * delta;
    }
}

/// Plugin для headless прогонов (бинарь симуляции, интеграционные тесты)
pub struct HeadlessPhysicsPlugin;

impl Plugin for HeadlessPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            integrate_velocity_to_transform.after(crate::movement::apply_movement_velocity),
        );
    }
}
