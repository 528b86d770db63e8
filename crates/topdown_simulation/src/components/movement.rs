//! Movement компоненты: направление ввода и параметры скорости

use bevy::prelude::*;

/// Текущее направление движения (из "Move" action)
///
/// Пишется только input handler'ом (performed → value, canceled → ZERO),
/// читается только fixed-step системой скорости.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MoveDirection(pub Vec2);

/// Параметры скорости игрока
///
/// `speed` может меняться в runtime (баффы, катсцены), поэтому
/// эффективная скорость всегда clamp'ится по `max_speed`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerMovement {
    pub speed: f32,
    pub max_speed: f32,
}

impl Default for PlayerMovement {
    fn default() -> Self {
        Self {
            speed: 200.0,
            max_speed: 1000.0,
        }
    }
}

impl PlayerMovement {
    /// min(speed, max_speed)
    pub fn effective_speed(&self) -> f32 {
        if self.speed > self.max_speed {
            self.max_speed
        } else {
            self.speed
        }
    }

    /// Linear velocity для одного fixed tick: direction * (speed * dt)
    pub fn velocity_for(&self, direction: Vec2, fixed_delta: f32) -> Vec2 {
        direction * (self.effective_speed() * fixed_delta)
    }
}
