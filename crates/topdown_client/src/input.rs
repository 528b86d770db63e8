//! Keyboard/mouse → InputActions
//!
//! "Move": WASD + стрелки как 2D composite (диагональ нормализована).
//! "Attack": Space / LMB (зарегистрирован, поведения пока нет).

use bevy::prelude::*;
use topdown_simulation::{log_warning, ControllerSet, InputActions, ATTACK_ACTION, MOVE_ACTION};

pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, read_player_input.in_set(ControllerSet::ReadInput));
    }
}

/// Composite направление из зажатых клавиш
///
/// y вверх (+1 = W / ArrowUp), как в world space 2D камеры.
pub fn composite_direction(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut direction = Vec2::ZERO;

    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        direction.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        direction.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        direction.x += 1.0;
    }

    // Normalize (диагональ не быстрее)
    direction.normalize_or_zero()
}

fn read_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut actions: ResMut<InputActions>,
) {
    if let Err(err) = actions.set_value(MOVE_ACTION, composite_direction(&keyboard)) {
        log_warning(&format!("Move binding skipped: {}", err));
    }

    let attack = keyboard.pressed(KeyCode::Space) || mouse_buttons.pressed(MouseButton::Left);
    if let Err(err) = actions.set_pressed(ATTACK_ACTION, attack) {
        log_warning(&format!("Attack binding skipped: {}", err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_zero_direction() {
        let keyboard = ButtonInput::<KeyCode>::default();
        assert_eq!(composite_direction(&keyboard), Vec2::ZERO);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyW);
        keyboard.press(KeyCode::KeyD);

        let direction = composite_direction(&keyboard);
        assert!((direction.length() - 1.0).abs() < 1e-5);
        assert!(direction.x > 0.0 && direction.y > 0.0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyA);
        keyboard.press(KeyCode::ArrowRight);

        assert_eq!(composite_direction(&keyboard), Vec2::ZERO);
    }
}
