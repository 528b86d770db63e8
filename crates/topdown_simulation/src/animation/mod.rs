//! Animation параметры из направления движения

use bevy::prelude::*;

use crate::components::{Animator, PARAM_HORIZONTAL, PARAM_SPEED, PARAM_VERTICAL};

/// Обновляет Speed/Horizontal/Vertical по текущему направлению
///
/// Horizontal/Vertical пишутся только при magnitude > 0: после отпускания
/// персонаж остаётся смотреть в последнюю сторону (idle-анимация по facing).
pub fn update_move_animation(animator: &mut Animator, direction: Vec2) {
    let magnitude = direction.length();
    animator.set_float(PARAM_SPEED, magnitude);

    if magnitude > 0.0 {
        animator.set_float(PARAM_HORIZONTAL, direction.x);
        animator.set_float(PARAM_VERTICAL, direction.y);
    }
}
