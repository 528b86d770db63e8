//! Input action events

use bevy::prelude::{Event, Vec2};

/// Фаза "Move" action
///
/// - `Performed(value)`: значение изменилось и не равно нулю
/// - `Canceled`: ввод отпущен (значение вернулось в ZERO)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum MoveActionEvent {
    Performed(Vec2),
    Canceled,
}
