//! Стартовая позиция игрока

use bevy::prelude::*;

/// Внешнее значение стартовой позиции ("teleport target")
///
/// Пишется снаружи (переход между сценами, конфиг) ДО спавна игрока.
/// При спавне Player его Transform ставится в `initial_value`.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct StartingPosition {
    pub initial_value: Vec2,
}

impl StartingPosition {
    pub fn new(initial_value: Vec2) -> Self {
        Self { initial_value }
    }
}
