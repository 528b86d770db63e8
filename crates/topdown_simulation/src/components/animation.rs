//! Animator компонент: named float параметры
//!
//! Blending/state machine делает движок, мы только пишем параметры.

use std::collections::HashMap;
use bevy::prelude::*;

pub const PARAM_SPEED: &str = "Speed";
pub const PARAM_HORIZONTAL: &str = "Horizontal";
pub const PARAM_VERTICAL: &str = "Vertical";

/// Float параметры аниматора (Speed, Horizontal, Vertical)
///
/// Неизвестный параметр читается как `None` (ещё ни разу не записан).
#[derive(Component, Debug, Clone, Default)]
pub struct Animator {
    floats: HashMap<String, f32>,
}

impl Animator {
    pub fn set_float(&mut self, name: &str, value: f32) {
        self.floats.insert(name.to_string(), value);
    }

    pub fn get_float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    /// Как `get_float`, но 0.0 для незаписанных параметров (default аниматора)
    pub fn float_or_default(&self, name: &str) -> f32 {
        self.get_float(name).unwrap_or(0.0)
    }
}
