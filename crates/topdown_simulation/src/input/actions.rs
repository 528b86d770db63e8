//! Named input actions ("Move", "Attack")
//!
//! Источник ввода (клиент, тест) пишет значение через `set_value`,
//! resource сам вычисляет фазы и копит их до dispatch системы.

use std::collections::HashMap;

use bevy::prelude::*;
use thiserror::Error;

pub const MOVE_ACTION: &str = "Move";
pub const ATTACK_ACTION: &str = "Attack";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("input action `{0}` is not registered")]
    ActionNotFound(String),
}

/// Фаза action (аналог performed/canceled callback'ов)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionPhase {
    Performed(Vec2),
    Canceled,
}

#[derive(Debug, Clone, Default)]
pub struct InputAction {
    value: Vec2,
    pending: Vec<ActionPhase>,
}

impl InputAction {
    pub fn value(&self) -> Vec2 {
        self.value
    }

    /// Pressed = ненулевое значение (stick/composite actuated)
    pub fn is_pressed(&self) -> bool {
        self.value != Vec2::ZERO
    }

    fn set_value(&mut self, value: Vec2) {
        if value == self.value {
            return;
        }
        self.value = value;

        let phase = if value == Vec2::ZERO {
            ActionPhase::Canceled
        } else {
            ActionPhase::Performed(value)
        };
        self.pending.push(phase);
    }

    fn drain_phases(&mut self) -> Vec<ActionPhase> {
        std::mem::take(&mut self.pending)
    }
}

/// Реестр input actions
///
/// `Default` регистрирует "Move" и "Attack".
#[derive(Resource, Debug, Clone)]
pub struct InputActions {
    actions: HashMap<String, InputAction>,
}

impl Default for InputActions {
    fn default() -> Self {
        let mut actions = Self::empty();
        actions.register(MOVE_ACTION);
        actions.register(ATTACK_ACTION);
        actions
    }
}

impl InputActions {
    pub fn empty() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &str) {
        self.actions.entry(name.to_string()).or_default();
    }

    pub fn find_action(&self, name: &str) -> Result<&InputAction, InputError> {
        self.actions
            .get(name)
            .ok_or_else(|| InputError::ActionNotFound(name.to_string()))
    }

    pub fn set_value(&mut self, name: &str, value: Vec2) -> Result<(), InputError> {
        let action = self
            .actions
            .get_mut(name)
            .ok_or_else(|| InputError::ActionNotFound(name.to_string()))?;
        action.set_value(value);
        Ok(())
    }

    /// Для button-like actions (Attack): pressed → (1, 0), released → ZERO
    pub fn set_pressed(&mut self, name: &str, pressed: bool) -> Result<(), InputError> {
        let value = if pressed { Vec2::X } else { Vec2::ZERO };
        self.set_value(name, value)
    }

    /// Unregistered action читается как "не нажато"
    pub fn is_pressed(&self, name: &str) -> bool {
        self.actions.get(name).is_some_and(InputAction::is_pressed)
    }

    pub fn drain_phases(&mut self, name: &str) -> Result<Vec<ActionPhase>, InputError> {
        let action = self
            .actions
            .get_mut(name)
            .ok_or_else(|| InputError::ActionNotFound(name.to_string()))?;
        Ok(action.drain_phases())
    }
}
