//! Input systems (ECS)

use bevy::prelude::*;

use super::actions::{ActionPhase, InputActions, ATTACK_ACTION, MOVE_ACTION};
use super::events::MoveActionEvent;
use crate::logger::{log, log_error};

/// Startup: проверяем что нужные actions зарегистрированы
///
/// "Attack" резолвится, но ни к какому поведению не привязан.
pub fn resolve_player_actions(actions: Res<InputActions>) {
    for name in [MOVE_ACTION, ATTACK_ACTION] {
        match actions.find_action(name) {
            Ok(_) => log(&format!("Input action `{}` resolved", name)),
            Err(err) => log_error(&format!("Player controller setup: {}", err)),
        }
    }
}

/// Превращает накопленные фазы "Move" в MoveActionEvent
///
/// Порядок фаз сохраняется (press → change → release в одном кадре даёт 3 события).
pub fn dispatch_move_action(
    mut actions: ResMut<InputActions>,
    mut move_events: EventWriter<MoveActionEvent>,
) {
    // Guard: "Move" не зарегистрирован (уже залогировано в resolve_player_actions)
    let Ok(phases) = actions.drain_phases(MOVE_ACTION) else {
        return;
    };

    for phase in phases {
        let event = match phase {
            ActionPhase::Performed(value) => MoveActionEvent::Performed(value),
            ActionPhase::Canceled => MoveActionEvent::Canceled,
        };
        move_events.write(event);
    }
}
