//! Player control marker component

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Все системы контроллера используют `With<Player>` filter.
/// В single-player режиме обычно только один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
