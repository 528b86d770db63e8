//! Top-down character controller (simulation core)
//!
//! ECS-логика на Bevy 0.16, без окна и рендера.
//!
//! Жизненный цикл игрока:
//! - PreUpdate: стартовая позиция для только что заспавненного Player
//! - Update: input фазы → направление + animator, footstep play/stop
//! - FixedUpdate: направление → linear velocity rigid body
//!
//! Клиент (topdown_client) добавляет окно, Rapier step, клавиатуру и звук.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

pub mod animation;
pub mod audio;
pub mod components;
pub mod config;
pub mod input;
pub mod logger;
pub mod movement;
pub mod physics;

// Re-export базовых типов для удобства
pub use components::*;
pub use config::{ConfigError, MovementConfig};
pub use input::{InputActions, InputError, MoveActionEvent, ATTACK_ACTION, MOVE_ACTION};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use physics::{spawn_player_character, HeadlessPhysicsPlugin};

/// Порядок player систем внутри Update
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Источники ввода пишут InputActions (клиент ставит свои системы сюда)
    ReadInput,
    /// Фазы → события → direction/animator/audio
    React,
}

/// Главный plugin контроллера
pub struct TopDownPlugin {
    pub config: MovementConfig,
}

impl Default for TopDownPlugin {
    fn default() -> Self {
        Self {
            config: MovementConfig::default(),
        }
    }
}

impl Plugin for TopDownPlugin {
    fn build(&self, app: &mut App) {
        let (config, rejected) = self.config.validated_or_default();
        if let Some(err) = rejected {
            log_error(&format!("Movement config rejected, using defaults: {}", err));
        }

        app
            // Fixed timestep для физики (50Hz по умолчанию → dt = 0.02)
            .insert_resource(Time::<Fixed>::from_hz(config.fixed_hz))
            .insert_resource(StartingPosition::new(config.starting_position()))
            .insert_resource(config)
            .init_resource::<InputActions>()
            .add_event::<MoveActionEvent>()
            .configure_sets(Update, (ControllerSet::ReadInput, ControllerSet::React).chain())
            .add_systems(Startup, input::resolve_player_actions)
            .add_systems(PreUpdate, movement::apply_starting_position)
            .add_systems(
                Update,
                (
                    input::dispatch_move_action,
                    movement::handle_move_events,
                    audio::toggle_footsteps,
                )
                    .chain() // Последовательное выполнение
                    .in_set(ControllerSet::React),
            )
            .add_systems(FixedUpdate, movement::apply_movement_velocity);
    }
}

/// Длительность кадра в headless режиме (один кадр = один fixed tick при 50Hz)
pub const HEADLESS_FRAME: Duration = Duration::from_millis(20);

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается вручную на `HEADLESS_FRAME` за `app.update()`,
/// поэтому прогоны не зависят от скорости машины.
/// Первый update только инициализирует часы (delta = 0).
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(HEADLESS_FRAME));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
