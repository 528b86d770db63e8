//! Сцена, sprite игрока и bridge логгера в Bevy tracing

use bevy::prelude::*;
use topdown_simulation::logger::{LogLevel, LogPrinter};
use topdown_simulation::{
    spawn_player_character, Animator, MovementConfig, Player, PARAM_HORIZONTAL, PARAM_SPEED,
};

/// Размер sprite игрока (world units, совпадает с capsule коллайдером)
const PLAYER_SIZE: Vec2 = Vec2::new(0.6, 1.1);

const IDLE_COLOR: Color = Color::srgb(0.35, 0.55, 0.85);
const WALK_COLOR: Color = Color::srgb(0.45, 0.75, 1.0);

/// LogPrinter → bevy::log (попадает в LogPlugin вместе с логами движка)
pub struct TracingLogger;

impl LogPrinter for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!("{}", message),
            LogLevel::Info => info!("{}", message),
            LogLevel::Warning => warn!("{}", message),
            LogLevel::Error => error!("{}", message),
        }
    }
}

pub struct AnimatorSpritePlugin;

impl Plugin for AnimatorSpritePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (attach_player_sprite, apply_animator_to_sprite).chain());
    }
}

/// Spawn пола и игрока
pub fn setup_scene(mut commands: Commands, config: Res<MovementConfig>) {
    // Пол (20x20 units), под игроком по Z
    commands.spawn((
        Sprite::from_color(Color::srgb(0.2, 0.3, 0.2), Vec2::splat(20.0)),
        Transform::from_xyz(0.0, 0.0, -1.0),
    ));

    spawn_player_character(&mut commands, &config);
}

fn attach_player_sprite(mut commands: Commands, query: Query<Entity, Added<Player>>) {
    for entity in query.iter() {
        commands
            .entity(entity)
            .insert(Sprite::from_color(IDLE_COLOR, PLAYER_SIZE));
    }
}

/// Animator параметры → sprite (facing через flip_x, walk/idle через цвет)
fn apply_animator_to_sprite(mut query: Query<(&Animator, &mut Sprite), Changed<Animator>>) {
    for (animator, mut sprite) in query.iter_mut() {
        sprite.flip_x = animator.float_or_default(PARAM_HORIZONTAL) < 0.0;
        sprite.color = if animator.float_or_default(PARAM_SPEED) > 0.0 {
            WALK_COLOR
        } else {
            IDLE_COLOR
        };
    }
}
