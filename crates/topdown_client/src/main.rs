use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use topdown_simulation::{logger, MovementConfig, TopDownPlugin};

mod audio;
mod camera;
mod input;
mod rendering;

use audio::FootstepAudioPlugin;
use camera::FollowCameraPlugin;
use input::KeyboardInputPlugin;
use rendering::{AnimatorSpritePlugin, TracingLogger};

fn main() -> Result<()> {
    logger::set_logger(Box::new(TracingLogger));

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    let config = load_config(&config_path)?;

    App::new()
        // Bevy defaults (rendering, input, audio, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Top-Down Character".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Rapier step в FixedUpdate, рядом с нашей записью velocity
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        // Controller (headless ECS logic)
        .add_plugins(TopDownPlugin { config })
        // Клавиатура → InputActions
        .add_plugins(KeyboardInputPlugin)
        // Footstep state → AudioSink
        .add_plugins(FootstepAudioPlugin)
        // Animator → sprite
        .add_plugins(AnimatorSpritePlugin)
        .add_plugins(FollowCameraPlugin)
        .add_systems(Startup, rendering::setup_scene)
        .run();

    Ok(())
}

fn default_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("config/player.json")
}

/// Читает movement config; нет файла → defaults
fn load_config(path: &Path) -> Result<MovementConfig> {
    if !path.exists() {
        logger::log_warning(&format!(
            "Movement config {} not found, using defaults",
            path.display()
        ));
        return Ok(MovementConfig::default());
    }

    let config = MovementConfig::from_path(path)
        .with_context(|| format!("load movement config: {}", path.display()))?;

    logger::log_info(&format!("Loaded movement config from {}", path.display()));
    Ok(config)
}
