//! Headless прогон контроллера
//!
//! Скриптованный ввод без окна: вправо, по диагонали, отпускание.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;
use topdown_simulation::{
    create_headless_app, log_info, spawn_player_character, FootstepAudio, HeadlessPhysicsPlugin,
    InputActions, MovementConfig, TopDownPlugin, MOVE_ACTION,
};

fn main() {
    let config = MovementConfig::default();
    let mut app = create_headless_app();
    app.add_plugins((
        TopDownPlugin {
            config: config.clone(),
        },
        HeadlessPhysicsPlugin,
    ));

    let player = spawn_player_character(&mut app.world_mut().commands(), &config);
    app.world_mut().flush();
    log_info(&format!("Starting headless controller run (player {:?})", player));

    let script = [
        (0, Vec2::X),
        (100, Vec2::new(1.0, 1.0).normalize()),
        (200, Vec2::ZERO),
    ];

    for tick in 0..300 {
        if let Some((_, value)) = script.iter().find(|(at, _)| *at == tick) {
            let mut actions = app.world_mut().resource_mut::<InputActions>();
            if let Err(err) = actions.set_value(MOVE_ACTION, *value) {
                topdown_simulation::log_error(&err.to_string());
            }
        }

        app.update();

        if tick % 50 == 0 {
            let world = app.world();
            let (Some(transform), Some(velocity), Some(footsteps)) = (
                world.get::<Transform>(player),
                world.get::<Velocity>(player),
                world.get::<FootstepAudio>(player),
            ) else {
                continue;
            };
            log_info(&format!(
                "Tick {}: position {:?}, velocity {:?}, footsteps playing: {}",
                tick,
                transform.translation.truncate(),
                velocity.linvel,
                footsteps.is_playing()
            ));
        }
    }

    log_info("Headless run complete!");
}
