//! Тесты детерминизма
//!
//! Одинаковый input сценарий → идентичные позиции и скорости

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use topdown_simulation::*;

/// Snapshot-friendly копия состояния игрока
#[derive(Component, Debug)]
struct PlayerTrace {
    position: Vec2,
    velocity: Vec2,
}

fn record_trace(mut query: Query<(&Transform, &Velocity, &mut PlayerTrace)>) {
    for (transform, velocity, mut trace) in query.iter_mut() {
        trace.position = transform.translation.truncate();
        trace.velocity = velocity.linvel;
    }
}

/// Запускает сценарий (seeded случайные направления) и возвращает snapshot
fn run_scenario(seed: u64, tick_count: usize) -> Vec<u8> {
    let config = MovementConfig::default();
    let mut app = create_headless_app();
    app.add_plugins((
        TopDownPlugin {
            config: config.clone(),
        },
        HeadlessPhysicsPlugin,
    ));
    app.add_systems(Last, record_trace);

    let player = spawn_player_character(&mut app.world_mut().commands(), &config);
    app.world_mut().flush();
    app.world_mut().entity_mut(player).insert(PlayerTrace {
        position: Vec2::ZERO,
        velocity: Vec2::ZERO,
    });

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for tick in 0..tick_count {
        // Каждые 25 тиков новое направление, иногда отпускание
        if tick % 25 == 0 {
            let direction = if rng.gen_bool(0.2) {
                Vec2::ZERO
            } else {
                Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0))
            };
            app.world_mut()
                .resource_mut::<InputActions>()
                .set_value(MOVE_ACTION, direction)
                .unwrap();
        }
        app.update();
    }

    world_snapshot::<PlayerTrace>(app.world_mut())
}

#[test]
fn test_determinism_same_seed() {
    let snapshot1 = run_scenario(12345, 500);
    let snapshot2 = run_scenario(12345, 500);

    assert_eq!(snapshot1, snapshot2, "Один и тот же сценарий дал разные результаты!");
}

#[test]
fn test_different_seeds_diverge() {
    let snapshot1 = run_scenario(1, 500);
    let snapshot2 = run_scenario(2, 500);

    assert_ne!(snapshot1, snapshot2);
}
