use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::transform::TransformSystem;
use topdown_simulation::Player;

/// World units, видимые по вертикали (ортографическая камера)
const VIEW_HEIGHT: f32 = 12.0;

pub struct FollowCameraPlugin;

impl Plugin for FollowCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(PostUpdate, follow_player.before(TransformSystem::TransformPropagate));
    }
}

#[derive(Component)]
pub struct FollowCamera {
    /// Скорость догоняния (1/s), 0 = мгновенно
    pub smoothing: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self { smoothing: 8.0 }
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEW_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
        FollowCamera::default(),
    ));
}

fn follow_player(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut camera_query: Query<(&FollowCamera, &mut Transform), Without<Player>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok((follow, mut camera)) = camera_query.single_mut() else {
        return;
    };

    let target = player.translation.truncate();
    let current = camera.translation.truncate();

    let next = if follow.smoothing <= 0.0 {
        target
    } else {
        let t = (follow.smoothing * time.delta_secs()).min(1.0);
        current.lerp(target, t)
    };

    camera.translation.x = next.x;
    camera.translation.y = next.y;
}
