//! Footstep audio sync: FootstepAudio (simulation) → AudioSink (Bevy audio)

use bevy::audio::{AudioPlayer, AudioSink, AudioSinkPlayback, PlaybackSettings};
use bevy::prelude::*;
use topdown_simulation::{FootstepAudio, Player};

/// Looping footstep clip (assets/audio/footsteps.ogg)
pub const FOOTSTEP_CLIP: &str = "audio/footsteps.ogg";

pub struct FootstepAudioPlugin;

impl Plugin for FootstepAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (attach_footstep_player, sync_footstep_sink).chain());
    }
}

/// Вешает looping AudioPlayer (на паузе) на только что заспавненного игрока
fn attach_footstep_player(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    query: Query<Entity, (Added<FootstepAudio>, With<Player>)>,
) {
    for entity in query.iter() {
        commands.entity(entity).insert((
            AudioPlayer::new(asset_server.load(FOOTSTEP_CLIP)),
            PlaybackSettings::LOOP.paused(),
        ));
    }
}

/// Зеркалит play/stop на sink
///
/// Sink появляется только после загрузки клипа; до этого система no-op.
fn sync_footstep_sink(query: Query<(&FootstepAudio, &AudioSink)>) {
    for (footsteps, sink) in query.iter() {
        if footsteps.is_playing() && sink.is_paused() {
            sink.play();
        } else if !footsteps.is_playing() && !sink.is_paused() {
            sink.pause();
        }
    }
}
