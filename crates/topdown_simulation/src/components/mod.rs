//! ECS Components для player entity
//!
//! Организация по доменам:
//! - player: player control marker (Player)
//! - movement: направление и скорость (MoveDirection, PlayerMovement)
//! - animation: named float параметры аниматора (Animator)
//! - audio: состояние footstep audio source (FootstepAudio)
//! - world: стартовая позиция (StartingPosition)

pub mod player;
pub mod movement;
pub mod animation;
pub mod audio;
pub mod world;

// Re-exports для удобного импорта
pub use player::*;
pub use movement::*;
pub use animation::*;
pub use audio::*;
pub use world::*;
