//! Player input module
//!
//! # Архитектура
//!
//! ```text
//! Device input (клиент: keyboard / gamepad / тестовый скрипт)
//!     ↓ InputActions::set_value("Move", axis)
//! InputActions (resource) - actions.rs
//!     ↓ dispatch_move_action (фазы performed / canceled)
//! MoveActionEvent (ECS event) - events.rs
//!     ↓
//! movement / animation systems
//! ```

pub mod actions;
pub mod events;
pub mod systems;

pub use actions::*;
pub use events::*;
pub use systems::*;
