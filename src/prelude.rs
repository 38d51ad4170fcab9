//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use noughts_crosses::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Session
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::config::{Color, ConfigError, GameConfig, Palette};
pub use crate::core::PlatformError;

// Game model
pub use crate::core::game::{Cell, GameEngine, GameState, GameStatus, Mark, MoveOutcome};

// Input
pub use crate::core::input::{KeyCode, MouseButton};
