//=========================================================================
// Input System
//=========================================================================
//
// Platform-independent input vocabulary and action mapping.
//
// Architecture:
//   InputEvent (from platform) → ActionMapper → GameAction (to core)
//
//=========================================================================

//=== Module Declarations =================================================

mod action_mapper;
pub mod event;

//=== Public API ==========================================================

pub use action_mapper::{ActionMapper, GameAction};
pub use event::{InputEvent, KeyCode, MouseButton};
