//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the game core.
//
// This module defines the contract between the windowing backend and
// the core, so the backend can be swapped without touching game logic.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Core-side event collection and batching
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;
