//=========================================================================
// Noughts & Crosses — Library Root
//
// Two-player, mouse-driven Tic Tac Toe on a 3x3 grid.
//
// Responsibilities:
// - Expose the game model (`core::game`) for embedding and testing
// - Expose the session facade (`Engine`, `EngineBuilder`)
// - Keep the windowing backend (`platform`) private
//
// Typical usage:
// ```no_run
// use noughts_crosses::EngineBuilder;
//
// fn main() -> Result<(), Box<dyn std::error::Error>> {
//     EngineBuilder::new().build()?.run()?;
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the game rules, input vocabulary and render state. None
// of it depends on the windowing library.
//
// `config` holds session settings (window, colors, keys).
//
pub mod config;
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window, event loop and pixel surface.
//
// `engine` wires configuration, core and platform together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
