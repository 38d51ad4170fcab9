//=========================================================================
// Core Systems
//
// Everything that decides what the game does, independent of the window.
//
// Responsibilities:
// - Drain the platform channel once per frame
// - Map presses to game actions
// - Apply actions to the GameEngine in arrival order
// - Expose a read-only RenderState for the drawing layer
//
// Notes:
// CoreSystems runs on the platform thread, inside the redraw callback.
// Every step completes synchronously; the channel only decouples the
// windowing backend from game logic.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod game;
pub mod geometry;
pub mod input;
pub(crate) mod platform_bridge;
pub mod render;

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{debug, info, trace};

//=== Internal Modules ====================================================

use crate::config::GameConfig;
use game::{GameEngine, GameStatus};
use geometry::BoardGeometry;
use input::{ActionMapper, GameAction};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::RenderState;

//=== Public API ==========================================================

pub use platform_bridge::PlatformError;

//=== CoreSystems =========================================================

/// Owns the game and everything that feeds it input.
pub(crate) struct CoreSystems {
    collector: EventCollector,
    mapper: ActionMapper,
    game: GameEngine,
    geometry: BoardGeometry,
}

impl CoreSystems {
    //--- Construction -----------------------------------------------------

    /// Creates the core with bindings taken from `config`.
    ///
    /// The board starts at the configured window size and follows
    /// `PlatformEvent::Resized` afterwards.
    pub(crate) fn new(receiver: Receiver<PlatformEvent>, config: &GameConfig) -> Self {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(config.reset_key(), GameAction::Reset);
        if let Some(key) = config.quit_key() {
            mapper.bind_key(key, GameAction::Quit);
        }

        let (width, height) = config.window_size();
        info!("Core systems initialized (reset key: {:?})", config.reset_key());

        Self {
            collector: EventCollector::new(receiver),
            mapper,
            game: GameEngine::new(),
            geometry: BoardGeometry::new(width as f32, height as f32),
        }
    }

    //--- tick() -----------------------------------------------------------
    //
    // One frame of game logic:
    //  1. Drain the platform channel
    //  2. Apply the latest board size
    //  3. Map and apply every press, oldest first
    //
    pub(crate) fn tick(&mut self) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            info!("Core received shutdown");
            return TickControl::Exit;
        }

        if let Some((width, height)) = self.collector.take_resize() {
            debug!("Board resized to {}x{}", width, height);
            self.geometry.resize(width as f32, height as f32);
        }

        for batch in self.collector.take_batches() {
            for event in &batch {
                let Some(action) = self.mapper.map_event(event) else {
                    trace!("Unbound input ignored: {:?}", event);
                    continue;
                };

                if self.apply_action(action) == TickControl::Exit {
                    return TickControl::Exit;
                }
            }
        }

        TickControl::Continue
    }

    fn apply_action(&mut self, action: GameAction) -> TickControl {
        match action {
            GameAction::Place { x, y } => match self.geometry.cell_at(x, y) {
                Some(cell) => {
                    self.game.play(cell);
                }
                None => trace!("Click at ({}, {}) outside the board", x, y),
            },
            GameAction::Reset => self.game.reset(),
            GameAction::Quit => {
                info!("Quit requested");
                return TickControl::Exit;
            }
        }
        TickControl::Continue
    }

    //--- Queries ----------------------------------------------------------

    pub(crate) fn render_state(&self) -> RenderState {
        RenderState::capture(&self.game, &self.geometry)
    }

    pub(crate) fn status(&self) -> GameStatus {
        self.game.status()
    }

    #[cfg(test)]
    pub(crate) fn game(&self) -> &GameEngine {
        &self.game
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
