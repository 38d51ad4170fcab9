//=========================================================================
// Engine
//
// Main entry point: wires configuration, core and platform together.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Event Loop]
//         │                          │
//         ├─ with_config()           ├─ creates channel
//         └─ with_channel_capacity() ├─ builds CoreSystems
//                                    └─ runs Platform until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::info;

//=== Internal Dependencies ===============================================

use crate::config::{ConfigError, GameConfig};
use crate::core::platform_bridge::PlatformEvent;
use crate::core::{CoreSystems, PlatformError};
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Config**: [`GameConfig::default`]
/// - **Channel capacity**: 128 messages
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use noughts_crosses::EngineBuilder;
///
/// EngineBuilder::new().build()?.run()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Custom reset key and window:
/// ```no_run
/// use noughts_crosses::prelude::*;
///
/// let config = GameConfig::default()
///     .with_window_size(450, 450)
///     .with_reset_key(KeyCode::KeyR);
///
/// EngineBuilder::new().with_config(config).build()?.run()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct EngineBuilder {
    config: GameConfig,
    channel_capacity: usize,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            channel_capacity: 128,
        }
    }

    /// Replaces the session configuration.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Messages beyond capacity within one frame are dropped and logged.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Validates the configuration and builds the engine.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration cannot be drawn.
    pub fn build(self) -> Result<Engine, ConfigError> {
        self.config.validate()?;

        info!(
            "Building engine ({}x{}, channel: {})",
            self.config.window_size().0,
            self.config.window_size().1,
            self.channel_capacity
        );

        Ok(Engine {
            config: self.config,
            channel_capacity: self.channel_capacity,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// A configured game session, ready to open its window.
///
/// Create via [`EngineBuilder`].
pub struct Engine {
    config: GameConfig,
    channel_capacity: usize,
}

impl Engine {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Opens the window and blocks until it is closed.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core channel
    /// 2. Builds the core (board, bindings)
    /// 3. Runs the platform event loop (blocks here)
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the window system fails.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime");

        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        let core = CoreSystems::new(rx, &self.config);
        let platform = Platform::new(tx, core, self.config);

        let result = platform.run();
        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.config, GameConfig::default());
        assert_eq!(builder.channel_capacity, 128);
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = EngineBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_build_creates_engine() {
        let engine = EngineBuilder::new()
            .with_config(GameConfig::default().with_reset_key(KeyCode::KeyR))
            .build()
            .unwrap();

        assert_eq!(engine.config().reset_key(), KeyCode::KeyR);
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let result = EngineBuilder::new()
            .with_config(GameConfig::default().with_window_size(0, 0))
            .build();

        assert!(matches!(result, Err(ConfigError::EmptyWindow { .. })));
    }
}
