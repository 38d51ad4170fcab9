//=========================================================================
// Game Configuration
//=========================================================================
//
// Window and presentation settings, fixed for the lifetime of a session.
//
// Built fluently and validated once by `EngineBuilder::build`:
// ```text
//   GameConfig::default()
//       .with_window_size(480, 480)
//       .with_reset_key(KeyCode::KeyR)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::input::KeyCode;

//=== Color ===============================================================

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

//=== Palette =============================================================

/// Colors used to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub mark: Color,
    /// Marks belonging to a winning line.
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(24, 24, 32),
            grid: Color::rgb(200, 200, 200),
            mark: Color::rgb(255, 255, 255),
            highlight: Color::rgb(60, 220, 90),
        }
    }
}

//=== ConfigError =========================================================

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Window width or height is zero.
    EmptyWindow { width: u32, height: u32 },

    /// A stroke thickness is zero or negative.
    InvalidThickness { name: &'static str, value: f32 },

    /// Mark half-extent is zero or negative.
    InvalidMarkExtent(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWindow { width, height } => {
                write!(f, "Window size must be non-zero, got {}x{}", width, height)
            }
            Self::InvalidThickness { name, value } => {
                write!(f, "{} thickness must be positive, got {}", name, value)
            }
            Self::InvalidMarkExtent(value) => {
                write!(f, "Mark extent must be positive, got {}", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

//=== GameConfig ==========================================================

/// Session settings: window, strokes, colors and the reset key.
///
/// # Default Values
///
/// - **Window**: 600x600 logical pixels, titled "Tic Tac Toe"
/// - **Grid thickness**: 3 px
/// - **Mark thickness**: 10 px
/// - **Mark extent**: 50 px (cross arm offset and nought radius)
/// - **Reset key**: Space
/// - **Quit key**: Escape
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    window_width: u32,
    window_height: u32,
    title: String,
    grid_thickness: f32,
    mark_thickness: f32,
    mark_extent: f32,
    palette: Palette,
    reset_key: KeyCode,
    quit_key: Option<KeyCode>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 600,
            window_height: 600,
            title: String::from("Tic Tac Toe"),
            grid_thickness: 3.0,
            mark_thickness: 10.0,
            mark_extent: 50.0,
            palette: Palette::default(),
            reset_key: KeyCode::Space,
            quit_key: Some(KeyCode::Escape),
        }
    }
}

impl GameConfig {
    //--- Builder ----------------------------------------------------------

    /// Sets the initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_grid_thickness(mut self, thickness: f32) -> Self {
        self.grid_thickness = thickness;
        self
    }

    pub fn with_mark_thickness(mut self, thickness: f32) -> Self {
        self.mark_thickness = thickness;
        self
    }

    /// Sets the cross arm offset and nought radius, in pixels.
    pub fn with_mark_extent(mut self, extent: f32) -> Self {
        self.mark_extent = extent;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the key that clears the board.
    pub fn with_reset_key(mut self, key: KeyCode) -> Self {
        self.reset_key = key;
        self
    }

    /// Sets the key that closes the window, or `None` to disable it.
    pub fn with_quit_key(mut self, key: Option<KeyCode>) -> Self {
        self.quit_key = key;
        self
    }

    //--- Validation -------------------------------------------------------

    /// Checks every value is usable for drawing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: self.window_width,
                height: self.window_height,
            });
        }

        for (name, value) in [("Grid", self.grid_thickness), ("Mark", self.mark_thickness)] {
            if !(value > 0.0) {
                return Err(ConfigError::InvalidThickness { name, value });
            }
        }

        if !(self.mark_extent > 0.0) {
            return Err(ConfigError::InvalidMarkExtent(self.mark_extent));
        }

        Ok(())
    }

    //--- Accessors --------------------------------------------------------

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn grid_thickness(&self) -> f32 {
        self.grid_thickness
    }

    pub fn mark_thickness(&self) -> f32 {
        self.mark_thickness
    }

    pub fn mark_extent(&self) -> f32 {
        self.mark_extent
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn reset_key(&self) -> KeyCode {
        self.reset_key
    }

    pub fn quit_key(&self) -> Option<KeyCode> {
        self.quit_key
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.window_size(), (600, 600));
        assert_eq!(config.reset_key(), KeyCode::Space);
        assert_eq!(config.quit_key(), Some(KeyCode::Escape));
    }

    #[test]
    fn builder_chaining() {
        let config = GameConfig::default()
            .with_window_size(300, 450)
            .with_title("Noughts")
            .with_reset_key(KeyCode::KeyR)
            .with_quit_key(None);

        assert_eq!(config.window_size(), (300, 450));
        assert_eq!(config.title(), "Noughts");
        assert_eq!(config.reset_key(), KeyCode::KeyR);
        assert_eq!(config.quit_key(), None);
    }

    #[test]
    fn zero_window_rejected() {
        let err = GameConfig::default().with_window_size(0, 600).validate();
        assert_eq!(err, Err(ConfigError::EmptyWindow { width: 0, height: 600 }));
    }

    #[test]
    fn non_positive_thickness_rejected() {
        let err = GameConfig::default().with_mark_thickness(0.0).validate();
        assert!(matches!(err, Err(ConfigError::InvalidThickness { name: "Mark", .. })));

        let err = GameConfig::default().with_grid_thickness(f32::NAN).validate();
        assert!(matches!(err, Err(ConfigError::InvalidThickness { name: "Grid", .. })));
    }

    #[test]
    fn non_positive_extent_rejected() {
        let err = GameConfig::default().with_mark_extent(-5.0).validate();
        assert_eq!(err, Err(ConfigError::InvalidMarkExtent(-5.0)));
    }

    #[test]
    fn config_error_display() {
        let msg = ConfigError::EmptyWindow { width: 0, height: 10 }.to_string();
        assert!(msg.contains("0x10"));
    }
}
