//=========================================================================
// Input Event Types
//
// Platform-independent representation of the input the game reacts to.
//
// The platform layer (Winit) converts OS events into these types before
// they cross into the core, so nothing under `core` depends on the
// windowing library.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    ActionMapper
//         ↓
//    GameAction → GameEngine
// ```
//
// Only presses are represented: releases, key repeats and cursor motion
// are filtered out by the platform.
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, thumb buttons and anything
/// the platform reports beyond the usual three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the key location, not the character produced, so `KeyR`
/// is the same key on QWERTY and AZERTY layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    /// Any key without an explicit mapping.
    Unidentified,
}

//=== InputEvent ==========================================================

/// A single press delivered by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key pressed (repeats excluded).
    KeyDown(KeyCode),

    /// Mouse button pressed at window position `(x, y)`.
    ///
    /// Coordinates are physical pixels, origin top-left.
    MouseButtonDown { button: MouseButton, x: f32, y: f32 },
}

//=========================================================================
// Unit Tests
//=========================================================================
