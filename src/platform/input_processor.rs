//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into engine InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Stateful cursor tracking: Winit reports button presses without a
// position, so the last CursorMoved position is cached and attached to
// every mouse press. Releases, key repeats and unmapped keys are
// filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, MouseButton};

//=== InputProcessor ======================================================

/// Converts Winit events to engine InputEvents with cursor tracking.
pub(crate) struct InputProcessor {
    cursor: (f32, f32),
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self { cursor: (0.0, 0.0) }
    }

    //--- Cursor State -----------------------------------------------------

    /// Records the cursor position (physical pixels, top-left origin).
    pub(crate) fn track_cursor(&mut self, x: f32, y: f32) {
        self.cursor = (x, y);
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit KeyEvent to InputEvent (presses only, no repeats).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        let key_code = match key_event.physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        Self::key_input_event(key_code, key_event.state, key_event.repeat)
    }

    /// Converts a Winit mouse button event to InputEvent at the cursor.
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> Option<InputEvent> {
        match state {
            ElementState::Pressed => {
                let (x, y) = self.cursor;
                Some(InputEvent::MouseButtonDown {
                    button: MouseButton::from(button),
                    x,
                    y,
                })
            }
            ElementState::Released => None,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn key_input_event(key: KeyCode, state: ElementState, repeat: bool) -> Option<InputEvent> {
        if repeat || state != ElementState::Pressed || key == KeyCode::Unidentified {
            return None;
        }
        Some(InputEvent::KeyDown(key))
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to engine key codes.
///
/// Maps A-Z and the common special keys. Everything else returns
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Converts Winit mouse buttons to engine buttons.
///
/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_cursor_at_origin() {
        let processor = InputProcessor::new();
        assert_eq!(processor.cursor(), (0.0, 0.0));
    }

    #[test]
    fn press_uses_last_cursor_position() {
        let mut processor = InputProcessor::new();
        processor.track_cursor(10.0, 20.0);
        processor.track_cursor(123.5, 456.7);

        let event = processor.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed);

        assert_eq!(
            event,
            Some(InputEvent::MouseButtonDown { button: MouseButton::Left, x: 123.5, y: 456.7 })
        );
    }

    #[test]
    fn mouse_release_is_filtered() {
        let processor = InputProcessor::new();
        let event = processor.process_mouse_button(WinitMouseButton::Left, ElementState::Released);
        assert!(event.is_none());
    }

    #[test]
    fn key_press_creates_key_down() {
        let event = InputProcessor::key_input_event(KeyCode::Space, ElementState::Pressed, false);
        assert_eq!(event, Some(InputEvent::KeyDown(KeyCode::Space)));
    }

    #[test]
    fn key_release_and_repeat_are_filtered() {
        assert!(InputProcessor::key_input_event(KeyCode::Space, ElementState::Released, false)
            .is_none());
        assert!(InputProcessor::key_input_event(KeyCode::Space, ElementState::Pressed, true)
            .is_none());
    }

    #[test]
    fn unidentified_key_is_filtered() {
        let key = KeyCode::from(WinitKeyCode::F13);
        assert_eq!(key, KeyCode::Unidentified);
        assert!(InputProcessor::key_input_event(key, ElementState::Pressed, false).is_none());
    }

    #[test]
    fn keycode_conversion() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::KeyA);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyZ), KeyCode::KeyZ);
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Space);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
    }

    #[test]
    fn mouse_button_conversion() {
        assert_eq!(MouseButton::from(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(WinitMouseButton::Right), MouseButton::Right);
        assert_eq!(MouseButton::from(WinitMouseButton::Middle), MouseButton::Middle);
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
    }
}
