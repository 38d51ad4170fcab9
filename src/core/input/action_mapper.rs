//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps raw input events to game actions based on configured bindings.
//
// Architecture:
//   KeyDown(key)              → HashMap<KeyCode, GameAction>  → Reset | Quit
//   MouseButtonDown(btn, x, y) → place button?                 → Place { x, y }
//
// Unbound keys and buttons resolve to nothing and are dropped.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== GameAction ==========================================================

/// High-level command understood by the core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    /// Put the next mark in the cell under `(x, y)`.
    Place { x: f32, y: f32 },

    /// Clear the board and start over.
    Reset,

    /// Close the window.
    Quit,
}

//=== ActionMapper ========================================================

/// Resolves presses to [`GameAction`]s.
#[derive(Debug, Clone)]
pub struct ActionMapper {
    /// Key bindings: key → action (Reset / Quit).
    key_bindings: HashMap<KeyCode, GameAction>,

    /// Button that places a mark.
    place_button: MouseButton,
}

impl ActionMapper {
    /// Creates a mapper with no key bindings; left click places.
    pub fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
            place_button: MouseButton::Left,
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds `key` to `action`, replacing any previous binding for it.
    pub fn bind_key(&mut self, key: KeyCode, action: GameAction) {
        self.key_bindings.insert(key, action);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        self.key_bindings.remove(&key);
    }

    /// Selects the mouse button that places marks.
    pub fn set_place_button(&mut self, button: MouseButton) {
        self.place_button = button;
    }

    //--- Event Mapping ----------------------------------------------------

    /// Maps an input event to an action, if bound.
    pub fn map_event(&self, event: &InputEvent) -> Option<GameAction> {
        match *event {
            InputEvent::KeyDown(key) => self.key_bindings.get(&key).copied(),
            InputEvent::MouseButtonDown { button, x, y } if button == self.place_button => {
                Some(GameAction::Place { x, y })
            }
            InputEvent::MouseButtonDown { .. } => None,
        }
    }
}

impl Default for ActionMapper {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn click(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::MouseButtonDown { button, x, y }
    }

    //=====================================================================
    // Key Bindings
    //=====================================================================

    #[test]
    fn bound_key_maps_to_action() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Space, GameAction::Reset);

        assert_eq!(
            mapper.map_event(&InputEvent::KeyDown(KeyCode::Space)),
            Some(GameAction::Reset)
        );
    }

    #[test]
    fn unbound_key_is_ignored() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Space, GameAction::Reset);

        assert_eq!(mapper.map_event(&InputEvent::KeyDown(KeyCode::KeyA)), None);
    }

    #[test]
    fn rebinding_replaces_action() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Escape, GameAction::Reset);
        mapper.bind_key(KeyCode::Escape, GameAction::Quit);

        assert_eq!(
            mapper.map_event(&InputEvent::KeyDown(KeyCode::Escape)),
            Some(GameAction::Quit)
        );
    }

    #[test]
    fn unbind_removes_binding() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Space, GameAction::Reset);
        mapper.unbind_key(KeyCode::Space);

        assert_eq!(mapper.map_event(&InputEvent::KeyDown(KeyCode::Space)), None);
    }

    //=====================================================================
    // Mouse
    //=====================================================================

    #[test]
    fn left_click_places_at_position() {
        let mapper = ActionMapper::new();
        assert_eq!(
            mapper.map_event(&click(MouseButton::Left, 12.0, 34.0)),
            Some(GameAction::Place { x: 12.0, y: 34.0 })
        );
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mapper = ActionMapper::new();
        for button in [MouseButton::Right, MouseButton::Middle, MouseButton::Other] {
            assert_eq!(mapper.map_event(&click(button, 1.0, 1.0)), None);
        }
    }

    #[test]
    fn place_button_is_configurable() {
        let mut mapper = ActionMapper::new();
        mapper.set_place_button(MouseButton::Right);

        assert_eq!(mapper.map_event(&click(MouseButton::Left, 1.0, 1.0)), None);
        assert!(mapper.map_event(&click(MouseButton::Right, 1.0, 1.0)).is_some());
    }
}
