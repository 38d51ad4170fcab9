//=========================================================================
// Input Buffer
//
// Collects presses between two frames. Acts as a transient aggregator
// between Winit callbacks and the core.
//
// Every press is kept, in order: two clicks on the same cell within
// one frame are two moves.
//
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 16;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Buffering --------------------------------------------------------

    pub(crate) fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events and clears the buffer, or None when
    // nothing was buffered.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.events))
    }

    //--- Utilities --------------------------------------------------------

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
