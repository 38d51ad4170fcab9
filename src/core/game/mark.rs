//=========================================================================
// Mark
//=========================================================================
//
// The two symbols a cell can hold. Cross always opens the game.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Mark ================================================================

/// Symbol placed on a cell by one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// First player, drawn as two crossing segments.
    Cross,

    /// Second player, drawn as a circle.
    Nought,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cross => f.write_str("X"),
            Self::Nought => f.write_str("O"),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_board_letters() {
        assert_eq!(Mark::Cross.to_string(), "X");
        assert_eq!(Mark::Nought.to_string(), "O");
    }
}
