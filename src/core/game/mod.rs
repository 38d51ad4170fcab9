//=========================================================================
// Game Rules
//=========================================================================
//
// Pure game model: no windowing, no input decoding, no drawing.
//
// Data flow for one move:
// ```text
//   Cell ─► GameEngine::play ─► Board::next_mark (turn from counts)
//                              ─► Board::place   (legality)
//                              ─► winning_lines  (win check)
//                              ─► end_game       (state + highlight)
// ```
//
//=========================================================================

//=== Module Declarations =================================================

mod board;
mod cell;
mod game_engine;
mod mark;
mod win;

//=== Public API ==========================================================

pub use board::Board;
pub use cell::Cell;
pub use game_engine::{GameEngine, GameState, GameStatus, MoveOutcome};
pub use mark::Mark;
pub use win::{winning_lines, LineKind, WinningLine};
