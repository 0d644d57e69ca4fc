#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which automatic draws the engine declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawRules {
    /// Occurrences of one position that end the game; 0 disables the rule
    pub repetition_limit: u32,
    /// Half-moves without a capture or pawn move that end the game
    pub fifty_move_limit: Option<u32>,
    /// Declare a draw once neither side can possibly mate
    pub insufficient_material: bool,
}

impl Default for DrawRules {
    fn default() -> Self {
        DrawRules {
            repetition_limit: 3,
            fifty_move_limit: Some(100),
            insufficient_material: true,
        }
    }
}

impl DrawRules {
    /// Only checkmate and stalemate end the game.
    #[must_use]
    pub const fn none() -> Self {
        DrawRules {
            repetition_limit: 0,
            fifty_move_limit: None,
            insufficient_material: false,
        }
    }
}
