use std::fmt;

use super::{Board, Square};

const RULE: &str = "  +---+---+---+---+---+---+---+---+";

/// ASCII grid with rank 8 on top; White pieces uppercase, empty squares `.`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = self
                    .piece_at(Square::at(rank, file))
                    .map_or('.', |piece| piece.to_char());
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{RULE}")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
