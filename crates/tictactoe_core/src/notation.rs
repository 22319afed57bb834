//! Compact text notation for boards.
//!
//! Nine cells in row-major order: `X`, `O`, and `.` (or `_`, `-`) for an
//! empty cell. Whitespace, `/` and `|` are ignored, so `"XX./OO./..."` and
//! `"XX.OO...."` name the same board. Display always writes the three rows
//! separated by `/`.

use super::{Board, BoardError, CELLS, Cell, SIZE};
use std::fmt;
use std::str::FromStr;

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = |message: String| BoardError::Parse {
            input: s.to_string(),
            message,
        };

        let mut cells = [Cell::Empty; CELLS];
        let mut filled = 0;
        for symbol in s.chars().filter(|c| !c.is_whitespace() && *c != '/' && *c != '|') {
            let cell = Cell::from_symbol(symbol)
                .ok_or_else(|| parse_error(format!("unexpected character {:?}", symbol)))?;
            if filled == CELLS {
                return Err(parse_error(format!("more than {} cells", CELLS)));
            }
            cells[filled] = cell;
            filled += 1;
        }

        if filled < CELLS {
            return Err(parse_error(format!(
                "expected {} cells, found {}",
                CELLS, filled
            )));
        }

        Board::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells().chunks(SIZE).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
