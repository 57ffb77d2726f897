use std::fmt;

use crate::BOARD_SIDE;

/// 1-indexed column/row of the cell a move was played in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub col: usize,
    pub row: usize,
}

impl Placement {
    pub fn from_index(index: usize) -> Self {
        Self {
            col: index % BOARD_SIDE + 1,
            row: index / BOARD_SIDE + 1,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Col-{} Row-{}", self.col, self.row)
    }
}

pub const START_LABEL: &str = "Go to game start";

/// Label for history entry `step`; the initial entry has no placement.
pub fn move_label(step: usize, placement: Option<Placement>) -> String {
    match placement {
        Some(p) if step > 0 => format!("#{} {}", step, p),
        _ => START_LABEL.to_string(),
    }
}
