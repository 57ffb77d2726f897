pub mod board;
pub mod placement;
pub mod state;
pub mod winner;

pub use board::{Board, Cell, Mark};
pub use placement::{move_label, Placement};
pub use state::{Game, MoveEntry, Outcome};
pub use winner::{calculate_winner, winning_line};
