use crate::game::{Board, Mark};

/// Rows, columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// First line held entirely by one mark, if any.
pub fn winning_line(board: &Board) -> Option<([usize; 3], Mark)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|i| board.cells()[i]);
        match a.mark() {
            Some(mark) if a == b && a == c => Some((line, mark)),
            _ => None,
        }
    })
}

/// A full board with no completed line is still "no winner".
pub fn calculate_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}
