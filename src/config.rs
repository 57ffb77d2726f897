// Shared game UI/constants.
pub const BOARD_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;
pub const CELL_W: u16 = 7; // bordered box with the mark centered
pub const CELL_H: u16 = 3;
pub const PLAY_W: u16 = BOARD_SIDE as u16 * CELL_W + 2; // cells plus the board frame
pub const PLAY_H: u16 = BOARD_SIDE as u16 * CELL_H + 2;
pub const SIDEBAR_W: u16 = 26;
pub const STATUS_H: u16 = 3;
pub const MOVES_MIN_H: u16 = 5;
pub const CONTROLS_H: u16 = 6;
// Cabinet border on both sides of the playfield and sidebar.
pub const MIN_PANE_WIDTH: u16 = PLAY_W + SIDEBAR_W + 2;
pub const MIN_PANE_HEIGHT: u16 = STATUS_H + MOVES_MIN_H + CONTROLS_H + 2;
pub const POLL_MS: u64 = 50;
pub const LOG_PATH: &str = "/tmp/tictactoe.log";
pub const LOG_ENV: &str = "TICTACTOE_LOG";

pub fn log_path() -> String {
    std::env::var(LOG_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| LOG_PATH.to_string())
}
