mod app;
mod config;
mod game;
mod logging;
mod ui;
pub use config::{
    BOARD_CELLS, BOARD_SIDE, CELL_H, CELL_W, CONTROLS_H, MIN_PANE_HEIGHT, MIN_PANE_WIDTH,
    MOVES_MIN_H, PLAY_H, PLAY_W, POLL_MS, SIDEBAR_W, STATUS_H,
};
pub use game::Game;

fn main() -> anyhow::Result<()> {
    logging::init(&config::log_path());
    app::run()
}
