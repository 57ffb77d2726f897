use std::fs::File;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// File logger; the terminal itself is owned by the UI. A logger that can't
/// be set up is reported and skipped rather than stopping the game.
pub fn init(path: &str) {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("logging disabled, cannot create {path}: {e}");
            return;
        }
    };
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, config, file) {
        eprintln!("logging disabled: {e}");
    }
}
