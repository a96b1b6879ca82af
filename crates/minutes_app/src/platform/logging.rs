//! Log setup for the TUI.
//!
//! Everything goes to `./minutes.log`; the terminal belongs to the
//! alternate screen while the app runs, so nothing may print there.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

pub fn initialize() {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let log_path = PathBuf::from("./minutes.log");
    match File::create(&log_path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Info, config, file);
        }
        Err(err) => {
            eprintln!("Warning: could not create log file at {log_path:?}: {err}");
        }
    }
}
