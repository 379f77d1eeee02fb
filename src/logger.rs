// logger.rs

//! Logs go to the tui-logger widget and to a file in the working directory.

use color_eyre::eyre::{eyre, Result};
use log::LevelFilter;
use tui_logger::{init_logger, set_default_level, TuiLoggerFile};

pub const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

pub fn setup_logger(level: LevelFilter) -> Result<()> {
    init_logger(LevelFilter::Trace).map_err(|e| eyre!("Could not set up logger: {:?}", e))?;
    set_default_level(level);
    for target in ["mio", "tokio"] {
        tui_logger::set_level_for_target(target, LevelFilter::Info);
    }
    tui_logger::set_log_file(TuiLoggerFile::new(LOG_FILE));
    Ok(())
}
