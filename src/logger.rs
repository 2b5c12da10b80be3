use crate::error::{LoggerSetupSnafu, RegError};
use log::LevelFilter;
use snafu::prelude::*;

pub fn init(level: LevelFilter) -> Result<(), RegError> {
    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}][{}] {}", record.level(), record.target(), message)))
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context(LoggerSetupSnafu)
}
