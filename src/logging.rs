use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Log to the terminal at `level`, keeping only this crate's records.
///
/// ggez and its graphics backend are chatty at debug level, so their output is filtered out.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let config = ConfigBuilder::new()
        .add_filter_allow_str("retro_snake")
        .build();
    TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}
