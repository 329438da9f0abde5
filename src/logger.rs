use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Installs the terminal logger. Safe to call twice; the second call is a no-op.
pub fn init_logger(level: LevelFilter) {
    if TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).is_err() {
        log::debug!("logger already initialised");
    }
}
