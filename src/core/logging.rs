use log::Level;

/// Route `log` records to the browser console. Safe to call more than once.
pub fn init_logging(level: Level) {
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}
