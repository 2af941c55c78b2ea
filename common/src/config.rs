use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(250);
pub const DEFAULT_TICK: Duration = Duration::from_millis(1);
pub const DEFAULT_LOG_NAME: &str = "sweepr.log";

#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound a single poll tick waits for an ARP frame.
    pub read_timeout: Duration,
    /// Cadence of the main loop while it waits for operator input.
    pub tick: Duration,
    /// Vendor database in CSV form, used instead of the bundled one.
    pub oui_db: Option<PathBuf>,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_timeout: DEFAULT_READ_TIMEOUT,
            tick: DEFAULT_TICK,
            oui_db: None,
            log_file: std::env::temp_dir().join(DEFAULT_LOG_NAME),
        }
    }
}
