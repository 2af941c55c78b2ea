use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use sweepr_common::config::{Config, DEFAULT_READ_TIMEOUT, DEFAULT_TICK};

#[derive(Parser, Debug)]
#[command(name = "sweepr")]
#[command(about = "Interactive ARP sweep of the local network.")]
pub struct CommandLine {
    /// Vendor database in CSV form, instead of the bundled one
    #[arg(long, value_name = "PATH")]
    pub oui_db: Option<PathBuf>,
    /// How long a single poll waits for a reply, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_READ_TIMEOUT.as_millis() as u64)]
    pub read_timeout: u64,
    /// Main loop cadence, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TICK.as_millis() as u64)]
    pub tick: u64,
    /// Where to write the log [default: <tmp>/sweepr.log]
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        let defaults = Config::default();
        Config {
            read_timeout: Duration::from_millis(self.read_timeout),
            tick: Duration::from_millis(self.tick),
            oui_db: self.oui_db,
            log_file: self.log_file.unwrap_or(defaults.log_file),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
