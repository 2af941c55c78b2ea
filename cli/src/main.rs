mod app;
mod commands;
mod terminal;

use commands::CommandLine;
use sweepr_core::network::{PnetChannelOpener, SystemInterfaces};
use sweepr_core::session::Session;
use sweepr_core::vendors::MacOuiRepo;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let cfg = CommandLine::parse_args().into_config();

    terminal::logging::init_logging(&cfg.log_file)?;
    info!("sweepr v{} starting", env!("CARGO_PKG_VERSION"));

    if !is_root::is_root() {
        warn!("Not running with elevated privileges, opening a capture channel will likely fail");
    }

    let vendors = MacOuiRepo::load(cfg.oui_db.as_deref())?;
    let mut session = Session::new(
        Box::new(SystemInterfaces),
        Box::new(PnetChannelOpener::new(cfg.read_timeout)),
        Box::new(vendors),
        &cfg,
    )?;

    app::run(&mut session, &cfg)
}
