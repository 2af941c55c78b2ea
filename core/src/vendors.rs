use std::path::Path;

use anyhow::anyhow;
use mac_oui::Oui;
use pnet::util::MacAddr;
use sweepr_common::vendors::VendorRepository;
use tracing::debug;

/// OUI lookups backed by the `mac_oui` database, loaded once at startup.
pub struct MacOuiRepo {
    db: Oui,
}

impl MacOuiRepo {
    pub fn bundled() -> anyhow::Result<Self> {
        let db = Oui::default().map_err(|e| anyhow!("failed to load bundled OUI database: {e:?}"))?;
        Ok(Self { db })
    }

    pub fn from_csv(path: &Path) -> anyhow::Result<Self> {
        let db = Oui::from_csv_file(path)
            .map_err(|e| anyhow!("failed to load OUI database from {}: {e:?}", path.display()))?;
        Ok(Self { db })
    }

    /// Uses the CSV at `path` when given, the bundled database otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                debug!("Loading OUI database from {}", path.display());
                Self::from_csv(path)
            }
            None => Self::bundled(),
        }
    }
}

impl VendorRepository for MacOuiRepo {
    fn get_vendor(&self, mac_addr: MacAddr) -> Option<String> {
        match self.db.lookup_by_mac(&mac_addr.to_string()) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            Ok(None) => None,
            Err(_) => None,
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
