//! Panel configuration for the browser build.
//!
//! An override in TOML may be stored in localStorage; otherwise the
//! embedded defaults apply.

use contracts::shared::datasource_panel::{load_config, PanelConfig};
use web_sys::window;

const CONFIG_STORAGE_KEY: &str = "datasource-panel-config";

/// Read the override from localStorage.
fn load_override_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten())
}

/// Load the panel configuration. A broken override is logged and ignored.
pub fn load_panel_config() -> PanelConfig {
    let stored = load_override_from_storage();
    match load_config(stored.as_deref()) {
        Ok(config) => {
            if stored.is_some() {
                log::info!("Using panel config override from localStorage");
            }
            config
        }
        Err(e) => {
            log::warn!("Ignoring panel config override: {:#}", e);
            PanelConfig::default()
        }
    }
}
