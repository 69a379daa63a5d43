use anyhow::Context;
use serde::Deserialize;

use super::error::PanelResult;

/// Panel settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Items listed per section before "Show all" is needed
    pub max_items: usize,
    /// Delay between the last keystroke and re-filtering
    pub search_debounce_ms: u32,
    /// Approximate width of one label character, in pixels
    pub char_width_px: u32,
    pub search_placeholder: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
max_items = 50
search_debounce_ms = 200
char_width_px = 8
search_placeholder = "Search Metrics & Columns"
"#;

/// Pixels taken by the item icon and markers
const ITEM_CHROME_PX: u32 = 56;

/// Labels are never cut shorter than this
const MIN_LABEL_CHARS: usize = 8;

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            max_items: 50,
            search_debounce_ms: 200,
            char_width_px: 8,
            search_placeholder: "Search Metrics & Columns".to_string(),
        }
    }
}

impl PanelConfig {
    /// Longest label that fits a panel `width` pixels wide
    pub fn max_label_chars(&self, width: u32) -> usize {
        let usable = width.saturating_sub(ITEM_CHROME_PX);
        let chars = (usable / self.char_width_px.max(1)) as usize;
        chars.max(MIN_LABEL_CHARS)
    }
}

/// Parse a TOML config; missing keys take their defaults
pub fn parse_config(source: &str) -> PanelResult<PanelConfig> {
    Ok(toml::from_str(source)?)
}

/// Load configuration
///
/// Uses `override_source` when given, otherwise the embedded default.
pub fn load_config(override_source: Option<&str>) -> anyhow::Result<PanelConfig> {
    match override_source {
        Some(source) => parse_config(source).context("panel config override"),
        None => parse_config(DEFAULT_CONFIG).context("embedded panel config"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::datasource_panel::PanelError;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, PanelConfig::default());
        assert_eq!(config.search_placeholder, "Search Metrics & Columns");
    }

    #[test]
    fn test_partial_override() {
        let config = load_config(Some("max_items = 10")).unwrap();
        assert_eq!(config.max_items, 10);
        assert_eq!(config.search_debounce_ms, 200);
    }

    #[test]
    fn test_invalid_config() {
        let result = parse_config("max_items = \"many\"");
        assert!(matches!(result, Err(PanelError::InvalidConfig(_))));
        assert!(load_config(Some("max_items = ")).is_err());
    }

    #[test]
    fn test_max_label_chars() {
        let config = PanelConfig::default();
        assert_eq!(config.max_label_chars(300), 30);
        assert_eq!(config.max_label_chars(0), 8);
    }
}
