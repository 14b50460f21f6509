//! Printer configuration.
//!
//! Every printing knob is an explicit, documented field with a named
//! default. There is no process-wide mutable state; a [`PrintConfig`]
//! travels with the printer that owns it.

use serde::{Deserialize, Serialize};

/// Banner shown when no banner has been configured.
pub const DEFAULT_BANNER: &str = "No Banner Set";

/// Banner shown when the table has no rows.
pub const DEFAULT_EMPTY_BANNER: &str = "ERROR: No results";

/// Characters subtracted from the detected terminal width before fitting.
pub const DEFAULT_SCREEN_PADDING: usize = 2;

/// Largest fraction of a column's width removable in one reduction visit.
pub const DEFAULT_MAX_SQUISH_RATIO: f64 = 0.2;

/// Marker appended to truncated content.
pub const DEFAULT_MARKER: &str = "...";

/// Configuration for fitting and printing a table.
///
/// All fields default sensibly, and serde deserialization fills missing
/// fields from those defaults, so a partial config file works:
///
/// ```rust
/// use shoehorn::PrintConfig;
///
/// let config: PrintConfig = serde_json::from_str(r#"{"banner": "Things!"}"#).unwrap();
/// assert_eq!(config.banner, "Things!");
/// assert_eq!(config.marker, "...");
/// assert_eq!(config.max_squish_ratio, 0.2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintConfig {
    /// Text printed above the table.
    pub banner: String,
    /// Text printed when the table has no rows.
    pub empty_banner: String,
    /// Characters reserved out of the terminal width (border allowance).
    pub screen_padding: usize,
    /// Per-visit cap on width reduction, as a fraction of the column width.
    pub max_squish_ratio: f64,
    /// Truncation marker (convention: three characters).
    pub marker: String,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            banner: DEFAULT_BANNER.to_string(),
            empty_banner: DEFAULT_EMPTY_BANNER.to_string(),
            screen_padding: DEFAULT_SCREEN_PADDING,
            max_squish_ratio: DEFAULT_MAX_SQUISH_RATIO,
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl PrintConfig {
    /// Create a config with all defaults.
    pub fn new() -> Self {
        PrintConfig::default()
    }

    /// Set the banner text.
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Set the empty-results banner text.
    pub fn empty_banner(mut self, empty_banner: impl Into<String>) -> Self {
        self.empty_banner = empty_banner.into();
        self
    }

    /// Set the screen padding.
    pub fn screen_padding(mut self, padding: usize) -> Self {
        self.screen_padding = padding;
        self
    }

    /// Set the per-visit reduction cap.
    pub fn max_squish_ratio(mut self, ratio: f64) -> Self {
        self.max_squish_ratio = ratio;
        self
    }

    /// Set the truncation marker.
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PrintConfig::default();
        assert_eq!(config.banner, "No Banner Set");
        assert_eq!(config.empty_banner, "ERROR: No results");
        assert_eq!(config.screen_padding, 2);
        assert_eq!(config.max_squish_ratio, 0.2);
        assert_eq!(config.marker, "...");
    }

    #[test]
    fn fluent_setters() {
        let config = PrintConfig::new()
            .banner("Things!")
            .empty_banner("nothing here")
            .screen_padding(4)
            .max_squish_ratio(0.5)
            .marker("~");

        assert_eq!(config.banner, "Things!");
        assert_eq!(config.empty_banner, "nothing here");
        assert_eq!(config.screen_padding, 4);
        assert_eq!(config.max_squish_ratio, 0.5);
        assert_eq!(config.marker, "~");
    }

    #[test]
    fn serde_roundtrip() {
        let config = PrintConfig::new().banner("Report").marker("..");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PrintConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
