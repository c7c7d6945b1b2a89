use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::{DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};
use crate::render::{FontSpec, Style};

/// Tunables for a [`FastGrid`](crate::FastGrid).
///
/// Every field has a default, so a JSON config only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Width given to newly inserted columns (~100px default)
    pub default_width: u32,
    /// Height given to newly inserted rows (~30px default)
    pub default_height: u32,
    /// Scrollbar single step in pixels
    pub scroll_single_step: i32,
    /// Distance from a viewport edge that starts autoscroll while dragging
    pub autoscroll_margin: i32,
    /// Pixels scrolled per autoscroll nudge
    pub autoscroll_step: i32,
    /// Interval of the autoscroll repeat timer
    pub autoscroll_interval_ms: u32,
    /// Base font for cell and header text
    pub font: FontSpec,
    /// Visual style; `None` picks the platform default
    pub style: Option<Style>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_COLUMN_WIDTH.unsigned_abs(),
            default_height: DEFAULT_ROW_HEIGHT.unsigned_abs(),
            scroll_single_step: 100,
            autoscroll_margin: 10,
            autoscroll_step: 5,
            autoscroll_interval_ms: 5,
            font: FontSpec::default(),
            style: None,
        }
    }
}

impl GridConfig {
    /// Parse a JSON config; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configured style, or the one native to the build platform.
    pub fn resolved_style(&self) -> Style {
        self.style.unwrap_or_else(Style::platform_default)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GridConfig::from_json(r#"{"defaultWidth": 64, "style": "win7"}"#).unwrap();
        assert_eq!(config.default_width, 64);
        assert_eq!(config.default_height, 30);
        assert_eq!(config.autoscroll_margin, 10);
        assert_eq!(config.resolved_style(), Style::Win7);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = GridConfig::from_json("{").unwrap_err();
        assert!(matches!(err, crate::error::GridError::Config(_)));
    }
}
