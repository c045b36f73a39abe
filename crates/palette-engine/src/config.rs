//! Studio configuration
//!
//! Everything a caller picks before asking for a palette: base color,
//! scheme, count, accessibility target, vision preview and theme mode.
//! Configuration can be loaded from JSON; missing fields take defaults.
//!
//! ```json
//! {
//!   "baseColor": "#3498DB",
//!   "scheme": "triadic",
//!   "wcagTarget": "AAA",
//!   "vision": "deuteranopia"
//! }
//! ```

use crate::analysis::AnalysisOptions;
use crate::compliance::ComplianceConfig;
use crate::error::{EngineError, Result};
use crate::scheme::SchemeKind;
use crate::variant::ThemeMode;
use color_science::{VisionDeficiency, FALLBACK_BASE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of generated colors
pub const DEFAULT_COUNT: usize = 5;

/// Contrast tier the studio enforces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WcagTarget {
    /// 4.5:1
    #[default]
    #[serde(rename = "AA")]
    Aa,
    /// 7:1
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagTarget {
    /// Minimum contrast ratio for the tier
    pub fn min_ratio(&self) -> f64 {
        match self {
            WcagTarget::Aa => 4.5,
            WcagTarget::Aaa => 7.0,
        }
    }

    /// Picker label
    pub fn label(&self) -> &'static str {
        match self {
            WcagTarget::Aa => "AA (4.5:1)",
            WcagTarget::Aaa => "AAA (7:1)",
        }
    }
}

fn default_base_color() -> String {
    FALLBACK_BASE.to_hex()
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_true() -> bool {
    true
}

/// Caller configuration for a studio session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioConfig {
    /// Base color as typed by the user, validated at generation time
    #[serde(default = "default_base_color")]
    pub base_color: String,

    /// Scheme used to generate the palette
    #[serde(default)]
    pub scheme: SchemeKind,

    /// Requested number of colors
    #[serde(default = "default_count")]
    pub count: usize,

    /// Replace colors that miss the WCAG target
    #[serde(default = "default_true")]
    pub enforce_compliance: bool,

    /// Contrast tier to enforce
    #[serde(default)]
    pub wcag_target: WcagTarget,

    /// Keep hue and saturation while enforcing
    #[serde(default = "default_true")]
    pub preserve_character: bool,

    /// Vision preview applied to the final palette
    #[serde(default)]
    pub vision: VisionDeficiency,

    /// Theme mode
    #[serde(default)]
    pub mode: ThemeMode,

    /// Derive the dark palette automatically in dark mode
    #[serde(default = "default_true")]
    pub auto_adjust_dark: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            base_color: default_base_color(),
            scheme: SchemeKind::default(),
            count: DEFAULT_COUNT,
            enforce_compliance: true,
            wcag_target: WcagTarget::default(),
            preserve_character: true,
            vision: VisionDeficiency::default(),
            mode: ThemeMode::default(),
            auto_adjust_dark: true,
        }
    }
}

impl StudioConfig {
    /// Parse configuration from JSON
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or an invalid configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not hold a valid
    /// configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::info!("Loaded studio config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check values that serde cannot
    ///
    /// An invalid base color is not an error; generation falls back to the
    /// default color.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] for a zero count.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(EngineError::InvalidConfig("count must be at least 1".to_string()));
        }
        self.compliance().validate()
    }

    /// Compliance target derived from the WCAG tier
    pub fn compliance(&self) -> ComplianceConfig {
        ComplianceConfig {
            min_ratio: self.wcag_target.min_ratio(),
            preserve_character: self.preserve_character,
        }
    }

    /// Options for [`crate::analysis::analyze_palette`]
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            enforce: self.enforce_compliance,
            compliance: self.compliance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = StudioConfig::default();
        assert_eq!(config.base_color, "#3498DB");
        assert_eq!(config.scheme, SchemeKind::Monochromatic);
        assert_eq!(config.count, 5);
        assert!(config.enforce_compliance);
        assert_eq!(config.wcag_target, WcagTarget::Aa);
        assert!(config.preserve_character);
        assert_eq!(config.vision, VisionDeficiency::None);
        assert_eq!(config.mode, ThemeMode::Light);
        assert!(config.auto_adjust_dark);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = StudioConfig::from_json("{}").unwrap();
        assert_eq!(config, StudioConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = StudioConfig::from_json(
            r##"{"baseColor": "#FF5733", "scheme": "split-complementary", "wcagTarget": "AAA", "vision": "tritanopia", "mode": "dark"}"##,
        )
        .unwrap();
        assert_eq!(config.base_color, "#FF5733");
        assert_eq!(config.scheme, SchemeKind::SplitComplementary);
        assert_eq!(config.compliance().min_ratio, 7.0);
        assert_eq!(config.vision, VisionDeficiency::Tritanopia);
        assert_eq!(config.mode, ThemeMode::Dark);
        assert_eq!(config.count, 5);
    }

    #[test]
    fn test_rejects_zero_count() {
        let result = StudioConfig::from_json(r#"{"count": 0}"#);
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = StudioConfig::from_json("{ not json");
        assert!(matches!(result, Err(EngineError::Serialization(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = StudioConfig {
            scheme: SchemeKind::Tetradic,
            wcag_target: WcagTarget::Aaa,
            vision: VisionDeficiency::Grayscale,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"wcagTarget\": \"AAA\""));
        assert_eq!(StudioConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"scheme": "analogous", "count": 7}}"#).unwrap();

        let config = StudioConfig::load(file.path()).unwrap();
        assert_eq!(config.scheme, SchemeKind::Analogous);
        assert_eq!(config.count, 7);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = StudioConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(EngineError::Io(_))));
    }

    #[test]
    fn test_analysis_options_follow_config() {
        let config = StudioConfig {
            enforce_compliance: false,
            wcag_target: WcagTarget::Aaa,
            preserve_character: false,
            ..Default::default()
        };
        let options = config.analysis_options();
        assert!(!options.enforce);
        assert_eq!(options.compliance.min_ratio, 7.0);
        assert!(!options.compliance.preserve_character);
        assert_eq!(WcagTarget::Aaa.label(), "AAA (7:1)");
    }
}
