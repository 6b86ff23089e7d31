//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Upper bound for each segment score weight.
pub const MAX_SCORE_WEIGHT: i64 = 1_000_000;

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub segment: SegmentSettings,
    pub alias: AliasSettings,
    pub normalize: NormalizeSettings,
}

/// Length bounds and scoring weights for surname/given-name splitting.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentSettings {
    pub min_chars: usize,
    pub max_chars: usize,
    pub base_score: i64,
    pub two_char_surname_bonus: i64,
    pub three_char_surname_bonus: i64,
    pub length_bonus_cap: usize,
}

impl Default for SegmentSettings {
    fn default() -> Self {
        Self {
            min_chars: 2,
            max_chars: 8,
            base_score: 100,
            two_char_surname_bonus: 15,
            three_char_surname_bonus: 8,
            length_bonus_cap: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AliasSettings {
    pub kana_variants: bool,
}

impl Default for AliasSettings {
    fn default() -> Self {
        Self {
            kana_variants: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeSettings {
    pub spoiler_placeholder: String,
}

impl Default for NormalizeSettings {
    fn default() -> Self {
        Self {
            spoiler_placeholder: crate::normalize::DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_score_weight {
        ($section:ident . $field:ident) => {
            if !(0..=MAX_SCORE_WEIGHT).contains(&s.$section.$field) {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: format!("must be between 0 and {MAX_SCORE_WEIGHT}"),
                });
            }
        };
    }

    check_score_weight!(segment.base_score);
    check_score_weight!(segment.two_char_surname_bonus);
    check_score_weight!(segment.three_char_surname_bonus);

    // A split needs at least one character on each side.
    if s.segment.min_chars < 2 {
        return Err(SettingsError::InvalidValue {
            field: "segment.min_chars".to_string(),
            reason: "must be at least 2".to_string(),
        });
    }
    if s.segment.max_chars < s.segment.min_chars {
        return Err(SettingsError::InvalidValue {
            field: "segment.max_chars".to_string(),
            reason: "must not be less than segment.min_chars".to_string(),
        });
    }

    if let Err(reason) = crate::normalize::check_placeholder(&s.normalize.spoiler_placeholder) {
        return Err(SettingsError::InvalidValue {
            field: "normalize.spoiler_placeholder".to_string(),
            reason: reason.to_string(),
        });
    }

    Ok(())
}
