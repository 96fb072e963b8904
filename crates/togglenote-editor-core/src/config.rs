//! Editor configuration passed explicitly into editing sessions.

use std::fmt;
use std::str::FromStr;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum ConfigError {
    #[error("indent size {0} is outside 1..=8")]
    #[diagnostic(code(togglenote::config::indent_size))]
    IndentSize(i64),

    #[error("unknown theme `{0}`")]
    #[diagnostic(code(togglenote::config::theme), help("use `light` or `dark`"))]
    Theme(SmolStr),
}

/// Number of spaces one indent or dedent step adds or removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct IndentUnit(u8);

impl IndentUnit {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;
    pub const DEFAULT: IndentUnit = IndentUnit(4);

    pub fn new(size: i64) -> Result<Self, ConfigError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&size) {
            Ok(Self(size as u8))
        } else {
            Err(ConfigError::IndentSize(size))
        }
    }

    /// Restore a saved preference, falling back to the default when it is
    /// missing, unparsable or out of range.
    pub fn parse_or_default(saved: Option<&str>) -> Self {
        saved
            .and_then(|s| s.trim().parse::<i64>().ok())
            .and_then(|n| Self::new(n).ok())
            .unwrap_or_default()
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for IndentUnit {
    type Error = ConfigError;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<IndentUnit> for u8 {
    fn from(unit: IndentUnit) -> Self {
        unit.0
    }
}

/// Preview colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Pick the initial theme: a valid saved preference wins, otherwise the
    /// platform's dark-mode preference decides.
    pub fn from_preference(saved: Option<&str>, prefers_dark: bool) -> Self {
        match saved.map(str::parse::<Theme>) {
            Some(Ok(theme)) => theme,
            _ if prefers_dark => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ConfigError::Theme(other.into())),
        }
    }
}

/// Settings owned by the surrounding application and threaded into the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub indent_unit: IndentUnit,
    pub theme: Theme,
}

impl EditorConfig {
    pub fn with_indent_unit(mut self, indent_unit: IndentUnit) -> Self {
        self.indent_unit = indent_unit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit_bounds() {
        assert_eq!(IndentUnit::new(1).unwrap().get(), 1);
        assert_eq!(IndentUnit::new(8).unwrap().get(), 8);
        assert_eq!(IndentUnit::new(0), Err(ConfigError::IndentSize(0)));
        assert_eq!(IndentUnit::new(9), Err(ConfigError::IndentSize(9)));
        assert_eq!(IndentUnit::default().get(), 4);
    }

    #[test]
    fn test_indent_unit_from_saved() {
        assert_eq!(IndentUnit::parse_or_default(Some("2")).get(), 2);
        assert_eq!(IndentUnit::parse_or_default(Some("12")).get(), 4);
        assert_eq!(IndentUnit::parse_or_default(Some("-3")).get(), 4);
        assert_eq!(IndentUnit::parse_or_default(Some("tabs")).get(), 4);
        assert_eq!(IndentUnit::parse_or_default(None).get(), 4);
    }

    #[test]
    fn test_theme_preference() {
        assert_eq!(Theme::from_preference(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::from_preference(Some("light"), true), Theme::Light);
        assert_eq!(Theme::from_preference(Some("sepia"), true), Theme::Dark);
        assert_eq!(Theme::from_preference(None, false), Theme::Light);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_config_serde() {
        let config: EditorConfig =
            serde_json::from_str(r#"{"indent_unit": 2, "theme": "dark"}"#).unwrap();
        assert_eq!(config.indent_unit.get(), 2);
        assert_eq!(config.theme, Theme::Dark);

        let json = serde_json::to_string(&EditorConfig::default()).unwrap();
        assert_eq!(json, r#"{"indent_unit":4,"theme":"light"}"#);

        assert!(serde_json::from_str::<EditorConfig>(r#"{"indent_unit": 0}"#).is_err());

        let partial: EditorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(partial, EditorConfig::default());
    }
}
