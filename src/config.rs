//! Runtime configuration
//!
//! Defaults can be overridden with environment variables:
//! - `HELP_MAX_WIDTH`: listing width in cells (falls back to `COLUMNS`, then 80)
//! - `HELP_COLUMN_PADDING`: gap between listing columns (minimum 4)
//! - `HELP_FUZZY_THRESHOLD`: similarity a near-miss keyword must exceed (0..1)
//! - `HELP_DOCS_DIR`: directory of `<topic>.md` files replacing built-in prose

use std::env;
use std::path::PathBuf;

use crate::error::{HelpError, HelpResult};
use crate::listing::{ListingOptions, DEFAULT_MAX_WIDTH, MIN_PADDING};
use crate::search::DEFAULT_THRESHOLD;

/// Configuration for a `HelpDesk`
#[derive(Debug, Clone, PartialEq)]
pub struct HelpConfig {
    pub max_width: usize,
    pub padding: usize,
    pub fuzzy_threshold: f64,
    pub docs_dir: Option<PathBuf>,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            padding: MIN_PADDING,
            fuzzy_threshold: DEFAULT_THRESHOLD,
            docs_dir: None,
        }
    }
}

impl HelpConfig {
    /// Defaults overlaid with the environment. Unparseable values are
    /// ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let width = lookup("HELP_MAX_WIDTH").map(|v| ("HELP_MAX_WIDTH", v)).or_else(|| {
            lookup("COLUMNS").map(|v| ("COLUMNS", v))
        });
        if let Some((key, raw)) = width {
            match raw.trim().parse::<usize>() {
                Ok(width) if width > 0 => config.max_width = width,
                _ => log::warn!("ignoring {}={:?}: expected a positive integer", key, raw),
            }
        }

        if let Some(raw) = lookup("HELP_COLUMN_PADDING") {
            match raw.trim().parse::<usize>() {
                Ok(padding) if padding <= config.max_width.max(MIN_PADDING) => {
                    config.padding = padding.max(MIN_PADDING)
                }
                _ => log::warn!(
                    "ignoring HELP_COLUMN_PADDING={:?}: expected an integer up to the width",
                    raw
                ),
            }
        }

        if let Some(raw) = lookup("HELP_FUZZY_THRESHOLD") {
            match raw.trim().parse::<f64>() {
                Ok(t) if (0.0..1.0).contains(&t) => config.fuzzy_threshold = t,
                _ => log::warn!(
                    "ignoring HELP_FUZZY_THRESHOLD={:?}: expected a number in [0, 1)",
                    raw
                ),
            }
        }

        if let Some(raw) = lookup("HELP_DOCS_DIR") {
            if !raw.trim().is_empty() {
                let path = PathBuf::from(raw.trim());
                config.docs_dir = Some(if path.is_absolute() {
                    path
                } else {
                    env::current_dir()
                        .unwrap_or_else(|_| PathBuf::from("."))
                        .join(path)
                });
            }
        }

        config
    }

    /// Reject values no listing or resolver can work with
    pub fn validate(&self) -> HelpResult<()> {
        if self.max_width == 0 {
            return Err(HelpError::Config("width must be positive".to_string()));
        }
        if self.padding < MIN_PADDING {
            return Err(HelpError::Config(format!(
                "column padding must be at least {}",
                MIN_PADDING
            )));
        }
        if self.padding > self.max_width.max(MIN_PADDING) {
            return Err(HelpError::Config(format!(
                "column padding {} is wider than the listing width {}",
                self.padding, self.max_width
            )));
        }
        if !(0.0..1.0).contains(&self.fuzzy_threshold) {
            return Err(HelpError::Config(format!(
                "fuzzy threshold must be in [0, 1), got {}",
                self.fuzzy_threshold
            )));
        }
        Ok(())
    }

    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions::new(self.max_width, self.padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = HelpConfig::from_lookup(lookup(&[]));
        assert_eq!(config, HelpConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn test_env_overrides() {
        let config = HelpConfig::from_lookup(lookup(&[
            ("HELP_MAX_WIDTH", "120"),
            ("HELP_COLUMN_PADDING", "6"),
            ("HELP_FUZZY_THRESHOLD", "0.8"),
            ("HELP_DOCS_DIR", "/tmp/help-docs"),
        ]));
        assert_eq!(config.max_width, 120);
        assert_eq!(config.padding, 6);
        assert_eq!(config.fuzzy_threshold, 0.8);
        assert_eq!(config.docs_dir, Some(PathBuf::from("/tmp/help-docs")));
    }

    #[test]
    fn test_columns_is_a_width_fallback() {
        let config = HelpConfig::from_lookup(lookup(&[("COLUMNS", "100")]));
        assert_eq!(config.max_width, 100);

        let config =
            HelpConfig::from_lookup(lookup(&[("COLUMNS", "100"), ("HELP_MAX_WIDTH", "60")]));
        assert_eq!(config.max_width, 60);
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let config = HelpConfig::from_lookup(lookup(&[
            ("HELP_MAX_WIDTH", "wide"),
            ("HELP_COLUMN_PADDING", "1"),
            ("HELP_FUZZY_THRESHOLD", "2.0"),
        ]));
        assert_eq!(config.max_width, DEFAULT_MAX_WIDTH);
        assert_eq!(config.padding, MIN_PADDING);
        assert_eq!(config.fuzzy_threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_padding_wider_than_listing() {
        let config =
            HelpConfig::from_lookup(lookup(&[("HELP_COLUMN_PADDING", "18446744073709551615")]));
        assert_eq!(config.padding, MIN_PADDING);

        let config = HelpConfig {
            padding: usize::MAX,
            ..HelpConfig::default()
        };
        assert!(matches!(config.validate(), Err(HelpError::Config(_))));

        // a narrow listing still accepts the minimum padding
        let config = HelpConfig {
            max_width: 3,
            ..HelpConfig::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let config = HelpConfig {
            fuzzy_threshold: 1.5,
            ..HelpConfig::default()
        };
        assert!(matches!(config.validate(), Err(HelpError::Config(_))));
    }
}
