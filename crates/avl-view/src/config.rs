//! Playback configuration.
//!
//! Values come from an optional TOML file; command-line flags override
//! whatever the file sets. Every field has a default, so an empty file (or
//! no file) replays the stock demo sequence.

use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::ViewError;

/// Keys of the stock demo, inserted in this order.
pub const DEMO_KEYS: [i64; 16] = [5, 10, 3, 7, 4, 9, 32, 22, 6, 2, 30, 300, 392, 0, 1, 8];

/// Order in which keys are deleted after the tree has been built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeleteOrder {
    /// Build only, delete nothing.
    None,
    /// Same order as inserted.
    Input,
    /// Reverse of the insertion order.
    Reverse,
    /// Seeded shuffle of the inserted keys.
    #[default]
    Shuffled,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub keys: Vec<i64>,
    pub delete_order: DeleteOrder,
    /// Shuffle seed. A random one is drawn (and logged) when absent.
    pub seed: Option<u64>,
    pub format: OutputFormat,
    /// Validate the tree after every step.
    pub check: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            keys: DEMO_KEYS.to_vec(),
            delete_order: DeleteOrder::default(),
            seed: None,
            format: OutputFormat::default(),
            check: false,
        }
    }
}

impl ViewConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ViewError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ViewError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Replaces every value the overrides set. `check` can only be turned on.
    pub fn apply_overrides(&mut self, overrides: ViewOverrides) {
        if let Some(keys) = overrides.keys {
            self.keys = keys;
        }
        if let Some(order) = overrides.delete_order {
            self.delete_order = order;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self.check |= overrides.check;
    }
}

/// Values given on the command line. `None` (or `false` for `check`) means
/// the flag was not passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewOverrides {
    pub keys: Option<Vec<i64>>,
    pub delete_order: Option<DeleteOrder>,
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
    pub check: bool,
}

/// Parses keys separated by commas and/or whitespace.
pub fn parse_keys(s: &str) -> Result<Vec<i64>, ViewError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| t.parse().map_err(|_| ViewError::InvalidKey(t.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_demo_defaults() {
        let config = ViewConfig::from_toml_str("").unwrap();
        assert_eq!(config, ViewConfig::default());
        assert_eq!(config.keys, DEMO_KEYS.to_vec());
        assert_eq!(config.delete_order, DeleteOrder::Shuffled);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn file_values_override_defaults() {
        let config = ViewConfig::from_toml_str(
            r#"
keys = [3, 1, 2]
delete_order = "reverse"
seed = 7
format = "json"
check = true
"#,
        )
        .unwrap();
        assert_eq!(config.keys, vec![3, 1, 2]);
        assert_eq!(config.delete_order, DeleteOrder::Reverse);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.check);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ViewConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ViewError::Config(_)));
    }

    #[test]
    fn set_flags_replace_file_values() {
        let mut config =
            ViewConfig::from_toml_str("keys = [1, 2]\nseed = 3\nformat = \"json\"").unwrap();
        config.apply_overrides(ViewOverrides {
            keys: Some(vec![9, 8]),
            delete_order: Some(DeleteOrder::Input),
            seed: Some(11),
            format: Some(OutputFormat::Text),
            check: false,
        });
        assert_eq!(config.keys, vec![9, 8]);
        assert_eq!(config.delete_order, DeleteOrder::Input);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.check);
    }

    #[test]
    fn unset_flags_keep_file_values() {
        let file = ViewConfig::from_toml_str(
            "keys = [4, 5]\ndelete_order = \"reverse\"\nseed = 3\nformat = \"json\"\ncheck = true",
        )
        .unwrap();
        let mut config = file.clone();
        config.apply_overrides(ViewOverrides::default());
        assert_eq!(config, file);
    }

    #[test]
    fn check_flag_turns_on_disabled_file_check() {
        let mut config = ViewConfig::from_toml_str("check = false").unwrap();
        config.apply_overrides(ViewOverrides {
            check: true,
            ..ViewOverrides::default()
        });
        assert!(config.check);

        let mut config = ViewConfig::from_toml_str("check = true").unwrap();
        config.apply_overrides(ViewOverrides::default());
        assert!(config.check);
    }

    #[test]
    fn parse_keys_accepts_mixed_separators() {
        assert_eq!(parse_keys("5, 10 3\n-7").unwrap(), vec![5, 10, 3, -7]);
        assert_eq!(parse_keys("  ").unwrap(), Vec::<i64>::new());
        let err = parse_keys("1,x,3").unwrap_err();
        assert!(matches!(err, ViewError::InvalidKey(ref t) if t == "x"));
    }
}
