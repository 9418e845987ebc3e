//! Engine configuration: serde-deserialized TOML with global/local merge,
//! published to readers as whole snapshots.

use std::{
  path::Path,
  sync::Arc,
};

use arc_swap::ArcSwap;
use serde::Deserialize;
use thiserror::Error;

/// Tunables for the suggestion engine.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct AutocompleteConfig {
  pub enabled:         bool,
  /// Tokens shorter than this never open the menu.
  pub min_word_length: usize,
  /// Cap on the vocabulary-derived share of a suggestion set.
  pub max_hints:       usize,
}

impl Default for AutocompleteConfig {
  fn default() -> Self {
    Self {
      enabled:         true,
      min_word_length: 2,
      max_hints:       10,
    }
  }
}

/// Tunables for the background document check.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CheckConfig {
  /// Quiet period after the last edit before a check runs.
  pub debounce_ms: u64,
}

impl Default for CheckConfig {
  fn default() -> Self {
    Self { debounce_ms: 250 }
  }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
  pub autocomplete: AutocompleteConfig,
  pub check:        CheckConfig,
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
  #[error("failed to parse config: {0}")]
  BadConfig(#[from] toml::de::Error),
  #[error(transparent)]
  Io(#[from] std::io::Error),
}

impl Config {
  /// Merge a workspace-local config over the global one; either may be
  /// absent. Local values override global values table-by-table.
  pub fn load(
    global: Option<&str>,
    local: Option<&str>,
  ) -> Result<Config, ConfigLoadError> {
    match (global, local) {
      (None, None) => Ok(Config::default()),
      (Some(only), None) | (None, Some(only)) => Ok(toml::from_str(only)?),
      (Some(global), Some(local)) => {
        let global: toml::Value = toml::from_str(global)?;
        let local: toml::Value = toml::from_str(local)?;
        merge_toml_values(global, local, 3)
          .try_into()
          .map_err(ConfigLoadError::BadConfig)
      },
    }
  }

  pub fn load_file(path: &Path) -> Result<Config, ConfigLoadError> {
    let text = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
  }
}

/// Override `left` with values from `right`, merging tables recursively up
/// to `merge_depth` levels; below that (and for every non-table value) the
/// right side wins.
fn merge_toml_values(left: toml::Value, right: toml::Value, merge_depth: usize) -> toml::Value {
  use toml::Value;

  match (left, right) {
    (Value::Table(mut left_map), Value::Table(right_map)) if merge_depth > 0 => {
      for (rname, rvalue) in right_map {
        match left_map.remove(&rname) {
          Some(lvalue) => {
            let merged = merge_toml_values(lvalue, rvalue, merge_depth - 1);
            left_map.insert(rname, merged);
          },
          None => {
            left_map.insert(rname, rvalue);
          },
        }
      }
      Value::Table(left_map)
    },
    (_, value) => value,
  }
}

/// Shared, swappable configuration snapshot.
///
/// Writers publish whole new configs; readers load one consistent snapshot
/// per cycle and never observe a partial update.
#[derive(Clone, Debug)]
pub struct ConfigStore {
  inner: Arc<ArcSwap<Config>>,
}

impl ConfigStore {
  pub fn new(config: Config) -> Self {
    Self {
      inner: Arc::new(ArcSwap::from_pointee(config)),
    }
  }

  pub fn load(&self) -> Arc<Config> {
    self.inner.load_full()
  }

  pub fn store(&self, config: Config) {
    self.inner.store(Arc::new(config));
  }
}

impl Default for ConfigStore {
  fn default() -> Self {
    Self::new(Config::default())
  }
}
