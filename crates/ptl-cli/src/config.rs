use std::path::{Path, PathBuf};

use anyhow::Context;
use ptl_dispatch::DispatchConfig;
use serde::{Deserialize, Serialize};

/// Host configuration, loaded from TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Snapshot file for the state store.
    pub state_path: PathBuf,
    pub dispatch: DispatchConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from("ptl-state.json"),
            dispatch: DispatchConfig::default(),
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
