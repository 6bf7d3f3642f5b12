use serde::{Deserialize, Serialize};

/// Key written by the `init` operation when no other is configured.
pub const DEFAULT_BOOTSTRAP_KEY: &str = "hello_world";

/// Configuration for a [`Dispatcher`](crate::Dispatcher).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Key that `init` writes its raw argument under.
    pub bootstrap_key: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            bootstrap_key: DEFAULT_BOOTSTRAP_KEY.to_owned(),
        }
    }
}
