//! Playground construction options

use serde::{Deserialize, Serialize};
use tsify::Tsify;

/// A canned query offered as a one-click shortcut. Selecting it populates
/// the SQL input; it is never executed directly.
#[derive(Tsify, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct SampleQuery {
    /// Button label
    pub name: String,
    /// SQL placed into the input
    pub query: String,
}

/// Options applied when the playground is constructed
#[derive(Tsify, Serialize, Deserialize, Clone, Debug)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct PlaygroundOptions {
    /// How long success/info notifications stay visible, in milliseconds
    #[serde(default = "default_status_autoclear_ms")]
    pub status_autoclear_ms: u32,
    /// Sample query catalog
    #[serde(default)]
    pub samples: Vec<SampleQuery>,
}

fn default_status_autoclear_ms() -> u32 {
    3000
}

impl Default for PlaygroundOptions {
    fn default() -> Self {
        Self {
            status_autoclear_ms: 3000,
            samples: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PlaygroundOptions;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let options: PlaygroundOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.status_autoclear_ms, 3000);
        assert!(options.samples.is_empty());
    }
}
