//! Placement configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;
use void_voxel::UpdateFlags;

/// Configuration parse errors
#[derive(Debug, Error)]
pub enum PlacementConfigError {
    /// Malformed configuration document
    #[error("Invalid placement configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sign placement configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Flags passed with the committing grid write (default: neighbours and clients)
    pub update_flags: UpdateFlags,

    /// Tell the placer about a freshly placed blank sign
    pub notify_placer: bool,

    /// Take one item off the stack on commit
    pub consume_item: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            update_flags: UpdateFlags::DEFAULT,
            notify_placer: true,
            consume_item: true,
        }
    }
}

impl PlacementConfig {
    /// Create a configuration for hosts where items are never used up
    pub fn creative() -> Self {
        Self {
            consume_item: false,
            ..Default::default()
        }
    }

    /// Parse from a JSON document; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, PlacementConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set update flags
    pub fn with_update_flags(mut self, flags: UpdateFlags) -> Self {
        self.update_flags = flags;
        self
    }

    /// Set placer notification
    pub fn with_notify_placer(mut self, notify: bool) -> Self {
        self.notify_placer = notify;
        self
    }

    /// Set item consumption
    pub fn with_consume_item(mut self, consume: bool) -> Self {
        self.consume_item = consume;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlacementConfig::default();
        assert_eq!(config.update_flags, UpdateFlags(3));
        assert!(config.notify_placer);
        assert!(config.consume_item);
        assert!(!PlacementConfig::creative().consume_item);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PlacementConfig::from_json_str(r#"{ "update_flags": 2 }"#).expect("valid");
        assert_eq!(config.update_flags, UpdateFlags::SEND_TO_CLIENTS);
        assert!(config.notify_placer);

        let empty = PlacementConfig::from_json_str("{}").expect("valid");
        assert_eq!(empty, PlacementConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = PlacementConfig::from_json_str(r#"{ "notify_placer": "yes" }"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid placement configuration"));
    }

    #[test]
    fn test_round_trip() {
        let config = PlacementConfig::default()
            .with_update_flags(UpdateFlags::NOTIFY_NEIGHBORS)
            .with_notify_placer(false);
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains(r#""update_flags":1"#));
        assert_eq!(PlacementConfig::from_json_str(&json).expect("parse"), config);
    }
}
