use serde::{Deserialize, Serialize};

use crate::core::GlassError;

use super::glass::GlassType;

/// Pane options. Every key is optional in JSON; missing keys take the
/// defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaneConfig {
    pub max_shards: u32,
    pub min_shards: u32,
    pub min_shard_size: f32,
    pub max_shard_size: f32,
    /// Downward gravity (Matter-style units)
    pub gravity: f32,
    /// Velocity kept per base step
    pub resistance: f32,
    /// Shard launch speed (units per base step)
    pub initial_velocity: f32,
    /// Carried for option compatibility; pane alpha comes from the glass type
    pub glass_opacity: f32,
    pub vibrate_on_break: bool,
    pub glass_type: GlassType,
    pub multi_touch_enabled: bool,
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            max_shards: 40,
            min_shards: 20,
            min_shard_size: 5.0,
            max_shard_size: 20.0,
            gravity: 0.6,
            resistance: 0.99,
            initial_velocity: 15.0,
            glass_opacity: 0.4,
            vibrate_on_break: true,
            glass_type: GlassType::Normal,
            multi_touch_enabled: true,
        }
    }
}

impl PaneConfig {
    /// Parse a (possibly partial) JSON options object and validate it
    pub fn from_json(json: &str) -> Result<Self, GlassError> {
        let config: PaneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), GlassError> {
        if self.max_shards == 0 {
            return Err(GlassError::InvalidConfig("maxShards must be at least 1".into()));
        }
        if self.min_shards > self.max_shards {
            return Err(GlassError::InvalidConfig(format!(
                "minShards ({}) exceeds maxShards ({})",
                self.min_shards, self.max_shards
            )));
        }
        if !(self.min_shard_size > 0.0) || !(self.max_shard_size >= self.min_shard_size) {
            return Err(GlassError::InvalidConfig(format!(
                "shard sizes must satisfy 0 < minShardSize ({}) <= maxShardSize ({})",
                self.min_shard_size, self.max_shard_size
            )));
        }
        if !(self.resistance > 0.0 && self.resistance <= 1.0) {
            return Err(GlassError::InvalidConfig(format!(
                "resistance ({}) must be in (0, 1]",
                self.resistance
            )));
        }
        if !(0.0..=1.0).contains(&self.glass_opacity) {
            return Err(GlassError::InvalidConfig(format!(
                "glassOpacity ({}) must be in [0, 1]",
                self.glass_opacity
            )));
        }
        if !self.gravity.is_finite() || !self.initial_velocity.is_finite() || self.initial_velocity < 0.0 {
            return Err(GlassError::InvalidConfig(
                "gravity and initialVelocity must be finite, initialVelocity non-negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = PaneConfig::from_json("{}").unwrap();
        assert_eq!(config, PaneConfig::default());
        assert_eq!(config.max_shards, 40);
        assert_eq!(config.min_shards, 20);
        assert_eq!(config.glass_type, GlassType::Normal);
        assert!(config.vibrate_on_break);
        assert!(config.multi_touch_enabled);
    }

    #[test]
    fn partial_camel_case_overrides() {
        let config =
            PaneConfig::from_json(r#"{"maxShards": 12, "minShards": 4, "glassType": "thick", "vibrateOnBreak": false}"#)
                .unwrap();
        assert_eq!(config.max_shards, 12);
        assert_eq!(config.min_shards, 4);
        assert_eq!(config.glass_type, GlassType::Thick);
        assert!(!config.vibrate_on_break);
        assert_eq!(config.initial_velocity, 15.0);
    }

    #[test]
    fn rejects_inverted_ranges() {
        let err = PaneConfig::from_json(r#"{"minShards": 50}"#).unwrap_err();
        assert!(matches!(err, GlassError::InvalidConfig(_)));

        let err = PaneConfig::from_json(r#"{"minShardSize": 30}"#).unwrap_err();
        assert!(matches!(err, GlassError::InvalidConfig(_)));

        let err = PaneConfig::from_json(r#"{"resistance": 0}"#).unwrap_err();
        assert!(matches!(err, GlassError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_malformed_json_and_unknown_type() {
        assert!(matches!(
            PaneConfig::from_json("{not json").unwrap_err(),
            GlassError::ConfigParse(_)
        ));
        assert!(matches!(
            PaneConfig::from_json(r#"{"glassType": "frosted"}"#).unwrap_err(),
            GlassError::ConfigParse(_)
        ));
    }

    #[test]
    fn json_round_trip_keeps_camel_case_keys() {
        let json = PaneConfig::default().to_json();
        assert!(json.contains("\"maxShards\":40"));
        assert!(json.contains("\"glassType\":\"normal\""));
    }
}
