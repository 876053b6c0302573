//! Picker tunables. The catalog, the history length and the twist chance are
//! fixed at build time; only timing and presentation knobs live here.
use crate::catalog::CategoryKey;
use crate::error::ConfigurationError;

pub const DEFAULT_THINKING_DELAY_MS: u32 = 1000;
pub const DEFAULT_CONFETTI_PARTICLES: u32 = 30;
pub const DEFAULT_CONFETTI_LIFETIME_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PickerConfig {
    pub thinking_delay_ms: u32,
    pub default_category: CategoryKey,
    pub confetti_particles: u32,
    pub confetti_lifetime_ms: u32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: DEFAULT_THINKING_DELAY_MS,
            default_category: CategoryKey::default(),
            confetti_particles: DEFAULT_CONFETTI_PARTICLES,
            confetti_lifetime_ms: DEFAULT_CONFETTI_LIFETIME_MS,
        }
    }
}

impl PickerConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.thinking_delay_ms == 0 {
            return Err(ConfigurationError::InvalidSetting {
                field: "thinking_delay_ms",
                reason: "must be positive".into(),
            });
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON object; absent fields keep their
    /// defaults, unknown fields are rejected.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let config: PickerConfig = serde_json::from_str(json)
            .map_err(|e| ConfigurationError::MalformedSettings(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = PickerConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.thinking_delay_ms, 1000);
        assert_eq!(cfg.default_category, CategoryKey::Chill);
    }

    #[test]
    fn rejects_zero_delay() {
        let cfg = PickerConfig {
            thinking_delay_ms: 0,
            ..PickerConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigurationError::InvalidSetting { field: "thinking_delay_ms", .. })
        ));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = PickerConfig::from_json(
            r#"{"thinking_delay_ms": 250, "default_category": "culture"}"#,
        )
        .unwrap();
        assert_eq!(cfg.thinking_delay_ms, 250);
        assert_eq!(cfg.default_category, CategoryKey::Culture);
        assert_eq!(cfg.confetti_particles, 30);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            PickerConfig::from_json("{not json"),
            Err(ConfigurationError::MalformedSettings(_))
        ));
        assert!(matches!(
            PickerConfig::from_json(r#"{"thinking_delay_ms": 0}"#),
            Err(ConfigurationError::InvalidSetting { .. })
        ));
    }

    // History length and twist chance are not settings.
    #[cfg(feature = "serde_json")]
    #[test]
    fn fixed_invariants_cannot_be_overridden() {
        for json in [
            r#"{"history_capacity": 10}"#,
            r#"{"twist_chance": 1.0}"#,
            r#"{"history_capacity": 10, "twist_chance": 1.0}"#,
        ] {
            assert!(
                matches!(
                    PickerConfig::from_json(json),
                    Err(ConfigurationError::MalformedSettings(_))
                ),
                "{json} was accepted"
            );
        }
    }
}
