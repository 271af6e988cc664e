//! Engine configuration
//!
//! [`ScalerConfig`] is designed for deserializing [TOML](https://toml.io/en/),
//! but you can try other formats supported by serde.
//!
//! ```toml
//! decimals = 2
//! as_needed_label = "QS"
//! placeholder = "—"
//! as_needed_units = ["à discrétion"]
//! policies = "SUPPRESS_ZERO | DECIMAL_COMMA"
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, quantity::AsNeededUnits};

/// Maximum number of decimals allowed in [`ScalerConfig::decimals`]
pub const MAX_DECIMALS: u32 = 6;

bitflags! {
    /// Display and parsing policies
    ///
    /// [`Policies::default`] enables all of them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Policies: u32 {
        /// Hide lines whose scaled quantity rounds to zero, see
        /// [`rounds_to_zero`](crate::format::rounds_to_zero)
        const SUPPRESS_ZERO = 1 << 0;
        /// Accept `,` as decimal separator in typed amounts
        const DECIMAL_COMMA = 1 << 1;
    }
}

impl Default for Policies {
    fn default() -> Self {
        Self::all()
    }
}

/// Configuration for a [`ScaleEngine`](crate::ScaleEngine)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScalerConfig {
    /// Decimals kept when rounding scaled quantities
    pub decimals: u32,
    /// Text shown for "as needed" ingredients
    pub as_needed_label: String,
    /// Text shown for ingredients without quantity nor unit
    pub placeholder: String,
    /// Synonyms of "as needed" on top of the default ones
    pub as_needed_units: AsNeededUnits,
    /// Enabled policies
    pub policies: Policies,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            decimals: 2,
            as_needed_label: "QS".to_string(),
            placeholder: "—".to_string(),
            as_needed_units: AsNeededUnits::new(),
            policies: Policies::default(),
        }
    }
}

impl ScalerConfig {
    /// Parse a TOML configuration
    ///
    /// Missing keys take their default value.
    #[cfg(feature = "config_file")]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::TooManyDecimals {
                decimals: self.decimals,
                max: MAX_DECIMALS,
            });
        }
        if self.as_needed_label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel {
                field: "as_needed_label",
            });
        }
        if self.placeholder.trim().is_empty() {
            return Err(ConfigError::EmptyLabel {
                field: "placeholder",
            });
        }
        Ok(())
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_policies(mut self, policies: Policies) -> Self {
        self.policies = policies;
        self
    }

    /// Add an "as needed" synonym
    pub fn with_as_needed_unit(mut self, unit: &str) -> Self {
        self.as_needed_units.add(unit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(ScalerConfig::default().validate().is_ok());
        assert_eq!(ScalerConfig::default().policies, Policies::all());
    }

    #[test]
    fn invalid_values() {
        let config = ScalerConfig::default().with_decimals(12);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyDecimals { decimals: 12, .. })
        ));

        let config = ScalerConfig {
            placeholder: " ".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyLabel {
                field: "placeholder"
            })
        ));
    }

    #[cfg(feature = "config_file")]
    #[test]
    fn from_toml() {
        let config = ScalerConfig::from_toml_str(
            r#"
            decimals = 1
            as_needed_units = ["À discrétion"]
            policies = "DECIMAL_COMMA"
            "#,
        )
        .unwrap();
        assert_eq!(config.decimals, 1);
        assert_eq!(config.as_needed_label, "QS");
        assert!(config.as_needed_units.matches(Some("à discrétion")));
        assert_eq!(config.policies, Policies::DECIMAL_COMMA);
    }

    #[cfg(feature = "config_file")]
    #[test]
    fn unknown_key() {
        let err = ScalerConfig::from_toml_str("precision = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
