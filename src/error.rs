//! Error types
//!
//! Scaling itself never fails. These errors only come from the edges:
//! loading a configuration and parsing a typed amount on its own.

use thiserror::Error;

/// Error parsing a typed amount
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AmountError {
    #[error("Empty amount")]
    Empty,

    #[error("Not a number: '{0}'")]
    NotANumber(String),

    #[error("Amount is too large")]
    NotFinite,
}

/// Error building a [`ScaleEngine`](crate::ScaleEngine) from a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[cfg(feature = "config_file")]
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("Too many decimals: {decimals}, the maximum is {max}")]
    TooManyDecimals { decimals: u32, max: u32 },

    #[error("Empty label for '{field}'")]
    EmptyLabel { field: &'static str },
}
