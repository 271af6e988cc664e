//! Recipe quantity scaling.
//!
//! Given a recipe and what the cook asks for, compute one scaling ratio and
//! the ingredient lines to display.
//!
//! Includes:
//! - Ratio from a target number of servings or from a rule of three against
//!   one known quantity.
//! - "As needed" (QS) ingredients, never scaled.
//! - Display formatting with rounding and hiding of lines that scale down to
//!   nothing.
//!
//! Everything is pure: no I/O, inputs are never modified and nothing fails.
//! Invalid or half typed input falls back to a safe ratio.
//!
//! # Basic usage
//!
//! ```rust
//! # use recipe_scale::{Ingredient, Recipe, ScalingInput};
//! let recipe = Recipe::new(
//!     "pancakes",
//!     Some(4.0),
//!     vec![
//!         Ingredient::new("flour", Some(100.0), Some("g"), Some("Flour")),
//!         Ingredient::new("salt", None, Some("QS"), Some("Salt")),
//!     ],
//! );
//!
//! let ratio = recipe_scale::resolve(&recipe, &ScalingInput::servings(8.0));
//! assert_eq!(ratio, 2.0);
//!
//! let rows = recipe_scale::scale(&recipe, ratio);
//! assert_eq!(rows[0].display_quantity, "200 g");
//! assert_eq!(rows[1].display_quantity, "QS");
//! ```
//!
//! To change labels, decimals or add "as needed" synonyms, build a
//! [`ScaleEngine`] with a [`ScalerConfig`]. Views usually keep a
//! [`ScalingSession`] and call [`ScalingSession::derive`] on every change.

#![warn(rustdoc::broken_intra_doc_links, clippy::doc_markdown)]

#[cfg(feature = "bindings")]
uniffi::setup_scaffolding!();

#[cfg(feature = "bindings")]
pub mod bindings;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod quantity;
pub mod ratio;
pub mod scale;
pub mod session;

pub use config::{Policies, ScalerConfig};
pub use error::{AmountError, ConfigError};
pub use model::{Ingredient, Recipe};
pub use quantity::{is_as_needed, parse_amount};
pub use ratio::{FallbackReason, RatioSource, Resolution, ScalingInput};
pub use scale::{visible_rows, RowKind, Scaled, ScaledRow};
pub use session::ScalingSession;

/// A configured scaling engine
///
/// The default engine uses [`ScalerConfig::default`]. It is cheap to clone
/// and can be shared between views.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScaleEngine {
    config: ScalerConfig,
}

impl ScaleEngine {
    /// Creates a new engine
    ///
    /// Fails if the configuration is not valid, see [`ScalerConfig::validate`].
    pub fn new(config: ScalerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a new engine from a TOML configuration
    #[cfg(feature = "config_file")]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        ScalerConfig::from_toml_str(text).map(|config| Self { config })
    }

    /// Get the engine configuration
    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }

    /// Resolve the scaling ratio
    ///
    /// Always finite and greater than zero.
    pub fn resolve(&self, recipe: &Recipe, input: &ScalingInput) -> f64 {
        self.resolve_detailed(recipe, input).ratio
    }

    /// Same as [`Self::resolve`] but also tells which branch was used
    #[tracing::instrument(level = "debug", skip_all, fields(recipe = %recipe.id))]
    pub fn resolve_detailed(&self, recipe: &Recipe, input: &ScalingInput) -> Resolution {
        ratio::resolve(
            recipe,
            input,
            &self.config.as_needed_units,
            self.config.policies,
        )
    }

    /// Scale every ingredient of the recipe
    ///
    /// One row per ingredient, in recipe order. Rows with an empty
    /// [`ScaledRow::display_quantity`] must not be rendered.
    #[tracing::instrument(level = "debug", skip_all, fields(recipe = %recipe.id, ratio = ratio))]
    pub fn scale(&self, recipe: &Recipe, ratio: f64) -> Vec<ScaledRow> {
        scale::scale_recipe(recipe, ratio, &self.config)
    }

    /// Resolve and scale in one go
    pub fn derive(&self, recipe: &Recipe, input: &ScalingInput) -> Scaled {
        let ratio = self.resolve(recipe, input);
        let rows = self.scale(recipe, ratio);
        Scaled { ratio, rows }
    }
}

/// Resolve the scaling ratio with a default [`ScaleEngine`]
pub fn resolve(recipe: &Recipe, input: &ScalingInput) -> f64 {
    ScaleEngine::default().resolve(recipe, input)
}

/// Resolve the scaling ratio with a default [`ScaleEngine`], with the source
pub fn resolve_detailed(recipe: &Recipe, input: &ScalingInput) -> Resolution {
    ScaleEngine::default().resolve_detailed(recipe, input)
}

/// Scale a recipe with a default [`ScaleEngine`]
pub fn scale(recipe: &Recipe, ratio: f64) -> Vec<ScaledRow> {
    ScaleEngine::default().scale(recipe, ratio)
}
