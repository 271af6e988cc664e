//! Turn what the cook asked for into a single scaling ratio
//!
//! There are two ways of asking:
//! - A target number of servings.
//! - A rule of three: "the recipe says `b` of something, I have `h`".
//!
//! Both end up as one coefficient. Resolving never fails. Incomplete or
//! invalid input falls back to the servings ratio, and [`Resolution::source`]
//! tells why.

use serde::{Deserialize, Serialize};

use crate::{
    config::Policies,
    model::{clamp_servings, Recipe},
    quantity::{parse_amount_with, AsNeededUnits},
};

/// What the cook is asking for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ScalingInput {
    /// Scale to a number of servings
    #[serde(rename_all = "camelCase")]
    Servings { target_servings: f64 },
    /// Scale by cross multiplication
    #[serde(rename_all = "camelCase")]
    CrossMultiply {
        /// Ingredient used as the known quantity
        ///
        /// When [`None`], `manual_base` is used instead.
        #[serde(default)]
        reference_ingredient_id: Option<String>,
        /// Base amount typed by hand
        #[serde(default)]
        manual_base: f64,
        /// Raw text of the amount the cook has
        #[serde(default)]
        have: String,
        /// Serving count currently set, used when falling back
        #[serde(default)]
        target_servings: Option<f64>,
    },
}

impl ScalingInput {
    /// Scale to `target` servings
    pub fn servings(target: f64) -> Self {
        Self::Servings {
            target_servings: target,
        }
    }

    /// Rule of three against an ingredient of the recipe
    pub fn reference(ingredient_id: impl Into<String>, have: impl Into<String>) -> Self {
        Self::CrossMultiply {
            reference_ingredient_id: Some(ingredient_id.into()),
            manual_base: 0.0,
            have: have.into(),
            target_servings: None,
        }
    }

    /// Rule of three against a typed base amount
    pub fn manual(base: f64, have: impl Into<String>) -> Self {
        Self::CrossMultiply {
            reference_ingredient_id: None,
            manual_base: base,
            have: have.into(),
            target_servings: None,
        }
    }

    /// Set the serving count used when falling back
    ///
    /// For [`ScalingInput::Servings`] this replaces the target.
    pub fn with_target_servings(mut self, target: f64) -> Self {
        match &mut self {
            Self::Servings { target_servings } => *target_servings = target,
            Self::CrossMultiply {
                target_servings, ..
            } => *target_servings = Some(target),
        }
        self
    }

    /// The serving count set, if any
    pub fn target_servings(&self) -> Option<f64> {
        match self {
            Self::Servings { target_servings } => Some(*target_servings),
            Self::CrossMultiply {
                target_servings, ..
            } => *target_servings,
        }
    }
}

/// A resolved ratio and where it comes from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolution {
    /// The ratio. Always finite and greater than zero.
    pub ratio: f64,
    /// Branch that produced the ratio
    pub source: RatioSource,
}

/// Which branch produced a ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "reason", rename_all = "camelCase")]
pub enum RatioSource {
    /// Target servings over base servings
    Servings,
    /// Cross multiplication against an ingredient
    ReferenceIngredient,
    /// Cross multiplication against a typed base
    ManualBase,
    /// Cross multiplication was asked but could not be used
    Fallback(FallbackReason),
}

/// Why a cross multiplication was ignored
///
/// Useful to show an input hint next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "snake_case")]
pub enum FallbackReason {
    /// Nothing typed yet
    EmptyHave,
    /// Typed text is not a positive number
    InvalidHave,
    /// Selected ingredient is not in the recipe
    ReferenceNotFound,
    /// Selected ingredient is "as needed"
    ReferenceAsNeeded,
    /// Selected ingredient has no positive quantity
    ReferenceWithoutQuantity,
    /// Manual base is not a positive number
    InvalidManualBase,
    /// The division overflowed
    NonFiniteRatio,
}

impl Resolution {
    /// Check if the ratio came from a fallback
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, RatioSource::Fallback(_))
    }

    /// The fallback reason, if any
    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self.source {
            RatioSource::Fallback(reason) => Some(reason),
            _ => None,
        }
    }
}

pub(crate) fn resolve(
    recipe: &Recipe,
    input: &ScalingInput,
    as_needed: &AsNeededUnits,
    policies: Policies,
) -> Resolution {
    let resolution = match input {
        ScalingInput::Servings { target_servings } => Resolution {
            ratio: servings_ratio(recipe, Some(*target_servings)),
            source: RatioSource::Servings,
        },
        ScalingInput::CrossMultiply {
            reference_ingredient_id,
            manual_base,
            have,
            target_servings,
        } => match cross_multiply(
            recipe,
            reference_ingredient_id.as_deref(),
            *manual_base,
            have,
            as_needed,
            policies,
        ) {
            Ok(resolution) => resolution,
            Err(reason) => {
                tracing::debug!(recipe = %recipe.id, %reason, "cross multiplication ignored");
                Resolution {
                    ratio: servings_ratio(recipe, *target_servings),
                    source: RatioSource::Fallback(reason),
                }
            }
        },
    };
    debug_assert!(resolution.ratio.is_finite() && resolution.ratio > 0.0);
    resolution
}

/// `max(1, target) / max(1, base)`, no target means base servings
fn servings_ratio(recipe: &Recipe, target: Option<f64>) -> f64 {
    let base = recipe.base_servings();
    let target = match target {
        Some(t) if t.is_finite() => clamp_servings(Some(t)),
        _ => base,
    };
    let ratio = target / base;
    if ratio.is_finite() {
        ratio
    } else {
        1.0
    }
}

fn cross_multiply(
    recipe: &Recipe,
    reference: Option<&str>,
    manual_base: f64,
    have: &str,
    as_needed: &AsNeededUnits,
    policies: Policies,
) -> Result<Resolution, FallbackReason> {
    let have = match parse_amount_with(have, policies) {
        Ok(h) if h > 0.0 => h,
        Ok(_) => return Err(FallbackReason::InvalidHave),
        Err(crate::error::AmountError::Empty) => return Err(FallbackReason::EmptyHave),
        Err(_) => return Err(FallbackReason::InvalidHave),
    };

    let (base, source) = match reference {
        Some(id) => {
            let ingredient = recipe
                .ingredient(id)
                .ok_or(FallbackReason::ReferenceNotFound)?;
            if as_needed.matches(ingredient.unit.as_deref()) {
                return Err(FallbackReason::ReferenceAsNeeded);
            }
            match ingredient.quantity {
                Some(q) if q.is_finite() && q > 0.0 => (q, RatioSource::ReferenceIngredient),
                _ => return Err(FallbackReason::ReferenceWithoutQuantity),
            }
        }
        None => {
            if !(manual_base.is_finite() && manual_base > 0.0) {
                return Err(FallbackReason::InvalidManualBase);
            }
            (manual_base, RatioSource::ManualBase)
        }
    };

    let ratio = have / base;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(FallbackReason::NonFiniteRatio);
    }
    Ok(Resolution { ratio, source })
}
