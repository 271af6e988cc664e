//! Support for recipe scaling
//!
//! Applies a ratio to every ingredient and produces display ready rows.

use serde::{Deserialize, Serialize};

use crate::{
    config::{Policies, ScalerConfig},
    format::{compose, format_quantity, format_ratio, round_to, rounds_to_zero},
    model::{Ingredient, Recipe},
};

/// One ingredient line, ready to display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledRow {
    /// Id of the source ingredient
    pub ingredient_id: String,
    /// Name to display
    pub label: String,
    /// Final text for the quantity
    ///
    /// Empty means the row should not be rendered.
    pub display_quantity: String,
    /// How the row was produced
    pub kind: RowKind,
    /// Scaled and rounded quantity, for numeric rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

/// Possible outcomes from scaling an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowKind {
    /// Quantity multiplied by the ratio
    Scaled,
    /// "As needed", not changed whatever the ratio
    AsNeeded,
    /// It has no quantity, so it can't be scaled
    NoQuantity,
    /// Scaled quantity rounds to nothing, hidden
    Suppressed,
}

impl ScaledRow {
    /// Check if the row must not be rendered
    pub fn is_suppressed(&self) -> bool {
        self.display_quantity.is_empty()
    }
}

/// Rows that should be rendered, in recipe order
pub fn visible_rows(rows: &[ScaledRow]) -> impl Iterator<Item = &ScaledRow> + '_ {
    rows.iter().filter(|r| !r.is_suppressed())
}

/// Ratio and rows computed together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scaled {
    /// Ratio applied
    pub ratio: f64,
    /// One row per ingredient, in recipe order
    pub rows: Vec<ScaledRow>,
}

impl Scaled {
    /// Multiplier indicator, like `×2`
    pub fn ratio_label(&self) -> String {
        format_ratio(self.ratio)
    }

    /// Check if the ratio is `1`, once rounded for display
    pub fn is_unscaled(&self) -> bool {
        round_to(self.ratio, 2) == 1.0
    }

    /// Shorthand for [`visible_rows`]
    pub fn visible_rows(&self) -> impl Iterator<Item = &ScaledRow> + '_ {
        visible_rows(&self.rows)
    }
}

pub(crate) fn scale_recipe(recipe: &Recipe, ratio: f64, config: &ScalerConfig) -> Vec<ScaledRow> {
    recipe
        .ingredients
        .iter()
        .map(|i| i.scale(ratio, config))
        .collect()
}

trait Scale {
    type Output;

    fn scale(&self, ratio: f64, config: &ScalerConfig) -> Self::Output;
}

impl Scale for Ingredient {
    type Output = ScaledRow;

    fn scale(&self, ratio: f64, config: &ScalerConfig) -> ScaledRow {
        let unit = self.unit_text();

        let (display_quantity, kind, quantity) =
            if config.as_needed_units.matches(self.unit.as_deref()) {
                (config.as_needed_label.clone(), RowKind::AsNeeded, None)
            } else if let Some(q) = self.quantity {
                let scaled = round_to(q * ratio, config.decimals);
                let hide = config.policies.contains(Policies::SUPPRESS_ZERO)
                    && rounds_to_zero(scaled, config.decimals);
                if !scaled.is_finite() || hide {
                    tracing::debug!(ingredient = %self.id, quantity = q, ratio, "row suppressed");
                    (String::new(), RowKind::Suppressed, None)
                } else {
                    let text = compose(&format_quantity(scaled, config.decimals), unit);
                    (text, RowKind::Scaled, Some(scaled))
                }
            } else {
                let text = unit.unwrap_or(config.placeholder.as_str()).to_string();
                (text, RowKind::NoQuantity, None)
            };

        tracing::trace!(ingredient = %self.id, ?kind, %display_quantity);
        ScaledRow {
            ingredient_id: self.id.clone(),
            label: self.label().to_string(),
            display_quantity,
            kind,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ingredient: Ingredient, ratio: f64) -> ScaledRow {
        ingredient.scale(ratio, &ScalerConfig::default())
    }

    #[test]
    fn numeric() {
        let r = row(Ingredient::new("a", Some(100.0), Some("g"), Some(" Flour ")), 2.0);
        assert_eq!(r.display_quantity, "200 g");
        assert_eq!(r.label, "Flour");
        assert_eq!(r.kind, RowKind::Scaled);
        assert_eq!(r.quantity, Some(200.0));
    }

    #[test]
    fn numeric_without_unit() {
        let r = row(Ingredient::new("eggs", Some(3.0), None, Some("Eggs")), 0.5);
        assert_eq!(r.display_quantity, "1.5");
    }

    #[test]
    fn as_needed_wins_over_quantity() {
        let r = row(Ingredient::new("s", Some(5.0), Some("qs"), None), 100.0);
        assert_eq!(r.display_quantity, "QS");
        assert_eq!(r.kind, RowKind::AsNeeded);
        assert!(!r.is_suppressed());
    }

    #[test]
    fn no_quantity() {
        let r = row(Ingredient::new("w", None, Some(" ml "), None), 3.0);
        assert_eq!(r.display_quantity, "ml");
        assert_eq!(r.kind, RowKind::NoQuantity);

        let r = row(Ingredient::new("w", None, None, None), 3.0);
        assert_eq!(r.display_quantity, "—");
    }

    #[test]
    fn suppressed() {
        let r = row(Ingredient::new("p", Some(1.0), Some("pincée"), None), 0.004);
        assert!(r.is_suppressed());
        assert_eq!(r.kind, RowKind::Suppressed);
        assert_eq!(r.quantity, None);
    }

    #[test]
    fn zero_shown_without_policy() {
        let config = ScalerConfig::default().with_policies(Policies::empty());
        let r = Ingredient::new("p", Some(1.0), Some("g"), None).scale(0.001, &config);
        assert_eq!(r.display_quantity, "0 g");
    }

    #[test]
    fn non_finite_suppressed() {
        let r = row(Ingredient::new("a", Some(1.0), Some("g"), None), f64::INFINITY);
        assert!(r.is_suppressed());
    }

    #[test]
    fn custom_labels() {
        let config = ScalerConfig {
            as_needed_label: "as needed".into(),
            placeholder: "-".into(),
            ..Default::default()
        }
        .with_as_needed_unit("to taste");
        let r = Ingredient::new("a", None, Some("To Taste"), None).scale(2.0, &config);
        assert_eq!(r.display_quantity, "as needed");
        let r = Ingredient::new("b", None, None, None).scale(2.0, &config);
        assert_eq!(r.display_quantity, "-");
    }
}
