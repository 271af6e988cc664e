//! UniFFI bindings for native apps
//!
//! Records here mirror the crate model with plain fields so they can cross
//! the FFI boundary. Apps call these and never redo the arithmetic.

use crate::{model, ratio::ScalingInput, scale, ScaleEngine};

#[derive(uniffi::Record, Debug, Clone)]
pub struct Ingredient {
    pub id: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub designation: Option<String>,
}

#[derive(uniffi::Record, Debug, Clone)]
pub struct Recipe {
    pub id: String,
    pub base_servings: Option<f64>,
    pub ingredients: Vec<Ingredient>,
}

#[derive(uniffi::Enum, Debug, Clone)]
pub enum Scaling {
    Servings {
        target_servings: f64,
    },
    CrossMultiply {
        reference_ingredient_id: Option<String>,
        manual_base: f64,
        have: String,
        target_servings: Option<f64>,
    },
}

#[derive(uniffi::Record, Debug, Clone, PartialEq)]
pub struct ScaledRow {
    pub ingredient_id: String,
    pub label: String,
    pub display_quantity: String,
}

#[derive(uniffi::Record, Debug, Clone, PartialEq)]
pub struct ScaledRecipe {
    pub ratio: f64,
    pub ratio_label: String,
    pub rows: Vec<ScaledRow>,
}

impl From<Recipe> for model::Recipe {
    fn from(recipe: Recipe) -> Self {
        model::Recipe {
            id: recipe.id,
            servings: recipe.base_servings,
            ingredients: recipe
                .ingredients
                .into_iter()
                .map(|i| model::Ingredient {
                    id: i.id,
                    quantity: i.quantity,
                    unit: i.unit,
                    designation: i.designation,
                })
                .collect(),
        }
    }
}

impl From<Scaling> for ScalingInput {
    fn from(scaling: Scaling) -> Self {
        match scaling {
            Scaling::Servings { target_servings } => ScalingInput::Servings { target_servings },
            Scaling::CrossMultiply {
                reference_ingredient_id,
                manual_base,
                have,
                target_servings,
            } => ScalingInput::CrossMultiply {
                reference_ingredient_id,
                manual_base,
                have,
                target_servings,
            },
        }
    }
}

fn into_row(row: scale::ScaledRow) -> ScaledRow {
    ScaledRow {
        ingredient_id: row.ingredient_id,
        label: row.label,
        display_quantity: row.display_quantity,
    }
}

#[uniffi::export]
pub fn resolve_ratio(recipe: Recipe, scaling: Scaling) -> f64 {
    crate::resolve(&recipe.into(), &scaling.into())
}

#[uniffi::export]
pub fn scale_recipe(recipe: Recipe, ratio: f64) -> Vec<ScaledRow> {
    crate::scale(&recipe.into(), ratio)
        .into_iter()
        .map(into_row)
        .collect()
}

#[uniffi::export]
pub fn derive_scaled(recipe: Recipe, scaling: Scaling) -> ScaledRecipe {
    let scaled = ScaleEngine::default().derive(&recipe.into(), &scaling.into());
    ScaledRecipe {
        ratio: scaled.ratio,
        ratio_label: scaled.ratio_label(),
        rows: scaled.rows.into_iter().map(into_row).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_through_bindings() {
        let recipe = Recipe {
            id: "r".into(),
            base_servings: Some(2.0),
            ingredients: vec![Ingredient {
                id: "milk".into(),
                quantity: Some(300.0),
                unit: Some("ml".into()),
                designation: Some("Milk".into()),
            }],
        };
        let scaled = derive_scaled(
            recipe,
            Scaling::Servings {
                target_servings: 3.0,
            },
        );
        assert_eq!(scaled.ratio, 1.5);
        assert_eq!(scaled.ratio_label, "×1.5");
        assert_eq!(scaled.rows[0].display_quantity, "450 ml");
    }
}
