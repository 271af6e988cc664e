//! Recipe representation
//!
//! These are the plain shapes handed over by whatever retrieves recipes. The
//! engine only reads them.

use serde::{Deserialize, Serialize};

/// A recipe as seen by the scaling engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identifier
    pub id: String,
    /// Number of servings the stored quantities were written for
    ///
    /// Use [`Recipe::base_servings`] to read it, it clamps missing or
    /// nonsensical values.
    #[serde(default, rename = "baseServings", alias = "servings")]
    pub servings: Option<f64>,
    /// All the ingredients, in recipe order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// A recipe ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Identifier, unique inside the recipe
    pub id: String,
    /// Amount for the base servings
    ///
    /// [`None`] means there is no fixed amount, which is not the same as `0`.
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Free text unit
    ///
    /// The only unit with a meaning for the engine is the "as needed"
    /// marker, see [`is_as_needed`](crate::quantity::is_as_needed).
    #[serde(default)]
    pub unit: Option<String>,
    /// Name shown to the cook
    #[serde(default)]
    pub designation: Option<String>,
}

impl Recipe {
    /// Creates a new recipe
    pub fn new(id: impl Into<String>, servings: Option<f64>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            id: id.into(),
            servings,
            ingredients,
        }
    }

    /// Base servings used as the scaling baseline
    ///
    /// Always at least `1`. Missing, zero, negative and non finite values are
    /// all treated as `1`.
    pub fn base_servings(&self) -> f64 {
        clamp_servings(self.servings)
    }

    /// Find an ingredient by its id
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }
}

impl Ingredient {
    /// Creates a new ingredient
    ///
    /// ```
    /// # use recipe_scale::Ingredient;
    /// let flour = Ingredient::new("flour", Some(200.0), Some("g"), Some("Flour"));
    /// assert_eq!(flour.unit.as_deref(), Some("g"));
    /// ```
    pub fn new(
        id: impl Into<String>,
        quantity: Option<f64>,
        unit: Option<&str>,
        designation: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            quantity,
            unit: unit.map(str::to_string),
            designation: designation.map(str::to_string),
        }
    }

    /// Unit text without surrounding whitespace
    ///
    /// Blank units are [`None`].
    pub fn unit_text(&self) -> Option<&str> {
        self.unit
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }

    /// Gets the name the ingredient should be displayed with
    pub fn label(&self) -> &str {
        self.designation.as_deref().map(str::trim).unwrap_or("")
    }
}

/// Clamps a serving count to a minimum of `1`
pub(crate) fn clamp_servings(servings: Option<f64>) -> f64 {
    match servings {
        Some(s) if s.is_finite() => s.max(1.0),
        _ => 1.0,
    }
}
