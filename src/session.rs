//! Scaling state owned by a view
//!
//! A [`ScalingSession`] holds what the cook has typed while looking at one
//! recipe. It is created when the view opens, derived on every change and
//! dropped when the view closes. Nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::{model::Recipe, ratio::ScalingInput, scale::Scaled, ScaleEngine};

/// Which intent is active in the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    #[default]
    Servings,
    CrossMultiply,
}

/// Transient scaling inputs of a view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalingSession {
    mode: Mode,
    target_servings: f64,
    reference_ingredient_id: Option<String>,
    manual_base: f64,
    have: String,
}

impl ScalingSession {
    /// Start a session for `recipe`, targeting its base servings
    pub fn new(recipe: &Recipe) -> Self {
        Self {
            mode: Mode::Servings,
            target_servings: recipe.base_servings(),
            reference_ingredient_id: None,
            manual_base: 0.0,
            have: String::new(),
        }
    }

    /// Back to the base servings, cross multiplication fields cleared
    pub fn reset(&mut self, recipe: &Recipe) {
        *self = Self::new(recipe);
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn target_servings(&self) -> f64 {
        self.target_servings
    }

    pub fn reference_ingredient_id(&self) -> Option<&str> {
        self.reference_ingredient_id.as_deref()
    }

    pub fn have(&self) -> &str {
        &self.have
    }

    /// Scale by servings
    pub fn set_target_servings(&mut self, target: f64) {
        self.mode = Mode::Servings;
        self.target_servings = target;
    }

    /// Use an ingredient as the known quantity
    pub fn select_reference(&mut self, ingredient_id: impl Into<String>) {
        self.mode = Mode::CrossMultiply;
        self.reference_ingredient_id = Some(ingredient_id.into());
    }

    /// Use a typed base amount as the known quantity
    pub fn use_manual_base(&mut self) {
        self.mode = Mode::CrossMultiply;
        self.reference_ingredient_id = None;
    }

    /// Set the typed base amount, this also drops the selected reference
    pub fn set_manual_base(&mut self, base: f64) {
        self.mode = Mode::CrossMultiply;
        self.reference_ingredient_id = None;
        self.manual_base = base;
    }

    /// Raw text of the "have" field
    pub fn set_have(&mut self, have: impl Into<String>) {
        self.mode = Mode::CrossMultiply;
        self.have = have.into();
    }

    /// Current inputs as a [`ScalingInput`]
    pub fn input(&self) -> ScalingInput {
        match self.mode {
            Mode::Servings => ScalingInput::servings(self.target_servings),
            Mode::CrossMultiply => ScalingInput::CrossMultiply {
                reference_ingredient_id: self.reference_ingredient_id.clone(),
                manual_base: self.manual_base,
                have: self.have.clone(),
                target_servings: Some(self.target_servings),
            },
        }
    }

    /// Compute ratio and rows for the current inputs
    pub fn derive(&self, engine: &ScaleEngine, recipe: &Recipe) -> Scaled {
        engine.derive(recipe, &self.input())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ingredient;

    fn recipe() -> Recipe {
        Recipe::new(
            "r",
            Some(4.0),
            vec![Ingredient::new("butter", Some(250.0), Some("g"), None)],
        )
    }

    #[test]
    fn starts_unscaled() {
        let recipe = recipe();
        let session = ScalingSession::new(&recipe);
        assert_eq!(session.target_servings(), 4.0);
        let scaled = session.derive(&ScaleEngine::default(), &recipe);
        assert_eq!(scaled.ratio, 1.0);
        assert!(scaled.is_unscaled());
    }

    #[test]
    fn switching_modes() {
        let recipe = recipe();
        let engine = ScaleEngine::default();
        let mut session = ScalingSession::new(&recipe);

        session.set_target_servings(2.0);
        assert_eq!(session.derive(&engine, &recipe).ratio, 0.5);

        session.select_reference("butter");
        session.set_have("5");
        assert_eq!(session.mode(), Mode::CrossMultiply);
        assert_eq!(session.derive(&engine, &recipe).ratio, 0.02);

        // half typed, back to the servings ratio
        session.set_have("");
        assert_eq!(session.derive(&engine, &recipe).ratio, 0.5);

        session.use_manual_base();
        session.set_manual_base(10.0);
        session.set_have("25");
        assert_eq!(session.derive(&engine, &recipe).ratio, 2.5);
    }

    #[test]
    fn manual_base_replaces_reference() {
        let recipe = recipe();
        let engine = ScaleEngine::default();
        let mut session = ScalingSession::new(&recipe);

        session.select_reference("butter");
        session.set_have("500");
        assert_eq!(session.derive(&engine, &recipe).ratio, 2.0);

        session.set_manual_base(100.0);
        assert_eq!(session.reference_ingredient_id(), None);
        assert_eq!(session.derive(&engine, &recipe).ratio, 5.0);
    }

    #[test]
    fn reset() {
        let recipe = recipe();
        let mut session = ScalingSession::new(&recipe);
        session.set_target_servings(10.0);
        session.select_reference("butter");
        session.set_have("100");
        session.reset(&recipe);
        assert_eq!(session, ScalingSession::new(&recipe));
        assert_eq!(session.reference_ingredient_id(), None);
        assert_eq!(session.have(), "");
        assert_eq!(session.input(), ScalingInput::servings(4.0));
    }
}
