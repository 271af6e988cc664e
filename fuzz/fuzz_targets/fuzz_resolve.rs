#![no_main]

use libfuzzer_sys::fuzz_target;

use recipe_scale::{Ingredient, Recipe, ScalingInput};

fuzz_target!(|data: (&str, f64, f64, f64)| {
    let (have, base, quantity, servings) = data;
    let recipe = Recipe::new(
        "fuzz",
        Some(servings),
        vec![Ingredient::new("x", Some(quantity), Some("g"), None)],
    );
    for input in [
        ScalingInput::reference("x", have).with_target_servings(servings),
        ScalingInput::manual(base, have),
        ScalingInput::servings(base),
    ] {
        let ratio = recipe_scale::resolve(&recipe, &input);
        assert!(ratio.is_finite() && ratio > 0.0);
        let _ = recipe_scale::scale(&recipe, ratio);
    }
});
