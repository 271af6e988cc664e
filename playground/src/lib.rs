use std::sync::Mutex;

use recipe_scale::{Recipe, ScaleEngine, Scaled, ScalingInput};
use wasm_bindgen::prelude::*;

static ENGINE: Mutex<Option<ScaleEngine>> = Mutex::new(None);

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[wasm_bindgen(getter_with_clone)]
pub struct FallibleResult {
    pub value: String,
    pub error: String,
}

impl FallibleResult {
    fn ok(value: String) -> Self {
        Self {
            value,
            error: String::new(),
        }
    }

    fn err(error: impl ToString) -> Self {
        Self {
            value: String::new(),
            error: error.to_string(),
        }
    }
}

fn engine() -> ScaleEngine {
    ENGINE.lock().unwrap().clone().unwrap_or_default()
}

/// Replace the engine configuration. An empty string restores the default.
#[wasm_bindgen]
pub fn set_config(toml: &str) -> String {
    let engine = if toml.trim().is_empty() {
        Ok(ScaleEngine::default())
    } else {
        ScaleEngine::from_toml_str(toml)
    };
    match engine {
        Ok(engine) => {
            *ENGINE.lock().unwrap() = Some(engine);
            String::new()
        }
        Err(e) => e.to_string(),
    }
}

#[wasm_bindgen]
pub fn resolve(recipe: &str, input: &str) -> FallibleResult {
    let recipe: Recipe = match serde_json::from_str(recipe) {
        Ok(r) => r,
        Err(e) => return FallibleResult::err(e),
    };
    let input: ScalingInput = match serde_json::from_str(input) {
        Ok(i) => i,
        Err(e) => return FallibleResult::err(e),
    };
    let resolution = engine().resolve_detailed(&recipe, &input);
    FallibleResult::ok(serde_json::to_string_pretty(&resolution).unwrap())
}

#[wasm_bindgen]
pub fn scale(recipe: &str, ratio: f64) -> FallibleResult {
    let recipe: Recipe = match serde_json::from_str(recipe) {
        Ok(r) => r,
        Err(e) => return FallibleResult::err(e),
    };
    let rows = engine().scale(&recipe, ratio);
    FallibleResult::ok(serde_json::to_string_pretty(&rows).unwrap())
}

#[wasm_bindgen]
pub fn derive_render(recipe: &str, input: &str) -> FallibleResult {
    let recipe: Recipe = match serde_json::from_str(recipe) {
        Ok(r) => r,
        Err(e) => return FallibleResult::err(e),
    };
    let input: ScalingInput = match serde_json::from_str(input) {
        Ok(i) => i,
        Err(e) => return FallibleResult::err(e),
    };
    let scaled = engine().derive(&recipe, &input);
    FallibleResult::ok(render(&scaled))
}

fn render(scaled: &Scaled) -> String {
    maud::html! {
        h2 { "Ingredients " span.ratio { (scaled.ratio_label()) } }
        ul {
            @for row in scaled.visible_rows() {
                li {
                    b { (row.label) }
                    ": " (row.display_quantity)
                }
            }
        }
    }
    .into_string()
}
