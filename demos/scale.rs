//! Scale a recipe stored as JSON
//!
//! Usage: `scale <recipe.json> <servings|have@ingredient|have/base>`
//!
//! - `8` scales to 8 servings
//! - `750@flour` scales so that the recipe uses 750 of `flour`
//! - `750/500` scales by the rule of three with a typed base

use anyhow::{bail, Context};
use recipe_scale::{Recipe, ScaleEngine, ScalingInput};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args();
    let bin = args.next().unwrap_or_else(|| "scale".into());
    let (Some(path), Some(target)) = (args.next(), args.next()) else {
        bail!("Usage: {bin} <recipe.json> <servings|have@ingredient|have/base>");
    };

    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let recipe: Recipe = serde_json::from_str(&text).context("invalid recipe")?;

    let input = if let Some((have, id)) = target.split_once('@') {
        ScalingInput::reference(id, have)
    } else if let Some((have, base)) = target.split_once('/') {
        let base = recipe_scale::parse_amount(base).context("invalid base")?;
        ScalingInput::manual(base, have)
    } else {
        let servings = recipe_scale::parse_amount(&target).context("invalid servings")?;
        ScalingInput::servings(servings)
    };
    // fall back to the base servings when the rule of three is unusable
    let input = if matches!(input, ScalingInput::CrossMultiply { .. }) {
        input.with_target_servings(recipe.base_servings())
    } else {
        input
    };

    let engine = ScaleEngine::default();
    let resolution = engine.resolve_detailed(&recipe, &input);
    if let Some(reason) = resolution.fallback_reason() {
        eprintln!("warning: cross multiplication ignored ({reason})");
    }
    let scaled = engine.derive(&recipe, &input);

    println!("{} {}", recipe.id, scaled.ratio_label());
    let width = scaled
        .visible_rows()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);
    for row in scaled.visible_rows() {
        println!("  {:width$}  {}", row.label, row.display_quantity);
    }
    Ok(())
}
