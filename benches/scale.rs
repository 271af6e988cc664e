use criterion::{black_box, criterion_group, criterion_main, Criterion};

use recipe_scale::{Ingredient, Recipe, ScaleEngine, ScalingInput};

fn test_recipe() -> Recipe {
    let units = ["g", "ml", "qs", "pincée", "", "cl"];
    let ingredients = (0..40)
        .map(|i| {
            let quantity = if i % 7 == 0 { None } else { Some(i as f64 * 12.5) };
            let unit = units[i % units.len()];
            Ingredient::new(format!("i{i}"), quantity, Some(unit), Some("Ingredient"))
        })
        .collect();
    Recipe::new("bench", Some(6.0), ingredients)
}

fn derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    let engine = ScaleEngine::default();
    let recipe = black_box(test_recipe());

    group.bench_function("servings", |b| {
        let input = ScalingInput::servings(15.0);
        b.iter(|| engine.derive(&recipe, &input))
    });
    group.bench_function("cross-multiply", |b| {
        let input = ScalingInput::reference("i3", "1234,5");
        b.iter(|| engine.derive(&recipe, &input))
    });
    group.bench_function("fallback", |b| {
        let input = ScalingInput::manual(0.0, "12").with_target_servings(3.0);
        b.iter(|| engine.derive(&recipe, &input))
    });
}

criterion_group!(benches, derive);
criterion_main!(benches);
