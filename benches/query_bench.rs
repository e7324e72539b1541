// ABOUTME: Criterion benchmarks for the recipe query engine and unit conversion
// ABOUTME: Measures filter, sort, and full query cost over generated collections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

//! Criterion benchmarks for recipe querying and ingredient display.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipe_core::models::{Difficulty, Ingredient, Recipe};
use recipe_core::pagination::PaginationParams;
use recipe_intelligence::query::{
    execute_query, filter_recipes, sort_recipes, RecipeFilter, RecipeQuery, SortDirection,
    SortField, SortSpec,
};
use recipe_intelligence::units::{scale_and_convert, UnitSystem};

const CUISINES: [&str; 5] = ["British", "Thai", "Italian", "Indian", "Mexican"];
const TAGS: [&str; 6] = ["quick", "vegan", "baked", "spicy", "soup", "comfort"];
const UNITS: [&str; 6] = ["g", "kg", "ml", "tsp", "cup", "pieces"];

/// Generate a deterministic collection of `count` recipes
#[allow(clippy::cast_possible_truncation)]
fn generate_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|index| {
            let day = (index * 7) % 28 + 1;
            let month = (index * 5) % 12 + 1;
            let year = 2018 + index % 7;
            let difficulty = Difficulty::ALL[index % Difficulty::ALL.len()];

            Recipe::new(
                format!("bench-{index}"),
                format!("bench-recipe-{index}"),
                format!("Benchmark Pie {}", (index * 7919) % count.max(1)),
                CUISINES[index % CUISINES.len()],
            )
            .with_description("Generated recipe for benchmarking")
            .with_tag(TAGS[index % TAGS.len()])
            .with_tag(TAGS[(index / 3) % TAGS.len()])
            .with_times((index % 90) as u32, (index % 45) as u32)
            .with_difficulty(difficulty)
            .with_servings(4)
            .with_ingredient(Ingredient::measured(
                "flour",
                (index % 500) as f64,
                UNITS[index % UNITS.len()],
            ))
            .published(format!("{day:02}/{month:02}/{year}"))
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let filter = RecipeFilter::any()
        .with_search("pie 1")
        .with_cuisine("Thai")
        .with_cuisine("Italian")
        .with_tag("quick")
        .with_max_prep_time(45);

    for count in [100, 1_000, 10_000] {
        let recipes = generate_recipes(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("filter_recipes", count), &recipes, |b, recipes| {
            b.iter(|| filter_recipes(black_box(recipes), black_box(&filter)));
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    let recipes = generate_recipes(1_000);

    for field in [SortField::Title, SortField::TotalTimeMins, SortField::DatePublished] {
        let spec = SortSpec::new(field, SortDirection::Desc);
        group.bench_with_input(BenchmarkId::new("sort_recipes", field), &spec, |b, spec| {
            b.iter(|| sort_recipes(black_box(&recipes), *spec));
        });
    }

    group.finish();
}

fn bench_full_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let recipes = generate_recipes(5_000);
    let query = RecipeQuery {
        filter: RecipeFilter::any().with_cuisine("British").with_tag("baked"),
        sort: Some(SortSpec::newest_first()),
        pagination: PaginationParams::page(12, 24),
    };

    group.bench_function("execute_query_5000", |b| {
        b.iter(|| execute_query(black_box(&recipes), black_box(&query)));
    });

    group.finish();
}

fn bench_ingredient_display(c: &mut Criterion) {
    let recipes = generate_recipes(200);

    c.bench_function("scale_and_convert_200_ingredients", |b| {
        b.iter(|| {
            recipes
                .iter()
                .flat_map(|recipe| recipe.ingredients.iter())
                .filter_map(Ingredient::measurement)
                .filter_map(|(quantity, unit)| {
                    scale_and_convert(quantity, unit, 4, 6, UnitSystem::Imperial).ok()
                })
                .count()
        });
    });
}

criterion_group!(
    benches,
    bench_filter,
    bench_sort,
    bench_full_query,
    bench_ingredient_display,
);
criterion_main!(benches);
