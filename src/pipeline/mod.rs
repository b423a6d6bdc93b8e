//! Derivation pipeline for recipe variants.
//!
//! Turns the author-supplied ingredients, steps and tip of one variant into
//! the decorated form stored in the catalog. Every stage is total: text that
//! matches no rule passes through unchanged.
//!
//! Stages run in a fixed order:
//! 1. difficulty inference
//! 2. equipment inference
//! 3. ingredient decoration (three header lines)
//! 4. step normalization
//! 5. tip normalization

pub mod difficulty;
pub mod equipment;
pub mod steps;
pub mod tips;

pub use self::difficulty::infer_difficulty;
pub use self::equipment::infer_equipment;
pub use self::steps::normalize_steps;
pub use self::tips::normalize_tip;

use crate::model::{Difficulty, Method, RawVariant, RecipeVariant};
use log::debug;

/// Serving size every variant is written for
pub const SERVING: &str = "1 portion";

const GRANULE_WATER_MARKER: &str = "30 ml water";
const GRANULE_BASE_WATER: &str = "30 ml warm/hot water (for the base)";

/// Lower-cased, space-joined ingredient and step text that the inference rules scan.
pub(crate) fn search_text(ingredients: &[String], steps: &[String]) -> String {
    ingredients
        .iter()
        .chain(steps.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True when `text` contains at least one of `needles`
pub(crate) fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// Build the three header lines followed by the raw ingredients
pub fn decorate_ingredients(
    ingredients: &[String],
    difficulty: Difficulty,
    equipment: &[String],
) -> Vec<String> {
    let mut decorated = Vec::with_capacity(ingredients.len() + RecipeVariant::HEADER_LINES);
    decorated.push(format!("Serving: {}", SERVING));
    decorated.push(format!("Difficulty: {}", difficulty.label()));
    decorated.push(format!("Equipment: {}", equipment.join(", ")));
    decorated.extend(ingredients.iter().cloned());
    decorated
}

/// Granule recipes use a small amount of water to dissolve the coffee first;
/// spell that out on the ingredient line.
fn rewrite_granule_ingredients(ingredients: &[String]) -> Vec<String> {
    ingredients
        .iter()
        .map(|line| {
            if line.to_lowercase().contains(GRANULE_WATER_MARKER) {
                GRANULE_BASE_WATER.to_string()
            } else {
                line.clone()
            }
        })
        .collect()
}

/// Run every stage over one raw variant
pub fn decorate(raw: &RawVariant) -> RecipeVariant {
    let method = raw.method;
    let ingredients = match method {
        Method::Granules => rewrite_granule_ingredients(&raw.ingredients),
        Method::Espresso => raw.ingredients.clone(),
    };

    let difficulty = infer_difficulty(method, &ingredients, &raw.steps);
    let equipment = infer_equipment(method, &ingredients, &raw.steps);
    debug!(
        "Derived {} variant: difficulty={}, equipment={:?}",
        method, difficulty, equipment
    );

    RecipeVariant {
        ingredients: decorate_ingredients(&ingredients, difficulty, &equipment),
        steps: normalize_steps(method, &raw.steps),
        tips: normalize_tip(&raw.tips),
        difficulty,
        equipment,
    }
}
