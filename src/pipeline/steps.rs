use crate::model::Method;

/// Exact (trimmed) espresso step phrasings and their replacements
const ESPRESSO_REWRITES: &[(&str, &str)] = &[
    ("Espresso.", "Prepare an espresso shot."),
    (
        "Brew the espresso.",
        "Prepare an espresso shot (freshly pulled preferred).",
    ),
];

const DISSOLVE_OPENER: &str = "dissolve the granules";
const DISSOLVE_EXPANDED: [&str; 2] = [
    "Dissolve the granules fully in 30 ml of warm/hot water (make a base).",
    "Once the base is ready, continue with the remaining steps.",
];
const BASE_MARKER: &str = "make a base";
const BASE_RECOMMENDATION: &str =
    "Tip: dissolve the granules in 30 ml of warm/hot water first (reduces clumping).";

pub fn normalize_steps(method: Method, steps: &[String]) -> Vec<String> {
    match method {
        Method::Espresso => normalize_espresso_steps(steps),
        Method::Granules => normalize_granule_steps(steps),
    }
}

fn normalize_espresso_steps(steps: &[String]) -> Vec<String> {
    steps
        .iter()
        .map(|step| {
            let trimmed = step.trim();
            ESPRESSO_REWRITES
                .iter()
                .find(|(raw, _)| *raw == trimmed)
                .map(|(_, replacement)| replacement.to_string())
                .unwrap_or_else(|| step.clone())
        })
        .collect()
}

/// Whether the author already explains how to build the dissolved base
fn mentions_base(joined: &str) -> bool {
    joined.contains("base")
        || joined.contains("dissolve fully")
        || (joined.contains("dissolve") && joined.contains("warm"))
}

fn normalize_granule_steps(steps: &[String]) -> Vec<String> {
    let joined = steps.join(" ").to_lowercase();
    let has_base_already = mentions_base(&joined);

    let replaced: Vec<String> = steps
        .iter()
        .flat_map(|step| {
            let trimmed = step.trim();
            if trimmed.to_lowercase().starts_with(DISSOLVE_OPENER) {
                DISSOLVE_EXPANDED
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
            } else {
                vec![trimmed.to_string()]
            }
        })
        .collect();

    let base_step_present = replaced
        .iter()
        .any(|step| step.to_lowercase().contains(BASE_MARKER));

    if !has_base_already && !base_step_present {
        let mut with_tip = Vec::with_capacity(replaced.len() + 1);
        with_tip.push(BASE_RECOMMENDATION.to_string());
        with_tip.extend(replaced);
        with_tip
    } else {
        replaced
    }
}
