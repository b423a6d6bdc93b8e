use super::{contains_any, search_text};
use crate::model::{Difficulty, Method};

/// Triggers for a long cold steep (cold brew and friends)
pub(crate) const LONG_STEEP: &[&str] = &["12–18", "12-18"];
/// Both words must appear for the long-steep rule to fire without a time range
pub(crate) const LONG_STEEP_PAIR: (&str, &str) = ("hour", "steep");

const BLENDER: &[&str] = &["blender"];
const FROTH: &[&str] = &["froth", "microfoam"];
/// Shot timing, brew ratio and grind markers; only meaningful for espresso
const ESPRESSO_DIALING: &[&str] = &["25–30", "1:2", "grind"];

pub(crate) fn is_long_steep(text: &str) -> bool {
    contains_any(text, LONG_STEEP)
        || (text.contains(LONG_STEEP_PAIR.0) && text.contains(LONG_STEEP_PAIR.1))
}

fn uses_blender(_method: Method, text: &str) -> bool {
    contains_any(text, BLENDER)
}

fn needs_frothing(_method: Method, text: &str) -> bool {
    contains_any(text, FROTH)
}

fn needs_dialing_in(method: Method, text: &str) -> bool {
    method == Method::Espresso && contains_any(text, ESPRESSO_DIALING)
}

fn steeps_long(_method: Method, text: &str) -> bool {
    is_long_steep(text)
}

/// Checked top to bottom; the first rule that applies wins.
const RULES: &[(fn(Method, &str) -> bool, Difficulty)] = &[
    (steeps_long, Difficulty::Medium),
    (uses_blender, Difficulty::Medium),
    (needs_frothing, Difficulty::Medium),
    (needs_dialing_in, Difficulty::Medium),
];

/// Guess how demanding a variant is from keywords in its text.
///
/// Matching is plain substring containment: "12-18" inside an unrelated
/// line still counts as a long steep.
pub fn infer_difficulty(method: Method, ingredients: &[String], steps: &[String]) -> Difficulty {
    let text = search_text(ingredients, steps);
    RULES
        .iter()
        .find(|(applies, _)| applies(method, &text))
        .map(|(_, difficulty)| *difficulty)
        .unwrap_or(Difficulty::Easy)
}
