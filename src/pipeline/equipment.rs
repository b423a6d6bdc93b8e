use super::difficulty::is_long_steep;
use super::{contains_any, search_text};
use crate::model::Method;

pub const CUP: &str = "Cup/Mug";
pub const SPOON: &str = "Spoon";
pub const ESPRESSO_MACHINE: &str = "Espresso machine";
pub const MILK_FROTHER: &str = "Milk frother";
pub const BLENDER: &str = "Blender";
pub const JAR: &str = "Jar";
pub const FILTER_CLOTH: &str = "Filter/Cheesecloth";
pub const SHAKER: &str = "Shaker/Jar";
pub const BASIC_KITCHEN: &str = "Basic kitchen equipment";

const ESPRESSO_TRIGGERS: &[&str] = &["shot", "portafilter", "brew the espresso", "espresso shot"];
const FOAM_TRIGGERS: &[&str] = &["froth", "microfoam", "foam"];
const BLENDER_TRIGGERS: &[&str] = &["blender"];
const SHAKE_TRIGGERS: &[&str] = &["shake", "shaker"];

/// One independent trigger group and the equipment it contributes
struct EquipmentRule {
    fires: fn(Method, &str) -> bool,
    adds: &'static [&'static str],
}

/// Evaluated in order; every rule that fires contributes.
const RULES: &[EquipmentRule] = &[
    EquipmentRule {
        fires: uses_granules,
        adds: &[CUP, SPOON],
    },
    EquipmentRule {
        fires: pulls_a_shot,
        adds: &[ESPRESSO_MACHINE],
    },
    EquipmentRule {
        fires: has_foam,
        adds: &[MILK_FROTHER],
    },
    EquipmentRule {
        fires: uses_blender,
        adds: &[BLENDER],
    },
    EquipmentRule {
        fires: steeps_long,
        adds: &[JAR, FILTER_CLOTH],
    },
    EquipmentRule {
        fires: is_shaken,
        adds: &[SHAKER],
    },
];

fn uses_granules(method: Method, _text: &str) -> bool {
    method == Method::Granules
}

fn pulls_a_shot(_method: Method, text: &str) -> bool {
    contains_any(text, ESPRESSO_TRIGGERS)
}

fn has_foam(_method: Method, text: &str) -> bool {
    contains_any(text, FOAM_TRIGGERS)
}

fn uses_blender(_method: Method, text: &str) -> bool {
    contains_any(text, BLENDER_TRIGGERS)
}

fn steeps_long(_method: Method, text: &str) -> bool {
    is_long_steep(text)
}

fn is_shaken(_method: Method, text: &str) -> bool {
    contains_any(text, SHAKE_TRIGGERS)
}

/// List the equipment a variant needs, in the order the triggers fired.
///
/// Falls back to a single generic entry when nothing matches. Entries are
/// never repeated.
pub fn infer_equipment(method: Method, ingredients: &[String], steps: &[String]) -> Vec<String> {
    let text = search_text(ingredients, steps);

    let mut equipment: Vec<String> = Vec::new();
    for rule in RULES.iter().filter(|rule| (rule.fires)(method, &text)) {
        for item in rule.adds {
            if !equipment.iter().any(|existing| existing == item) {
                equipment.push(item.to_string());
            }
        }
    }

    if equipment.is_empty() {
        equipment.push(BASIC_KITCHEN.to_string());
    }
    equipment
}
