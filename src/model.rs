use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Serving temperature of a recipe, used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Hot,
    Cold,
}

impl Temperature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::Hot => "hot",
            Temperature::Cold => "cold",
        }
    }

    /// Lenient parse for filter input.
    ///
    /// Anything that is not "hot" or "cold" (e.g. "all", "") means no filter.
    pub fn parse_filter(value: &str) -> Option<Temperature> {
        value.parse().ok()
    }
}

impl FromStr for Temperature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hot" => Ok(Temperature::Hot),
            "cold" => Ok(Temperature::Cold),
            other => Err(format!("unknown temperature: {}", other)),
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Brewing method a variant is prepared with
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Espresso,
    Granules,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Espresso => "espresso",
            Method::Granules => "granules",
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "espresso" => Ok(Method::Espresso),
            "granules" | "granule" | "instant" => Ok(Method::Granules),
            other => Err(format!("unknown method: {}", other)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effort needed to prepare a variant. Always inferred, never authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Human readable label shown in the ingredient header
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A method-specific preparation, already decorated and normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeVariant {
    /// Three header lines (serving, difficulty, equipment) followed by the raw ingredients
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Method-specific tip, empty when the author gave none
    pub tips: String,
    pub difficulty: Difficulty,
    pub equipment: Vec<String>,
}

impl RecipeVariant {
    /// Number of synthesized lines at the top of `ingredients`
    pub const HEADER_LINES: usize = 3;

    /// The author-supplied ingredient lines, without the synthesized header
    pub fn raw_ingredients(&self) -> &[String] {
        self.ingredients
            .get(Self::HEADER_LINES..)
            .unwrap_or_default()
    }
}

/// Preparation time and energy shown next to a recipe name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecipeMeta {
    pub minutes: u32,
    pub calories: u32,
}

impl Default for RecipeMeta {
    fn default() -> Self {
        Self {
            minutes: default_minutes(),
            calories: default_calories(),
        }
    }
}

/// A named coffee drink with one variant per supported method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoffeeRecipe {
    pub id: String,
    pub name: String,
    pub temperature: Temperature,
    pub variants: BTreeMap<Method, RecipeVariant>,
    pub general_tips: Vec<String>,
    pub meta: RecipeMeta,
}

impl CoffeeRecipe {
    pub fn variant(&self, method: Method) -> Option<&RecipeVariant> {
        self.variants.get(&method)
    }

    pub fn methods(&self) -> impl Iterator<Item = Method> + '_ {
        self.variants.keys().copied()
    }

    /// Short description shown under the name in the list
    pub fn subtitle(&self) -> &'static str {
        match self.temperature {
            Temperature::Hot => "Hot espresso-based coffee",
            Temperature::Cold => "Cold espresso-based coffee",
        }
    }
}

/// Variant as written in the catalog asset, before decoration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawVariant {
    pub method: Method,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tips: String,
}

/// Recipe as written in the catalog asset
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawRecipe {
    pub id: String,
    pub name: String,
    pub temperature: Temperature,
    #[serde(default)]
    pub variants: Vec<RawVariant>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default = "default_minutes")]
    pub minutes: u32,
    #[serde(default = "default_calories")]
    pub calories: u32,
}

/// Top-level layout of the catalog asset
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawCatalog {
    pub recipes: Vec<RawRecipe>,
}

fn default_minutes() -> u32 {
    6
}

fn default_calories() -> u32 {
    80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_parse_filter() {
        assert_eq!(Temperature::parse_filter("hot"), Some(Temperature::Hot));
        assert_eq!(Temperature::parse_filter(" COLD "), Some(Temperature::Cold));
        assert_eq!(Temperature::parse_filter("all"), None);
        assert_eq!(Temperature::parse_filter(""), None);
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("Espresso".parse::<Method>(), Ok(Method::Espresso));
        assert_eq!("instant".parse::<Method>(), Ok(Method::Granules));
        assert!("french_press".parse::<Method>().is_err());
    }

    #[test]
    fn test_difficulty_is_ordered_by_effort() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }

    #[test]
    fn test_raw_recipe_defaults() {
        let raw: RawRecipe = serde_json::from_str(
            r#"{"id": "x", "name": "X", "temperature": "cold", "variants": []}"#,
        )
        .unwrap();
        assert_eq!(raw.minutes, 6);
        assert_eq!(raw.calories, 80);
        assert!(raw.tips.is_empty());
    }

    #[test]
    fn test_raw_ingredients_skips_header() {
        let variant = RecipeVariant {
            ingredients: vec![
                "Serving: 1 portion".to_string(),
                "Difficulty: Easy".to_string(),
                "Equipment: Spoon".to_string(),
                "Ice".to_string(),
            ],
            steps: vec![],
            tips: String::new(),
            difficulty: Difficulty::Easy,
            equipment: vec!["Spoon".to_string()],
        };
        assert_eq!(variant.raw_ingredients(), ["Ice".to_string()]);
    }
}
