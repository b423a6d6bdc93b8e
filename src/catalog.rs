use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::config::AppConfig;
use crate::model::{CoffeeRecipe, RawCatalog, RawRecipe, RecipeMeta};
use crate::pipeline;
use crate::CatalogError;

/// Catalog asset compiled into the library
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// The immutable, ordered set of recipes.
///
/// Every variant is decorated by the derivation pipeline while the catalog is
/// built, so callers never see raw author text.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Arc<CoffeeRecipe>>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build the catalog shipped with the crate
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Build a catalog from a JSON asset on disk
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        info!("Loading recipe catalog from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build the catalog named by the configuration, or the embedded one
    pub fn load(config: &AppConfig) -> Result<Self, CatalogError> {
        match &config.catalog_path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    /// Parse a JSON asset, validate it and run the derivation pipeline
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawCatalog) -> Result<Self, CatalogError> {
        let mut recipes = Vec::with_capacity(raw.recipes.len());
        let mut index = HashMap::with_capacity(raw.recipes.len());

        for raw_recipe in raw.recipes {
            let recipe = build_recipe(raw_recipe)?;
            if index.contains_key(&recipe.id) {
                return Err(CatalogError::InvalidRecipe {
                    id: recipe.id,
                    reason: "duplicate recipe id".to_string(),
                });
            }
            index.insert(recipe.id.clone(), recipes.len());
            recipes.push(Arc::new(recipe));
        }

        info!("Recipe catalog ready with {} recipes", recipes.len());
        Ok(Catalog { recipes, index })
    }

    /// All recipes in declaration order
    pub fn list_all(&self) -> &[Arc<CoffeeRecipe>] {
        &self.recipes
    }

    /// Look up a recipe by its id
    pub fn find_by_id(&self, id: &str) -> Result<Arc<CoffeeRecipe>, CatalogError> {
        self.index
            .get(id)
            .map(|&position| Arc::clone(&self.recipes[position]))
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<CoffeeRecipe>> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn invalid(id: &str, reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidRecipe {
        id: id.to_string(),
        reason: reason.into(),
    }
}

fn build_recipe(raw: RawRecipe) -> Result<CoffeeRecipe, CatalogError> {
    if raw.id.trim().is_empty() {
        return Err(invalid(&raw.name, "recipe id is empty"));
    }
    if raw.name.trim().is_empty() {
        return Err(invalid(&raw.id, "recipe name is empty"));
    }
    if raw.variants.is_empty() {
        return Err(invalid(&raw.id, "recipe has no variants"));
    }

    let mut variants = BTreeMap::new();
    for raw_variant in &raw.variants {
        if variants.contains_key(&raw_variant.method) {
            return Err(invalid(
                &raw.id,
                format!("more than one {} variant", raw_variant.method),
            ));
        }
        variants.insert(raw_variant.method, pipeline::decorate(raw_variant));
    }
    debug!("Built recipe '{}' with {} variants", raw.id, variants.len());

    Ok(CoffeeRecipe {
        id: raw.id,
        name: raw.name,
        temperature: raw.temperature,
        variants,
        general_tips: raw.tips,
        meta: RecipeMeta {
            minutes: raw.minutes,
            calories: raw.calories,
        },
    })
}
