//! UniFFI bindings for coffee-recipes
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! The catalog is rebuilt from the embedded asset on each call; it is small and
//! the derivation pipeline is pure.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    Catalog, CatalogError, CoffeeRecipe, JsonFileNoteStore, Method, NoteError, RecipeNotes,
    RecipeVariant, Temperature,
};

/// FFI-compatible temperature enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiTemperature {
    Hot,
    Cold,
}

impl From<FfiTemperature> for Temperature {
    fn from(temperature: FfiTemperature) -> Self {
        match temperature {
            FfiTemperature::Hot => Temperature::Hot,
            FfiTemperature::Cold => Temperature::Cold,
        }
    }
}

impl From<Temperature> for FfiTemperature {
    fn from(temperature: Temperature) -> Self {
        match temperature {
            Temperature::Hot => FfiTemperature::Hot,
            Temperature::Cold => FfiTemperature::Cold,
        }
    }
}

/// FFI-compatible brewing method enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiMethod {
    Espresso,
    Granules,
}

impl From<Method> for FfiMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Espresso => FfiMethod::Espresso,
            Method::Granules => FfiMethod::Granules,
        }
    }
}

/// FFI-compatible variant structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiVariant {
    pub method: FfiMethod,
    /// Header lines followed by the ingredients
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Method tip (empty string if none)
    pub tips: String,
    /// "Easy", "Medium" or "Hard"
    pub difficulty: String,
    pub equipment: Vec<String>,
}

impl FfiVariant {
    fn new(method: Method, variant: &RecipeVariant) -> Self {
        FfiVariant {
            method: method.into(),
            ingredients: variant.ingredients.clone(),
            steps: variant.steps.clone(),
            tips: variant.tips.clone(),
            difficulty: variant.difficulty.label().to_string(),
            equipment: variant.equipment.clone(),
        }
    }
}

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub temperature: FfiTemperature,
    pub variants: Vec<FfiVariant>,
    pub general_tips: Vec<String>,
    pub minutes: u32,
    pub calories: u32,
    /// Image resource name for the list screen
    pub list_image: String,
    /// Image resource name for the detail screen
    pub detail_image: String,
}

impl From<&CoffeeRecipe> for FfiRecipe {
    fn from(recipe: &CoffeeRecipe) -> Self {
        FfiRecipe {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            subtitle: recipe.subtitle().to_string(),
            temperature: recipe.temperature.into(),
            variants: recipe
                .variants
                .iter()
                .map(|(method, variant)| FfiVariant::new(*method, variant))
                .collect(),
            general_tips: recipe.general_tips.clone(),
            minutes: recipe.meta.minutes,
            calories: recipe.meta.calories,
            list_image: crate::image_name(recipe.temperature, crate::ImageContext::List)
                .to_string(),
            detail_image: crate::image_name(recipe.temperature, crate::ImageContext::Detail)
                .to_string(),
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiCatalogError {
    /// No recipe with the requested id
    NotFound { message: String },
    /// The catalog asset is broken
    InvalidCatalog { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Reading or writing notes failed
    StorageError { message: String },
}

impl fmt::Display for FfiCatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiCatalogError::NotFound { message } => write!(f, "Not found: {}", message),
            FfiCatalogError::InvalidCatalog { message } => {
                write!(f, "Invalid catalog: {}", message)
            }
            FfiCatalogError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiCatalogError::StorageError { message } => write!(f, "Storage error: {}", message),
        }
    }
}

impl std::error::Error for FfiCatalogError {}

impl From<CatalogError> for FfiCatalogError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => FfiCatalogError::NotFound { message: id },
            CatalogError::Parse(e) => FfiCatalogError::InvalidCatalog {
                message: e.to_string(),
            },
            CatalogError::Io(e) => FfiCatalogError::InvalidCatalog {
                message: e.to_string(),
            },
            CatalogError::InvalidRecipe { id, reason } => FfiCatalogError::InvalidCatalog {
                message: format!("{}: {}", id, reason),
            },
            CatalogError::Config(e) => FfiCatalogError::ConfigError {
                message: e.to_string(),
            },
            CatalogError::Note(e) => e.into(),
        }
    }
}

impl From<NoteError> for FfiCatalogError {
    fn from(err: NoteError) -> Self {
        FfiCatalogError::StorageError {
            message: err.to_string(),
        }
    }
}

fn catalog() -> Result<Arc<Catalog>, FfiCatalogError> {
    Ok(Arc::new(Catalog::embedded()?))
}

/// List recipes, optionally only those of one temperature
///
/// # Arguments
/// * `temperature` - Temperature to filter by, or `None` for every recipe
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn list_recipes(
    temperature: Option<FfiTemperature>,
) -> Result<Vec<FfiRecipe>, FfiCatalogError> {
    let catalog = catalog()?;
    let state = crate::recipes_for(&catalog, temperature.map(Temperature::from));
    Ok(state
        .visible
        .iter()
        .map(|recipe| FfiRecipe::from(recipe.as_ref()))
        .collect())
}

/// Get a single recipe by id
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_recipe(id: String) -> Result<FfiRecipe, FfiCatalogError> {
    let recipe = catalog()?.find_by_id(&id)?;
    Ok(FfiRecipe::from(recipe.as_ref()))
}

/// Read the personal note for a recipe
///
/// # Arguments
/// * `notes_path` - Path of the note file inside the app's storage
/// * `recipe_id` - Recipe the note belongs to
///
/// # Returns
/// The stored note, or an empty string if none was saved
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn load_note(notes_path: String, recipe_id: String) -> Result<String, FfiCatalogError> {
    let notes = RecipeNotes::new(JsonFileNoteStore::open(PathBuf::from(notes_path))?);
    Ok(notes.load(&recipe_id)?)
}

/// Replace the personal note for a recipe
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn save_note(
    notes_path: String,
    recipe_id: String,
    text: String,
) -> Result<(), FfiCatalogError> {
    let mut notes = RecipeNotes::new(JsonFileNoteStore::open(PathBuf::from(notes_path))?);
    notes.save(&recipe_id, &text)?;
    Ok(())
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
