//! Coffee recipe catalog.
//!
//! Loads a fixed catalog of coffee recipes, derives difficulty and equipment
//! for every brewing-method variant, filters the catalog by temperature and
//! keeps one personal note per recipe.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod images;
pub mod model;
pub mod notes;
pub mod pipeline;
pub mod uniffi_bindings;

use std::sync::Arc;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{CatalogError, NoteError};
pub use filter::{FilterState, RecipeFilter, SubscriptionId};
pub use images::{image_name, resolve_image, ImageContext, ImageResolver};
pub use model::{CoffeeRecipe, Difficulty, Method, RecipeMeta, RecipeVariant, Temperature};
pub use notes::{note_key, JsonFileNoteStore, MemoryNoteStore, NoteStore, RecipeNotes};

// UniFFI scaffolding must live at the crate root
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// Recipes for a temperature, or the whole catalog for `None`.
pub fn recipes_for(catalog: &Arc<Catalog>, temperature: Option<Temperature>) -> FilterState {
    let mut filter = RecipeFilter::new(Arc::clone(catalog));
    filter.set_filter(temperature);
    filter.current().clone()
}

/// Open the note file named by the configuration.
pub fn open_notes(config: &AppConfig) -> Result<RecipeNotes<JsonFileNoteStore>, CatalogError> {
    let store = JsonFileNoteStore::open(&config.notes_path)?;
    Ok(RecipeNotes::new(store))
}
