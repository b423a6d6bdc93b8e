use thiserror::Error;

/// Errors that can occur while loading or querying the recipe catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No recipe with the given id exists in the catalog
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// The catalog asset is not valid JSON or does not match the expected layout
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog asset could not be read
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// A recipe in the asset breaks a catalog invariant
    #[error("Invalid recipe '{id}': {reason}")]
    InvalidRecipe { id: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The note store failed
    #[error("Note store error: {0}")]
    Note(#[from] NoteError),
}

/// Errors raised by a note store adapter
#[derive(Error, Debug)]
pub enum NoteError {
    /// Failed to read or write the backing storage
    #[error("Storage unavailable: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file holds something other than a string map
    #[error("Corrupt note file: {0}")]
    Serialize(#[from] serde_json::Error),
}
