//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::{EmbeddedTemplate, FilesystemPropertyStore};
use crate::app::AppContext;
use crate::app::commands::generate as generate_command;

pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use crate::domain::AppError;

/// Create an `AppContext` backed by the filesystem and the bundled template.
fn create_context() -> AppContext<FilesystemPropertyStore, EmbeddedTemplate> {
    AppContext::new(FilesystemPropertyStore::new(), EmbeddedTemplate::new())
}

/// Generate collections for the property object location at `root`.
///
/// Reads `domains.yml`, `Sales/*.json` and `Lettings/*.json`, and writes
/// `<host> - Sales.json` and `<host> - Let.json` for every domain into
/// `generated-postman-collections/`.
pub fn generate(root: &Path, options: GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context();
    generate_command::execute(&ctx, root, &options)
}
