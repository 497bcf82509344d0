//! mkcol: Generate per-domain Postman collections from property object fixtures.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use app::api::{GenerateOptions, GenerateOutcome};
pub use domain::{AppError, Category, CollectionTemplate, TargetDomain};
pub use services::CollectionBuilder;

/// Generate collections for the property object location at `root`.
pub fn generate(root: &Path, options: GenerateOptions) -> Result<GenerateOutcome, AppError> {
    app::api::generate(root, options)
}
