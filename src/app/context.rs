use crate::ports::{PropertyStore, TemplateSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: PropertyStore, T: TemplateSource> {
    store: S,
    templates: T,
}

impl<S: PropertyStore, T: TemplateSource> AppContext<S, T> {
    /// Create a new application context.
    pub fn new(store: S, templates: T) -> Self {
        Self { store, templates }
    }

    /// Get a reference to the property store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the bundled template source.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
