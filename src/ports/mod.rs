mod property_store;
mod template_source;

pub use property_store::{EntryKind, PropertyStore};
pub use template_source::TemplateSource;
