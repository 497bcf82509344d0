pub mod category;
pub mod collection;
pub mod config;
pub mod error;
pub mod layout;
mod raw_url;
pub mod target;
pub mod template;

pub use category::Category;
pub use collection::{CategoryBodies, GeneratedCollection, HostCollections, RequestBody};
pub use config::{GeneratorConfig, OutputConfig, TemplateConfig};
pub use error::AppError;
pub use target::TargetDomain;
pub use template::{CollectionTemplate, UrlTail};
