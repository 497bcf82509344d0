pub mod property_filesystem;
pub mod template;

pub use property_filesystem::FilesystemPropertyStore;
pub use template::EmbeddedTemplate;
