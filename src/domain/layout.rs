//! Property object location layout.
//!
//! ```text
//! <root>/
//! ├── domains.yml
//! ├── mkcol.toml                      (optional)
//! ├── Sales/*.json
//! ├── Lettings/*.json
//! └── generated-postman-collections/
//! ```

use std::path::{Path, PathBuf};

use crate::domain::Category;

pub const DOMAIN_LIST_FILE: &str = "domains.yml";
pub const CONFIG_FILE: &str = "mkcol.toml";
pub const OUTPUT_DIR: &str = "generated-postman-collections";
pub const BODY_SUFFIX: &str = ".json";

/// `<root>/domains.yml`
pub fn domain_list(root: &Path) -> PathBuf {
    root.join(DOMAIN_LIST_FILE)
}

/// `<root>/mkcol.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// `<root>/Sales/` or `<root>/Lettings/`
pub fn category_dir(root: &Path, category: Category) -> PathBuf {
    root.join(category.dir_name())
}

/// `<root>/generated-postman-collections/`
pub fn output_dir(root: &Path) -> PathBuf {
    root.join(OUTPUT_DIR)
}

/// `<host> - <label>.json`
pub fn collection_file_name(host: &str, category: Category) -> String {
    format!("{} - {}.json", host, category.label())
}

/// Whether a file name is picked up as a request body.
pub fn is_body_file_name(name: &str) -> bool {
    name.ends_with(BODY_SUFFIX)
}
