//! Location-backed configuration loading.
//!
//! Schema and validation live in `domain::config`; this module only handles
//! where the file lives and whether it exists.

mod load_config;

pub use load_config::load_config;
