//! Inputs and outputs of collection generation.

use std::path::PathBuf;

use serde_json::Value;

use crate::domain::{Category, layout};

/// A property object request body read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    /// Path the body was read from.
    pub source: PathBuf,
    /// File contents, used verbatim as `request.body.raw`.
    pub raw: String,
}

/// Request bodies for both categories, in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBodies {
    pub sales: Vec<RequestBody>,
    pub lettings: Vec<RequestBody>,
}

impl CategoryBodies {
    pub fn get(&self, category: Category) -> &[RequestBody] {
        match category {
            Category::Sales => &self.sales,
            Category::Lettings => &self.lettings,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<RequestBody> {
        match category {
            Category::Sales => &mut self.sales,
            Category::Lettings => &mut self.lettings,
        }
    }
}

/// One generated collection document.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCollection {
    pub category: Category,
    pub document: Value,
}

/// Collections generated for one target domain.
#[derive(Debug, Clone, PartialEq)]
pub struct HostCollections {
    pub host: String,
    pub collections: Vec<GeneratedCollection>,
}

impl HostCollections {
    pub fn get(&self, category: Category) -> Option<&GeneratedCollection> {
        self.collections.iter().find(|c| c.category == category)
    }

    /// Output file name for one of this host's collections.
    pub fn file_name(&self, category: Category) -> String {
        layout::collection_file_name(&self.host, category)
    }
}
