use std::fmt;

/// The property categories a collection is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Properties for sale, read from `Sales/`.
    Sales,
    /// Properties to let, read from `Lettings/`.
    Lettings,
}

impl Category {
    /// All categories in generation order.
    pub const ALL: [Category; 2] = [Category::Sales, Category::Lettings];

    /// Input directory name under the property object location.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Sales => "Sales",
            Category::Lettings => "Lettings",
        }
    }

    /// Label used in collection names and output file names.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Sales => "Sales",
            Category::Lettings => "Let",
        }
    }

    /// Prefix for generated request names (`Sale 1`, `Let 1`, ...).
    pub fn item_prefix(&self) -> &'static str {
        match self {
            Category::Sales => "Sale",
            Category::Lettings => "Let",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}
