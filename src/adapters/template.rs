use crate::domain::AppError;
use crate::ports::TemplateSource;

static BUNDLED_TEMPLATE: &str = include_str!("../assets/single_collection_template.json");

/// Template compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplate;

impl EmbeddedTemplate {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for EmbeddedTemplate {
    fn describe(&self) -> String {
        "bundled template".to_string()
    }

    fn load(&self) -> Result<String, AppError> {
        Ok(BUNDLED_TEMPLATE.to_string())
    }
}
