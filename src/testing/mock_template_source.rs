use crate::domain::AppError;
use crate::ports::TemplateSource;

/// Template source returning fixed text.
#[allow(dead_code)]
pub struct MockTemplateSource {
    pub content: String,
}

#[allow(dead_code)]
impl MockTemplateSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}

impl TemplateSource for MockTemplateSource {
    fn describe(&self) -> String {
        "mock template".to_string()
    }

    fn load(&self) -> Result<String, AppError> {
        Ok(self.content.clone())
    }
}
