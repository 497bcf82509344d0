use crate::domain::AppError;

/// Port for obtaining the raw collection template text.
pub trait TemplateSource {
    /// Human-readable origin of the template, used in logs.
    fn describe(&self) -> String;

    /// Raw JSON text of the template.
    fn load(&self) -> Result<String, AppError>;
}
