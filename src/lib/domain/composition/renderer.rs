//! Template renderer contract

use serde_json::Value;

#[cfg(test)]
use mockall::mock;

use super::errors::RenderError;

/// Template renderer
///
/// Resolves a template name to a rendered string. A logical template `T`
/// has two candidate variants, `T.html` and `T.txt`, both resolved by
/// name through this contract.
pub trait TemplateRenderer: Send + Sync + 'static {
    /// Render the named template with the given data mapping.
    ///
    /// # Arguments
    /// * `name` - The name of the template to render.
    /// * `data` - The data mapping made available to the template.
    ///
    /// # Returns
    /// A [`Result`] containing the rendered string, or a [`RenderError`]
    /// when the template is missing or fails to render.
    fn render(&self, name: &str, data: &Value) -> Result<String, RenderError>;
}

#[cfg(test)]
mock! {
    pub TemplateRenderer {}

    impl TemplateRenderer for TemplateRenderer {
        fn render(&self, name: &str, data: &Value) -> Result<String, RenderError>;
    }
}
