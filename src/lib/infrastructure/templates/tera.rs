//! Tera template renderer implementation

use serde_json::Value;
use tera::{Context, Tera};

use crate::domain::composition::{RenderError, TemplateRenderer};

/// Template renderer backed by a [`Tera`] instance
///
/// Template names are resolved exactly as registered, so a logical
/// template `welcome` is served by the registered names `welcome.html`
/// and `welcome.txt`.
#[derive(Debug, Default)]
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Creates a renderer loading every template matching the glob.
    pub fn new(glob: &str) -> Result<Self, RenderError> {
        let tera = Tera::new(glob).map_err(|err| RenderError::UnknownError(err.into()))?;

        Ok(Self { tera })
    }

    /// Creates a renderer from in-memory `(name, content)` templates.
    pub fn from_templates<'a, I>(templates: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut tera = Tera::default();

        tera.add_raw_templates(templates)
            .map_err(|err| RenderError::InvalidTemplate(err.to_string()))?;

        Ok(Self { tera })
    }
}

impl TemplateRenderer for TeraRenderer {
    fn render(&self, name: &str, data: &Value) -> Result<String, RenderError> {
        let context =
            Context::from_serialize(data).map_err(|err| RenderError::UnknownError(err.into()))?;

        self.tera.render(name, &context).map_err(|err| match err.kind {
            tera::ErrorKind::TemplateNotFound(name) => RenderError::TemplateNotFound(name),
            _ => RenderError::InvalidTemplate(err.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_renders_registered_template() -> TestResult {
        let renderer =
            TeraRenderer::from_templates([("welcome.html", "<h1>Hello {{ name }}</h1>")])?;

        let html = renderer.render("welcome.html", &json!({ "name": "Ada" }))?;

        assert_eq!("<h1>Hello Ada</h1>", html);

        Ok(())
    }

    #[test]
    fn test_missing_template_maps_to_not_found() -> TestResult {
        let renderer = TeraRenderer::from_templates([("welcome.html", "<h1>Hello</h1>")])?;

        let result = renderer.render("welcome.txt", &json!({}));

        assert!(matches!(
            result.unwrap_err(),
            RenderError::TemplateNotFound(name) if name == "welcome.txt"
        ));

        Ok(())
    }

    #[test]
    fn test_render_failure_is_invalid_template() -> TestResult {
        let renderer =
            TeraRenderer::from_templates([("welcome.html", "{{ name | no_such_filter }}")])?;

        let result = renderer.render("welcome.html", &json!({ "name": "Ada" }));

        assert!(matches!(
            result.unwrap_err(),
            RenderError::InvalidTemplate(_)
        ));

        Ok(())
    }

    #[test]
    fn test_broken_template_fails_at_registration() {
        let result = TeraRenderer::from_templates([("broken.html", "{% if %}")]);

        assert!(matches!(
            result.unwrap_err(),
            RenderError::InvalidTemplate(_)
        ));
    }
}
