//! License text resolution.
//!
//! A chosen SPDX identifier selects bundled legal text, which is then
//! stripped of its SPDX template markup. Without an identifier the generic
//! `LICENSE` template is rendered from the answers instead.

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, services::TemplateSet},
    domain::{ConfigAnswers, RenderContext, TemplateName, license},
    error::FoxxResult,
};

/// Produces the final text of the `LICENSE` artifact.
pub struct LicenseResolver<'a> {
    templates: TemplateSet<'a>,
}

impl<'a> LicenseResolver<'a> {
    pub fn new(templates: TemplateSet<'a>) -> Self {
        Self { templates }
    }

    /// Resolve the license text for `answers`.
    ///
    /// The identifier is not re-validated; an identifier missing from the
    /// corpus fails with `ApplicationError::LicenseNotFound`. Markup the
    /// stripper does not recognise fails with `ApplicationError::Render`.
    #[instrument(skip_all, fields(license = answers.license_id().unwrap_or("<template>")))]
    pub fn resolve(&self, answers: &ConfigAnswers) -> FoxxResult<String> {
        match answers.license_id() {
            Some(id) => {
                let raw = self.templates.assets().license(id)?;
                debug!(bytes = raw.len(), "Stripping license markup");
                let text = license::strip_markup(&raw);
                if license::has_markup(&text) {
                    return Err(ApplicationError::Render {
                        template: format!("licenses/{id}"),
                        reason: "unrecognised SPDX markup left after stripping".into(),
                    }
                    .into());
                }
                Ok(text)
            }
            None => {
                let context = RenderContext::from_answers(answers)?;
                self.templates.render(TemplateName::License, &context)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockAssetProvider, MockTemplateRenderer};
    use crate::domain::LicenseChoice;
    use crate::error::FoxxError;
    use mockall::predicate::eq;

    fn answers() -> ConfigAnswers {
        let mut answers = ConfigAnswers::new("svc", "1.0.0", "^3.0.0", "index.js");
        answers.generate_license = true;
        answers
    }

    #[test]
    fn bundled_license_is_stripped() {
        let mut assets = MockAssetProvider::new();
        assets
            .expect_license()
            .withf(|id| id == "MIT")
            .times(1)
            .returning(|_| {
                Ok("<<beginOptional;name=title>>MIT License<<endOptional>>\n\nCopyright \
                    <<var;name=copyright;original=(c) <year> <owner>;match=.+>>"
                    .to_string())
            });
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().never();

        let mut answers = answers();
        answers.license = Some(LicenseChoice::new("MIT"));

        let text = LicenseResolver::new(TemplateSet::new(&assets, &renderer))
            .resolve(&answers)
            .unwrap();

        assert!(!text.contains("<<"));
        assert!(text.starts_with("MIT License\n"));
    }

    #[test]
    fn unrecognised_markup_is_a_render_error() {
        let mut assets = MockAssetProvider::new();
        assets
            .expect_license()
            .returning(|_| Ok("Custom <<var;name=holder;original=ACME>>".to_string()));
        let renderer = MockTemplateRenderer::new();

        let mut answers = answers();
        answers.license = Some(LicenseChoice::new("Custom-1.0"));

        let err = LicenseResolver::new(TemplateSet::new(&assets, &renderer))
            .resolve(&answers)
            .unwrap_err();

        assert!(matches!(
            err,
            FoxxError::Application(ApplicationError::Render { ref template, .. })
                if template == "licenses/Custom-1.0"
        ));
    }

    #[test]
    fn without_id_renders_fallback_template() {
        let mut assets = MockAssetProvider::new();
        assets.expect_license().never();
        assets
            .expect_template()
            .with(eq(TemplateName::License))
            .returning(|_| Ok("Copyright {{authorName}}".to_string()));

        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(|name, _, context| {
                *name == TemplateName::License && context.contains("authorName")
            })
            .returning(|_, source, _| Ok(source.replace("{{authorName}}", "Jane")));

        let text = LicenseResolver::new(TemplateSet::new(&assets, &renderer))
            .resolve(&answers())
            .unwrap();

        assert_eq!(text, "Copyright Jane");
    }

    #[test]
    fn empty_id_counts_as_absent() {
        let mut assets = MockAssetProvider::new();
        assets.expect_license().never();
        assets
            .expect_template()
            .returning(|_| Ok(String::new()));
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|_, _, _| Ok("generic".to_string()));

        let mut answers = answers();
        answers.license = Some(LicenseChoice::new(""));

        let text = LicenseResolver::new(TemplateSet::new(&assets, &renderer))
            .resolve(&answers)
            .unwrap();
        assert_eq!(text, "generic");
    }

    #[test]
    fn unknown_license_propagates() {
        let mut assets = MockAssetProvider::new();
        assets.expect_license().returning(|id| {
            Err(ApplicationError::LicenseNotFound { id: id.to_string() }.into())
        });
        let renderer = MockTemplateRenderer::new();

        let mut answers = answers();
        answers.license = Some(LicenseChoice::new("WTFPL"));

        let err = LicenseResolver::new(TemplateSet::new(&assets, &renderer))
            .resolve(&answers)
            .unwrap_err();

        assert_eq!(
            err,
            FoxxError::Application(ApplicationError::LicenseNotFound {
                id: "WTFPL".into()
            })
        );
    }
}
