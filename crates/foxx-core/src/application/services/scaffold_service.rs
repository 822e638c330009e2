//! Scaffold Service - main application orchestrator.
//!
//! This service turns one set of answers into the ordered artifact list of a
//! service bundle:
//! 1. Build the manifest (always first)
//! 2. Plan the remaining artifacts from the generate flags
//! 3. Render every planned artifact, in parallel
//! 4. Reassemble the results in plan order
//!
//! It performs no I/O besides reading the injected asset corpus; persisting
//! the result is the job of [`ExportService`](super::ExportService).

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{AssetProvider, TemplateRenderer},
        services::{LicenseResolver, TemplateSet},
    },
    domain::{
        ArtifactSet, CollectionNamePair, ConfigAnswers, FileArtifact, MANIFEST_FILE,
        ManifestDescriptor, RenderContext, TemplateName,
    },
    error::FoxxResult,
};

/// One artifact still to be rendered.
#[derive(Debug, Clone, PartialEq)]
enum RenderJob {
    Template {
        path: String,
        template: TemplateName,
        context: RenderContext,
    },
    License,
}

impl RenderJob {
    fn path(&self) -> &str {
        match self {
            Self::Template { path, .. } => path,
            Self::License => TemplateName::License.as_str(),
        }
    }

    fn run(&self, templates: TemplateSet<'_>, answers: &ConfigAnswers) -> FoxxResult<FileArtifact> {
        let content = match self {
            Self::Template {
                template, context, ..
            } => templates.render(*template, context)?,
            Self::License => LicenseResolver::new(templates).resolve(answers)?,
        };
        Ok(FileArtifact::new(self.path(), content))
    }
}

/// Main scaffolding service (the file-set assembler).
///
/// Stateless between calls: two calls with equal answers against an
/// unchanged corpus return identical artifact sets.
pub struct ScaffoldService {
    assets: Box<dyn AssetProvider>,
    renderer: Box<dyn TemplateRenderer>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use foxx_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     Box::new(assets),   // impl AssetProvider
    ///     Box::new(renderer), // impl TemplateRenderer
    /// );
    /// ```
    pub fn new(assets: Box<dyn AssetProvider>, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { assets, renderer }
    }

    /// Generate the artifacts of a service bundle.
    ///
    /// Order is fixed by the generate rules, never by render completion:
    /// `manifest.json`, `README.md`, `LICENSE`, `api/<collection>.js` for
    /// document then edge collections, `setup.js`, `teardown.js`. Any
    /// failure aborts the call; no partial set is returned.
    #[instrument(skip_all, fields(service = %answers.name))]
    pub fn generate(&self, answers: &ConfigAnswers) -> FoxxResult<ArtifactSet> {
        let manifest = ManifestDescriptor::build(answers);
        debug!(keys = ?manifest.keys().collect::<Vec<_>>(), "Manifest built");

        let jobs = Self::plan(answers)?;
        debug!(jobs = jobs.len(), "Render plan ready");

        let templates = self.templates();
        let rendered = jobs
            .into_par_iter()
            .map(|job| job.run(templates, answers))
            .collect::<FoxxResult<Vec<_>>>()?;

        let mut artifacts = Vec::with_capacity(rendered.len() + 1);
        artifacts.push(FileArtifact::new(MANIFEST_FILE, manifest.to_json_string()));
        artifacts.extend(rendered);

        let set = ArtifactSet::new(artifacts)?;
        info!(artifacts = set.len(), "Service bundle generated");
        Ok(set)
    }

    /// SPDX identifiers the injected corpus can resolve, sorted.
    pub fn license_ids(&self) -> FoxxResult<Vec<String>> {
        self.assets.license_ids()
    }

    fn templates(&self) -> TemplateSet<'_> {
        TemplateSet::new(self.assets.as_ref(), self.renderer.as_ref())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Every artifact after the manifest, in emission order.
    fn plan(answers: &ConfigAnswers) -> FoxxResult<Vec<RenderJob>> {
        let mut jobs = Vec::new();

        // The README and lifecycle scripts share one context built from
        // the answers.
        let needs_answers_context = answers.generate_readme
            || answers.emits_setup_script()
            || answers.emits_teardown_script();
        let answers_context = if needs_answers_context {
            RenderContext::from_answers(answers)?
        } else {
            RenderContext::new()
        };

        if answers.generate_readme {
            jobs.push(Self::template_job(TemplateName::ReadMe, &answers_context));
        }

        if answers.generate_license {
            jobs.push(RenderJob::License);
        }

        if answers.generate_example_routers {
            for pair in CollectionNamePair::for_answers(answers) {
                jobs.push(RenderJob::Template {
                    path: pair.router_path(),
                    template: TemplateName::Router,
                    context: RenderContext::for_collection(&pair),
                });
            }
        }

        if answers.emits_setup_script() {
            jobs.push(Self::template_job(TemplateName::Setup, &answers_context));
        }

        if answers.emits_teardown_script() {
            jobs.push(Self::template_job(TemplateName::Teardown, &answers_context));
        }

        Ok(jobs)
    }

    fn template_job(template: TemplateName, context: &RenderContext) -> RenderJob {
        RenderJob::Template {
            path: template.as_str().to_string(),
            template,
            context: context.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockAssetProvider, MockTemplateRenderer};
    use crate::domain::{DomainError, LicenseChoice};
    use crate::error::FoxxError;

    /// Assets answer every template with its own name.
    fn echo_assets() -> MockAssetProvider {
        let mut assets = MockAssetProvider::new();
        assets
            .expect_template()
            .returning(|name| Ok(name.as_str().to_string()));
        assets
    }

    /// Renderer tags each output with the template and router collection.
    fn tagging_renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|name, source, context| {
            let collection = context
                .get("collection")
                .and_then(|v| v.as_str())
                .unwrap_or("-");
            Ok(format!("{name}|{source}|{collection}"))
        });
        renderer
    }

    fn service(assets: MockAssetProvider, renderer: MockTemplateRenderer) -> ScaffoldService {
        ScaffoldService::new(Box::new(assets), Box::new(renderer))
    }

    fn hello() -> ConfigAnswers {
        ConfigAnswers::new("hello-service", "1.0.0", "^3.0.0", "index.js")
    }

    #[test]
    fn minimal_answers_produce_only_manifest() {
        let mut assets = MockAssetProvider::new();
        assets.expect_template().never();
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().never();

        let set = service(assets, renderer).generate(&hello()).unwrap();

        assert_eq!(set.names().collect::<Vec<_>>(), vec!["manifest.json"]);
        let manifest: serde_json::Value =
            serde_json::from_str(&set.get("manifest.json").unwrap().content).unwrap();
        assert_eq!(
            manifest,
            serde_json::json!({
                "name": "hello-service",
                "version": "1.0.0",
                "engines": { "arangodb": "^3.0.0" },
                "main": "index.js"
            })
        );
    }

    #[test]
    fn routers_and_scripts_follow_emission_order() {
        let mut answers = hello();
        answers.document_collections = vec!["todos".into(), "people".into()];
        answers.edge_collections = vec!["assignments".into()];
        answers.generate_example_routers = true;
        answers.generate_setup = true;
        answers.generate_teardown = true;

        let set = service(echo_assets(), tagging_renderer())
            .generate(&answers)
            .unwrap();

        assert_eq!(
            set.names().collect::<Vec<_>>(),
            vec![
                "manifest.json",
                "api/todos.js",
                "api/people.js",
                "api/assignments.js",
                "setup.js",
                "teardown.js",
            ]
        );
        assert_eq!(
            set.get("api/people.js").unwrap().content,
            "router.js|router.js|people"
        );
        assert_eq!(set.get("setup.js").unwrap().content, "setup.js|setup.js|-");
    }

    #[test]
    fn every_flag_yields_full_bundle_in_order() {
        let mut assets = echo_assets();
        assets
            .expect_license()
            .returning(|_| Ok("<<beginOptional;name=t>>MIT<<endOptional>>".to_string()));

        let mut answers = hello().with_all_generators();
        answers.license = Some(LicenseChoice::new("MIT"));
        answers.document_collections = vec!["todos".into()];

        let set = service(assets, tagging_renderer())
            .generate(&answers)
            .unwrap();

        assert_eq!(
            set.names().collect::<Vec<_>>(),
            vec![
                "manifest.json",
                "README.md",
                "LICENSE",
                "api/todos.js",
                "setup.js",
                "teardown.js",
            ]
        );
        assert_eq!(set.get("LICENSE").unwrap().content, "MIT");
    }

    #[test]
    fn scripts_need_example_routers() {
        let mut answers = hello();
        answers.generate_setup = true;
        answers.generate_teardown = true;

        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().never();

        let set = service(echo_assets(), renderer).generate(&answers).unwrap();

        assert_eq!(set.len(), 1);
        // The manifest still references them.
        assert!(set.get("manifest.json").unwrap().content.contains("\"scripts\""));
    }

    #[test]
    fn missing_template_aborts_generation() {
        let mut assets = MockAssetProvider::new();
        assets.expect_template().returning(|name| match name {
            TemplateName::Teardown => Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()),
            other => Ok(other.as_str().to_string()),
        });

        let mut answers = hello();
        answers.document_collections = vec!["todos".into()];
        answers.generate_example_routers = true;
        answers.generate_teardown = true;

        let err = service(assets, tagging_renderer())
            .generate(&answers)
            .unwrap_err();

        assert_eq!(
            err,
            FoxxError::Application(ApplicationError::TemplateNotFound {
                name: "teardown.js".into()
            })
        );
    }

    #[test]
    fn render_error_propagates_unchanged() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|name, _, _| {
            Err(ApplicationError::Render {
                template: name.to_string(),
                reason: "unknown variable 'missing'".into(),
            }
            .into())
        });

        let mut answers = hello();
        answers.generate_readme = true;

        let err = service(echo_assets(), renderer)
            .generate(&answers)
            .unwrap_err();
        assert!(matches!(
            err,
            FoxxError::Application(ApplicationError::Render { .. })
        ));
    }

    #[test]
    fn duplicate_collection_is_rejected() {
        let mut answers = hello();
        answers.document_collections = vec!["todos".into()];
        answers.edge_collections = vec!["todos".into()];
        answers.generate_example_routers = true;

        let err = service(echo_assets(), tagging_renderer())
            .generate(&answers)
            .unwrap_err();

        assert_eq!(
            err,
            FoxxError::Domain(DomainError::DuplicateArtifact {
                name: "api/todos.js".into()
            })
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let mut answers = hello().with_all_generators();
        answers.document_collections = (0..32).map(|i| format!("things{i}")).collect();

        let service = service(echo_assets(), tagging_renderer());
        let first = service.generate(&answers).unwrap();
        let second = service.generate(&answers).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn license_ids_come_from_assets() {
        let mut assets = MockAssetProvider::new();
        assets
            .expect_license_ids()
            .returning(|| Ok(vec!["ISC".into(), "MIT".into()]));

        let ids = service(assets, MockTemplateRenderer::new())
            .license_ids()
            .unwrap();
        assert_eq!(ids, vec!["ISC", "MIT"]);
    }
}
