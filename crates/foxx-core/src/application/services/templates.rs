//! Template lookup plus rendering, as one capability.

use tracing::debug;

use crate::{
    application::ports::{AssetProvider, TemplateRenderer},
    domain::{RenderContext, TemplateName},
    error::FoxxResult,
};

/// Borrowed pair of asset provider and renderer.
///
/// Cheap to copy into every render job.
#[derive(Clone, Copy)]
pub struct TemplateSet<'a> {
    assets: &'a dyn AssetProvider,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> TemplateSet<'a> {
    pub fn new(assets: &'a dyn AssetProvider, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { assets, renderer }
    }

    /// Load template `name` from the corpus and render it.
    pub fn render(&self, name: TemplateName, context: &RenderContext) -> FoxxResult<String> {
        let source = self.assets.template(name)?;
        debug!(template = %name, bytes = source.len(), "Rendering template");
        self.renderer.render(name, &source, context)
    }

    pub fn assets(&self) -> &'a dyn AssetProvider {
        self.assets
    }
}
