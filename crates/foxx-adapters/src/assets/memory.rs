//! In-memory asset corpus.

use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, RwLock},
};

use foxx_core::{
    application::{ApplicationError, ports::AssetProvider},
    domain::TemplateName,
    error::FoxxResult,
};

use super::EmbeddedAssets;

#[derive(Debug, Default)]
struct Corpus {
    templates: HashMap<TemplateName, String>,
    licenses: BTreeMap<String, String>,
}

/// Thread-safe in-memory asset corpus, used as a test double.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssets {
    inner: Arc<RwLock<Corpus>>,
}

impl InMemoryAssets {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a corpus holding a copy of the embedded assets.
    pub fn with_embedded() -> Self {
        let assets = Self::new();
        for name in TemplateName::ALL {
            assets.insert_template(name, EmbeddedAssets::template_source(name));
        }
        if let Ok(ids) = EmbeddedAssets.license_ids() {
            for id in ids {
                if let Some(text) = EmbeddedAssets::license_source(&id) {
                    assets.insert_license(id, text);
                }
            }
        }
        assets
    }

    pub fn with_template(self, name: TemplateName, source: impl Into<String>) -> Self {
        self.insert_template(name, source);
        self
    }

    pub fn with_license(self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert_license(id, text);
        self
    }

    /// Insert or replace a template.
    pub fn insert_template(&self, name: TemplateName, source: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.templates.insert(name, source.into());
        }
    }

    /// Insert or replace a license text.
    pub fn insert_license(&self, id: impl Into<String>, text: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.licenses.insert(id.into(), text.into());
        }
    }

    /// Remove a template, returning whether it was present.
    pub fn remove_template(&self, name: TemplateName) -> bool {
        self.inner
            .write()
            .map(|mut inner| inner.templates.remove(&name).is_some())
            .unwrap_or(false)
    }
}

impl AssetProvider for InMemoryAssets {
    fn template(&self, name: TemplateName) -> FoxxResult<String> {
        let inner = self.inner.read().map_err(|_| ApplicationError::LockError)?;

        inner.templates.get(&name).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn license(&self, id: &str) -> FoxxResult<String> {
        let inner = self.inner.read().map_err(|_| ApplicationError::LockError)?;

        inner
            .licenses
            .get(id)
            .cloned()
            .ok_or_else(|| ApplicationError::LicenseNotFound { id: id.to_string() }.into())
    }

    fn license_ids(&self) -> FoxxResult<Vec<String>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::LockError)?;
        Ok(inner.licenses.keys().cloned().collect())
    }
}
