//! Asset corpus read from a directory.
//!
//! ```text
//! <dir>/
//!   templates/README.md.tpl
//!   templates/router.js.tpl
//!   licenses/MIT.txt
//! ```
//!
//! With a fallback provider, the directory only needs to contain the files
//! it overrides.

use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
};

use foxx_core::{
    application::{ApplicationError, ports::AssetProvider},
    domain::TemplateName,
    error::FoxxResult,
};
use tracing::{debug, instrument};
use walkdir::WalkDir;

const TEMPLATE_EXTENSION: &str = "tpl";
const LICENSE_EXTENSION: &str = "txt";

/// Assets loaded from disk on every lookup.
pub struct DirectoryAssets {
    root: PathBuf,
    fallback: Option<Box<dyn AssetProvider>>,
}

impl DirectoryAssets {
    /// Assets under `root`. The directory does not need to exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback: None,
        }
    }

    /// Consult `fallback` for anything the directory does not contain.
    pub fn with_fallback(mut self, fallback: impl AssetProvider + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn template_path(&self, name: TemplateName) -> PathBuf {
        self.root
            .join("templates")
            .join(format!("{}.{TEMPLATE_EXTENSION}", name.as_str()))
    }

    fn licenses_dir(&self) -> PathBuf {
        self.root.join("licenses")
    }

    /// `Ok(None)` if the file does not exist.
    fn read(path: &Path) -> FoxxResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApplicationError::AssetError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()),
        }
    }

    /// License ids may not address anything outside the licenses directory.
    fn is_plain_id(id: &str) -> bool {
        !id.is_empty() && !id.contains(['/', '\\']) && !id.starts_with('.')
    }
}

impl AssetProvider for DirectoryAssets {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn template(&self, name: TemplateName) -> FoxxResult<String> {
        let path = self.template_path(name);
        if let Some(content) = Self::read(&path)? {
            debug!(path = %path.display(), "Template loaded from directory");
            return Ok(content);
        }

        match &self.fallback {
            Some(fallback) => fallback.template(name),
            None => Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()),
        }
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn license(&self, id: &str) -> FoxxResult<String> {
        if Self::is_plain_id(id) {
            let path = self.licenses_dir().join(format!("{id}.{LICENSE_EXTENSION}"));
            if let Some(content) = Self::read(&path)? {
                debug!(path = %path.display(), "License loaded from directory");
                return Ok(content);
            }
        }

        match &self.fallback {
            Some(fallback) => fallback.license(id),
            None => Err(ApplicationError::LicenseNotFound { id: id.to_string() }.into()),
        }
    }

    fn license_ids(&self) -> FoxxResult<Vec<String>> {
        let mut ids = BTreeSet::new();

        let dir = self.licenses_dir();
        if dir.is_dir() {
            for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
                let entry = entry.map_err(|e| ApplicationError::AssetError {
                    path: dir.clone(),
                    reason: format!("directory walk error: {e}"),
                })?;
                let path = entry.path();
                if !entry.file_type().is_file()
                    || path.extension().and_then(|e| e.to_str()) != Some(LICENSE_EXTENSION)
                {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if Self::is_plain_id(stem) {
                        ids.insert(stem.to_string());
                    }
                }
            }
        }

        if let Some(fallback) = &self.fallback {
            ids.extend(fallback.license_ids()?);
        }

        Ok(ids.into_iter().collect())
    }
}
