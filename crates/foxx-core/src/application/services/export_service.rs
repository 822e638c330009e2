//! Export Service - persists a generated artifact set.
//!
//! Generation never touches the filesystem; this collaborator writes the
//! ordered artifacts below a root directory through the `Filesystem` port.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ArtifactSet, MANIFEST_FILE},
    error::FoxxResult,
};

/// Writes artifact sets to a filesystem.
pub struct ExportService {
    filesystem: Box<dyn Filesystem>,
}

impl ExportService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Write every artifact below `root`, in set order.
    ///
    /// Refuses to run when `root/manifest.json` exists, unless `overwrite`
    /// is set. If a write fails, files created by this call are removed
    /// again (files that existed before are left as they are).
    ///
    /// Returns the written paths.
    #[instrument(skip_all, fields(root = %root.display(), artifacts = artifacts.len()))]
    pub fn write(
        &self,
        root: &Path,
        artifacts: &ArtifactSet,
        overwrite: bool,
    ) -> FoxxResult<Vec<PathBuf>> {
        let manifest = root.join(MANIFEST_FILE);
        if !overwrite && self.filesystem.exists(&manifest) {
            return Err(ApplicationError::ManifestExists { path: manifest }.into());
        }

        let mut created = Vec::new();
        match self.write_all(root, artifacts, &mut created) {
            Ok(written) => {
                info!(files = written.len(), "Successfully wrote all files");
                Ok(written)
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(&created);
                Err(e)
            }
        }
    }

    fn write_all(
        &self,
        root: &Path,
        artifacts: &ArtifactSet,
        created: &mut Vec<PathBuf>,
    ) -> FoxxResult<Vec<PathBuf>> {
        self.filesystem.create_dir_all(root)?;

        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = root.join(artifact.relative_path()?);

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            let existed = self.filesystem.exists(&path);
            self.filesystem.write_file(&path, &artifact.content)?;
            if !existed {
                created.push(path.clone());
            }
            written.push(path);
        }

        Ok(written)
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, created: &[PathBuf]) {
        for path in created.iter().rev() {
            if let Err(e) = self.filesystem.remove_file(path) {
                warn!(
                    error = %e,
                    path = %path.display(),
                    "Rollback failed"
                );
            }
        }
        info!(removed = created.len(), "Rollback finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::FileArtifact;
    use crate::error::FoxxError;
    use std::sync::{Arc, Mutex};

    fn bundle() -> ArtifactSet {
        ArtifactSet::new(vec![
            FileArtifact::new("manifest.json", "{}"),
            FileArtifact::new("api/todos.js", "// todos"),
            FileArtifact::new("setup.js", "// setup"),
        ])
        .unwrap()
    }

    #[test]
    fn writes_in_order_below_root() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&writes);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |path, _| {
            log.lock().unwrap().push(path.to_path_buf());
            Ok(())
        });
        fs.expect_remove_file().never();

        let written = ExportService::new(Box::new(fs))
            .write(Path::new("svc"), &bundle(), false)
            .unwrap();

        let expected = vec![
            PathBuf::from("svc/manifest.json"),
            PathBuf::from("svc/api/todos.js"),
            PathBuf::from("svc/setup.js"),
        ];
        assert_eq!(written, expected);
        assert_eq!(*writes.lock().unwrap(), expected);
    }

    #[test]
    fn nested_names_resolve_below_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path.starts_with("out/svc") && !path.to_string_lossy().contains(".."))
            .returning(|_, _| Ok(()));

        let set = ArtifactSet::new(vec![
            FileArtifact::new("manifest.json", "{}"),
            FileArtifact::new("api/v1/todos.js", ""),
        ])
        .unwrap();
        let written = ExportService::new(Box::new(fs))
            .write(Path::new("out/svc"), &set, false)
            .unwrap();

        assert_eq!(written[1], PathBuf::from("out/svc/api/v1/todos.js"));
    }

    #[test]
    fn escaping_name_never_reaches_the_filesystem() {
        // The set cannot be built, so nothing is ever handed to `write`.
        let err = ArtifactSet::new(vec![
            FileArtifact::new("manifest.json", "{}"),
            FileArtifact::new("api/../../escaped.js", ""),
        ])
        .unwrap_err();
        assert_eq!(
            FoxxError::from(err),
            FoxxError::Domain(crate::domain::DomainError::PathEscapesRoot {
                path: "api/../../escaped.js".into()
            })
        );
    }

    #[test]
    fn existing_manifest_is_refused() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("svc/manifest.json"))
            .returning(|_| true);
        fs.expect_write_file().never();

        let err = ExportService::new(Box::new(fs))
            .write(Path::new("svc"), &bundle(), false)
            .unwrap_err();

        assert_eq!(
            err,
            FoxxError::Application(ApplicationError::ManifestExists {
                path: PathBuf::from("svc/manifest.json")
            })
        );
    }

    #[test]
    fn overwrite_skips_manifest_check_and_keeps_old_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            if path.ends_with("setup.js") {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        // Everything already existed, so nothing is rolled back.
        fs.expect_remove_file().never();

        let result = ExportService::new(Box::new(fs)).write(Path::new("svc"), &bundle(), true);
        assert!(result.is_err());
    }

    #[test]
    fn failed_write_removes_created_files() {
        let removed = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&removed);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            if path.ends_with("setup.js") {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        fs.expect_remove_file().returning(move |path| {
            log.lock().unwrap().push(path.to_path_buf());
            Ok(())
        });

        let err = ExportService::new(Box::new(fs))
            .write(Path::new("svc"), &bundle(), false)
            .unwrap_err();

        assert!(matches!(
            err,
            FoxxError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert_eq!(
            *removed.lock().unwrap(),
            vec![
                PathBuf::from("svc/api/todos.js"),
                PathBuf::from("svc/manifest.json"),
            ]
        );
    }
}
