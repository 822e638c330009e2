use std::collections::HashSet;
use std::path::{Component, Path};

use crate::domain::error::DomainError;

/// One generated file, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    /// Relative path, `/`-separated (e.g. `api/todos.js`).
    pub name: String,
    pub content: String,
}

impl FileArtifact {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// The name as a path relative to the export root.
    ///
    /// Rejects rooted names and names with `.`, `..` or empty segments, so
    /// joining the result onto a root never leaves it.
    pub fn relative_path(&self) -> Result<&Path, DomainError> {
        let path = Path::new(&self.name);
        let rooted = self.name.starts_with(['/', '\\'])
            || path
                .components()
                .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)));
        if rooted {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: self.name.clone(),
            });
        }

        // `Path::components` drops interior `.` segments, so split by hand.
        if self
            .name
            .split(['/', '\\'])
            .any(|segment| matches!(segment, "" | "." | ".."))
        {
            return Err(DomainError::PathEscapesRoot {
                path: self.name.clone(),
            });
        }
        Ok(path)
    }
}

/// Ordered result of one generation call.
///
/// Order is the emission order of the assembly rules. Names are unique;
/// [`ArtifactSet::new`] rejects duplicates and any name that would
/// resolve outside the export root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    artifacts: Vec<FileArtifact>,
}

impl ArtifactSet {
    pub fn new(artifacts: Vec<FileArtifact>) -> Result<Self, DomainError> {
        let set = Self { artifacts };
        set.validate()?;
        Ok(set)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for artifact in &self.artifacts {
            artifact.relative_path()?;
            if !seen.insert(artifact.name.as_str()) {
                return Err(DomainError::DuplicateArtifact {
                    name: artifact.name.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.artifacts.iter().map(|a| a.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&FileArtifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileArtifact> {
        self.artifacts.iter()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn into_vec(self) -> Vec<FileArtifact> {
        self.artifacts
    }
}

impl IntoIterator for ArtifactSet {
    type Item = FileArtifact;
    type IntoIter = std::vec::IntoIter<FileArtifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a FileArtifact;
    type IntoIter = std::slice::Iter<'a, FileArtifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}
