//! Configuration answers: the single input of the scaffold generator.
//!
//! Answers are produced by an external collaborator (interactive wizard,
//! CLI flags, or a JSON answers file) and are treated as immutable for the
//! duration of a generation call. The field names serialize in camelCase so
//! that an answers file and the render context of a template use the same
//! vocabulary (`engineVersion`, `generateReadMe`, ...).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// License selected for the service.
///
/// Only the SPDX identifier is used by the generator; any further fields in
/// an answers file are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseChoice {
    pub id: String,
}

impl LicenseChoice {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Validated configuration for one generation call.
///
/// Optional values follow a presence rule: `None`, an empty string and a
/// JSON `null` are all treated as "not provided".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigAnswers {
    pub name: String,
    pub version: String,
    pub engine_version: String,
    pub main_file: String,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub license: Option<LicenseChoice>,
    #[serde(default)]
    pub generate_license: bool,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_email: Option<String>,

    /// Opaque, passed through to the manifest untouched.
    #[serde(default)]
    pub configuration: Option<Value>,
    #[serde(default)]
    pub dependencies: Option<Value>,
    #[serde(default)]
    pub provides: Option<Value>,

    #[serde(default)]
    pub generate_setup: bool,
    #[serde(default)]
    pub generate_teardown: bool,
    #[serde(default, rename = "generateReadMe")]
    pub generate_readme: bool,
    #[serde(default)]
    pub generate_example_routers: bool,

    #[serde(default)]
    pub document_collections: Vec<String>,
    #[serde(default)]
    pub edge_collections: Vec<String>,
}

impl ConfigAnswers {
    /// Answers with only the four required fields set.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        engine_version: impl Into<String>,
        main_file: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            engine_version: engine_version.into(),
            main_file: main_file.into(),
            description: None,
            license: None,
            generate_license: false,
            author_name: None,
            author_email: None,
            configuration: None,
            dependencies: None,
            provides: None,
            generate_setup: false,
            generate_teardown: false,
            generate_readme: false,
            generate_example_routers: false,
            document_collections: Vec::new(),
            edge_collections: Vec::new(),
        }
    }

    /// The chosen SPDX identifier, if one was provided.
    pub fn license_id(&self) -> Option<&str> {
        self.license
            .as_ref()
            .map(|l| l.id.as_str())
            .filter(|id| !id.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        present(self.description.as_deref())
    }

    pub fn author_name(&self) -> Option<&str> {
        present(self.author_name.as_deref())
    }

    pub fn author_email(&self) -> Option<&str> {
        present(self.author_email.as_deref())
    }

    /// Whether `setup.js` is emitted as an artifact.
    ///
    /// Lifecycle scripts are only generated together with the example
    /// routers, even though the manifest still references them.
    pub fn emits_setup_script(&self) -> bool {
        self.generate_example_routers && self.generate_setup
    }

    /// Whether `teardown.js` is emitted as an artifact.
    pub fn emits_teardown_script(&self) -> bool {
        self.generate_example_routers && self.generate_teardown
    }

    /// Enable every generate flag.
    pub fn with_all_generators(mut self) -> Self {
        self.generate_license = true;
        self.generate_setup = true;
        self.generate_teardown = true;
        self.generate_readme = true;
        self.generate_example_routers = true;
        self
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Opaque values count as present unless they are JSON `null`.
pub(crate) fn present_value(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_answers_file() {
        let answers: ConfigAnswers = serde_json::from_value(json!({
            "name": "hello-service",
            "version": "1.0.0",
            "engineVersion": "^3.0.0",
            "mainFile": "index.js",
            "license": { "id": "MIT", "name": "MIT License" },
            "generateReadMe": true,
            "documentCollections": ["todos"]
        }))
        .unwrap();

        assert_eq!(answers.engine_version, "^3.0.0");
        assert_eq!(answers.license_id(), Some("MIT"));
        assert!(answers.generate_readme);
        assert!(!answers.generate_license);
        assert_eq!(answers.document_collections, vec!["todos"]);
        assert!(answers.edge_collections.is_empty());
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let mut answers = ConfigAnswers::new("svc", "0.0.0", "^3.0.0", "index.js");
        answers.description = Some(String::new());
        answers.license = Some(LicenseChoice::new(""));

        assert_eq!(answers.description(), None);
        assert_eq!(answers.license_id(), None);
    }

    #[test]
    fn lifecycle_scripts_require_routers() {
        let mut answers = ConfigAnswers::new("svc", "0.0.0", "^3.0.0", "index.js");
        answers.generate_setup = true;
        answers.generate_teardown = true;
        assert!(!answers.emits_setup_script());
        assert!(!answers.emits_teardown_script());

        answers.generate_example_routers = true;
        assert!(answers.emits_setup_script());
        assert!(answers.emits_teardown_script());
    }

    #[test]
    fn null_opaque_value_is_absent() {
        assert!(present_value(&Some(Value::Null)).is_none());
        assert!(present_value(&Some(json!({}))).is_some());
        assert!(present_value(&None).is_none());
    }
}
