//! Service manifest (`manifest.json`) assembly.
//!
//! The manifest is described as a fixed, ordered list of candidate fields.
//! Each candidate carries an optional value; absent candidates are filtered
//! out before serialization. Emission order and presence rules are therefore
//! visible in one place ([`ManifestDescriptor::candidates`]) and testable
//! without going through JSON text.

use serde_json::{Map, Value, json};

use super::answers::{ConfigAnswers, present_value};

/// Path of the manifest artifact, always first in a generation result.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Value of `license` when a license file is generated without an SPDX id.
pub const LICENSE_FILE_SENTINEL: &str = "SEE LICENSE IN LICENSE";

pub const SETUP_SCRIPT: &str = "setup.js";
pub const TEARDOWN_SCRIPT: &str = "teardown.js";

/// Manifest document with a fixed key order.
///
/// Invariant: every key has a value; no key exists whose source answer was
/// absent or false.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDescriptor {
    fields: Vec<(&'static str, Value)>,
}

impl ManifestDescriptor {
    /// Build the manifest for a set of answers. Total over well-formed input.
    pub fn build(answers: &ConfigAnswers) -> Self {
        let fields = Self::candidates(answers)
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect();
        Self { fields }
    }

    /// Every manifest key in emission order, paired with its value if the
    /// corresponding answer is present.
    pub fn candidates(answers: &ConfigAnswers) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("name", Some(json!(answers.name))),
            ("version", Some(json!(answers.version))),
            (
                "engines",
                Some(json!({ "arangodb": answers.engine_version })),
            ),
            ("main", Some(json!(answers.main_file))),
            ("license", license_field(answers).map(Value::from)),
            ("description", answers.description().map(Value::from)),
            ("configuration", present_value(&answers.configuration).cloned()),
            ("dependencies", present_value(&answers.dependencies).cloned()),
            ("provides", present_value(&answers.provides).cloned()),
            ("author", author_field(answers).map(Value::from)),
            ("scripts", scripts_field(answers)),
        ]
    }

    /// Keys in emission order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(key, _)| *key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The manifest as an insertion-ordered JSON object.
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect();
        Value::Object(map)
    }

    /// Canonical text: 2-space indentation, no trailing newline.
    pub fn to_json_string(&self) -> String {
        format!("{:#}", self.to_value())
    }
}

fn license_field(answers: &ConfigAnswers) -> Option<&str> {
    match answers.license_id() {
        Some(id) => Some(id),
        None if answers.generate_license => Some(LICENSE_FILE_SENTINEL),
        None => None,
    }
}

fn author_field(answers: &ConfigAnswers) -> Option<String> {
    match (answers.author_name(), answers.author_email()) {
        (name, Some(email)) => {
            let name = name.unwrap_or_else(|| email.split('@').next().unwrap_or(email));
            Some(format!("{name} <{email}>"))
        }
        (Some(name), None) => Some(name.to_string()),
        (None, None) => None,
    }
}

fn scripts_field(answers: &ConfigAnswers) -> Option<Value> {
    if !answers.generate_setup && !answers.generate_teardown {
        return None;
    }

    let mut scripts = Map::new();
    if answers.generate_setup {
        scripts.insert("setup".into(), SETUP_SCRIPT.into());
    }
    if answers.generate_teardown {
        scripts.insert("teardown".into(), TEARDOWN_SCRIPT.into());
    }
    Some(Value::Object(scripts))
}
