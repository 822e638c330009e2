//! Template identities and render contexts.
//!
//! The template set is closed: five named templates ship with every asset
//! corpus. A [`RenderContext`] is the variable scope a template is rendered
//! against; it is a JSON object so that answers, nested values (`license.id`)
//! and lists (`documentCollections`) share one representation.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::domain::error::DomainError;

use super::answers::ConfigAnswers;
use super::collection::CollectionNamePair;

/// The fixed set of templates known to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateName {
    ReadMe,
    /// Fallback license text, used when no SPDX identifier was chosen.
    License,
    Router,
    Setup,
    Teardown,
}

impl TemplateName {
    pub const ALL: [TemplateName; 5] = [
        TemplateName::ReadMe,
        TemplateName::License,
        TemplateName::Router,
        TemplateName::Setup,
        TemplateName::Teardown,
    ];

    /// Asset name of the template (also the artifact name it produces, except
    /// for the router).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadMe => "README.md",
            Self::License => "LICENSE",
            Self::Router => "router.js",
            Self::Setup => "setup.js",
            Self::Teardown => "teardown.js",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTemplate(s.to_string()))
    }
}

/// Variables available to a template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    variables: Map<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context exposing every answer under its camelCase name.
    ///
    /// Absent optional answers are present as `null` so templates can test
    /// them with `{{#if}}` without tripping the missing-variable check.
    pub fn from_answers(answers: &ConfigAnswers) -> Result<Self, DomainError> {
        match serde_json::to_value(answers) {
            Ok(Value::Object(variables)) => Ok(Self { variables }),
            Ok(other) => Err(DomainError::InvalidContext(format!(
                "answers serialized to {other} instead of an object"
            ))),
            Err(e) => Err(DomainError::InvalidContext(e.to_string())),
        }
    }

    /// Context of one example router.
    pub fn for_collection(pair: &CollectionNamePair) -> Self {
        Self::new()
            .with_variable("collection", pair.collection.as_str())
            .with_variable("isEdgeCollection", pair.is_edge)
            .with_variable("singular", pair.singular.as_str())
            .with_variable("plural", pair.plural.as_str())
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.variables.get(key)
    }

    /// Resolve a dotted path (`license.id`).
    ///
    /// Returns `None` if any segment is missing. Walking through a `null`
    /// parent yields `Some(Null)`, so an optional object can be probed for a
    /// field without failing.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        lookup_in(&self.variables, path)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }
}

/// Dotted-path lookup shared by contexts and nested scopes.
pub fn lookup_in<'a>(root: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = root.get(segments.next()?)?;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Null => return Some(current),
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::answers::LicenseChoice;
    use serde_json::json;

    #[test]
    fn template_names_round_trip_through_asset_names() {
        for name in TemplateName::ALL {
            assert_eq!(name.as_str().parse::<TemplateName>().unwrap(), name);
        }
        assert!("index.js".parse::<TemplateName>().is_err());
    }

    #[test]
    fn answers_context_exposes_camel_case_keys() {
        let mut answers = ConfigAnswers::new("svc", "1.0.0", "^3.0.0", "index.js");
        answers.license = Some(LicenseChoice::new("MIT"));

        let ctx = RenderContext::from_answers(&answers).unwrap();
        assert_eq!(ctx.get("engineVersion"), Some(&json!("^3.0.0")));
        assert_eq!(ctx.get("generateReadMe"), Some(&json!(false)));
        assert_eq!(ctx.get("description"), Some(&Value::Null));
        assert_eq!(ctx.lookup("license.id"), Some(&json!("MIT")));
        assert_eq!(ctx.get("documentCollections"), Some(&json!([])));
    }

    #[test]
    fn lookup_through_null_parent_is_null() {
        let answers = ConfigAnswers::new("svc", "1.0.0", "^3.0.0", "index.js");
        let ctx = RenderContext::from_answers(&answers).unwrap();
        assert_eq!(ctx.lookup("license.id"), Some(&Value::Null));
        assert_eq!(ctx.lookup("nope.id"), None);
        assert_eq!(ctx.lookup("name.first"), None);
    }

    #[test]
    fn collection_context() {
        let pair = CollectionNamePair::new("todos", false);
        let ctx = RenderContext::for_collection(&pair);
        assert_eq!(ctx.get("collection"), Some(&json!("todos")));
        assert_eq!(ctx.get("isEdgeCollection"), Some(&json!(false)));
        assert_eq!(ctx.get("singular"), Some(&json!("todo")));
        assert_eq!(ctx.get("plural"), Some(&json!("todos")));
    }
}
