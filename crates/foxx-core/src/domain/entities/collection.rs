use crate::domain::inflection::{InflectedName, inflect};

use super::answers::ConfigAnswers;

/// A collection that receives an example router, with the identifiers the
/// router template uses for one document (`singular`) and many (`plural`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionNamePair {
    pub collection: String,
    pub is_edge: bool,
    pub singular: String,
    pub plural: String,
}

impl CollectionNamePair {
    pub fn new(collection: impl Into<String>, is_edge: bool) -> Self {
        let collection = collection.into();
        let InflectedName { singular, plural } = inflect(&collection);
        Self {
            collection,
            is_edge,
            singular,
            plural,
        }
    }

    /// Path of the generated router, relative to the service root.
    pub fn router_path(&self) -> String {
        format!("api/{}.js", self.collection)
    }

    /// Document collections in input order, then edge collections in input
    /// order.
    pub fn for_answers(answers: &ConfigAnswers) -> Vec<Self> {
        answers
            .document_collections
            .iter()
            .map(|name| Self::new(name.as_str(), false))
            .chain(
                answers
                    .edge_collections
                    .iter()
                    .map(|name| Self::new(name.as_str(), true)),
            )
            .collect()
    }
}
