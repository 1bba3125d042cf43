//! User-declared relations between named nodes
//!
//! Relations are not validated against the graph: a relation may name a
//! node that was never compiled and is emitted literally.

use serde::{Deserialize, Serialize};

/// Edge label used when a relation does not carry one
pub const DEFAULT_EDGE: &str = "->";

/// Common PlantUML class relation arrows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    Dependency,  // ..>
    Association, // -->
    Inheritance, // <|--
    Realization, // ..|>
    Composition, // *--
    Aggregation, // o--
    Link,        // --
}

impl RelationshipKind {
    pub fn arrow(self) -> &'static str {
        match self {
            RelationshipKind::Dependency => "..>",
            RelationshipKind::Association => "-->",
            RelationshipKind::Inheritance => "<|--",
            RelationshipKind::Realization => "..|>",
            RelationshipKind::Composition => "*--",
            RelationshipKind::Aggregation => "o--",
            RelationshipKind::Link => "--",
        }
    }
}

impl From<RelationshipKind> for String {
    fn from(kind: RelationshipKind) -> Self {
        kind.arrow().to_string()
    }
}

/// An extra edge between two named nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub from_cardinality: Option<String>,
    #[serde(default)]
    pub to_cardinality: Option<String>,
}

impl Relation {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            from_cardinality: None,
            to_cardinality: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_cardinality(self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.with_from_cardinality(from).with_to_cardinality(to)
    }

    pub fn with_from_cardinality(mut self, cardinality: impl Into<String>) -> Self {
        self.from_cardinality = Some(cardinality.into());
        self
    }

    pub fn with_to_cardinality(mut self, cardinality: impl Into<String>) -> Self {
        self.to_cardinality = Some(cardinality.into());
        self
    }

    /// Edge label, falling back to [`DEFAULT_EDGE`]
    pub fn edge(&self) -> &str {
        non_empty(&self.label).unwrap_or(DEFAULT_EDGE)
    }

    pub fn from_label(&self) -> Option<&str> {
        non_empty(&self.from_cardinality)
    }

    pub fn to_label(&self) -> Option<&str> {
        non_empty(&self.to_cardinality)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Append-only list of relations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationStore {
    relations: Vec<Relation>,
}

impl RelationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relation> {
        self.relations.iter()
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}
