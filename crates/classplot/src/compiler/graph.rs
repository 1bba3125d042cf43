//! Compiled class graph
//!
//! Nodes are keyed by qualified name and kept in insertion order, which is
//! also the order they are emitted in.

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{Member, MemberKind, PublicSurfaceEntry, QualifiedName};

/// A compiled interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceNode {
    pub name: QualifiedName,
    pub required: Vec<(String, MemberKind)>,
}

/// A compiled class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassNode {
    pub name: QualifiedName,
    pub parent: Option<QualifiedName>,
    /// Own members, without names that are part of the public surface
    pub members: IndexMap<String, Member>,
    pub public_surface: IndexMap<String, PublicSurfaceEntry>,
    pub interfaces: Vec<QualifiedName>,
}

impl ClassNode {
    pub fn has_public_surface(&self) -> bool {
        !self.public_surface.is_empty()
    }
}

/// A graph node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GraphNode {
    Class(ClassNode),
    Interface(InterfaceNode),
}

impl GraphNode {
    pub fn name(&self) -> &QualifiedName {
        match self {
            GraphNode::Class(class) => &class.name,
            GraphNode::Interface(interface) => &interface.name,
        }
    }

    pub fn as_class(&self) -> Option<&ClassNode> {
        match self {
            GraphNode::Class(class) => Some(class),
            GraphNode::Interface(_) => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceNode> {
        match self {
            GraphNode::Interface(interface) => Some(interface),
            GraphNode::Class(_) => None,
        }
    }
}

/// Deduplicated mapping of qualified name to node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassGraph {
    nodes: IndexMap<QualifiedName, GraphNode>,
}

impl ClassGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. An existing node of the same name keeps its position.
    pub fn insert(&mut self, node: GraphNode) {
        self.nodes.insert(node.name().clone(), node);
    }

    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&GraphNode> {
        self.nodes.get(&QualifiedName::new(name))
    }

    pub fn class(&self, name: &str) -> Option<&ClassNode> {
        self.get(name).and_then(GraphNode::as_class)
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceNode> {
        self.get(name).and_then(GraphNode::as_interface)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassNode> {
        self.nodes().filter_map(GraphNode::as_class)
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceNode> {
        self.nodes().filter_map(GraphNode::as_interface)
    }

    pub fn names(&self) -> impl Iterator<Item = &QualifiedName> {
        self.nodes.keys()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> GraphNode {
        GraphNode::Class(ClassNode {
            name: QualifiedName::new(name),
            parent: None,
            members: IndexMap::new(),
            public_surface: IndexMap::new(),
            interfaces: Vec::new(),
        })
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut graph = ClassGraph::new();
        graph.insert(class("B"));
        graph.insert(class("A"));
        graph.insert(GraphNode::Interface(InterfaceNode {
            name: QualifiedName::new("I"),
            required: vec![("run".to_string(), MemberKind::Callable)],
        }));

        let names: Vec<&str> = graph.names().map(QualifiedName::as_str).collect();
        assert_eq!(names, vec!["B", "A", "I"]);
        assert_eq!(graph.classes().count(), 2);
        assert_eq!(graph.interfaces().count(), 1);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut graph = ClassGraph::new();
        graph.insert(class("A"));
        graph.insert(class("B"));
        graph.insert(class("A"));

        let names: Vec<&str> = graph.names().map(QualifiedName::as_str).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_lookup_by_kind() {
        let mut graph = ClassGraph::new();
        graph.insert(class("A"));
        assert!(graph.class("A").is_some());
        assert!(graph.interface("A").is_none());
        assert!(graph.get("Missing").is_none());
        assert!(graph.contains(&QualifiedName::new("A")));
    }

    #[test]
    fn test_serializes_as_json_object() {
        let mut graph = ClassGraph::new();
        graph.insert(class("A"));
        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(json["A"]["type"], "class");
        assert_eq!(json["A"]["name"], "A");
    }
}
