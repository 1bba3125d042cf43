//! PlantUML class diagram emitter
//!
//! Renders a [`ClassGraph`] and a [`RelationStore`] to PlantUML text in one
//! pass: node blocks (and notes) in graph order, then realization edges,
//! then relations in the order they were added.

use tracing::{debug, span, Level};

use super::graph::{ClassGraph, ClassNode, GraphNode, InterfaceNode};
use super::relations::{Relation, RelationStore};
use crate::core::{MemberKind, Visibility};

const INDENT: &str = "    ";
const SEPARATOR: &str = "....";
const PUBLIC_API_NOTE: [&str; 2] = [
    "Class has a public API. Inherited methods are",
    "protected unless specified in this class.",
];

/// Emitter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Attach a note to every class with a public surface
    pub notes_enabled: bool,
    /// Wrap the output in `@startuml` / `@enduml`
    pub enclose: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            notes_enabled: true,
            enclose: false,
        }
    }
}

/// Turns a compiled graph into PlantUML text
#[derive(Debug, Clone, Default)]
pub struct PlantUmlEmitter {
    config: EmitterConfig,
}

impl PlantUmlEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    pub fn with_notes(mut self, enabled: bool) -> Self {
        self.config.notes_enabled = enabled;
        self
    }

    pub fn with_enclose(mut self, enclose: bool) -> Self {
        self.config.enclose = enclose;
        self
    }

    pub fn config(&self) -> EmitterConfig {
        self.config
    }

    pub fn render(&self, graph: &ClassGraph, relations: &RelationStore) -> String {
        let span = span!(Level::INFO, "emit", nodes = graph.len(), relations = relations.len());
        let _enter = span.enter();

        let mut out = String::new();
        if self.config.enclose {
            out.push_str("@startuml\n");
        }

        for node in graph.nodes() {
            match node {
                GraphNode::Class(class) => {
                    self.write_class(&mut out, class);
                    if self.config.notes_enabled && class.has_public_surface() {
                        write_note(&mut out, class);
                    }
                }
                GraphNode::Interface(interface) => write_interface(&mut out, interface),
            }
        }

        for class in graph.classes() {
            for interface in &class.interfaces {
                out.push_str(&format!("{} --|> {}\n", class.name, interface));
            }
        }

        for relation in relations.iter() {
            out.push_str(&relation_line(relation));
            out.push('\n');
        }

        if self.config.enclose {
            out.push_str("@enduml\n");
        }

        debug!(output = %out, "Rendered diagram");
        out
    }

    fn write_class(&self, out: &mut String, class: &ClassNode) {
        match &class.parent {
            Some(parent) => out.push_str(&format!("class {} extends {} {{\n", class.name, parent)),
            None => out.push_str(&format!("class {} {{\n", class.name)),
        }

        // Once a public surface exists everything else is protected
        let member_visibility = if class.has_public_surface() {
            for entry in class.public_surface.values() {
                write_member(out, Visibility::Public, &entry.name, entry.kind, &entry.params);
            }
            out.push_str(INDENT);
            out.push_str(SEPARATOR);
            out.push('\n');
            Visibility::Protected
        } else {
            Visibility::Public
        };

        for member in class.members.values() {
            write_member(out, member_visibility, &member.name, member.kind, &member.params);
        }

        out.push_str("}\n\n");
    }
}

fn write_interface(out: &mut String, interface: &InterfaceNode) {
    out.push_str(&format!("interface {} {{\n", interface.name));
    for (name, kind) in &interface.required {
        write_member(out, Visibility::Public, name, *kind, &[]);
    }
    out.push_str("}\n\n");
}

fn write_note(out: &mut String, class: &ClassNode) {
    out.push_str(&format!("note left of {} {{\n", class.name));
    for line in PUBLIC_API_NOTE {
        out.push_str(INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("}\n\n");
}

fn write_member(out: &mut String, visibility: Visibility, name: &str, kind: MemberKind, params: &[String]) {
    out.push_str(INDENT);
    out.push(visibility.to_char());
    out.push(' ');
    out.push_str(name);
    if kind == MemberKind::Callable {
        out.push('(');
        out.push_str(&params.join(", "));
        out.push(')');
    }
    out.push('\n');
}

/// `from ["card"] edge ["card"] to`
fn relation_line(relation: &Relation) -> String {
    let mut line = relation.from.clone();
    if let Some(cardinality) = relation.from_label() {
        line.push_str(&format!(" \"{}\"", cardinality));
    }
    line.push(' ');
    line.push_str(relation.edge());
    if let Some(cardinality) = relation.to_label() {
        line.push_str(&format!(" \"{}\"", cardinality));
    }
    line.push(' ');
    line.push_str(&relation.to);
    line
}
