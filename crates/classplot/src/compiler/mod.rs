//! Class graph compilation
//!
//! A [`Compiler`] is one compile session over a borrowed [`Realm`]: it owns
//! the registered roots and scopes, the name resolver (with its anonymous
//! name cache), the compiled graph and the relation store.

mod emitter;
mod graph;
mod introspector;
mod relations;
mod resolver;
mod source;

pub use emitter::{EmitterConfig, PlantUmlEmitter};
pub use graph::{ClassGraph, ClassNode, GraphNode, InterfaceNode};
pub use introspector::Introspector;
pub use relations::{Relation, RelationStore, RelationshipKind, DEFAULT_EDGE};
pub use resolver::NameResolver;
pub use source::{normalise, SourceReader};

use std::collections::HashSet;

use tracing::{debug, info, span, trace, Level};

use crate::core::{DiagramError, MemberKind, QualifiedName};
use crate::host::{ClassRef, Realm, ValueId};

/// Compile session over a realm
pub struct Compiler<'r> {
    realm: &'r Realm,
    roots: Vec<ClassRef>,
    resolver: NameResolver,
    graph: ClassGraph,
    relations: RelationStore,
    emitter: PlantUmlEmitter,
    in_progress: HashSet<ClassRef>,
}

impl<'r> Compiler<'r> {
    pub fn new(realm: &'r Realm) -> Self {
        Self {
            realm,
            roots: Vec::new(),
            resolver: NameResolver::new(),
            graph: ClassGraph::new(),
            relations: RelationStore::new(),
            emitter: PlantUmlEmitter::new(),
            in_progress: HashSet::new(),
        }
    }

    /// Create a session with root classes and named scopes registered in order
    pub fn with_roots<C, S, N>(realm: &'r Realm, classes: C, scopes: S) -> Result<Self, DiagramError>
    where
        C: IntoIterator<Item = ClassRef>,
        S: IntoIterator<Item = (N, ValueId)>,
        N: AsRef<str>,
    {
        let mut compiler = Self::new(realm);
        for class in classes {
            compiler.add_class(class)?;
        }
        for (name, value) in scopes {
            compiler.add_scope(name.as_ref(), value)?;
        }
        Ok(compiler)
    }

    /// Register a root class. Fails if `class` is not a class.
    pub fn add_class(&mut self, class: ClassRef) -> Result<(), DiagramError> {
        self.realm.expect_class(class)?;
        trace!(class = %class, "Registered root class");
        self.roots.push(class);
        Ok(())
    }

    pub fn add_classes<I>(&mut self, classes: I) -> Result<(), DiagramError>
    where
        I: IntoIterator<Item = ClassRef>,
    {
        classes.into_iter().try_for_each(|class| self.add_class(class))
    }

    pub fn add_scope(&mut self, name: &str, value: ValueId) -> Result<(), DiagramError> {
        self.resolver.add_scope(self.realm, name, value)
    }

    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.add(relation);
    }

    pub fn enable_notes(&mut self) {
        self.emitter = self.emitter.clone().with_notes(true);
    }

    pub fn disable_notes(&mut self) {
        self.emitter = self.emitter.clone().with_notes(false);
    }

    pub fn set_enclose(&mut self, enclose: bool) {
        self.emitter = self.emitter.clone().with_enclose(enclose);
    }

    pub fn emitter_config(&self) -> EmitterConfig {
        self.emitter.config()
    }

    pub fn roots(&self) -> &[ClassRef] {
        &self.roots
    }

    pub fn graph(&self) -> &ClassGraph {
        &self.graph
    }

    pub fn relations(&self) -> &RelationStore {
        &self.relations
    }

    /// Qualified name of `target` in this session
    pub fn resolve(&mut self, target: ClassRef) -> QualifiedName {
        self.resolver.resolve(self.realm, target)
    }

    /// Compile `class` and its ancestors into the graph
    ///
    /// Returns the class's qualified name. Compiling a class that is already
    /// in the graph is a no-op.
    pub fn compile(&mut self, class: ClassRef) -> Result<QualifiedName, DiagramError> {
        let realm = self.realm;
        realm.expect_class(class)?;

        let name = self.resolver.resolve(realm, class);
        if self.graph.contains(&name) || self.in_progress.contains(&class) {
            trace!(class = %name, "Already compiled");
            return Ok(name);
        }

        let span = span!(Level::DEBUG, "compile", class = %name);
        let _enter = span.enter();

        self.in_progress.insert(class);
        let result = self.compile_node(class, name);
        self.in_progress.remove(&class);
        result
    }

    fn compile_node(&mut self, class: ClassRef, name: QualifiedName) -> Result<QualifiedName, DiagramError> {
        let realm = self.realm;
        let def = realm.expect_class(class)?;

        let parent = match def.parent {
            Some(parent) => Some(self.compile(parent)?),
            None => None,
        };

        let mut interfaces = Vec::with_capacity(def.implements.len());
        for &interface in &def.implements {
            let required = realm.expect_interface(interface)?;
            let interface_name = self.resolver.resolve(realm, interface);
            if !self.graph.contains(&interface_name) {
                debug!(interface = %interface_name, "Compiled interface");
                self.graph.insert(GraphNode::Interface(InterfaceNode {
                    name: interface_name.clone(),
                    required: required
                        .requirements
                        .iter()
                        .map(|(member, declared)| (member.clone(), MemberKind::from_declared_type(declared)))
                        .collect(),
                }));
            }
            interfaces.push(interface_name);
        }

        let introspector = Introspector::new(realm);
        let mut members = introspector.list_members(def);
        let public_surface = introspector.list_public_surface(def).unwrap_or_default();
        members.retain(|member, _| !public_surface.contains_key(member));

        debug!(
            class = %name,
            members = members.len(),
            public = public_surface.len(),
            "Compiled class"
        );
        self.graph.insert(GraphNode::Class(ClassNode {
            name: name.clone(),
            parent,
            members,
            public_surface,
            interfaces,
        }));
        Ok(name)
    }

    /// Compile every registered root in registration order
    pub fn compile_all(&mut self) -> Result<&ClassGraph, DiagramError> {
        let span = span!(Level::INFO, "compile_all", roots = self.roots.len());
        let _enter = span.enter();

        for index in 0..self.roots.len() {
            self.compile(self.roots[index])?;
        }

        info!(nodes = self.graph.len(), "Compilation complete");
        Ok(&self.graph)
    }

    /// Recompile from scratch and render the diagram text
    pub fn render(&mut self) -> Result<String, DiagramError> {
        let span = span!(Level::INFO, "render");
        let _enter = span.enter();

        self.graph.clear();
        self.compile_all()?;
        Ok(self.emitter.render(&self.graph, &self.relations))
    }
}
