//! Classplot - Compile class hierarchies into PlantUML class diagrams
//!
//! Classes, interfaces and the namespaces that hold them live in a
//! [`host::Realm`]. A [`compiler::Compiler`] resolves each class to a
//! qualified name by searching registered scopes, reads its members and
//! public surface, follows its parent chain and emits PlantUML text.
//!
//! # Quick Start
//!
//! ```rust
//! use classplot::prelude::*;
//!
//! let mut realm = Realm::new();
//! let app = realm.add_object();
//! let user = realm.add_class(
//!     ClassDef::new()
//!         .field("name")
//!         .method("login", "function(password) {}")
//!         .constructor("function() { return { login: this.login }; }"),
//! );
//! realm.set_entry(app, "User", user).unwrap();
//!
//! let mut compiler = Compiler::with_roots(&realm, [user], [("App", app)]).unwrap();
//! let diagram = compiler.render().unwrap();
//! assert!(diagram.starts_with("class App.User {\n    + login(password)\n    ....\n"));
//! ```
//!
//! # From a model file
//!
//! ```rust
//! let json = r#"{
//!     "values": {
//!         "Shape": { "kind": "class", "prototype": { "area": { "params": [] } } }
//!     },
//!     "classes": ["Shape"]
//! }"#;
//! let diagram = classplot::render(json).unwrap();
//! assert!(diagram.contains("+ area()"));
//! ```

pub mod compiler;
pub mod core;
pub mod host;
pub mod model;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compiler::{
        ClassGraph, ClassNode, Compiler, EmitterConfig, GraphNode, InterfaceNode, PlantUmlEmitter,
        Relation, RelationStore, RelationshipKind,
    };
    pub use crate::core::{DiagramError, Member, MemberKind, PublicSurfaceEntry, QualifiedName};
    pub use crate::host::{
        ClassDef, ClassRef, FunctionDef, InterfaceDef, Property, Realm, Value, ValueId,
    };
    pub use crate::model::{DiagramModel, LoadedModel};
}

/// Render a JSON model to PlantUML text
pub fn render(model_json: &str) -> anyhow::Result<String> {
    let model = model::LoadedModel::from_json(model_json)?;
    let mut compiler = model.compiler()?;
    Ok(compiler.render()?)
}

/// Compile a JSON model and return its graph
pub fn compile(model_json: &str) -> anyhow::Result<compiler::ClassGraph> {
    let model = model::LoadedModel::from_json(model_json)?;
    let mut compiler = model.compiler()?;
    Ok(compiler.compile_all()?.clone())
}
