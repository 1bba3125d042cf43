//! JSON model files
//!
//! A model describes a realm of host values plus one compile session: the
//! scopes to search, the root classes and any extra relations. Values refer
//! to each other by their key in `values`.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, info};

use crate::compiler::{Compiler, Relation};
use crate::core::{DiagramError, QualifiedName};
use crate::host::{
    ClassDef, ClassRef, Entries, FunctionDef, FunctionValue, InterfaceDef, Property, Realm, Value,
    ValueId,
};

/// Deserialized model document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagramModel {
    #[serde(default)]
    pub values: IndexMap<String, ValueSpec>,
    #[serde(default)]
    pub scopes: IndexMap<String, String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default = "notes_default")]
    pub notes: bool,
}

fn notes_default() -> bool {
    true
}

/// One host value in a model
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ValueSpec {
    Object {
        #[serde(default)]
        entries: IndexMap<String, String>,
    },
    Function {
        #[serde(default)]
        source: String,
        #[serde(default)]
        entries: IndexMap<String, String>,
    },
    Class {
        #[serde(default)]
        extends: Option<String>,
        #[serde(default)]
        implements: Vec<String>,
        #[serde(default)]
        prototype: IndexMap<String, PropertySpec>,
        #[serde(default)]
        public_surface: Option<IndexMap<String, String>>,
        #[serde(default)]
        statics: IndexMap<String, String>,
    },
    Interface {
        #[serde(default)]
        members: IndexMap<String, String>,
    },
    Scalar {
        #[serde(default)]
        value: serde_json::Value,
    },
}

/// A prototype entry: `{ "value": .. }` is a field, anything else a callable
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PropertySpec {
    Field {
        value: serde_json::Value,
    },
    Callable {
        #[serde(default)]
        source: Option<String>,
        #[serde(default)]
        params: Option<Vec<String>>,
    },
}

impl DiagramModel {
    pub fn from_json(input: &str) -> Result<Self, DiagramError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DiagramError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build the realm, resolving every value reference
    pub fn load(self) -> Result<LoadedModel, DiagramError> {
        let names: IndexMap<String, ValueId> = self
            .values
            .keys()
            .enumerate()
            .map(|(index, name)| (name.clone(), ValueId(index)))
            .collect();
        let lookup = |name: &str, context: &str| -> Result<ValueId, DiagramError> {
            names.get(name).copied().ok_or_else(|| {
                DiagramError::model_error(format!("{} refers to unknown value '{}'", context, name))
            })
        };
        let entries = |map: &IndexMap<String, String>, owner: &str| -> Result<Entries, DiagramError> {
            map.iter()
                .map(|(key, target)| {
                    if let Some(problem) = QualifiedName::segment_problem(key) {
                        return Err(DiagramError::malformed_scope_key(
                            key.as_str(),
                            format!("entry names {} (in '{}')", problem, owner),
                        ));
                    }
                    Ok((key.clone(), lookup(target, &format!("{}.{}", owner, key))?))
                })
                .collect()
        };

        let mut realm = Realm::new();
        for (name, spec) in &self.values {
            let value = match spec {
                ValueSpec::Object { entries: map } => Value::Object(entries(map, name)?),
                ValueSpec::Function { source, entries: map } => Value::Function(FunctionValue {
                    source: source.clone(),
                    entries: entries(map, name)?,
                }),
                ValueSpec::Class {
                    extends,
                    implements,
                    prototype,
                    public_surface,
                    statics,
                } => Value::Class(ClassDef {
                    parent: extends
                        .as_deref()
                        .map(|parent| lookup(parent, &format!("{}.extends", name)))
                        .transpose()?,
                    implements: implements
                        .iter()
                        .map(|interface| lookup(interface, &format!("{}.implements", name)))
                        .collect::<Result<_, _>>()?,
                    prototype: prototype
                        .iter()
                        .map(|(key, property)| (key.clone(), property.to_property()))
                        .collect(),
                    public_surface: public_surface.clone(),
                    statics: entries(statics, name)?,
                }),
                ValueSpec::Interface { members } => Value::Interface(InterfaceDef {
                    requirements: members.clone(),
                }),
                ValueSpec::Scalar { value } => Value::Scalar(scalar_text(value)),
            };
            realm.insert(value);
        }
        debug!(values = realm.len(), "Built realm from model");

        let scopes = self
            .scopes
            .iter()
            .map(|(scope, target)| Ok((scope.clone(), lookup(target, &format!("scope {}", scope))?)))
            .collect::<Result<Vec<_>, DiagramError>>()?;
        let classes = self
            .classes
            .iter()
            .map(|class| lookup(class, "classes"))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LoadedModel {
            realm,
            names,
            scopes,
            classes,
            relations: self.relations,
            notes: self.notes,
        })
    }
}

impl PropertySpec {
    fn to_property(&self) -> Property {
        match self {
            PropertySpec::Field { .. } => Property::Field,
            PropertySpec::Callable { source, params } => Property::Function(FunctionDef {
                source: source.clone(),
                params: params.clone(),
            }),
        }
    }
}

fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// A model whose realm has been built
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub realm: Realm,
    names: IndexMap<String, ValueId>,
    pub scopes: Vec<(String, ValueId)>,
    pub classes: Vec<ClassRef>,
    pub relations: Vec<Relation>,
    pub notes: bool,
}

impl LoadedModel {
    pub fn from_json(input: &str) -> Result<Self, DiagramError> {
        DiagramModel::from_json(input)?.load()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DiagramError> {
        DiagramModel::from_path(path)?.load()
    }

    /// Id of the value stored under `name` in the model
    pub fn value_id(&self, name: &str) -> Option<ValueId> {
        self.names.get(name).copied()
    }

    /// A compile session with the model's classes, scopes, relations and notes setting
    pub fn compiler(&self) -> Result<Compiler<'_>, DiagramError> {
        let scopes = self.scopes.iter().map(|(name, id)| (name.as_str(), *id));
        let mut compiler = Compiler::with_roots(&self.realm, self.classes.iter().copied(), scopes)?;
        for relation in &self.relations {
            compiler.add_relation(relation.clone());
        }
        if !self.notes {
            compiler.disable_notes();
        }
        info!(
            classes = self.classes.len(),
            scopes = self.scopes.len(),
            relations = self.relations.len(),
            "Prepared compile session"
        );
        Ok(compiler)
    }
}
