//! Name resolution for class and interface references
//!
//! A reference resolves to the dotted path under which it is first found by a
//! depth-first walk of the registered scopes. References that no scope
//! reaches get a synthesized `AnonymousN` name, remembered for the rest of
//! the resolver's life.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{DiagramError, QualifiedName};
use crate::host::{ClassRef, Realm, Value, ValueId};

/// Resolves [`ClassRef`]s to [`QualifiedName`]s
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    scopes: IndexMap<String, ValueId>,
    anonymous: HashMap<ClassRef, QualifiedName>,
    anonymous_id: usize,
}

impl NameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scope to search. Re-registering a name keeps its position.
    pub fn add_scope(&mut self, realm: &Realm, name: &str, value: ValueId) -> Result<(), DiagramError> {
        validate_scope_key(name)?;
        match realm.get(value) {
            Some(found) if found.is_container() => {}
            Some(found) => {
                return Err(DiagramError::invalid_namespace_entry(
                    name,
                    format!("scope values must be objects, functions or classes, got {}", found.kind_name()),
                ));
            }
            None => {
                return Err(DiagramError::invalid_namespace_entry(
                    name,
                    format!("value {} does not exist", value),
                ));
            }
        }

        debug!(scope = name, value = %value, "Registered scope");
        self.scopes.insert(name.to_string(), value);
        Ok(())
    }

    pub fn scopes(&self) -> impl Iterator<Item = (&str, ValueId)> {
        self.scopes.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Number of anonymous names handed out so far
    pub fn anonymous_count(&self) -> usize {
        self.anonymous_id
    }

    /// Resolve `target` to its qualified name. Never fails.
    pub fn resolve(&mut self, realm: &Realm, target: ClassRef) -> QualifiedName {
        if let Some(name) = self.search_scopes(realm, target) {
            trace!(target = %target, name = %name, "Resolved through scopes");
            return name;
        }

        if let Some(name) = self.anonymous.get(&target) {
            return name.clone();
        }

        self.anonymous_id += 1;
        let name = QualifiedName::anonymous(self.anonymous_id);
        debug!(target = %target, name = %name, "Assigned anonymous name");
        self.anonymous.insert(target, name.clone());
        name
    }

    fn search_scopes(&self, realm: &Realm, target: ClassRef) -> Option<QualifiedName> {
        // Shared by every scope so each value is inspected at most once per call
        let mut visited = HashSet::new();

        self.scopes.iter().find_map(|(scope, root)| {
            visited.insert(*root);
            search(realm, target, *root, &QualifiedName::new(scope.as_str()), &mut visited)
        })
    }
}

fn search(
    realm: &Realm,
    target: ClassRef,
    container: ValueId,
    path: &QualifiedName,
    visited: &mut HashSet<ValueId>,
) -> Option<QualifiedName> {
    let entries = realm.get(container).and_then(Value::entries)?;

    for (key, value) in entries {
        // Keys that would not survive as a path segment could alias another path
        if let Some(problem) = QualifiedName::segment_problem(key) {
            trace!(key = key.as_str(), problem, "Skipping entry");
            continue;
        }
        if !visited.insert(*value) {
            continue;
        }

        let candidate = path.child(key);
        if *value == target {
            return Some(candidate);
        }
        if let Some(found) = search(realm, target, *value, &candidate, visited) {
            return Some(found);
        }
    }

    None
}

fn validate_scope_key(key: &str) -> Result<(), DiagramError> {
    match QualifiedName::segment_problem(key) {
        Some(problem) => Err(DiagramError::malformed_scope_key(key, format!("scope names {}", problem))),
        None => Ok(()),
    }
}
