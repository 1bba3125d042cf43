//! Member and public surface extraction

use indexmap::IndexMap;
use tracing::trace;

use super::source::SourceReader;
use crate::core::{Member, PublicSurfaceEntry};
use crate::host::{ClassDef, FunctionDef, Property, Realm};

/// Reads a class's own members and its declared public surface
pub struct Introspector<'r> {
    realm: &'r Realm,
    reader: SourceReader,
}

impl<'r> Introspector<'r> {
    pub fn new(realm: &'r Realm) -> Self {
        Self {
            realm,
            reader: SourceReader::new(),
        }
    }

    /// Own prototype members, in declaration order
    pub fn list_members(&self, class: &ClassDef) -> IndexMap<String, Member> {
        class
            .prototype
            .iter()
            .map(|(name, property)| (name.clone(), self.member(name, property)))
            .collect()
    }

    /// Entries exposed by the class, or `None` when it declares no public surface
    pub fn list_public_surface(&self, class: &ClassDef) -> Option<IndexMap<String, PublicSurfaceEntry>> {
        let pairs: Vec<(String, String)> = match &class.public_surface {
            Some(declared) => declared
                .iter()
                .map(|(key, expression)| (key.clone(), expression.clone()))
                .collect(),
            None => {
                let source = class.constructor_def()?.source.as_deref()?;
                self.reader.returned_literal(source)?
            }
        };

        if pairs.is_empty() {
            return None;
        }

        let surface = pairs
            .into_iter()
            .map(|(key, expression)| {
                let entry = self.surface_entry(class, &key, &expression);
                (key, entry)
            })
            .collect();
        Some(surface)
    }

    fn member(&self, name: &str, property: &Property) -> Member {
        match property {
            Property::Field => Member::field(name),
            Property::Function(function) => Member::callable(name, self.parameters(function)),
        }
    }

    fn parameters(&self, function: &FunctionDef) -> Vec<String> {
        if let Some(params) = &function.params {
            return params.clone();
        }
        function
            .source
            .as_deref()
            .and_then(|source| self.reader.parameters(source))
            .unwrap_or_default()
    }

    fn surface_entry(&self, class: &ClassDef, key: &str, expression: &str) -> PublicSurfaceEntry {
        let target = self
            .reader
            .member_reference(expression)
            .and_then(|name| self.lookup_function(class, &name).map(|function| (name, function)));

        match target {
            Some((name, function)) => {
                trace!(entry = key, target = %name, "Public entry forwards to callable");
                let member = Member::callable(name, self.parameters(function));
                PublicSurfaceEntry::forwarding(key, &member)
            }
            None => PublicSurfaceEntry::field(key),
        }
    }

    /// Find a callable by name on the class or along its parent chain
    fn lookup_function<'a>(&'a self, class: &'a ClassDef, name: &str) -> Option<&'a FunctionDef> {
        let mut current = Some(class);
        let mut steps = 0;

        while let Some(def) = current {
            if let Some(property) = def.own_property(name) {
                return match property {
                    Property::Function(function) => Some(function),
                    Property::Field => None,
                };
            }
            steps += 1;
            // A cyclic parent chain cannot be longer than the realm
            if steps > self.realm.len() {
                return None;
            }
            current = def.parent.and_then(|parent| self.realm.class(parent));
        }

        None
    }
}
