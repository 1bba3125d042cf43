//! Arena owning every host value

use std::fmt;

use super::value::{ClassDef, FunctionValue, InterfaceDef, Value};
use crate::core::{DiagramError, QualifiedName};

/// Identity of a value inside a [`Realm`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueId(pub(crate) usize);

impl ValueId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a class or interface; identity-comparable
pub type ClassRef = ValueId;

/// The host class system: every class, interface and namespace value
#[derive(Debug, Clone, Default)]
pub struct Realm {
    values: Vec<Value>,
}

impl Realm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: Value) -> ValueId {
        self.values.push(value);
        ValueId(self.values.len() - 1)
    }

    pub fn add_object(&mut self) -> ValueId {
        self.insert(Value::Object(Default::default()))
    }

    pub fn add_function(&mut self, source: impl Into<String>) -> ValueId {
        self.insert(Value::Function(FunctionValue {
            source: source.into(),
            entries: Default::default(),
        }))
    }

    pub fn add_scalar(&mut self, literal: impl Into<String>) -> ValueId {
        self.insert(Value::Scalar(literal.into()))
    }

    pub fn add_class(&mut self, class: ClassDef) -> ClassRef {
        self.insert(Value::Class(class))
    }

    pub fn add_interface(&mut self, interface: InterfaceDef) -> ClassRef {
        self.insert(Value::Interface(interface))
    }

    /// Bind `name` inside `container` to `value`, replacing any previous binding
    pub fn set_entry(
        &mut self,
        container: ValueId,
        name: impl Into<String>,
        value: ValueId,
    ) -> Result<(), DiagramError> {
        let name = name.into();
        if let Some(problem) = QualifiedName::segment_problem(&name) {
            return Err(DiagramError::malformed_scope_key(
                name,
                format!("entry names {}", problem),
            ));
        }
        if self.get(value).is_none() {
            return Err(DiagramError::invalid_namespace_entry(
                name,
                format!("value {} does not exist", value),
            ));
        }
        let slot = self.values.get_mut(container.0).ok_or_else(|| {
            DiagramError::invalid_namespace_entry(
                name.clone(),
                format!("container {} does not exist", container),
            )
        })?;
        let kind = slot.kind_name();
        match slot.entries_mut() {
            Some(entries) => {
                entries.insert(name, value);
                Ok(())
            }
            None => Err(DiagramError::invalid_namespace_entry(
                name,
                format!("{} {} cannot hold entries", kind, container),
            )),
        }
    }

    pub fn get(&self, id: ValueId) -> Option<&Value> {
        self.values.get(id.0)
    }

    pub fn class(&self, id: ValueId) -> Option<&ClassDef> {
        match self.get(id) {
            Some(Value::Class(class)) => Some(class),
            _ => None,
        }
    }

    pub fn class_mut(&mut self, id: ValueId) -> Option<&mut ClassDef> {
        match self.values.get_mut(id.0) {
            Some(Value::Class(class)) => Some(class),
            _ => None,
        }
    }

    pub fn interface(&self, id: ValueId) -> Option<&InterfaceDef> {
        match self.get(id) {
            Some(Value::Interface(interface)) => Some(interface),
            _ => None,
        }
    }

    /// Look up `id` as a class, failing with `InvalidClassReference` otherwise
    pub fn expect_class(&self, id: ValueId) -> Result<&ClassDef, DiagramError> {
        match self.get(id) {
            Some(Value::Class(class)) => Ok(class),
            Some(other) => Err(DiagramError::invalid_class_reference(format!(
                "value {} is {} {}, not a class",
                id,
                article(other.kind_name()),
                other.kind_name()
            ))),
            None => Err(DiagramError::invalid_class_reference(format!(
                "value {} does not exist",
                id
            ))),
        }
    }

    /// Look up `id` as an interface, failing with `InvalidClassReference` otherwise
    pub fn expect_interface(&self, id: ValueId) -> Result<&InterfaceDef, DiagramError> {
        match self.get(id) {
            Some(Value::Interface(interface)) => Ok(interface),
            Some(other) => Err(DiagramError::invalid_class_reference(format!(
                "value {} is {} {}, not an interface",
                id,
                article(other.kind_name()),
                other.kind_name()
            ))),
            None => Err(DiagramError::invalid_class_reference(format!(
                "value {} does not exist",
                id
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn article(kind: &str) -> &'static str {
    if kind.starts_with(&['a', 'e', 'i', 'o', 'u'][..]) {
        "an"
    } else {
        "a"
    }
}
