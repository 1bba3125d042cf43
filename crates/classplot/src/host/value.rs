//! Values of the host class system
//!
//! Classes, interfaces and namespace containers are plain data. A class
//! carries its prototype as an ordered table of properties; callables keep
//! either their source text, a declared parameter list, or both.

use indexmap::IndexMap;

use super::ValueId;

/// Prototype key of a class constructor
pub const CONSTRUCTOR: &str = "__construct";

/// Ordered named entries of a container value
pub type Entries = IndexMap<String, ValueId>;

/// A prototype property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Property {
    Field,
    Function(FunctionDef),
}

impl Property {
    pub fn is_function(&self) -> bool {
        matches!(self, Property::Function(_))
    }
}

/// A callable with its textual form and/or declared parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionDef {
    pub source: Option<String>,
    pub params: Option<Vec<String>>,
}

impl FunctionDef {
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            params: None,
        }
    }

    pub fn with_params<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: None,
            params: Some(params.into_iter().map(Into::into).collect()),
        }
    }
}

/// A class definition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDef {
    pub parent: Option<ValueId>,
    pub implements: Vec<ValueId>,
    pub prototype: IndexMap<String, Property>,
    /// Declared `key -> value expression` pairs; when absent the constructor source is read
    pub public_surface: Option<IndexMap<String, String>>,
    pub statics: Entries,
}

impl ClassDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extends(mut self, parent: ValueId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn implements(mut self, interface: ValueId) -> Self {
        self.implements.push(interface);
        self
    }

    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.prototype.insert(name.into(), Property::Field);
        self
    }

    /// Add a method described by its source text, e.g. `function(a, b) {}`
    pub fn method(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.prototype.insert(
            name.into(),
            Property::Function(FunctionDef::from_source(source)),
        );
        self
    }

    /// Add a method with an explicitly declared parameter list
    pub fn method_with_params<I, S>(mut self, name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prototype.insert(
            name.into(),
            Property::Function(FunctionDef::with_params(params)),
        );
        self
    }

    pub fn constructor(self, source: impl Into<String>) -> Self {
        self.method(CONSTRUCTOR, source)
    }

    /// Declare one public surface entry without going through constructor text
    pub fn expose(mut self, key: impl Into<String>, expression: impl Into<String>) -> Self {
        self.public_surface
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), expression.into());
        self
    }

    pub fn with_static(mut self, name: impl Into<String>, value: ValueId) -> Self {
        self.statics.insert(name.into(), value);
        self
    }

    pub fn own_property(&self, name: &str) -> Option<&Property> {
        self.prototype.get(name)
    }

    pub fn constructor_def(&self) -> Option<&FunctionDef> {
        match self.prototype.get(CONSTRUCTOR) {
            Some(Property::Function(def)) => Some(def),
            _ => None,
        }
    }
}

/// An interface definition: ordered `member -> declared type`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceDef {
    pub requirements: IndexMap<String, String>,
}

impl InterfaceDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        self.requirements.insert(name.into(), declared_type.into());
        self
    }
}

/// A plain function value that may also hold named entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionValue {
    pub source: String,
    pub entries: Entries,
}

/// Any value held by a [`Realm`](super::Realm)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Object(Entries),
    Function(FunctionValue),
    Class(ClassDef),
    Interface(InterfaceDef),
    Scalar(String),
}

impl Value {
    /// Short description used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::Class(_) => "class",
            Value::Interface(_) => "interface",
            Value::Scalar(_) => "scalar",
        }
    }

    /// Named entries, for values that can act as a namespace
    pub fn entries(&self) -> Option<&Entries> {
        match self {
            Value::Object(entries) => Some(entries),
            Value::Function(function) => Some(&function.entries),
            Value::Class(class) => Some(&class.statics),
            Value::Interface(_) | Value::Scalar(_) => None,
        }
    }

    pub fn entries_mut(&mut self) -> Option<&mut Entries> {
        match self {
            Value::Object(entries) => Some(entries),
            Value::Function(function) => Some(&mut function.entries),
            Value::Class(class) => Some(&mut class.statics),
            Value::Interface(_) | Value::Scalar(_) => None,
        }
    }

    pub fn is_container(&self) -> bool {
        self.entries().is_some()
    }
}
