//! Shared value types for compiled class graphs

use serde::Serialize;
use std::fmt;

/// Prefix used for names synthesized for unreachable classes
pub const ANONYMOUS_PREFIX: &str = "Anonymous";

/// Dotted path identifying a class or interface within one compilation run
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QualifiedName(String);

impl QualifiedName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Synthesized name for the `index`-th anonymous class (1-based)
    pub fn anonymous(index: usize) -> Self {
        Self(format!("{}{}", ANONYMOUS_PREFIX, index))
    }

    /// Extend this path with one more segment
    pub fn child(&self, segment: &str) -> Self {
        Self(format!("{}.{}", self.0, segment))
    }

    /// Why `segment` cannot be one component of a dotted path, if it cannot
    pub fn segment_problem(segment: &str) -> Option<&'static str> {
        if segment.is_empty() {
            Some("must not be empty")
        } else if segment.contains('.') {
            Some("must not contain '.'")
        } else if segment.chars().any(char::is_whitespace) {
            Some("must not contain whitespace")
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_anonymous(&self) -> bool {
        self.0
            .strip_prefix(ANONYMOUS_PREFIX)
            .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Whether a member is a plain property or something callable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Field,
    Callable,
}

impl MemberKind {
    /// Kind implied by a declared requirement type such as `"function"` or `"string"`
    pub fn from_declared_type(declared: &str) -> Self {
        if declared.eq_ignore_ascii_case("function") {
            MemberKind::Callable
        } else {
            MemberKind::Field
        }
    }
}

/// Visibility marker used in emitted member lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,    // +
    Protected, // -
}

impl Visibility {
    pub fn to_char(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Protected => '-',
        }
    }
}

/// One property or method of a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    pub params: Vec<String>,
}

impl Member {
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Field,
            params: Vec::new(),
        }
    }

    pub fn callable(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Callable,
            params,
        }
    }

    pub fn is_callable(&self) -> bool {
        self.kind == MemberKind::Callable
    }
}

/// One entry of a class's externally exposed surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicSurfaceEntry {
    pub name: String,
    pub kind: MemberKind,
    pub params: Vec<String>,
    /// Internal member this entry forwards to, when it forwards to a callable
    pub target: Option<String>,
}

impl PublicSurfaceEntry {
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Field,
            params: Vec::new(),
            target: None,
        }
    }

    pub fn forwarding(name: impl Into<String>, target: &Member) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Callable,
            params: target.params.clone(),
            target: Some(target.name.clone()),
        }
    }

    pub fn is_callable(&self) -> bool {
        self.kind == MemberKind::Callable
    }
}
