//! Host class system model
//!
//! Classes, interfaces and the namespace objects that hold them live in a
//! [`Realm`]. A [`ClassRef`] is the identity of one value in that realm; the
//! compiler borrows the realm for the duration of a compilation.

mod realm;
mod value;

pub use realm::{ClassRef, Realm, ValueId};
pub use value::{
    ClassDef, Entries, FunctionDef, FunctionValue, InterfaceDef, Property, Value, CONSTRUCTOR,
};
