//! Core building blocks shared by the host model, the compiler and the emitter

pub mod chumsky_utils;
mod error;
pub mod logging;
mod types;

pub use error::*;
pub use logging::*;
pub use types::*;
