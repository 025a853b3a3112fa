//! Variable descriptors for placeholder expressions.
//!
//! This module turns scanned expressions into typed variables:
//! - Plain and textarea variables hold user-entered text
//! - Auto variables are resolved once at classification time
//! - Boolean variables gate a fixed block of text behind a checkbox
//!
//! [`registry::VariableSet`] builds the ordered, deduplicated list for one
//! template text and resolves duplicate-name collisions.

pub mod classify;
pub mod registry;
pub mod types;

pub use classify::classify;
pub use registry::{Binding, VariableSet};
pub use types::{InputKind, InputSpec, VarKind, Variable};
