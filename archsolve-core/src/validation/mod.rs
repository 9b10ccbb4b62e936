//! Request validation.

mod validate;

pub use validate::{validate_corridor, validate_input, validate_requirement, ValidationResult};
