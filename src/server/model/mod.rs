//! Server-side domain models and parameter types.
//!
//! Domain models represent business entities independently of their database
//! and wire shapes: they are built from entity models at the repository
//! boundary and turned into DTOs at the controller boundary. Parameter types
//! carry the inputs of a single write operation together with their
//! required-field checks.

pub mod mission;
pub mod planet;
pub mod scientist;
