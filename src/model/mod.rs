//! Data transfer objects shared across the API surface.
//!
//! These types define the JSON wire format of the HTTP API. They are serialized
//! directly into responses and deserialized from request bodies, and carry no
//! business logic of their own.

pub mod api;
pub mod mission;
pub mod planet;
pub mod scientist;
