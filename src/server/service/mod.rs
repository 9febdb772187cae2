//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They enforce the business rules around each operation, coordinate
//! repository calls for multi-step work, and deal in domain models rather
//! than DTOs or entity models.

pub mod scientist;
