//! Server-side API backend and business logic.
//!
//! Everything behind the HTTP surface lives here: route handlers, business
//! logic, and data access, built on axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! The server is layered, with each layer only talking to the one below it:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database connection)
//! - **Startup** (`startup`) - Database connection and migration on boot
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A typical request passes through the layers in order:
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** validates the payload and converts the DTO to params
//! 3. **Service** runs the business logic and orchestrates data operations
//! 4. **Data** queries the database and hands rows back up
//! 5. **Controller** converts the resulting domain model to a DTO response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
