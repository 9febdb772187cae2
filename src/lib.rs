//! Missionboard: a REST API for tracking scientists and the missions that
//! send them to nearby planets.

pub mod model;
pub mod server;
