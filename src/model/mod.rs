//! Data transfer objects shared by the HTTP API.
//!
//! These types are the JSON shapes sent and received by the controllers. Server-side
//! domain models convert into them at the controller boundary.

pub mod api;
pub mod catalog;
pub mod debt;
pub mod roster;
pub mod user;
