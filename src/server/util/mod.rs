//! Credential utilities shared by the roster engine, login and startup.

pub mod hasher;
pub mod password;
