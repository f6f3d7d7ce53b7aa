//! HTTP inbound adapter exposing the login endpoint and health probes.

pub mod auth;
pub mod error;
pub mod health;
pub mod state;
