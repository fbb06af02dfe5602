//! Skosmos REST API client
//!
//! `client::SkosmosClient` is the public entry point: one async method per
//! catalogue operation, composed from the static tables in [`crate::rest`]
//! and the HTTP layer in [`http`].

pub mod client;
pub mod error;
pub mod http;
