//! Static description of the Skosmos REST API surface
//!
//! The catalogue of logical API methods lives here as compile-time data:
//! one `Operation` per method, each carrying its route template and its
//! parameter schema. The modules in here are pure — no I/O, no shared
//! mutable state — which is what makes the request pipeline testable
//! without a network.

pub mod operation;
pub mod params;
pub mod query;
pub mod route;
