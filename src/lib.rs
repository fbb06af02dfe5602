//! Client library for the Skosmos vocabulary/thesaurus REST API.
//!
//! The crate is organized around a fixed catalogue of read-style
//! operations ([`rest::operation::Operation`]), each bound to a URL route
//! template and a parameter schema. Per call, the caller's full argument
//! set is reduced to the parameters that differ from the schema defaults
//! ([`rest::params::changed_params`]), search terms are normalized
//! ([`rest::query::normalize_query`]), and the request is executed and
//! classified by [`api::http::RestClient`]. [`api::client::SkosmosClient`]
//! ties the pipeline together with one async method per operation.

pub mod api;
pub mod cli;
pub mod rest;

pub use api::client::{SearchParams, SkosmosClient};
pub use api::error::Error;
pub use api::http::{ClientConfig, Method, RestResponse, DEFAULT_HTTP_TIMEOUT};
pub use rest::operation::{Operation, Payload};
pub use rest::params::{changed_params, ParamDefault, ParamValue};
pub use rest::query::normalize_query;
