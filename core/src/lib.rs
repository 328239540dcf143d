//! Synchronous client core for the Teamwork project-management API.
//!
//! # Overview
//! Maps resource method calls (`Task::complete`, `Project::all`, …) onto
//! REST requests: `.json`-suffixed endpoint paths, Basic auth with the
//! account's API key, JSON bodies, and form-encoded query strings. Responses
//! come back as decoded `serde_json::Value` payloads.
//!
//! # Design
//! - `RequestBuilder` turns endpoint + verb + args into an `HttpRequest`
//!   value without doing any I/O.
//! - A `Transport` executes that value (`UreqTransport` by default) and the
//!   `ApiResponse` normalizer decodes the body. The pending request is
//!   passed explicitly; the client stores no per-call state.
//! - Resources are data: a static `ResourceKind` plus a few verb helpers on
//!   `Resource`. Each concrete resource adds its whitelists and domain
//!   method names on top.
//! - Non-2xx responses are not errors here; callers inspect the payload
//!   (or `ApiResponse::status`) themselves.
//!
//! ```no_run
//! use teamwork_core::{Credentials, Task, TeamworkClient};
//!
//! let client = TeamworkClient::new(Credentials::new("twp_key", "https://acme.teamwork.com"));
//! let payload = Task::with_id(&client, 42).complete()?;
//! println!("{payload}");
//! # Ok::<(), teamwork_core::ApiError>(())
//! ```

pub mod client;
pub mod credentials;
pub mod error;
pub mod http;
pub mod request;
pub mod resource;
pub mod resources;
pub mod response;
pub mod transport;
pub mod validation;

#[cfg(test)]
mod testing;

pub use client::{Call, TeamworkClient};
pub use credentials::Credentials;
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use request::{Args, RequestBuilder};
pub use resource::{Handle, Resource, ResourceKind, Restful, TimeTracking};
pub use resources::{Milestone, Project, Task, Tasklist};
pub use response::ApiResponse;
pub use transport::{Transport, UreqTransport};
pub use validation::are_arguments_valid;
