//! Typed client for the CommunityClara REST backend.
//!
//! [`ApiClient`] owns the base URL, timeout, token store and the
//! [`Transport`] that actually performs HTTP. Endpoint methods live in the
//! per-area modules as `impl ApiClient` blocks.

pub mod auth;
pub mod client;
pub mod helper;
pub mod notification;
pub mod server;
pub mod system;
pub mod transport;
pub mod user;

#[cfg(feature = "web")]
pub mod fetch;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
mod test;

pub use client::ApiClient;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
