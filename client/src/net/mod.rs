//! Networking modules for the portal REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the transport-agnostic client, `transport` holds the browser
//! and server transports, `api` names the backend endpoints, and `types`
//! defines the wire schema.

pub mod api;
#[cfg(test)]
pub(crate) mod fake;
pub mod session;
pub mod transport;
pub mod types;
