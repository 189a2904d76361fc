//! DTOs mirroring the JSON shapes of the moderation backend.
//!
//! The backend owns every entity; these types only describe what the dashboard
//! reads and writes. Optional fields default so that partial payloads decode.

pub mod api;
pub mod dashboard;
pub mod date;
pub mod notification;
pub mod serde_helper;
pub mod server;
pub mod settings;
pub mod user;
pub mod violation;
