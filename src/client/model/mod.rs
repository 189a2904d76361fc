pub mod auth;
pub mod chart;
pub mod error;
pub mod format;
pub mod notification;
pub mod oauth;
pub mod query;
pub mod selection;
pub mod session;
pub mod settings;
pub mod stats;
pub mod theme;
pub mod violation;

#[cfg(test)]
mod test;
