pub mod api;
pub mod app;
pub mod browser;
pub mod component;
pub mod config;
pub mod constant;
pub mod content;
pub mod hook;
pub mod model;
pub mod route;
pub mod router;
pub mod store;

pub use app::App;
