pub mod analytics_chart;
pub mod error_message;
pub mod flash;
pub mod header;
pub mod health_gauge;
pub mod layout;
pub mod markdown;
pub mod page;
pub mod protected_layout;
pub mod server_selector;

pub use analytics_chart::AnalyticsChart;
pub use error_message::ErrorMessage;
pub use flash::Flash;
pub use header::Header;
pub use health_gauge::HealthGauge;
pub use layout::Layout;
pub use markdown::Markdown;
pub use page::{LoadingPage, Page};
pub use protected_layout::RequiresLoggedIn;
pub use server_selector::ServerSelector;
