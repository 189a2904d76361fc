pub mod api_docs;
pub mod auth_callback;
pub mod dashboard;
pub mod documentation;
pub mod help;
pub mod home;
pub mod legal;
pub mod login;
pub mod not_found;
pub mod notifications;
pub mod profile;
pub mod settings;

pub use api_docs::ApiDocs;
pub use auth_callback::AuthCallback;
pub use dashboard::Dashboard;
pub use documentation::Documentation;
pub use help::HelpCenter;
pub use home::Home;
pub use legal::{Privacy, Terms};
pub use login::Login;
pub use not_found::NotFound;
pub use notifications::Notifications;
pub use profile::Profile;
pub use settings::Settings;
