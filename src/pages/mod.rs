pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod settings;
pub mod tenants;

pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use settings::Settings;
pub use tenants::Tenants;
