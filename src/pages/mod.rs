//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod home;
pub mod settings;

pub use dashboard::Dashboard;
pub use home::Home;
pub use settings::Settings;
