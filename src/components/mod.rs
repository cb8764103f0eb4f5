//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod comments;
pub mod error_view;
pub mod loading;
pub mod login;
pub mod posts;
pub mod profile_stats;
pub mod toast;

pub use comments::CommentsSection;
pub use error_view::ErrorView;
pub use loading::LoadingScreen;
pub use login::LoginScreen;
pub use posts::PostsSection;
pub use profile_stats::ProfileStats;
pub use toast::Toast;
