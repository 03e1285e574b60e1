pub mod auth_app;
pub mod chart_canvas;
pub mod dashboard_app;
pub mod session;
pub mod zone_canvas;

pub use auth_app::AuthFrontend;
pub use dashboard_app::DashboardFrontend;
