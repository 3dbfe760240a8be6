pub mod auth_widget;
pub mod metric_card;
pub mod profile_dashboard;

pub use auth_widget::AuthWidget;
pub use metric_card::MetricCard;
pub use profile_dashboard::ProfileDashboard;
