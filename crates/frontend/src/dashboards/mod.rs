pub mod d400_overview;
pub mod d401_analytics;
pub mod d402_reports;

pub use d400_overview::ui::OverviewDashboard;
pub use d401_analytics::ui::AnalyticsDashboard;
pub use d402_reports::ui::ReportsDashboard;
