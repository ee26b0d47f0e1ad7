pub mod d400_overview;
pub mod d401_analytics;
pub mod d402_reports;
