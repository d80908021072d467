pub mod map_dashboard;
pub mod recent_submissions;
pub mod stats_overview;
pub mod upload_form;
