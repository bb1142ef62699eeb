pub mod dashboard;
pub mod display_options;
pub mod mode_selector;
pub mod usage_chart;
pub mod usage_meters;

pub use dashboard::{show_dashboard, show_status};
pub use display_options::{show_display_options, DisplayOptions};
pub use mode_selector::show_mode_selector;
