//! UI components

pub mod data_viewer;
pub mod month_select;
pub mod program_stats;
pub mod session_guard;
pub mod sidebar;
pub mod stat_card;

pub use data_viewer::DataViewer;
pub use month_select::MonthSelect;
pub use program_stats::ProgramStats;
pub use session_guard::SessionGuard;
pub use sidebar::Sidebar;
pub use stat_card::{count_or_dots, StatCard};
