pub mod calculator;
pub mod logic;

pub use calculator::grouper::{group, group_for_week, weekday_index};
pub use calculator::idle::idle_gaps;
pub use calculator::layout::LayoutMapper;
pub use calculator::merge::merge_ranges;
pub use logic::Core;
