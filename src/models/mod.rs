pub mod pixel_rect;
pub mod shift_record;
pub mod time_range;
pub mod week_chart;
