pub mod calendar;

pub use calendar::{day_label, local_today, weekday_glyph};
