use anyhow::Context;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

const WEEKDAY_GLYPHS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Calendar date at `utc_offset_hours` for the given instant.
pub fn local_today(now_utc: DateTime<Utc>, utc_offset_hours: i32) -> anyhow::Result<NaiveDate> {
    let offset = FixedOffset::east_opt(utc_offset_hours * 3600)
        .with_context(|| format!("invalid UTC offset: {utc_offset_hours}h"))?;
    Ok(now_utc.with_timezone(&offset).date_naive())
}

pub fn weekday_glyph(date: NaiveDate) -> &'static str {
    WEEKDAY_GLYPHS[date.weekday().num_days_from_sunday() as usize]
}

/// Display label for the `offset`-th day of a weekly reading.
///
/// Day 0 and day 1 are prefixed with 今日 / 明日; later days carry only the
/// date with the weekday in parentheses.
pub fn day_label(date: NaiveDate, offset: usize) -> String {
    let date_str = format!("{}月{}日", date.month(), date.day());
    let weekday = weekday_glyph(date);
    match offset {
        0 => format!("今日 ({date_str} {weekday}曜日)"),
        1 => format!("明日 ({date_str} {weekday}曜日)"),
        _ => format!("{date_str} ({weekday}曜日)"),
    }
}
