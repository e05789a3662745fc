pub mod domain;
pub mod fortune;
pub mod strokes;
pub mod time;

pub mod config {
    use anyhow::Context;
    use chrono::NaiveDate;

    pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

    #[derive(Debug, Clone)]
    pub struct Settings {
        /// Offset from UTC used to decide which calendar day is "today".
        pub utc_offset_hours: i32,
        /// Pins "today" to a fixed date instead of the wall clock.
        pub today_override: Option<NaiveDate>,
        pub sentry_dsn: Option<String>,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
                today_override: None,
                sentry_dsn: None,
            }
        }
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let utc_offset_hours = match std::env::var("FORTUNE_UTC_OFFSET_HOURS") {
                Ok(s) => s
                    .trim()
                    .parse::<i32>()
                    .with_context(|| format!("FORTUNE_UTC_OFFSET_HOURS must be an integer (got {s:?})"))?,
                Err(_) => DEFAULT_UTC_OFFSET_HOURS,
            };
            anyhow::ensure!(
                (-23..=23).contains(&utc_offset_hours),
                "FORTUNE_UTC_OFFSET_HOURS must be -23..=23 (got {utc_offset_hours})"
            );

            let today_override = match std::env::var("FORTUNE_TODAY") {
                Ok(s) if !s.trim().is_empty() => Some(
                    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                        .with_context(|| format!("FORTUNE_TODAY must be YYYY-MM-DD (got {s:?})"))?,
                ),
                _ => None,
            };

            Ok(Self {
                utc_offset_hours,
                today_override,
                sentry_dsn: std::env::var("SENTRY_DSN").ok().filter(|s| !s.trim().is_empty()),
            })
        }

        pub fn today(&self, now_utc: chrono::DateTime<chrono::Utc>) -> anyhow::Result<NaiveDate> {
            if let Some(d) = self.today_override {
                return Ok(d);
            }
            crate::time::local_today(now_utc, self.utc_offset_hours)
        }
    }

}
