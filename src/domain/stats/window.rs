//! The display window for one event night.

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;

use crate::domain::stats::model::ChartWindow;

/// Window `[start, 03:00 local on the following calendar day)`.
///
/// "Following calendar day" is evaluated in the venue's timezone 24 hours
/// after the start, so a pub that opens late in UTC still closes out at
/// 03:00 local. If a DST jump skips 03:00 the window falls back to a flat
/// 24 hours.
pub fn night_window(start: DateTime<Utc>, tz: Tz) -> ChartWindow {
    let next_local_day = (start + Duration::hours(24)).with_timezone(&tz).date_naive();

    let end = next_local_day
        .and_hms_opt(3, 0, 0)
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or(start + Duration::hours(24));

    ChartWindow { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Stockholm;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn summer_night_ends_at_three_cest() {
        // 03:00 CEST = 01:00 UTC.
        let w = night_window(utc("2024-05-01T18:00:00Z"), Stockholm);
        assert_eq!(w.start, utc("2024-05-01T18:00:00Z"));
        assert_eq!(w.end, utc("2024-05-02T01:00:00Z"));
    }

    #[test]
    fn winter_night_ends_at_three_cet() {
        // 03:00 CET = 02:00 UTC.
        let w = night_window(utc("2024-01-12T17:00:00Z"), Stockholm);
        assert_eq!(w.end, utc("2024-01-13T02:00:00Z"));
    }

    #[test]
    fn window_always_ends_after_it_starts() {
        for start in ["2024-03-30T20:00:00Z", "2024-10-26T20:00:00Z"] {
            let w = night_window(utc(start), Stockholm);
            assert!(w.end > w.start);
        }
    }
}
