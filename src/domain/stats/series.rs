//! Snapshot-to-chart-series transform.
//!
//! Pure functions over a fetched snapshot list: project to points, derive
//! the shared x-axis domain, run-length encode the queue timeline and
//! aggregate the night's summary cards.

use chrono::Timelike;
use chrono_tz::Tz;
use std::collections::HashSet;

use crate::domain::stats::model::{
    ChartResponse, ChartWindow, LineLength, NightSummary, Point, Segment, Snapshot, TimeDomain,
};
use crate::domain::stats::timeparse::parse_captured_at;

/// One Point per Snapshot, input order preserved. A malformed timestamp
/// keeps its reading but with `ts_ms: None`.
pub fn build_points(snapshots: &[Snapshot]) -> Vec<Point> {
    snapshots
        .iter()
        .map(|s| Point {
            ts_ms: parse_captured_at(&s.captured_at).map(|dt| dt.timestamp_millis()),
            total: s.total_count.unwrap_or(s.member_count + s.non_member_count),
            members: s.member_count,
            non_members: s.non_member_count,
            line_length: s.line_length.unwrap_or(LineLength::NoLine),
            occupancy_pct: s.occupancy_pct,
            max_capacity: s.max_capacity,
        })
        .collect()
}

/// X-axis domain from the first and last valid timestamps. No valid
/// timestamps → `[0, 1]`; a single instant is widened by one millisecond
/// so a lone reading can still carry a visible segment.
pub fn time_domain(points: &[Point]) -> TimeDomain {
    let mut valid = points.iter().filter_map(|p| p.ts_ms);
    let first = valid.next();
    let last = valid.last();

    match (first, last) {
        (None, _) => TimeDomain { min_ms: 0, max_ms: 1 },
        (Some(min), None) => TimeDomain {
            min_ms: min,
            max_ms: min + 1,
        },
        (Some(min), Some(max)) if min == max => TimeDomain {
            min_ms: min,
            max_ms: min + 1,
        },
        (Some(min), Some(max)) => TimeDomain {
            min_ms: min,
            max_ms: max,
        },
    }
}

/// Run-length encode the queue category over the valid-timestamp
/// subsequence. A run ends at the next valid point with a different
/// category, or at the domain edge for a trailing run. Bounds are clamped
/// to the domain and empty runs discarded.
pub fn segments(points: &[Point], domain: TimeDomain) -> Vec<Segment> {
    let timed: Vec<(i64, LineLength)> = points
        .iter()
        .filter_map(|p| p.ts_ms.map(|ts| (ts, p.line_length)))
        .collect();

    let mut segs = Vec::new();
    let mut i = 0;
    while i < timed.len() {
        let (start, kind) = timed[i];
        if !kind.is_band() {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < timed.len() && timed[j].1 == kind {
            j += 1;
        }

        let end = if j < timed.len() { timed[j].0 } else { domain.max_ms };
        let x1 = start.max(domain.min_ms);
        let x2 = end.min(domain.max_ms);
        if x2 > x1 {
            segs.push(Segment { x1_ms: x1, x2_ms: x2, kind });
        }
        i = j;
    }
    segs
}

/// Summary cards for the night.
///
/// The counted prefix ends at the last point with a positive total, so a
/// tail of zero readings after closing does not dilute the averages. The
/// peak is taken over the full list regardless.
pub fn summary(points: &[Point], domain: TimeDomain, tz: Tz) -> NightSummary {
    if points.is_empty() {
        return NightSummary::default();
    }

    let last_active = points
        .iter()
        .rposition(|p| p.total > 0)
        .unwrap_or(points.len() - 1);
    let prefix = &points[..=last_active];

    let occupancy: Vec<f64> = prefix
        .iter()
        .filter_map(|p| p.occupancy_pct)
        .filter(|x| x.is_finite())
        .collect();
    let avg_occupancy_pct = if occupancy.is_empty() {
        0.0
    } else {
        let mean = occupancy.iter().sum::<f64>() / occupancy.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    let (member_pct, non_member_pct) = weighted_ratio(prefix, &points[last_active + 1..], domain);

    let peak_total = points.iter().map(|p| p.total).max().unwrap_or(0).max(0);

    let hours: HashSet<u32> = prefix
        .iter()
        .filter_map(|p| p.ts_ms)
        .filter_map(|ms| chrono::DateTime::from_timestamp_millis(ms))
        .map(|dt| dt.with_timezone(&tz).hour())
        .collect();

    NightSummary {
        count: prefix.len(),
        hours_covered: hours.len(),
        peak_total,
        avg_occupancy_pct,
        member_pct,
        non_member_pct,
    }
}

/// Member/non-member split weighted by how long each reading was current.
/// The last prefix reading stays current until the first reading after the
/// prefix, or until the domain edge when nothing follows.
fn weighted_ratio(prefix: &[Point], rest: &[Point], domain: TimeDomain) -> (i64, i64) {
    let timed: Vec<(i64, &Point)> = prefix
        .iter()
        .filter_map(|p| p.ts_ms.map(|ts| (ts, p)))
        .collect();
    if timed.is_empty() {
        return (0, 0);
    }

    let end_boundary = rest
        .iter()
        .find_map(|p| p.ts_ms)
        .unwrap_or(domain.max_ms);

    let mut w_members = 0.0;
    let mut w_non = 0.0;
    for (i, (ts, cur)) in timed.iter().enumerate() {
        let next = timed.get(i + 1).map(|(n, _)| *n).unwrap_or(end_boundary);
        let dt = (next - ts).max(0) as f64;
        if dt > 0.0 {
            w_members += cur.members as f64 * dt;
            w_non += cur.non_members as f64 * dt;
        }
    }

    let sum = w_members + w_non;
    if sum > 0.0 {
        (
            (w_members / sum * 100.0).round() as i64,
            (w_non / sum * 100.0).round() as i64,
        )
    } else {
        (0, 0)
    }
}

/// Full pipeline: snapshots in, chart-ready series out.
pub fn build_chart(snapshots: &[Snapshot], window: Option<ChartWindow>, tz: Tz) -> ChartResponse {
    let points = build_points(snapshots);
    let domain = time_domain(&points);
    let segments = segments(&points, domain);
    let summary = summary(&points, domain, tz);

    ChartResponse {
        window,
        domain,
        points,
        segments,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Stockholm;

    fn snapshot(captured_at: &str, members: i64, non_members: i64, line: Option<LineLength>) -> Snapshot {
        Snapshot {
            venue_id: 1,
            captured_at: captured_at.to_string(),
            member_count: members,
            non_member_count: non_members,
            total_count: None,
            occupancy_pct: None,
            line_length: line,
            max_capacity: None,
        }
    }

    fn ms(captured_at: &str) -> i64 {
        parse_captured_at(captured_at).unwrap().timestamp_millis()
    }

    #[test]
    fn one_point_per_snapshot_even_when_malformed() {
        let snaps = vec![
            snapshot("2024-05-01 22:00:00", 3, 1, None),
            snapshot("garbage", 4, 2, None),
            snapshot("", 0, 0, None),
        ];
        let points = build_points(&snaps);
        assert_eq!(points.len(), snaps.len());
        assert!(points[0].ts_ms.is_some());
        assert!(points[1].ts_ms.is_none());
        assert!(points[2].ts_ms.is_none());
        // Totals still derive from the counts.
        assert_eq!(points[1].total, 6);
    }

    #[test]
    fn explicit_total_count_wins_over_derived() {
        let mut snap = snapshot("2024-05-01 22:00:00", 3, 1, None);
        snap.total_count = Some(10);
        assert_eq!(build_points(&[snap])[0].total, 10);
    }

    #[test]
    fn empty_input_yields_unit_domain() {
        assert_eq!(time_domain(&[]), TimeDomain { min_ms: 0, max_ms: 1 });
    }

    #[test]
    fn single_instant_domain_is_widened() {
        let points = build_points(&[snapshot("2024-05-01 22:00:00", 1, 0, None)]);
        let d = time_domain(&points);
        assert_eq!(d.max_ms, d.min_ms + 1);
    }

    #[test]
    fn all_no_line_yields_zero_segments() {
        let snaps = vec![
            snapshot("2024-05-01 22:00:00", 1, 0, Some(LineLength::NoLine)),
            snapshot("2024-05-01 22:10:00", 2, 0, None),
        ];
        let points = build_points(&snaps);
        assert!(segments(&points, time_domain(&points)).is_empty());
    }

    #[test]
    fn single_long_snapshot_yields_one_full_domain_segment() {
        let points = build_points(&[snapshot("2024-05-01 22:00:00", 1, 0, Some(LineLength::Long))]);
        let domain = time_domain(&points);
        let segs = segments(&points, domain);
        assert_eq!(
            segs,
            vec![Segment {
                x1_ms: domain.min_ms,
                x2_ms: domain.max_ms,
                kind: LineLength::Long,
            }]
        );
    }

    #[test]
    fn segments_stay_inside_domain_and_are_nonempty() {
        let snaps = vec![
            snapshot("2024-05-01 20:00:00", 1, 0, Some(LineLength::Short)),
            snapshot("2024-05-01 20:30:00", 2, 0, Some(LineLength::Short)),
            snapshot("2024-05-01 21:00:00", 3, 0, Some(LineLength::Medium)),
            snapshot("2024-05-01 21:30:00", 2, 0, Some(LineLength::NoLine)),
            snapshot("2024-05-01 22:00:00", 4, 0, Some(LineLength::Long)),
            snapshot("2024-05-01 22:30:00", 4, 0, Some(LineLength::Long)),
        ];
        let points = build_points(&snaps);
        let domain = time_domain(&points);
        let segs = segments(&points, domain);

        assert_eq!(segs.len(), 3);
        for s in &segs {
            assert!(s.x2_ms > s.x1_ms);
            assert!(s.x1_ms >= domain.min_ms && s.x2_ms <= domain.max_ms);
        }
        // The trailing long run extends to the domain edge.
        assert_eq!(segs[2].x2_ms, domain.max_ms);
    }

    #[test]
    fn malformed_timestamps_do_not_split_a_run() {
        let snaps = vec![
            snapshot("2024-05-01 20:00:00", 1, 0, Some(LineLength::Short)),
            snapshot("garbage", 1, 0, Some(LineLength::Long)),
            snapshot("2024-05-01 20:30:00", 1, 0, Some(LineLength::Short)),
            snapshot("2024-05-01 21:00:00", 1, 0, Some(LineLength::NoLine)),
        ];
        let points = build_points(&snaps);
        let segs = segments(&points, time_domain(&points));
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].x1_ms, ms("2024-05-01 20:00:00"));
        assert_eq!(segs[0].x2_ms, ms("2024-05-01 21:00:00"));
    }

    #[test]
    fn three_snapshot_scenario() {
        let snaps = vec![
            snapshot("2024-05-02 00:00:00", 5, 0, Some(LineLength::Long)),
            snapshot("2024-05-02 00:10:00", 8, 0, Some(LineLength::Long)),
            snapshot("2024-05-02 00:20:00", 3, 0, Some(LineLength::NoLine)),
        ];
        let chart = build_chart(&snaps, None, Stockholm);

        assert_eq!(chart.points.len(), 3);
        assert_eq!(
            chart.segments,
            vec![Segment {
                x1_ms: ms("2024-05-02 00:00:00"),
                x2_ms: ms("2024-05-02 00:20:00"),
                kind: LineLength::Long,
            }]
        );
        assert_eq!(chart.summary.peak_total, 8);
        assert_eq!(chart.summary.count, 3);
    }

    #[test]
    fn transform_is_pure() {
        let snaps = vec![
            snapshot("2024-05-01 20:00:00", 1, 2, Some(LineLength::Short)),
            snapshot("2024-05-01 21:00:00", 3, 4, None),
        ];
        let a = build_chart(&snaps, None, Stockholm);
        let b = build_chart(&snaps, None, Stockholm);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn trailing_zero_totals_are_excluded_from_the_count() {
        let snaps = vec![
            snapshot("2024-05-01 20:00:00", 5, 0, None),
            snapshot("2024-05-01 21:00:00", 3, 0, None),
            snapshot("2024-05-01 22:00:00", 0, 0, None),
            snapshot("2024-05-01 23:00:00", 0, 0, None),
        ];
        let points = build_points(&snaps);
        let s = summary(&points, time_domain(&points), Stockholm);
        assert_eq!(s.count, 2);
        assert_eq!(s.peak_total, 5);
        // 20:00 and 21:00 UTC are 22:00 and 23:00 in Stockholm (CEST).
        assert_eq!(s.hours_covered, 2);
    }

    #[test]
    fn all_zero_totals_count_the_whole_list() {
        let snaps = vec![
            snapshot("2024-05-01 20:00:00", 0, 0, None),
            snapshot("2024-05-01 21:00:00", 0, 0, None),
        ];
        let points = build_points(&snaps);
        let s = summary(&points, time_domain(&points), Stockholm);
        assert_eq!(s.count, 2);
        assert_eq!(s.peak_total, 0);
        assert_eq!((s.member_pct, s.non_member_pct), (0, 0));
    }

    #[test]
    fn ratio_weights_the_last_active_reading_until_the_next_point() {
        // Members-only for an hour, then non-members-only for an hour,
        // then an empty reading that closes the night.
        let snaps = vec![
            snapshot("2024-05-01 20:00:00", 10, 0, None),
            snapshot("2024-05-01 21:00:00", 0, 10, None),
            snapshot("2024-05-01 22:00:00", 0, 0, None),
        ];
        let points = build_points(&snaps);
        let s = summary(&points, time_domain(&points), Stockholm);
        assert_eq!((s.member_pct, s.non_member_pct), (50, 50));
    }

    #[test]
    fn average_occupancy_ignores_missing_values() {
        let mut a = snapshot("2024-05-01 20:00:00", 5, 0, None);
        a.occupancy_pct = Some(40.0);
        let b = snapshot("2024-05-01 21:00:00", 5, 0, None);
        let mut c = snapshot("2024-05-01 22:00:00", 5, 0, None);
        c.occupancy_pct = Some(50.5);

        let points = build_points(&[a, b, c]);
        let s = summary(&points, time_domain(&points), Stockholm);
        assert_eq!(s.avg_occupancy_pct, 45.3);
    }
}
