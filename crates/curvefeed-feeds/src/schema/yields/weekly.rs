//! Weekly downsampling of the daily curve history.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use super::curve::{Maturity, YieldRow};

/// One curve observation chosen to represent an ISO week, ready for the
/// response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct CurvePoint {
    pub date: NaiveDate,
    pub label: String,
    pub rates: [f64; Maturity::COUNT],
}

impl From<YieldRow> for CurvePoint {
    fn from(row: YieldRow) -> Self {
        CurvePoint {
            date: row.date,
            label: row.label,
            rates: row.rates,
        }
    }
}

/// Monday-aligned start of the week containing `date`; the sampling bucket
/// key.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Day index as charted: 0 = Sunday .. 6 = Saturday.
fn day_index(weekday: Weekday) -> u32 {
    weekday.num_days_from_sunday()
}

/// Whether `candidate` displaces `incumbent` within the same week: Friday
/// wins outright, otherwise the later weekday does.
fn displaces(candidate: &YieldRow, incumbent: &YieldRow) -> bool {
    candidate.weekday == Weekday::Fri
        || day_index(candidate.weekday) > day_index(incumbent.weekday)
}

/// Reduce date-ascending daily rows to one representative per ISO week.
///
/// Single pass: rows must already be sorted ascending by date, since an
/// unsorted sequence silently reopens buckets. The one caller sorts
/// immediately beforehand.
pub fn sample_weekly(rows: Vec<YieldRow>) -> Vec<CurvePoint> {
    let mut weekly = Vec::new();
    let mut bucket: Option<(NaiveDate, YieldRow)> = None;

    for row in rows {
        let key = week_start(row.date);
        bucket = Some(match bucket.take() {
            None => (key, row),
            Some((week, best)) if week != key => {
                weekly.push(best.into());
                (key, row)
            }
            Some((week, best)) => {
                if displaces(&row, &best) {
                    (week, row)
                } else {
                    (week, best)
                }
            }
        });
    }
    if let Some((_, best)) = bucket {
        weekly.push(best.into());
    }

    weekly
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32, month: u32, day: u32, level: f64) -> YieldRow {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        YieldRow {
            date,
            label: date.format("%b %d, %Y").to_string(),
            rates: [level; Maturity::COUNT],
            weekday: date.weekday(),
        }
    }

    #[test]
    fn friday_represents_its_week() {
        // 2024-01-02 is a Tuesday, 2024-01-05 a Friday.
        let weekly = sample_weekly(vec![row(2024, 1, 2, 1.0), row(2024, 1, 5, 2.0)]);
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(weekly[0].rates[0], 2.0);
    }

    #[test]
    fn latest_weekday_when_friday_is_missing() {
        // Mon, Wed, Thu of the same week; Thursday should win.
        let weekly = sample_weekly(vec![
            row(2024, 1, 8, 1.0),
            row(2024, 1, 10, 2.0),
            row(2024, 1, 11, 3.0),
        ]);
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].date, NaiveDate::from_ymd_opt(2024, 1, 11).unwrap());
    }

    #[test]
    fn one_sample_per_distinct_week() {
        let weekly = sample_weekly(vec![
            row(2024, 1, 2, 1.0),
            row(2024, 1, 5, 1.5),
            row(2024, 1, 9, 2.0),
            row(2024, 1, 16, 3.0),
            row(2024, 1, 19, 3.5),
        ]);
        let dates: Vec<NaiveDate> = weekly.iter().map(|point| point.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 19).unwrap(),
            ]
        );

        let mut weeks: Vec<NaiveDate> = dates.into_iter().map(week_start).collect();
        weeks.dedup();
        assert_eq!(weeks.len(), 3);
    }

    #[test]
    fn weeks_start_on_monday() {
        // Sunday 2024-01-07 belongs to the week of Monday 2024-01-01.
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(week_start(sunday), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn final_open_week_is_flushed() {
        let weekly = sample_weekly(vec![row(2024, 1, 5, 1.0), row(2024, 1, 8, 2.0)]);
        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[1].date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    }
}
