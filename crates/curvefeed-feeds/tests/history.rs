//! End-to-end check of the yield side: raw yearly CSV text in, weekly
//! charting points out.

use chrono::NaiveDate;
use curvefeed_feeds::schema::yields::{build_history, curve};

const HEADER: &str = "Date,1 Mo,2 Mo,3 Mo,4 Mo,6 Mo,1 Yr,2 Yr,3 Yr,5 Yr,7 Yr,10 Yr,20 Yr,30 Yr";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn three_weeks_of_daily_rows_become_three_points() {
    // Week 1: full trading week. Week 2: Friday missing (holiday), one row
    // with an interpolatable gap. Week 3: a sparse row that must be dropped,
    // then a lone Friday.
    let text = format!(
        "{HEADER}\n\
         01/02/2024,5.50,5.48,5.44,5.40,5.30,5.10,4.80,4.50,4.20,4.10,4.05,4.30,4.40\n\
         01/03/2024,5.51,5.48,5.44,5.40,5.30,5.10,4.80,4.50,4.20,4.10,4.05,4.30,4.40\n\
         01/05/2024,5.52,5.48,5.44,5.40,5.30,5.10,4.80,4.50,4.20,4.10,4.05,4.30,4.40\n\
         01/08/2024,5.53,5.48,5.44,5.40,5.30,5.10,4.80,4.50,4.20,4.10,4.05,4.30,4.40\n\
         01/11/2024,5.54,5.48,,5.40,5.30,5.10,4.80,4.50,4.20,4.10,4.05,4.30,4.40\n\
         01/16/2024,5.55,5.48,5.44,5.40,,,,,,,,,\n\
         01/19/2024,5.56,5.48,5.44,5.40,5.30,5.10,4.80,4.50,4.20,4.10,4.05,4.30,4.40"
    );

    let rows = curve::parse_year(&text).expect("well-formed header");
    // The sparse 01/16 row is gone before sampling.
    assert_eq!(rows.len(), 6);

    let weekly = build_history(rows);
    let dates: Vec<NaiveDate> = weekly.iter().map(|point| point.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 1, 5), date(2024, 1, 11), date(2024, 1, 19)]
    );

    // Week 2's representative is the Thursday, its 3 Mo gap interpolated
    // from the 2 Mo / 4 Mo neighbours and rounded.
    assert_eq!(weekly[1].rates[2], 5.44);

    // Every emitted rate is already at 2-decimal precision.
    for point in &weekly {
        for rate in point.rates {
            assert_eq!((rate * 100.0).round() / 100.0, rate);
        }
    }
}
