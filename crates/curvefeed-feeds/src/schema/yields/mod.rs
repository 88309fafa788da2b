//! Weekly par-yield history assembled from the Treasury's daily CSVs.

pub mod curve;
pub mod weekly;

use chrono::{Datelike, Utc};
use futures::future;
use log::{debug, error};
use serde::Serialize;

use crate::api::{FeedError, HttpClient};
use crate::schema::common;

pub use curve::{Maturity, YieldRow};
pub use weekly::CurvePoint;

/// First calendar year of the assembled history.
pub const START_YEAR: i32 = 2020;

fn year_url(year: i32) -> String {
    format!(
        "https://home.treasury.gov/resource-center/data-chart-center/interest-rates/daily-treasury-rates.csv/{year}/all?type=daily_treasury_yield_curve&field_tdr_date_value={year}&page&_format=csv"
    )
}

/// Envelope returned by the yields endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldResponse {
    pub success: bool,
    pub count: usize,
    pub last_updated: String,
    pub data: Vec<CurvePoint>,
}

async fn fetch_year(client: &HttpClient, year: i32) -> Result<String, FeedError> {
    let response = client.get(year_url(year)).send().await?;
    if !response.status().is_success() {
        return Err(FeedError::Upstream {
            unit: year.to_string(),
            status: response.status(),
        });
    }
    Ok(response.text().await?)
}

/// Merge parsed daily rows from any number of years, sort them
/// chronologically, and downsample to one point per week.
pub fn build_history(mut rows: Vec<YieldRow>) -> Vec<CurvePoint> {
    rows.sort_by_key(|row| row.date);
    weekly::sample_weekly(rows)
}

/// Assemble the weekly history from [`START_YEAR`] through the current
/// calendar year.
///
/// All years are fetched concurrently and awaited jointly; a year that
/// fails to download or whose file is structurally unusable is logged and
/// contributes no rows, never failing its siblings.
pub async fn assemble(client: &HttpClient) -> Result<YieldResponse, FeedError> {
    let current_year = Utc::now().year();
    let years: Vec<i32> = (START_YEAR..=current_year).collect();

    let fetches = years.into_iter().map(|year| async move {
        let outcome = match fetch_year(client, year).await {
            Ok(text) => curve::parse_year(&text),
            Err(e) => Err(e),
        };
        (year, outcome)
    });

    let mut all_days = Vec::new();
    for (year, outcome) in future::join_all(fetches).await {
        match outcome {
            Ok(rows) => {
                debug!("treasury {year}: {} daily rows", rows.len());
                all_days.extend(rows);
            }
            Err(e) => error!("treasury {year} skipped: {e}"),
        }
    }

    let data = build_history(all_days);
    Ok(YieldResponse {
        success: true,
        count: data.len(),
        last_updated: common::timestamp_now(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const HEADER: &str = "Date,1 Mo,2 Mo,3 Mo,4 Mo,6 Mo,1 Yr,2 Yr,3 Yr,5 Yr,7 Yr,10 Yr,20 Yr,30 Yr";

    fn year_of(text: &str) -> Vec<YieldRow> {
        curve::parse_year(text).expect("header resolves")
    }

    #[test]
    fn multi_year_history_is_sorted_and_sampled() {
        // Years arrive in whatever order the fetches complete; rows within a
        // file are chronological but the concatenation is not.
        let later = format!(
            "{HEADER}\n01/07/2021,5.50,5.48,5.44,5.40,5.30,5.10,4.80,4.50,4.20,4.10,4.05,4.30,4.40"
        );
        let earlier = format!(
            "{HEADER}\n12/29/2020,5.50,5.48,5.44,5.40,5.30,5.10,4.80,4.50,4.20,4.10,4.05,4.30,4.40\n12/31/2020,5.51,5.48,5.44,5.40,5.30,5.10,4.80,4.50,4.20,4.10,4.05,4.30,4.40"
        );

        let mut rows = year_of(&later);
        rows.extend(year_of(&earlier));
        let history = build_history(rows);

        let dates: Vec<NaiveDate> = history.iter().map(|point| point.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);

        // Dec 29 (Tue) and Dec 31 (Thu) share a week; Jan 7 opens another.
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date, NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
        assert_eq!(history[1].date, NaiveDate::from_ymd_opt(2021, 1, 7).unwrap());
    }

    #[test]
    fn envelope_serializes_with_charting_field_names() {
        let response = YieldResponse {
            success: true,
            count: 1,
            last_updated: "2024-01-05T12:00:00.000Z".to_string(),
            data: build_history(year_of(&format!(
                "{HEADER}\n01/05/2024,5.50,5.48,5.44,5.40,5.30,5.10,4.80,4.50,4.20,4.10,4.05,4.30,4.40"
            ))),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["count"], 1);
        assert!(value["lastUpdated"].is_string());
        assert_eq!(value["data"][0]["date"], "2024-01-05");
        assert_eq!(value["data"][0]["label"], "Jan 05, 2024");
        assert_eq!(value["data"][0]["rates"].as_array().unwrap().len(), 13);
    }
}
