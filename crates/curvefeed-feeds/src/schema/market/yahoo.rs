//! Daily close history from the quote-chart API, per ticker.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use log::warn;
use serde::Deserialize;

use crate::api::{FeedError, HttpClient};
use crate::schema::common::round2;

/// Primary chart host and its interchangeable mirror.
const HOSTS: [&str; 2] = ["query1.finance.yahoo.com", "query2.finance.yahoo.com"];

/// Daily close prices for one symbol, keyed by UTC calendar date.
pub type PriceSeries = BTreeMap<NaiveDate, f64>;

fn chart_url(host: &str, ticker: &str, period1: i64, period2: i64) -> String {
    format!(
        "https://{host}/v8/finance/chart/{ticker}?period1={period1}&period2={period2}&interval=1d&includePrePost=false"
    )
}

/// Fetch one ticker's full daily close history between the epoch-second
/// bounds.
///
/// A non-success status from the primary host falls back to the mirror
/// once, with identical parameters; both failing is an upstream error
/// carrying the ticker and the last status seen.
pub async fn fetch_history(
    client: &HttpClient,
    ticker: &str,
    period1: i64,
    period2: i64,
) -> Result<PriceSeries, FeedError> {
    let mut response = client
        .get(chart_url(HOSTS[0], ticker, period1, period2))
        .send()
        .await?;

    if !response.status().is_success() {
        warn!(
            "[{ticker}] primary chart host answered {}; retrying the mirror",
            response.status()
        );
        response = client
            .get(chart_url(HOSTS[1], ticker, period1, period2))
            .send()
            .await?;
    }

    if !response.status().is_success() {
        return Err(FeedError::Upstream {
            unit: ticker.to_string(),
            status: response.status(),
        });
    }

    let history: PriceHistory = response.json().await?;
    match history.chart.result {
        Some(data) if !data.is_empty() => Ok(close_series(&data[0])),
        _ => {
            warn!("[{ticker}] chart response carried no result; filling with an empty series instead");
            Ok(PriceSeries::new())
        }
    }
}

/// Zip timestamps with closes, skipping absent closes. Each UNIX timestamp
/// keys by its UTC calendar date; a later timestamp on the same date
/// overwrites the earlier one.
fn close_series(data: &ChartData) -> PriceSeries {
    let closes = data
        .indicators
        .quote
        .first()
        .map(|quote| quote.close.as_slice())
        .unwrap_or(&[]);

    let mut series = PriceSeries::new();
    for (timestamp, close) in data.timestamp.iter().zip(closes) {
        let Some(price) = close else { continue };
        let Some(when) = DateTime::from_timestamp(*timestamp, 0) else {
            continue;
        };
        series.insert(when.date_naive(), round2(*price));
    }
    series
}

// Input: quote-chart API
// ==========================================================================

#[derive(Deserialize, Debug)]
struct PriceHistory {
    chart: ChartResponse,
}

#[derive(Deserialize, Debug)]
struct ChartResponse {
    result: Option<Vec<ChartData>>,
}

#[derive(Deserialize, Debug)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug)]
struct Quote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}
