//! Daily close histories for the tracked reference assets.

pub mod index;
pub mod yahoo;

use std::collections::BTreeMap;

use chrono::Utc;
use futures::future;
use log::{debug, error};
use serde::Serialize;

use crate::api::{FeedError, HttpClient};
use crate::schema::common;

pub use index::{Symbol, SYMBOLS};
pub use yahoo::PriceSeries;

/// 2019-10-01T00:00:00Z. The price window opens a quarter before the yield
/// series does, so date-matching against the curve always has lead data.
const PRICE_START_EPOCH: i64 = 1_569_888_000;

/// Envelope returned by the market endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketResponse {
    pub success: bool,
    pub symbols: Vec<&'static str>,
    pub last_updated: String,
    pub prices: BTreeMap<&'static str, PriceSeries>,
}

/// Fetch every tracked symbol's close history, concurrently and jointly
/// awaited.
///
/// A symbol whose fetch fails on both chart hosts is logged and reported as
/// an empty map; its siblings are unaffected, so the envelope itself still
/// succeeds.
pub async fn assemble(
    client: &HttpClient,
    symbols: &[Symbol],
) -> Result<MarketResponse, FeedError> {
    let period1 = PRICE_START_EPOCH;
    let period2 = Utc::now().timestamp() + 86_400;

    let fetches = symbols.iter().map(|symbol| async move {
        let outcome = yahoo::fetch_history(client, symbol.ticker, period1, period2).await;
        (symbol, outcome)
    });

    let mut prices = BTreeMap::new();
    for (symbol, outcome) in future::join_all(fetches).await {
        match outcome {
            Ok(series) => {
                debug!("[{}] {} daily closes", symbol.ticker, series.len());
                prices.insert(symbol.key, series);
            }
            Err(e) => {
                error!("{e}; filling [{}] with an empty series instead", symbol.ticker);
                prices.insert(symbol.key, PriceSeries::new());
            }
        }
    }

    Ok(MarketResponse {
        success: true,
        symbols: symbols.iter().map(|symbol| symbol.key).collect(),
        last_updated: common::timestamp_now(),
        prices,
    })
}
