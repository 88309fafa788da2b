/// A tracked reference asset: the key used in the response body plus the
/// ticker the chart endpoint knows it by.
#[derive(Debug, Clone, Copy)]
pub struct Symbol {
    pub key: &'static str,
    pub ticker: &'static str,
}

/// Statically defined reference assets.
///
/// This is currently maintained manually; the pipeline takes the set as a
/// parameter so nothing else depends on this exact list.
pub static SYMBOLS: [Symbol; 4] = [
    Symbol { key: "spy", ticker: "SPY" },
    Symbol { key: "qqq", ticker: "QQQ" },
    Symbol { key: "btc", ticker: "BTC-USD" },
    Symbol { key: "eth", ticker: "ETH-USD" },
];
