pub mod market;
pub mod yields;

use actix_web::{HttpResponse, HttpResponseBuilder};
use serde::Serialize;

/// Headers every response carries: the chart client is served from another
/// origin, and downstream caches may hold a response for an hour.
const EDGE_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET"),
    ("Cache-Control", "s-maxage=3600, stale-while-revalidate=7200"),
];

pub(crate) fn respond<T: Serialize>(mut builder: HttpResponseBuilder, body: &T) -> HttpResponse {
    for header in EDGE_HEADERS {
        builder.insert_header(header);
    }
    builder.json(body)
}
