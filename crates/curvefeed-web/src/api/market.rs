use actix_web::{get, web, HttpResponse, Responder};
use curvefeed_feeds::api::HttpClient;
use curvefeed_feeds::schema::market::{self, SYMBOLS};
use log::error;
use serde_json::json;

use super::respond;

/// Daily close history per tracked reference asset.
///
/// ```json
/// {
///     "success": true,
///     "symbols": ["spy", "qqq", "btc", "eth"],
///     "lastUpdated": "2024-08-02T12:00:00.000Z",
///     "prices": {
///         "spy": { "2024-01-05": 474.12 },
///         "btc": {}
///     }
/// }
/// ```
#[get("/api/market")]
pub(crate) async fn prices(client: web::Data<HttpClient>) -> impl Responder {
    match market::assemble(&client, &SYMBOLS).await {
        Ok(body) => respond(HttpResponse::Ok(), &body),
        Err(e) => {
            error!("market pipeline failed: {e}");
            respond(
                HttpResponse::InternalServerError(),
                &json!({ "success": false, "error": e.to_string() }),
            )
        }
    }
}
