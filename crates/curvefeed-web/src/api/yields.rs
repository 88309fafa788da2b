use actix_web::{get, web, HttpResponse, Responder};
use curvefeed_feeds::api::HttpClient;
use curvefeed_feeds::schema::yields;
use log::error;
use serde_json::json;

use super::respond;

/// Weekly Treasury par-yield history, 2020 through today.
///
/// ```json
/// {
///     "success": true,
///     "count": 240,
///     "lastUpdated": "2024-08-02T12:00:00.000Z",
///     "data": [
///         {
///             "date": "2024-01-05",
///             "label": "Jan 05, 2024",
///             "rates": [5.50, 5.48, 5.44, 5.40, 5.30, 5.10, 4.80, 4.50, 4.20, 4.10, 4.05, 4.30, 4.40]
///         }
///     ]
/// }
/// ```
#[get("/api/yields")]
pub(crate) async fn history(client: web::Data<HttpClient>) -> impl Responder {
    match yields::assemble(&client).await {
        Ok(body) => respond(HttpResponse::Ok(), &body),
        Err(e) => {
            error!("yield pipeline failed: {e}");
            respond(
                HttpResponse::InternalServerError(),
                &json!({ "success": false, "error": e.to_string() }),
            )
        }
    }
}
