use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::{dotenv, var};

mod api;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // one outbound client shared by every request
    let client = curvefeed_feeds::api::build_client().expect("failed to build HTTP client");

    let bind = var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    // run server
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(client.clone()))
            .service(api::yields::history)
            .service(api::market::prices)
    })
    .bind(bind)?
    .run()
    .await
}
