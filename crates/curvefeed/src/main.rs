use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use curvefeed_feeds::schema::{market, yields};
use dotenv::dotenv;
use log::info;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenv().ok();
    env_logger::Builder::new().filter_level(cli.log.into()).init();

    let client = curvefeed_feeds::api::build_client()?;

    // cli framework:
    // "> curvefeed <COMMAND>"
    let body = match cli.command {
        // "> curvefeed yields"
        Commands::Yields => {
            info!("assembling weekly par-yield history");
            serde_json::to_string_pretty(&yields::assemble(&client).await?)?
        }

        // "> curvefeed market"
        Commands::Market => {
            info!("assembling reference-asset price histories");
            serde_json::to_string_pretty(&market::assemble(&client, &market::SYMBOLS).await?)?
        }
    };

    match cli.out {
        Some(path) => tokio::fs::write(&path, body).await?,
        None => println!("{body}"),
    }

    Ok(())
}
