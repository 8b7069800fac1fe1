//! placebot binary: `run` starts the bot, `categories` prints the menu catalog.

use anyhow::Result;
use clap::Parser;
use placebot::{load_config, run_bot, Catalog, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Categories => {
            for category in Catalog::default().categories() {
                println!("{}\t{}", category.type_code, category.display_name);
            }
            Ok(())
        }
    }
}
