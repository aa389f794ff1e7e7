mod cli;
mod config;
mod constants;
mod error;
mod print_help;
mod recipe;
mod utils;

use crate::cli::is_help_requested;
use crate::config::WhiskConfig;
use crate::print_help::print_help;
use crate::utils::process_command;
use colored::Colorize;
use std::{env, error::Error, process};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if is_help_requested(&args) {
        print_help();
        return Ok(());
    }

    let config = WhiskConfig::from_env();
    let client = reqwest::Client::builder().timeout(config.timeout).build()?;

    if let Err(e) = process_command(&client, &config, &args).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if e.is_internal() {
            eprintln!(
                "{}",
                "The Whisk service reported an internal error; run with RUST_LOG=error for request details."
                    .yellow()
            );
        }
        process::exit(1);
    }

    Ok(())
}
