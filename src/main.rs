use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

mod api;
mod config;
mod models;
mod table;

use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().unwrap_or_else(|err| {
        eprintln!("{}: {}", "Error".red().bold(), err);
        std::process::exit(1);
    });

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "-"]),
    );
    pb.set_message("Fetching tasks...");

    let client = reqwest::Client::new();
    let body = api::fetch_tasks(&client, &config)
        .await
        .unwrap_or_else(|err| {
            pb.finish_and_clear();
            eprintln!("{}: {}", "Error".red().bold(), err);
            std::process::exit(1);
        });

    pb.finish_and_clear();

    let tasks = models::task::decode_tasks(&body).unwrap_or_else(|err| {
        eprintln!("{}: {}", "Error".red().bold(), err);
        std::process::exit(1);
    });

    if tasks.is_empty() {
        println!("{}", table::NO_TASKS_MESSAGE);
        return Ok(());
    }

    print!("{}", table::render(&tasks));

    Ok(())
}
