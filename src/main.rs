use crate::config::{Cli, Mode};
use crate::db::StateStore;
use crate::reconciler::Reconciler;
use crate::scraper::Alpha123Client;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod reconciler;
mod scraper;


const NOTHING_NEW: &str = "OK: 没有新空投或更新";

fn main() {
    // stdout carries the notification lines; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let client = match Alpha123Client::new(cli.api_url.clone(), cli.timeout()) {
        Ok(client) => client,
        Err(e) => {
            error!("❌ {e}");
            return 1;
        }
    };

    let reconciler = Reconciler::new(StateStore::new(cli.state_path()), cli.detail_url.clone());

    match cli.mode() {
        Mode::Check => match reconciler.check(&client) {
            Ok(notifications) if notifications.is_empty() => {
                println!("{NOTHING_NEW}");
                0
            }
            Ok(notifications) => {
                for notification in &notifications {
                    match serde_json::to_string(notification) {
                        Ok(line) => println!("{line}"),
                        Err(e) => error!("could not encode notification: {e}"),
                    }
                }
                0
            }
            Err(e) => {
                error!("❌ {e}");
                eprintln!("ERROR: check failed");
                1
            }
        },
        Mode::Init => match reconciler.initialize(&client) {
            Ok(count) => {
                println!("OK: 初始化完成，记录了 {count} 条空投");
                0
            }
            Err(e) => {
                error!("❌ {e}");
                eprintln!("ERROR: init failed");
                1
            }
        },
        Mode::Dump => match client.fetch_raw() {
            Ok(listings) => {
                for listing in &listings {
                    match serde_json::to_string(listing) {
                        Ok(line) => println!("{line}"),
                        Err(e) => error!("could not encode listing: {e}"),
                    }
                }
                0
            }
            Err(e) => {
                error!("❌ {e}");
                1
            }
        },
    }
}
