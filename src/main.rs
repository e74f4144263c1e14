use anyhow::Context;
use clap::Parser;
use countryinfo_client::{
    cli::{Args, Command},
    config::Config,
    page::TerminalPage,
    services::{
        adapter::{Dispatcher, FormAdapter},
        transport::HttpTransport,
    },
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::info;

type Adapter = FormAdapter<HttpTransport, TerminalPage>;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let config = match args.base_url.as_deref() {
        Some(base_url) => match config.with_base_url(base_url) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {}", e);
                std::process::exit(1);
            }
        },
        None => config,
    };

    init_tracing(&config.log_level);

    let page = Arc::new(TerminalPage::new());
    let adapter = Arc::new(FormAdapter::new(
        HttpTransport::new(config.base_url.clone()),
        page.clone(),
    ));

    let Some((trigger, fields)) = args.command.as_trigger() else {
        if let Err(e) = run_interactive(adapter).await {
            eprintln!("Interactive session failed: {:#}", e);
            std::process::exit(1);
        }
        return;
    };

    for (field, value) in fields {
        page.set_field(field, value);
    }

    if adapter.run(trigger).await.is_err() {
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_interactive(adapter: Arc<Adapter>) -> anyhow::Result<()> {
    let page = adapter.page().clone();
    let mut dispatcher = Dispatcher::new(adapter);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Interactive mode: info <code> [limit] | population <code> [start end] | status | quit");

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read stdin")?,
            _ = signal::ctrl_c() => None,
        };

        let Some(line) = line else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        let Some(command) = Command::parse_line(line) else {
            eprintln!("Unknown command: {}", line);
            continue;
        };
        let Some((trigger, fields)) = command.as_trigger() else {
            continue;
        };

        for (field, value) in fields {
            page.set_field(field, value);
        }
        dispatcher.fire(trigger);
    }

    info!(
        "Waiting for {} in-flight lookup(s) to finish",
        dispatcher.in_flight()
    );
    dispatcher.drain().await;

    Ok(())
}
