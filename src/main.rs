use crate::cli::Cli;
use crate::document::HtmlDocument;
use crate::errors::AppError;
use crate::extract::extract_property;
use crate::fetch::ListingFetcher;
use clap::Parser;
use std::fs;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

mod cli;
mod document;
mod domain;
mod errors;
mod extract;
mod fetch;

#[cfg(test)]
mod tests;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            if let AppError::Extract(err) = &e {
                warn!(field = %err.field(), "listing page did not match the extractor");
            }
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout carries nothing but the record.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,sumoson=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<String, AppError> {
    let url = Url::parse(&cli.url).map_err(|source| AppError::InvalidUrl {
        url: cli.url.clone(),
        source,
    })?;

    let html = match &cli.html {
        Some(path) => {
            info!(path = %path.display(), "reading saved listing page");
            fs::read_to_string(path).map_err(|source| AppError::Io {
                path: path.clone(),
                source,
            })?
        }
        None => {
            let fetcher = ListingFetcher::new(&cli.fetch_config())?;
            let html = fetcher.fetch_html(url.as_str())?;

            if let Some(path) = &cli.dump_html {
                fs::write(path, &html).map_err(|source| AppError::Io {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), "saved listing page");
            }
            html
        }
    };

    let document = HtmlDocument::parse(&html);
    let record = extract_property(url.as_str(), &document.root())?;

    Ok(record.to_json(cli.pretty)?)
}
