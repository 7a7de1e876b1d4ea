use crate::fetch::{FetchConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Extract a property record from a SUUMO detached-house listing page
#[derive(Debug, Parser)]
#[command(name = "sumoson", version)]
pub struct Cli {
    /// Listing URL, e.g. https://suumo.jp/ikkodate/tokyo/sc_shinjuku/nc_87706145/
    pub url: String,

    /// Read the page from a saved HTML file instead of fetching the URL
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Save the fetched page to this path
    #[arg(long, value_name = "PATH", conflicts_with = "html")]
    pub dump_html: Option<PathBuf>,

    /// Pretty-print the JSON record
    #[arg(long)]
    pub pretty: bool,

    /// Request timeout in seconds
    #[arg(long, env = "SUMOSON_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// User-Agent header sent with the request
    #[arg(long, env = "SUMOSON_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Cli {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
