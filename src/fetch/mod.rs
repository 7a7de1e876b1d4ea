mod fetch_error;
mod fetcher;

pub use fetch_error::FetchError;
pub use fetcher::{FetchConfig, ListingFetcher, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
