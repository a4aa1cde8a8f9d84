//! Command line and environment configuration

use std::time::Duration;

use clap::Parser;
use reqwest::Url;

pub const DEFAULT_ENDPOINT: &str = "https://itunes.apple.com/search";
/// Sent on the wire as `Justin+beiber`.
pub const DEFAULT_TERM: &str = "Justin beiber";
pub const DEFAULT_ENTITY: &str = "song";

#[derive(Debug, Parser)]
#[command(name = "itunes-rs", version, about = "Browse iTunes catalog search results in the terminal")]
pub struct Cli {
    /// Free-text search term
    #[arg(short, long, env = "ITUNES_RS_TERM", default_value = DEFAULT_TERM)]
    pub term: String,

    /// Search endpoint
    #[arg(long, env = "ITUNES_RS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,

    /// Catalog entity to search for
    #[arg(long, env = "ITUNES_RS_ENTITY", default_value = DEFAULT_ENTITY)]
    pub entity: String,

    /// Ask the server for at most this many results
    #[arg(long, env = "ITUNES_RS_LIMIT")]
    pub limit: Option<u32>,

    /// Request timeout; the HTTP client default applies when unset
    #[arg(long, env = "ITUNES_RS_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            endpoint: self.endpoint.clone(),
            entity: self.entity.clone(),
            limit: self.limit,
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Request parameters shared by every fetch
#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub endpoint: Url,
    pub entity: String,
    pub limit: Option<u32>,
    pub timeout: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            entity: DEFAULT_ENTITY.to_string(),
            limit: None,
            timeout: None,
        }
    }
}
