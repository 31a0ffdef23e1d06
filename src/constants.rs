//! Configuration constants for coactor-graph
//!
//! Defaults for the API client, the crawl, and the output files. Most of
//! these can be overridden through command-line flags or environment
//! variables.

use std::time::Duration;

/// TMDb API client configuration
pub mod api {
    use super::*;

    /// Base URL of the TMDb v3 API
    pub const BASE_URL: &str = "https://api.themoviedb.org/3";

    /// Locale sent with every request
    pub const LANGUAGE: &str = "en-US";

    /// Socket timeout for a single request
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

    /// Delay after each failed attempt. The length is the attempt count.
    pub const RETRY_DELAYS: [Duration; 3] = [
        Duration::from_millis(250),
        Duration::from_millis(500),
        Duration::from_millis(1000),
    ];

    /// Environment variable holding the API credential
    pub const API_KEY_ENV: &str = "TMDB_API_KEY";
}

/// Crawl defaults
pub mod crawl {
    /// Laurence Fishburne
    pub const SEED_ID: &str = "2975";
    pub const SEED_NAME: &str = "Laurence Fishburne";

    /// Release date window (inclusive, ISO `YYYY-MM-DD`)
    pub const START_DATE: &str = "1999-01-01";
    pub const END_DATE: &str = "1999-12-31";

    /// Top-billed cast members taken from each movie
    pub const CAST_LIMIT: usize = 5;

    /// Expansion rounds after the base phase
    pub const EXPANSION_ROUNDS: usize = 2;
}

/// Output configuration
pub mod output {
    pub const NODES_FILE: &str = "nodes.csv";
    pub const EDGES_FILE: &str = "edges.csv";

    pub const NODES_HEADER: [&str; 2] = ["id", "name"];
    pub const EDGES_HEADER: [&str; 2] = ["source", "target"];

    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
}

/// Logging configuration
pub mod logging {
    /// Filter used when `RUST_LOG` is unset
    pub const DEFAULT_FILTER: &str = "warn";
}
