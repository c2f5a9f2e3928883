//! Command-line interface definitions for the OUAC program scraper.
//!
//! Every option has a default, so running the binary with no arguments scrapes
//! all groups from ouinfo.ca and writes `lib/etl/ouacPrograms.json` under the
//! crate root. Options can also be set through environment variables.

use crate::scrapers::ouinfo::DEFAULT_SEARCH_URL;
use clap::Parser;
use std::path::PathBuf;

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_DELAY_MS: u64 = 500;
const DEFAULT_VERIFY_SLUG: &str = "waterloo";

/// Command-line arguments for the scraper.
///
/// # Examples
///
/// ```sh
/// # Full scrape with defaults
/// ouac_programs
///
/// # Two groups only, written elsewhere
/// ouac_programs -g a,b -o /tmp/ouacPrograms.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output path for the programs JSON file [default: <crate root>/lib/etl/ouacPrograms.json]
    #[arg(short, long, env = "OUAC_PROGRAMS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Search page URL the group query is appended to
    #[arg(long, env = "OUAC_SEARCH_URL", default_value = DEFAULT_SEARCH_URL)]
    pub search_url: String,

    /// Comma-separated group keys to fetch (default: all twelve)
    #[arg(short, long, value_delimiter = ',')]
    pub groups: Vec<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Pause after each group request in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// University slug whose programs are printed after the run
    #[arg(long, default_value = DEFAULT_VERIFY_SLUG)]
    pub verify_slug: String,
}

impl Cli {
    /// Settings that differ from a run with no arguments, as `(name, value)`.
    ///
    /// Environment variables can change a no-argument run, so `main` logs these.
    pub fn overrides(&self) -> Vec<(&'static str, String)> {
        let mut changed = Vec::new();
        if let Some(output) = &self.output {
            changed.push(("output", output.display().to_string()));
        }
        if self.search_url != DEFAULT_SEARCH_URL {
            changed.push(("search_url", self.search_url.clone()));
        }
        if !self.groups.is_empty() {
            changed.push(("groups", self.groups.join(",")));
        }
        if self.timeout_secs != DEFAULT_TIMEOUT_SECS {
            changed.push(("timeout_secs", self.timeout_secs.to_string()));
        }
        if self.delay_ms != DEFAULT_DELAY_MS {
            changed.push(("delay_ms", self.delay_ms.to_string()));
        }
        if self.verify_slug != DEFAULT_VERIFY_SLUG {
            changed.push(("verify_slug", self.verify_slug.clone()));
        }
        changed
    }
}
