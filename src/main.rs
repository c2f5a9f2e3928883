//! # OUAC Programs
//!
//! Scrapes the Ontario university program list from the ouinfo.ca program
//! search and writes it as a JSON lookup table for the admissions ETL
//! pipeline.
//!
//! ## Usage
//!
//! ```sh
//! ouac_programs
//! ```
//!
//! ## Architecture
//!
//! The application is a straight-line pipeline:
//! 1. **Fetching**: Download each alphabetical group page in turn, pausing between requests
//! 2. **Extracting**: Pull `(slug, code, name)` listings out of each page's result headings
//! 3. **Deduplicating**: Keep the first listing for each `(code, slug)` pair across all groups
//! 4. **Output**: Write the JSON file and print one university's programs for verification

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};
use url::Url;

mod cli;
mod models;
mod outputs;
mod scrapers;
mod universities;
mod utils;

use cli::Cli;
use models::dedupe_programs;
use outputs::{json, report};
use scrapers::ouinfo::{self, HttpFetcher};
use utils::{default_output_path, resolve_output_path};

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("ouac_programs starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let output_path = resolve_output_path(&args.output.clone().unwrap_or_else(default_output_path))?;
    for (setting, value) in args.overrides() {
        info!(setting, %value, "Default overridden");
    }
    info!(path = %output_path.display(), url = %args.search_url, "Effective output path and search URL");
    let groups: Vec<String> = if args.groups.is_empty() {
        ouinfo::GROUPS.iter().map(|g| g.to_string()).collect()
    } else {
        args.groups.clone()
    };

    // ---- Fetch and extract ----
    let search_url = Url::parse(&args.search_url)?;
    let fetcher = HttpFetcher::new(search_url, Duration::from_secs(args.timeout_secs))?;
    let scraped = ouinfo::scrape_groups(&fetcher, &groups, Duration::from_millis(args.delay_ms)).await;

    if scraped.all_failed() {
        // Exit status stays 0 here; the empty file is still written.
        warn!(
            groups = scraped.attempted,
            "Every group failed to fetch; output will be empty"
        );
    } else if !scraped.failed_groups.is_empty() {
        warn!(failed = ?scraped.failed_groups, "Some groups failed; output is partial");
    }

    // ---- Deduplicate ----
    let programs = dedupe_programs(scraped.programs);
    info!("Total programs scraped: {}", programs.len());

    // ---- Output ----
    json::write_programs(&programs, &output_path).await?;
    info!("Written to {}", output_path.display());

    println!();
    print!("{}", report::verification_listing(&programs, &args.verify_slug));

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
