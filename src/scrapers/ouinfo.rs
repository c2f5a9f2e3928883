//! ouinfo.ca program search scraper.
//!
//! This module scrapes the [ouinfo.ca](https://www.ouinfo.ca) program search,
//! which splits the full program list into twelve alphabetical groups. Each
//! group page lists programs as headings linking to the program page:
//!
//! ```text
//! <h2 class="result-heading"><a href="/programs/waterloo/wcs">Computer Science</a></h2>
//! ```
//!
//! The link path carries the university slug and the program code; the link
//! text is the program name.
//!
//! Groups are fetched one at a time with a pause after each attempt. A group
//! that fails to fetch is logged and contributes no programs; the remaining
//! groups still run.

use crate::models::ProgramListing;
use crate::universities::university_name;
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::error::Error;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Alphabetical group keys used by the ouinfo.ca search, in fetch order.
pub const GROUPS: [&str; 12] = [
    "a", "b", "c", "d-e", "f-g", "h", "i", "j-l", "m", "n-p", "q-s", "t-z",
];

/// Search page the group query is appended to.
pub const DEFAULT_SEARCH_URL: &str = "https://www.ouinfo.ca/programs/search/";

pub const USER_AGENT: &str = "Mozilla/5.0";

/// Path segments under `/programs/` that are listing or navigation pages.
const RESERVED_SLUGS: [&str; 4] = ["all", "universities", "compare", "search"];

static HEADING_LINK: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h2.result-heading > a[href]").expect("heading link selector must parse")
});

static PROGRAM_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/(?i:programs)/([^/?#]+)/([^/?#]*)/?$").expect("program path pattern must compile")
});

/// Source of raw group pages.
///
/// [`HttpFetcher`] is the real implementation; tests substitute canned pages.
pub trait FetchGroup {
    /// URL that relative program links on a group page resolve against.
    fn base_url(&self) -> &Url;

    /// Fetch the search results page for one group key as text.
    async fn fetch_group(&self, group: &str) -> Result<String, Box<dyn Error>>;
}

/// Fetches group pages over HTTP with a fixed user agent and timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    search_url: Url,
}

impl HttpFetcher {
    /// Build a fetcher for `search_url`, failing each request after `timeout`.
    pub fn new(search_url: Url, timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, search_url })
    }

    /// The search URL for one group, e.g. `.../programs/search/?search=&group=d-e`.
    pub fn group_url(&self, group: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("search", "")
            .append_pair("group", group);
        url
    }
}

impl FetchGroup for HttpFetcher {
    fn base_url(&self) -> &Url {
        &self.search_url
    }

    #[instrument(level = "debug", skip(self))]
    async fn fetch_group(&self, group: &str) -> Result<String, Box<dyn Error>> {
        let url = self.group_url(group);
        let resp = self.client.get(url).send().await?.error_for_status()?;
        let bytes = resp.bytes().await?;
        let body = String::from_utf8(bytes.to_vec())?;
        debug!(bytes = body.len(), "Fetched group page");
        Ok(body)
    }
}

/// Outcome of scraping a set of groups.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    /// Candidate listings from every successful group, in discovery order.
    /// Not yet deduplicated across groups.
    pub programs: Vec<ProgramListing>,
    /// Number of groups attempted.
    pub attempted: usize,
    /// Group keys whose fetch failed.
    pub failed_groups: Vec<String>,
}

impl ScrapeReport {
    /// True when at least one group was attempted and none succeeded.
    pub fn all_failed(&self) -> bool {
        self.attempted > 0 && self.failed_groups.len() == self.attempted
    }
}

/// Extract program listings from one group page.
///
/// Only links inside `h2.result-heading` count. A link yields a listing when
/// its path is `/programs/{slug}/{code}` on the same host as `base`, the slug
/// is not a reserved navigation segment, and both the code and link text are
/// non-empty. Codes are uppercased. Repeats of the same `(slug, code)` within
/// the page are dropped.
#[instrument(level = "debug", skip_all, fields(bytes = html.len()))]
pub fn parse_programs(html: &str, base: &Url) -> Vec<ProgramListing> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut programs = Vec::new();

    for link in document.select(&HEADING_LINK) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let Some((slug, code)) = program_path(href, base) else {
            continue;
        };
        let program_name = link.text().collect::<String>().trim().to_string();
        if program_name.is_empty() {
            continue;
        }
        if !seen.insert((slug.clone(), code.clone())) {
            continue;
        }

        programs.push(ProgramListing {
            university: university_name(&slug),
            code,
            program_name,
            university_slug: slug,
        });
    }

    debug!(count = programs.len(), "Parsed group page");
    programs
}

/// Split a program link into `(slug, CODE)`, or `None` if it isn't one.
fn program_path(href: &str, base: &Url) -> Option<(String, String)> {
    let resolved = base.join(href).ok()?;
    if resolved.host_str() != base.host_str() {
        return None;
    }
    let caps = PROGRAM_PATH.captures(resolved.path())?;
    let slug = decode_segment(caps.get(1)?.as_str())?;
    let code = decode_segment(caps.get(2)?.as_str())?;
    if RESERVED_SLUGS.contains(&slug.as_str()) || code.is_empty() {
        return None;
    }
    Some((slug, code.to_uppercase()))
}

/// Undo the percent-encoding `Url` applies to path segments.
fn decode_segment(segment: &str) -> Option<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// Fetch and parse every group in order, pausing `delay` after each attempt.
///
/// Fetch errors are logged with the group key and recorded in
/// [`ScrapeReport::failed_groups`]; they never stop the run.
#[instrument(level = "info", skip_all, fields(groups = groups.len()))]
pub async fn scrape_groups<F: FetchGroup>(
    fetcher: &F,
    groups: &[String],
    delay: Duration,
) -> ScrapeReport {
    let outcomes: Vec<(String, Option<Vec<ProgramListing>>)> = stream::iter(groups)
        .then(move |group| async move {
            info!("Fetching group: {group}");
            let outcome = match fetcher.fetch_group(group).await {
                Ok(html) => {
                    let programs = parse_programs(&html, fetcher.base_url());
                    info!(%group, "Found {} programs", programs.len());
                    if programs.is_empty() {
                        warn!(%group, body = %truncate_for_log(&html, 300), "Group page had no program headings");
                    }
                    Some(programs)
                }
                Err(e) => {
                    error!(%group, error = %e, "ERROR: {e}");
                    None
                }
            };
            sleep(delay).await;
            (group.clone(), outcome)
        })
        .collect()
        .await;

    let mut report = ScrapeReport {
        attempted: outcomes.len(),
        ..ScrapeReport::default()
    };
    for (group, outcome) in outcomes {
        match outcome {
            Some(programs) => report.programs.extend(programs),
            None => report.failed_groups.push(group),
        }
    }

    info!(
        candidates = report.programs.len(),
        failed = report.failed_groups.len(),
        "Scraped all groups"
    );
    report
}
