//! Program listing scrapers.
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | ouinfo.ca | [`ouinfo`] | HTML scraping | Twelve alphabetical search groups |
//!
//! A scraper exposes:
//! - a [`FetchGroup`](ouinfo::FetchGroup) implementation that returns raw pages
//! - `parse_programs(html, base)`: pure extraction of listings from one page
//! - `scrape_groups(fetcher, groups, delay)`: the sequential fetch-and-parse loop
//!
//! Failed fetches are logged and skipped; they never abort the run.

pub mod ouinfo;
