//! Output generation for the scraped program list.
//!
//! # Submodules
//!
//! - [`json`]: Writes the deduplicated listings to the JSON file read by the ETL pipeline
//! - [`report`]: Builds the per-university verification listing printed after a run
//!
//! # Output Structure
//!
//! ```text
//! <crate root>/
//! └── lib/
//!     └── etl/
//!         └── ouacPrograms.json
//! ```

pub mod json;
pub mod report;
