//! Data models for scraped program listings.
//!
//! This module defines the single record type produced by the scraper,
//! [`ProgramListing`], and the run-wide deduplication applied before output.
//!
//! Field names are serialized in camelCase to match the JSON file consumed by
//! the downstream ETL pipeline (`code`, `programName`, `universitySlug`,
//! `university`).

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One program offered by one university, as listed on ouinfo.ca.
///
/// `code` is only unique per university: the same code can appear under
/// several slugs, so records are keyed by `(code, university_slug)`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramListing {
    /// Uppercase program code, e.g. `"WCS"`.
    pub code: String,
    /// Display name as found in the markup, trimmed.
    pub program_name: String,
    /// Lowercase hyphenated university slug from the link path, e.g. `"waterloo"`.
    pub university_slug: String,
    /// Canonical university name resolved from the slug.
    pub university: String,
}

impl ProgramListing {
    /// The `(code, university_slug)` identity of this listing.
    pub fn key(&self) -> (&str, &str) {
        (&self.code, &self.university_slug)
    }
}

/// Collapse listings sharing a `(code, university_slug)` pair.
///
/// The first occurrence wins and discovery order is preserved. The same
/// program can show up in more than one group page, so this runs over the
/// concatenated results of every group.
pub fn dedupe_programs(programs: Vec<ProgramListing>) -> Vec<ProgramListing> {
    programs
        .into_iter()
        .unique_by(|p| {
            let (code, slug) = p.key();
            (code.to_string(), slug.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(code: &str, name: &str, slug: &str) -> ProgramListing {
        ProgramListing {
            code: code.to_string(),
            program_name: name.to_string(),
            university_slug: slug.to_string(),
            university: "Somewhere".to_string(),
        }
    }

    #[test]
    fn test_serializes_camel_case_keys() {
        let json = serde_json::to_string(&listing("WCS", "Computer Science", "waterloo")).unwrap();
        assert_eq!(
            json,
            r#"{"code":"WCS","programName":"Computer Science","universitySlug":"waterloo","university":"Somewhere"}"#
        );
    }

    #[test]
    fn test_deserializes_from_pipeline_json() {
        let json = r#"{
            "code": "QA",
            "programName": "Arts",
            "universitySlug": "queens",
            "university": "Queen's University"
        }"#;
        let p: ProgramListing = serde_json::from_str(json).unwrap();
        assert_eq!(p.key(), ("QA", "queens"));
        assert_eq!(p.university, "Queen's University");
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let programs = vec![
            listing("WCS", "Computer Science", "waterloo"),
            listing("WM", "Mathematics", "waterloo"),
            listing("WCS", "Computer Science (Co-op)", "waterloo"),
        ];
        let deduped = dedupe_programs(programs);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].program_name, "Computer Science");
        assert_eq!(deduped[1].code, "WM");
    }

    #[test]
    fn test_dedupe_same_code_different_university() {
        let programs = vec![
            listing("BSC", "Science", "brock"),
            listing("BSC", "Science", "trent"),
            listing("BSC", "Science Again", "brock"),
        ];
        let deduped = dedupe_programs(programs);
        let keys: Vec<_> = deduped.iter().map(|p| p.key()).collect();
        assert_eq!(keys, vec![("BSC", "brock"), ("BSC", "trent")]);
    }

    #[test]
    fn test_dedupe_has_no_duplicate_keys() {
        let mut programs = Vec::new();
        for i in 0..30 {
            let code = format!("C{}", i % 7);
            let slug = if i % 2 == 0 { "york" } else { "trent" };
            programs.push(listing(&code, &format!("Program {i}"), slug));
        }
        let deduped = dedupe_programs(programs.clone());

        let mut seen = std::collections::HashSet::new();
        for p in &deduped {
            assert!(seen.insert(p.key()), "duplicate key {:?}", p.key());
            let first = programs.iter().find(|q| q.key() == p.key()).unwrap();
            assert_eq!(first, p);
        }
        assert_eq!(deduped.len(), 14);
    }

    #[test]
    fn test_dedupe_empty() {
        assert!(dedupe_programs(Vec::new()).is_empty());
    }
}
