//! Verification listing printed after a run.
//!
//! Shows every program for one university slug, sorted by code, so a human
//! can eyeball the scrape against the live site. Not part of the JSON file.

use crate::models::ProgramListing;
use crate::utils::titleize_slug;

/// Programs belonging to `slug`, sorted by code.
pub fn programs_for<'a>(programs: &'a [ProgramListing], slug: &str) -> Vec<&'a ProgramListing> {
    let mut matching: Vec<_> = programs
        .iter()
        .filter(|p| p.university_slug == slug)
        .collect();
    matching.sort_by(|a, b| a.code.cmp(&b.code));
    matching
}

/// Render the listing for `slug`:
///
/// ```text
/// Waterloo programs (2):
///   WCS     Computer Science
///   WM      Mathematics
/// ```
pub fn verification_listing(programs: &[ProgramListing], slug: &str) -> String {
    let matching = programs_for(programs, slug);
    let mut out = format!("{} programs ({}):\n", titleize_slug(slug), matching.len());
    for p in matching {
        out.push_str(&format!("  {:<6}  {}\n", p.code, p.program_name));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(code: &str, name: &str, slug: &str) -> ProgramListing {
        ProgramListing {
            code: code.to_string(),
            program_name: name.to_string(),
            university_slug: slug.to_string(),
            university: String::new(),
        }
    }

    #[test]
    fn test_programs_for_filters_and_sorts() {
        let programs = vec![
            listing("WM", "Mathematics", "waterloo"),
            listing("YA", "Arts", "york"),
            listing("WCS", "Computer Science", "waterloo"),
            listing("WAB", "Accounting", "waterloo-st-jeromes"),
        ];
        let codes: Vec<_> = programs_for(&programs, "waterloo")
            .iter()
            .map(|p| p.code.as_str())
            .collect();
        assert_eq!(codes, vec!["WCS", "WM"]);
    }

    #[test]
    fn test_verification_listing_format() {
        let programs = vec![
            listing("WM", "Mathematics", "waterloo"),
            listing("WCS", "Computer Science", "waterloo"),
        ];
        assert_eq!(
            verification_listing(&programs, "waterloo"),
            "Waterloo programs (2):\n  WCS     Computer Science\n  WM      Mathematics\n"
        );
    }

    #[test]
    fn test_verification_listing_empty() {
        assert_eq!(verification_listing(&[], "waterloo"), "Waterloo programs (0):\n");
    }
}
