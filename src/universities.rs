//! Canonical university names keyed by ouinfo.ca slug.
//!
//! Campus and affiliate slugs (e.g. `toronto-scarborough`, `western-huron`)
//! map to the parent institution so downstream matching groups them together.

use crate::utils::titleize_slug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

const SLUG_TO_UNIVERSITY: &[(&str, &str)] = &[
    ("algoma", "Algoma University"),
    ("brock", "Brock University"),
    ("carleton", "Carleton University"),
    ("guelph", "University of Guelph"),
    ("guelph-humber", "University of Guelph-Humber"),
    ("lakehead", "Lakehead University"),
    ("laurentian", "Laurentian University"),
    ("laurier-brantford", "Wilfrid Laurier University"),
    ("laurier-milton", "Wilfrid Laurier University"),
    ("laurier-waterloo", "Wilfrid Laurier University"),
    ("mcmaster", "McMaster University"),
    ("ocad-u", "OCAD University"),
    ("ontario-tech", "Ontario Tech University"),
    ("ottawa", "University of Ottawa"),
    ("ottawa-saint-paul", "University of Ottawa"),
    ("queens", "Queen's University"),
    ("rmc", "Royal Military College of Canada"),
    ("toronto-mississauga", "University of Toronto"),
    ("toronto-scarborough", "University of Toronto"),
    ("toronto-st-george", "University of Toronto"),
    ("toronto-metropolitan", "Toronto Metropolitan University"),
    ("trent", "Trent University"),
    ("trent-durham-gta", "Trent University"),
    ("waterloo", "University of Waterloo"),
    ("waterloo-st-jeromes", "University of Waterloo"),
    ("western", "Western University"),
    ("western-huron", "Western University"),
    ("western-kings", "Western University"),
    ("windsor", "University of Windsor"),
    ("york", "York University"),
    ("york-glendon", "York University"),
    ("york-markham", "York University"),
];

static UNIVERSITIES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SLUG_TO_UNIVERSITY.iter().copied().collect());

/// Resolve a slug to its canonical university name.
///
/// Unknown slugs fall back to a titleized form of the slug.
pub fn university_name(slug: &str) -> String {
    match UNIVERSITIES.get(slug) {
        Some(name) => (*name).to_string(),
        None => titleize_slug(slug),
    }
}
