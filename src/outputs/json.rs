//! JSON output for the ETL pipeline.
//!
//! The file is a pretty-printed array of [`ProgramListing`] objects with
//! two-space indentation. Non-ASCII characters are written as-is. Each run
//! overwrites the previous file completely.

use crate::models::ProgramListing;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `programs` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization, directory creation, or the write fails.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = programs.len()))]
pub async fn write_programs(programs: &[ProgramListing], path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(programs)?;

    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!("Wrote programs JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn read_programs(path: &Path) -> Vec<ProgramListing> {
        let text = fs::read_to_string(path).await.unwrap();
        serde_json::from_str(&text).unwrap()
    }

    fn sample() -> Vec<ProgramListing> {
        vec![
            ProgramListing {
                code: "WCS".to_string(),
                program_name: "Computer Science".to_string(),
                university_slug: "waterloo".to_string(),
                university: "University of Waterloo".to_string(),
            },
            ProgramListing {
                code: "OAF".to_string(),
                program_name: "Études françaises".to_string(),
                university_slug: "ottawa".to_string(),
                university: "University of Ottawa".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn test_round_trip_preserves_order_and_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round_trip/nested/ouacPrograms.json");
        write_programs(&sample(), &path).await.unwrap();

        let back = read_programs(&path).await;
        assert_eq!(back, sample());
    }

    #[tokio::test]
    async fn test_output_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("format.json");
        write_programs(&sample()[..1], &path).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let expected = "[\n  {\n    \"code\": \"WCS\",\n    \"programName\": \"Computer Science\",\n    \"universitySlug\": \"waterloo\",\n    \"university\": \"University of Waterloo\"\n  }\n]";
        assert_eq!(text, expected);
    }

    #[tokio::test]
    async fn test_non_ascii_is_not_escaped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("unicode.json");
        write_programs(&sample(), &path).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Études françaises"));
        assert!(!text.contains("\\u"));
    }

    #[tokio::test]
    async fn test_overwrites_previous_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overwrite.json");
        write_programs(&sample(), &path).await.unwrap();
        write_programs(&[], &path).await.unwrap();

        assert!(read_programs(&path).await.is_empty());
    }
}
