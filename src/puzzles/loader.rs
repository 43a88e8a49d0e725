//! Puzzle repositories
//!
//! A repository maps a calendar date to that day's rounds. Asking for a date
//! with no puzzle yields `QuizError::DataUnavailable`; there is no fallback to
//! another day.

use super::embedded::PUZZLES;
use super::format::{Puzzle, parse_puzzle};
use crate::core::Round;
use crate::error::{QuizError, Result};
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of daily puzzles
pub trait PuzzleRepository {
    /// Load the validated rounds for `date`
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DataUnavailable` if no puzzle exists for `date`,
    /// or a parse/validation error if the stored puzzle is malformed.
    fn load(&self, date: NaiveDate) -> Result<Vec<Round>>;

    /// All dates with a stored puzzle, ascending
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be listed.
    fn available_dates(&self) -> Result<Vec<NaiveDate>>;
}

fn check_declared_date(puzzle: &Puzzle, date: NaiveDate) {
    if let Some(declared) = puzzle.date
        && declared != date
    {
        warn!(%declared, requested = %date, "Puzzle file declares a different date");
    }
}

/// Reads `<dir>/<YYYY-MM-DD>.json` files
#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    dir: PathBuf,
}

impl DirectoryRepository {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the puzzle file for `date`
    #[must_use]
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.json", date.format(DATE_FORMAT)))
    }
}

impl PuzzleRepository for DirectoryRepository {
    fn load(&self, date: NaiveDate) -> Result<Vec<Round>> {
        let path = self.path_for(date);
        debug!(path = %path.display(), "Loading puzzle file");

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(%date, "No puzzle file for date");
                return Err(QuizError::DataUnavailable { date });
            }
            Err(source) => return Err(QuizError::Io { path, source }),
        };

        let puzzle = parse_puzzle(&content)?;
        check_declared_date(&puzzle, date);
        Ok(puzzle.rounds)
    }

    fn available_dates(&self) -> Result<Vec<NaiveDate>> {
        let entries = fs::read_dir(&self.dir).map_err(|source| QuizError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut dates: Vec<NaiveDate> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| {
                let stem = path.file_stem()?.to_str()?;
                NaiveDate::parse_from_str(stem, DATE_FORMAT).ok()
            })
            .collect();

        dates.sort_unstable();
        Ok(dates)
    }
}

/// Serves puzzles compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedRepository {
    catalog: &'static [(&'static str, &'static str)],
}

impl Default for EmbeddedRepository {
    fn default() -> Self {
        Self { catalog: PUZZLES }
    }
}

impl EmbeddedRepository {
    /// Repository over a custom `(date, json)` table
    #[must_use]
    pub const fn with_catalog(catalog: &'static [(&'static str, &'static str)]) -> Self {
        Self { catalog }
    }
}

impl PuzzleRepository for EmbeddedRepository {
    fn load(&self, date: NaiveDate) -> Result<Vec<Round>> {
        let key = date.format(DATE_FORMAT).to_string();

        let Some(&(_, json)) = self.catalog.iter().find(|(d, _)| *d == key) else {
            info!(%date, "No embedded puzzle for date");
            return Err(QuizError::DataUnavailable { date });
        };

        let puzzle = parse_puzzle(json)?;
        check_declared_date(&puzzle, date);
        Ok(puzzle.rounds)
    }

    fn available_dates(&self) -> Result<Vec<NaiveDate>> {
        let mut dates: Vec<NaiveDate> = self
            .catalog
            .iter()
            .filter_map(|(d, _)| NaiveDate::parse_from_str(d, DATE_FORMAT).ok())
            .collect();
        dates.sort_unstable();
        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const ONE_ROUND: &str = r#"[{
        "equation": [{"emoji": "🐝"}, {"text": "+"}, {"emoji": "🌸"}, {"text": "="}, {"emoji": "🍯"}],
        "missingIndex": 4,
        "options": ["🍯", "🍭"],
        "rationale": "Bees make honey."
    }]"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn directory_loads_file_for_date() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("2025-03-10.json"), ONE_ROUND).unwrap();

        let repo = DirectoryRepository::new(temp_dir.path());
        let rounds = repo.load(date(2025, 3, 10)).unwrap();

        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].correct_answer(), "🍯");
    }

    #[test]
    fn directory_missing_date_is_unavailable() {
        let temp_dir = tempfile::tempdir().unwrap();
        let repo = DirectoryRepository::new(temp_dir.path());

        let result = repo.load(date(2025, 3, 11));
        assert!(matches!(
            result,
            Err(QuizError::DataUnavailable { date: d }) if d == date(2025, 3, 11)
        ));
    }

    #[test]
    fn directory_malformed_file_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("2025-03-10.json"), "[{}]").unwrap();

        let repo = DirectoryRepository::new(temp_dir.path());
        assert!(matches!(
            repo.load(date(2025, 3, 10)),
            Err(QuizError::Parse { .. })
        ));
    }

    #[test]
    fn directory_lists_dates_sorted() {
        let temp_dir = tempfile::tempdir().unwrap();
        for name in ["2025-03-12.json", "2025-03-10.json", "notes.txt", "draft.json"] {
            fs::write(temp_dir.path().join(name), ONE_ROUND).unwrap();
        }

        let repo = DirectoryRepository::new(temp_dir.path());
        let dates = repo.available_dates().unwrap();

        assert_eq!(dates, vec![date(2025, 3, 10), date(2025, 3, 12)]);
    }

    #[test]
    fn directory_listing_missing_dir_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let repo = DirectoryRepository::new(temp_dir.path().join("nope"));
        assert!(matches!(repo.available_dates(), Err(QuizError::Io { .. })));
    }

    #[test]
    fn path_for_uses_iso_date() {
        let repo = DirectoryRepository::new("data");
        assert_eq!(
            repo.path_for(date(2025, 1, 5)),
            Path::new("data").join("2025-01-05.json")
        );
    }

    static TEST_CATALOG: &[(&str, &str)] = &[("2025-03-10", ONE_ROUND)];

    #[test]
    fn embedded_loads_known_date() {
        let repo = EmbeddedRepository::with_catalog(TEST_CATALOG);
        let rounds = repo.load(date(2025, 3, 10)).unwrap();
        assert_eq!(rounds.len(), 1);
    }

    #[test]
    fn embedded_unknown_date_is_unavailable() {
        let repo = EmbeddedRepository::with_catalog(TEST_CATALOG);
        assert!(matches!(
            repo.load(date(1999, 1, 1)),
            Err(QuizError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn embedded_default_serves_catalog_dates() {
        let repo = EmbeddedRepository::default();
        let dates = repo.available_dates().unwrap();

        assert_eq!(dates.len(), PUZZLES.len());
        for d in dates {
            assert!(repo.load(d).is_ok(), "embedded puzzle {d} should load");
        }
    }
}
