//! Available puzzle dates

use crate::error::Result;
use crate::puzzles::PuzzleRepository;
use chrono::NaiveDate;

/// Dates a repository can serve, relative to today
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateListing {
    pub dates: Vec<NaiveDate>,
    pub today: NaiveDate,
}

impl DateListing {
    #[must_use]
    pub fn has_today(&self) -> bool {
        self.dates.contains(&self.today)
    }

    /// Most recent date not after today
    #[must_use]
    pub fn latest_playable(&self) -> Option<NaiveDate> {
        self.dates.iter().rev().find(|&&d| d <= self.today).copied()
    }
}

/// List the dates `repo` holds puzzles for
///
/// # Errors
///
/// Returns an error if the repository cannot be listed.
pub fn list_dates(repo: &dyn PuzzleRepository, today: NaiveDate) -> Result<DateListing> {
    Ok(DateListing {
        dates: repo.available_dates()?,
        today,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::EmbeddedRepository;

    const JSON: &str = r#"[{
        "equation": [{"emoji": "a"}],
        "missingIndex": 0,
        "options": ["a"],
        "rationale": ""
    }]"#;

    static CATALOG: &[(&str, &str)] = &[("2025-03-10", JSON), ("2025-03-12", JSON)];

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn listing_knows_today() {
        let repo = EmbeddedRepository::with_catalog(CATALOG);
        let listing = list_dates(&repo, date(12)).unwrap();

        assert_eq!(listing.dates, vec![date(10), date(12)]);
        assert!(listing.has_today());
        assert_eq!(listing.latest_playable(), Some(date(12)));
    }

    #[test]
    fn latest_playable_skips_future() {
        let repo = EmbeddedRepository::with_catalog(CATALOG);
        let listing = list_dates(&repo, date(11)).unwrap();

        assert!(!listing.has_today());
        assert_eq!(listing.latest_playable(), Some(date(10)));
    }

    #[test]
    fn nothing_playable_before_first_date() {
        let repo = EmbeddedRepository::with_catalog(CATALOG);
        let listing = list_dates(&repo, date(1)).unwrap();
        assert_eq!(listing.latest_playable(), None);
    }
}
