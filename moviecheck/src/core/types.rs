//! Shared result types for the batch validators.
//!
//! A failed invariant is data, not an error: every validator returns a
//! [`ValidationResult`] whether or not the invariant held.

use serde::Serialize;

use crate::core::record::RecordRef;

/// Stable identifier of each invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    PosterPathUnique,
    PosterUrlValid,
    SortOrder,
    GenreScoreThreshold,
    TitlePalindrome,
    TitleSubstring,
    TitlePresent,
    ResultCount,
}

impl RuleId {
    /// Requirement code carried into reports.
    pub fn code(self) -> &'static str {
        match self {
            RuleId::PosterPathUnique => "SPL-001",
            RuleId::PosterUrlValid => "SPL-002",
            RuleId::SortOrder => "SPL-003",
            RuleId::GenreScoreThreshold => "SPL-004",
            RuleId::TitlePalindrome => "SPL-005",
            RuleId::TitleSubstring => "SPL-006",
            RuleId::TitlePresent => "EXT-001",
            RuleId::ResultCount => "EXT-002",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RuleId::PosterPathUnique => "no two movies share a poster",
            RuleId::PosterUrlValid => "poster paths are valid URLs",
            RuleId::SortOrder => "unclassified first, then by id",
            RuleId::GenreScoreThreshold => "few movies with high genre score",
            RuleId::TitlePalindrome => "some title contains a palindrome",
            RuleId::TitleSubstring => "titles contain other titles",
            RuleId::TitlePresent => "expected title is present",
            RuleId::ResultCount => "expected number of results",
        }
    }
}

/// One diagnostic entry: the records involved and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub records: Vec<RecordRef>,
    pub cause: String,
}

impl Detail {
    pub fn new(records: Vec<RecordRef>, cause: impl Into<String>) -> Self {
        Self {
            records,
            cause: cause.into(),
        }
    }
}

/// Outcome of a single validator over a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub rule: RuleId,
    pub passed: bool,
    /// Expected vs. observed, one line.
    pub summary: String,
    pub details: Vec<Detail>,
}

impl ValidationResult {
    pub fn pass(rule: RuleId, summary: impl Into<String>) -> Self {
        Self {
            rule,
            passed: true,
            summary: summary.into(),
            details: Vec::new(),
        }
    }

    pub fn fail(rule: RuleId, summary: impl Into<String>, details: Vec<Detail>) -> Self {
        Self {
            rule,
            passed: false,
            summary: summary.into(),
            details,
        }
    }

    pub fn with_details(mut self, details: Vec<Detail>) -> Self {
        self.details = details;
        self
    }
}
