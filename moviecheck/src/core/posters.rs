//! Poster path invariants: uniqueness and URL well-formedness.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::batch::Batch;
use crate::core::record::{PosterPath, RecordRef};
use crate::core::types::{Detail, RuleId, ValidationResult};
use crate::core::url::is_valid_url;

/// Value a record contributes to the uniqueness check.
///
/// Every null poster maps to the same key, so two null posters collide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum PosterKey<'a> {
    Null,
    Path(&'a str),
}

impl PosterKey<'_> {
    fn describe(&self) -> String {
        match self {
            PosterKey::Null => "null poster_path".to_string(),
            PosterKey::Path(path) => format!("poster_path '{path}'"),
        }
    }
}

/// No two records may share a poster.
///
/// Absent posters are ignored. Null posters share one placeholder value
/// unless `allow_shared_null` is set.
pub fn check_poster_uniqueness(batch: &Batch, allow_shared_null: bool) -> ValidationResult {
    let mut groups: BTreeMap<PosterKey<'_>, Vec<RecordRef>> = BTreeMap::new();
    for record in batch.records() {
        let key = match &record.poster_path {
            PosterPath::Absent => continue,
            PosterPath::Null if allow_shared_null => continue,
            PosterPath::Null => PosterKey::Null,
            PosterPath::Present(path) => PosterKey::Path(path),
        };
        groups.entry(key).or_default().push(record.into());
    }

    let considered: usize = groups.values().map(Vec::len).sum();
    let details: Vec<Detail> = groups
        .into_iter()
        .filter(|(_, records)| records.len() > 1)
        .map(|(key, records)| {
            let titles = records
                .iter()
                .map(|record| record.title.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let cause = format!(
                "{} shared by {} records: {}",
                key.describe(),
                records.len(),
                titles
            );
            Detail::new(records, cause)
        })
        .collect();

    debug!(considered, duplicates = details.len(), "poster uniqueness checked");
    let rule = RuleId::PosterPathUnique;
    if details.is_empty() {
        ValidationResult::pass(rule, format!("{considered} poster values, all distinct"))
    } else {
        ValidationResult::fail(
            rule,
            format!(
                "expected distinct poster values, found {} duplicated among {considered}",
                details.len()
            ),
            details,
        )
    }
}

/// Every present poster path must be a well-formed absolute URL.
pub fn check_poster_urls(batch: &Batch, max_url_length: usize) -> ValidationResult {
    let mut checked = 0usize;
    let mut details = Vec::new();
    for record in batch.records() {
        let Some(path) = record.poster_path.as_present() else {
            continue;
        };
        checked += 1;
        if !is_valid_url(path, max_url_length) {
            details.push(Detail::new(
                vec![record.into()],
                format!(
                    "URL validation failed for movie title \"{}\" with url \"{}\"",
                    record.title, path
                ),
            ));
        }
    }

    debug!(checked, invalid = details.len(), "poster urls checked");
    let rule = RuleId::PosterUrlValid;
    if details.is_empty() {
        ValidationResult::pass(rule, format!("{checked} poster URLs, all valid"))
    } else {
        ValidationResult::fail(
            rule,
            format!("expected 0 invalid poster URLs, found {} of {checked}", details.len()),
            details,
        )
    }
}
