//! Caller-supplied expectations about a fetched batch.

use crate::core::batch::Batch;
use crate::core::record::RecordRef;
use crate::core::types::{Detail, RuleId, ValidationResult};

/// Some record's title must equal `title` exactly.
pub fn check_title_present(batch: &Batch, title: &str) -> ValidationResult {
    let matches: Vec<RecordRef> = batch
        .records()
        .iter()
        .filter(|record| record.title == title)
        .map(RecordRef::from)
        .collect();

    let rule = RuleId::TitlePresent;
    if matches.is_empty() {
        ValidationResult::fail(
            rule,
            format!("expected a record titled '{title}', found none"),
            Vec::new(),
        )
    } else {
        let count = matches.len();
        ValidationResult::pass(rule, format!("'{title}' present in {count} records"))
            .with_details(vec![Detail::new(matches, "title match")])
    }
}

/// The source must have delivered exactly `expected` entries, counting
/// rejected ones.
pub fn check_result_count(batch: &Batch, expected: usize) -> ValidationResult {
    let observed = batch.source_len();
    let rule = RuleId::ResultCount;
    if observed == expected {
        ValidationResult::pass(rule, format!("{observed} results"))
    } else {
        ValidationResult::fail(
            rule,
            format!("observed count {observed}, expected count {expected}"),
            Vec::new(),
        )
    }
}
