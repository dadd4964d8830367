//! Invariants driven by `genre_ids`: score threshold and tiered sort order.

use tracing::debug;

use crate::core::batch::Batch;
use crate::core::record::{MovieRecord, RecordRef};
use crate::core::types::{Detail, RuleId, ValidationResult};

/// Fewer than `max_records_over` records may have a genre score above
/// `score_threshold`.
pub fn check_genre_scores(
    batch: &Batch,
    score_threshold: i64,
    max_records_over: usize,
) -> ValidationResult {
    let details: Vec<Detail> = batch
        .records()
        .iter()
        .filter(|record| record.genre_score() > i128::from(score_threshold))
        .map(|record| {
            Detail::new(
                vec![record.into()],
                format!(
                    "genre score {} exceeds {score_threshold}",
                    record.genre_score()
                ),
            )
        })
        .collect();

    let count = details.len();
    debug!(count, score_threshold, "genre scores checked");
    let rule = RuleId::GenreScoreThreshold;
    if count < max_records_over {
        ValidationResult::pass(
            rule,
            format!("{count} records score above {score_threshold} (limit: fewer than {max_records_over})"),
        )
        .with_details(details)
    } else {
        ValidationResult::fail(
            rule,
            format!(
                "expected fewer than {max_records_over} records scoring above {score_threshold}, found {count}"
            ),
            details,
        )
    }
}

/// Order a batch must be delivered in: unclassified records first, each
/// tier by ascending `id`. Ties keep delivery order.
pub fn expected_order(records: &[MovieRecord]) -> Vec<&MovieRecord> {
    let (mut unclassified, mut classified): (Vec<&MovieRecord>, Vec<&MovieRecord>) =
        records.iter().partition(|record| record.is_unclassified());
    unclassified.sort_by_key(|record| record.id);
    classified.sort_by_key(|record| record.id);
    unclassified.extend(classified);
    unclassified
}

/// The batch must already be in [`expected_order`].
pub fn check_sort_order(batch: &Batch) -> ValidationResult {
    let records = batch.records();
    let expected = expected_order(records);
    let divergence = expected
        .iter()
        .zip(records)
        .position(|(expected, actual)| *expected != actual);

    let rule = RuleId::SortOrder;
    match divergence {
        None => {
            debug!(len = records.len(), "sort order holds");
            ValidationResult::pass(
                rule,
                format!("{} records in expected order", records.len()),
            )
        }
        Some(index) => {
            let want = expected[index];
            let got = &records[index];
            debug!(index, expected = want.id, actual = got.id, "sort order diverges");
            ValidationResult::fail(
                rule,
                format!(
                    "order diverges at index {index}: expected id {}, found id {}",
                    want.id, got.id
                ),
                vec![Detail::new(
                    vec![RecordRef::from(want), RecordRef::from(got)],
                    format!(
                        "index {index}: expected {} ({}), found {} ({})",
                        want.id,
                        tier_label(want),
                        got.id,
                        tier_label(got)
                    ),
                )],
            )
        }
    }
}

fn tier_label(record: &MovieRecord) -> &'static str {
    if record.is_unclassified() {
        "unclassified"
    } else {
        "classified"
    }
}
