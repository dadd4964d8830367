//! Title invariants: palindrome coverage and cross-title containment.

use tracing::debug;

use crate::core::batch::Batch;
use crate::core::error::InvalidInputError;
use crate::core::palindrome::is_palindrome;
use crate::core::types::{Detail, RuleId, ValidationResult};

/// At least `min_palindromes` whitespace-separated title tokens across the
/// batch must be palindromes.
///
/// Matching tokens are listed as details. Errors from the palindrome
/// checker propagate.
pub fn check_title_palindromes(
    batch: &Batch,
    min_palindromes: usize,
) -> Result<ValidationResult, InvalidInputError> {
    let mut details = Vec::new();
    for record in batch.records() {
        for token in record.title.split_whitespace() {
            if is_palindrome(token)? {
                details.push(Detail::new(
                    vec![record.into()],
                    format!("'{token}' is a palindrome"),
                ));
            }
        }
    }

    let count = details.len();
    debug!(count, min_palindromes, "title palindromes checked");
    let rule = RuleId::TitlePalindrome;
    let result = if count >= min_palindromes {
        ValidationResult::pass(rule, format!("{count} palindromic title tokens"))
            .with_details(details)
    } else {
        ValidationResult::fail(
            rule,
            format!("expected at least {min_palindromes} palindromic title tokens, found {count}"),
            details,
        )
    };
    Ok(result)
}

/// More than `min_pairs_exclusive` ordered pairs `(a, b)` of records with
/// different titles must have `a.title` contained in `b.title`.
///
/// All `n * (n - 1)` ordered pairs of positions are visited once. Every
/// qualifying pair is listed, pass or fail.
pub fn check_title_substrings(batch: &Batch, min_pairs_exclusive: usize) -> ValidationResult {
    let records = batch.records();
    let mut details = Vec::new();
    for (i, inner) in records.iter().enumerate() {
        for (j, outer) in records.iter().enumerate() {
            if i == j || inner.title == outer.title {
                continue;
            }
            if outer.title.contains(inner.title.as_str()) {
                details.push(Detail::new(
                    vec![inner.into(), outer.into()],
                    format!("\"{}\" occurs in \"{}\"", inner.title, outer.title),
                ));
            }
        }
    }

    let count = details.len();
    debug!(count, min_pairs_exclusive, "title substrings checked");
    let rule = RuleId::TitleSubstring;
    if count > min_pairs_exclusive {
        ValidationResult::pass(rule, format!("{count} titles contained in other titles"))
            .with_details(details)
    } else {
        ValidationResult::fail(
            rule,
            format!(
                "expected more than {min_pairs_exclusive} titles contained in other titles, found {count}"
            ),
            details,
        )
    }
}
