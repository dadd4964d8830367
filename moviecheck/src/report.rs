//! Runs every configured check over a batch and renders the outcome.

use anyhow::{Context, Result};
use minijinja::{Environment, context};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::batch::{Batch, Rejected};
use crate::core::error::InvalidInputError;
use crate::core::expectations::{check_result_count, check_title_present};
use crate::core::genres::{check_genre_scores, check_sort_order};
use crate::core::posters::{check_poster_uniqueness, check_poster_urls};
use crate::core::record::RecordRef;
use crate::core::titles::{check_title_palindromes, check_title_substrings};
use crate::core::types::{Detail, RuleId, ValidationResult};
use crate::io::config::CheckConfig;

const REPORT_TEMPLATE: &str = include_str!("templates/report.txt");

/// Aggregated outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub results: Vec<ValidationResult>,
    pub rejected: Vec<Rejected>,
}

/// Flattened result for rendering and JSON output.
#[derive(Debug, Clone, Serialize)]
struct ReportEntry<'a> {
    code: &'static str,
    rule: RuleId,
    label: &'static str,
    passed: bool,
    summary: &'a str,
    details: &'a [Detail],
}

#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    passed: bool,
    entries: Vec<ReportEntry<'a>>,
    offending: Vec<RecordRef>,
    rejected: &'a [Rejected],
}

/// Run the six catalogue invariants, then any configured expectations.
///
/// Results come back in requirement order. Only a palindrome precondition
/// violation aborts the pass; failed invariants are reported as data.
pub fn run_checks(batch: &Batch, cfg: &CheckConfig) -> Result<Report, InvalidInputError> {
    let mut results = vec![
        check_poster_uniqueness(batch, cfg.posters.allow_shared_null),
        check_poster_urls(batch, cfg.posters.max_url_length),
        check_sort_order(batch),
        check_genre_scores(
            batch,
            cfg.genres.score_threshold,
            cfg.genres.max_records_over,
        ),
        check_title_palindromes(batch, cfg.titles.min_palindromes)?,
        check_title_substrings(batch, cfg.titles.min_substring_pairs_exclusive),
    ];
    if let Some(title) = &cfg.expect.title {
        results.push(check_title_present(batch, title));
    }
    if let Some(count) = cfg.expect.count {
        results.push(check_result_count(batch, count));
    }

    for result in &results {
        debug!(
            rule = result.rule.code(),
            passed = result.passed,
            summary = %result.summary,
            "check finished"
        );
    }
    let report = Report {
        results,
        rejected: batch.rejected().to_vec(),
    };
    info!(
        passed = report.passed_count(),
        failed = report.failures().count(),
        rejected = report.rejected.len(),
        "checks complete"
    );
    Ok(report)
}

impl Report {
    /// True when every check passed. Rejected records alone do not fail a report.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|result| result.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|result| !result.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|result| result.passed).count()
    }

    /// Records named by any failing check, deduplicated by id, first mention first.
    pub fn offending_records(&self) -> Vec<RecordRef> {
        let mut seen = std::collections::HashSet::new();
        self.failures()
            .flat_map(|result| &result.details)
            .flat_map(|detail| &detail.records)
            .filter(|record| seen.insert(record.id))
            .cloned()
            .collect()
    }

    fn document(&self) -> ReportDocument<'_> {
        ReportDocument {
            passed: self.passed(),
            entries: self
                .results
                .iter()
                .map(|result| ReportEntry {
                    code: result.rule.code(),
                    rule: result.rule,
                    label: result.rule.label(),
                    passed: result.passed,
                    summary: &result.summary,
                    details: &result.details,
                })
                .collect(),
            offending: self.offending_records(),
            rejected: &self.rejected,
        }
    }

    /// Human-readable report; details are shown for failing checks only.
    pub fn render_text(&self) -> Result<String> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_template("report", REPORT_TEMPLATE)
            .context("load report template")?;
        let template = env.get_template("report")?;
        let document = self.document();
        let rendered = template
            .render(context! {
                entries => document.entries,
                offending => document.offending,
                rejected => document.rejected,
                passed_count => self.passed_count(),
                failed_count => self.failures().count(),
            })
            .context("render report")?;
        Ok(rendered)
    }

    /// Pretty-printed JSON with trailing newline.
    pub fn render_json(&self) -> Result<String> {
        let mut payload =
            serde_json::to_string_pretty(&self.document()).context("serialize report json")?;
        payload.push('\n');
        Ok(payload)
    }
}
