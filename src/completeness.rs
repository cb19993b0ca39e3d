// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation completeness analysis
//!
//! Walks every translatable entry and checks each language against three
//! rules: a localization must exist, its unit must be `translated`, and
//! its trimmed value must be non-empty. The language set is taken from
//! the data itself unless the analyzer is scoped to a configured set, so
//! one entry introducing a new language code surfaces that language as a
//! gap on every other entry.

use crate::prune;
use crate::types::{Catalog, Entry, UnitState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::info;

/// Why one (key, language) pair is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncompleteReason {
    /// No string unit exists for the language.
    MissingLocalization,
    /// A unit exists but its state is not `translated`.
    State(Option<UnitState>),
    /// The unit is `translated` but its value is blank.
    EmptyValue,
}

impl fmt::Display for IncompleteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncompleteReason::MissingLocalization => f.write_str("missing localization"),
            IncompleteReason::State(Some(state)) => write!(f, "state: {}", state),
            IncompleteReason::State(None) => f.write_str("state: missing"),
            IncompleteReason::EmptyValue => f.write_str("empty value"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncompleteTranslation {
    pub key: String,
    pub language: String,
    pub reason: IncompleteReason,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletenessReport {
    /// Sorted language codes that were checked.
    pub languages: Vec<String>,
    /// Violations in catalog order, then language order.
    pub issues: Vec<IncompleteTranslation>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Result of the prune-then-analyze workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditOutcome {
    pub removed: Vec<String>,
    /// Entries left after pruning, translatable or not.
    pub total: usize,
    pub translatable: usize,
    pub report: CompletenessReport,
}

#[derive(Debug, Clone, Default)]
pub struct CompletenessAnalyzer {
    scope: Option<BTreeSet<String>>,
}

impl CompletenessAnalyzer {
    /// Check every language observed anywhere in the catalog.
    pub fn new() -> Self {
        Self { scope: None }
    }

    /// Check exactly `languages`, whether or not the catalog mentions them.
    pub fn scoped<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scope: Some(languages.into_iter().map(Into::into).collect()),
        }
    }

    pub fn analyze(&self, catalog: &Catalog) -> CompletenessReport {
        let translatable: Vec<(&String, &Entry)> = catalog
            .iter()
            .filter(|(_, entry)| entry.is_translatable())
            .collect();

        let languages: Vec<String> = match &self.scope {
            Some(scope) => scope.iter().cloned().collect(),
            None => observed_languages(translatable.iter().map(|(_, e)| *e))
                .into_iter()
                .collect(),
        };

        let mut issues = Vec::new();
        for (key, entry) in &translatable {
            for language in &languages {
                if let Some(reason) = check_unit(entry, language) {
                    issues.push(IncompleteTranslation {
                        key: (*key).clone(),
                        language: language.clone(),
                        reason,
                    });
                }
            }
        }

        CompletenessReport { languages, issues }
    }

    /// Optionally prune stale entries, then analyze what remains.
    pub fn audit(&self, catalog: &mut Catalog, prune_stale: bool) -> AuditOutcome {
        let removed = if prune_stale {
            prune::prune_stale(catalog)
        } else {
            Vec::new()
        };
        let report = self.analyze(catalog);
        let translatable = catalog.values().filter(|e| e.is_translatable()).count();
        info!(
            removed = removed.len(),
            languages = report.languages.len(),
            issues = report.issues.len(),
            "completeness audit finished"
        );
        AuditOutcome {
            removed,
            total: catalog.len(),
            translatable,
            report,
        }
    }
}

/// Union of language codes across the given entries' localizations.
pub fn observed_languages<'a, I>(entries: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .flat_map(|entry| entry.languages().cloned())
        .collect()
}

fn check_unit(entry: &Entry, language: &str) -> Option<IncompleteReason> {
    let Some(unit) = entry.unit(language) else {
        return Some(IncompleteReason::MissingLocalization);
    };
    if !unit.is_translated() {
        return Some(IncompleteReason::State(unit.state.clone()));
    }
    if unit.text().trim().is_empty() {
        return Some(IncompleteReason::EmptyValue);
    }
    None
}
