// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report assembly: wraps engine results with run metadata for output.

use crate::completeness::{AuditOutcome, IncompleteTranslation};
use crate::merge::MergeSummary;
use crate::untranslated::UntranslatedEntry;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Outcome of `check`: stale pruning plus completeness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    pub created_at: String,
    pub catalog: PathBuf,
    pub removed_stale: Vec<String>,
    pub languages: Vec<String>,
    pub total_strings: usize,
    pub incomplete: Vec<IncompleteTranslation>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.incomplete.is_empty()
    }
}

/// Outcome of `untranslated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UntranslatedReport {
    pub created_at: String,
    pub catalog: PathBuf,
    pub target_languages: Vec<String>,
    pub untranslated: Vec<UntranslatedEntry>,
}

impl UntranslatedReport {
    pub fn passed(&self) -> bool {
        self.untranslated.is_empty()
    }
}

/// Outcome of `update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateReport {
    pub created_at: String,
    pub catalog: PathBuf,
    #[serde(flatten)]
    pub summary: MergeSummary,
}

/// Outcome of `apply`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyReport {
    pub created_at: String,
    pub catalog: PathBuf,
    pub language: String,
    pub applied: usize,
}

pub struct ReportGenerator {
    created_at: String,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn check(&self, catalog: &Path, outcome: AuditOutcome) -> CheckReport {
        CheckReport {
            created_at: self.created_at.clone(),
            catalog: catalog.to_path_buf(),
            removed_stale: outcome.removed,
            languages: outcome.report.languages,
            total_strings: outcome.total,
            incomplete: outcome.report.issues,
        }
    }

    pub fn untranslated<'a, I>(
        &self,
        catalog: &Path,
        targets: I,
        untranslated: Vec<UntranslatedEntry>,
    ) -> UntranslatedReport
    where
        I: IntoIterator<Item = &'a String>,
    {
        UntranslatedReport {
            created_at: self.created_at.clone(),
            catalog: catalog.to_path_buf(),
            target_languages: targets.into_iter().cloned().collect(),
            untranslated,
        }
    }

    pub fn update(&self, catalog: &Path, summary: MergeSummary) -> UpdateReport {
        UpdateReport {
            created_at: self.created_at.clone(),
            catalog: catalog.to_path_buf(),
            summary,
        }
    }

    pub fn apply(&self, catalog: &Path, language: &str, applied: usize) -> ApplyReport {
        ApplyReport {
            created_at: self.created_at.clone(),
            catalog: catalog.to_path_buf(),
            language: language.to_string(),
            applied,
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
