// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run configuration: where the catalog lives and which languages and
//! keys the reports care about.
//!
//! The engine never reads process-wide defaults on its own. Callers build
//! an [`AuditConfig`] (from a file, CLI flags, or [`Default`]) and hand the
//! relevant parts to each pass.

use crate::completeness::CompletenessAnalyzer;
use crate::merge::PatchMerger;
use crate::storage;
use crate::untranslated::UntranslatedReporter;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file names probed in the working directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "xcstrings-audit.yaml",
    "xcstrings-audit.yml",
    "xcstrings-audit.json",
];

const DEFAULT_TARGET_LANGUAGES: &[&str] = &["ja", "de", "fr", "es", "ko", "zh-Hans"];
const DEFAULT_EXCEPTIONS: &[&str] = &["%@", "%lld"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Catalog path; discovered below the working directory when unset.
    pub catalog: Option<PathBuf>,
    /// Source language whose text equals each entry's key.
    pub anchor_language: String,
    /// Languages the untranslated report requires.
    pub target_languages: BTreeSet<String>,
    /// Keys never reported as untranslated (format placeholders and the like).
    pub exceptions: BTreeSet<String>,
    /// Restrict the completeness check to `target_languages` plus the anchor.
    pub scope_completeness: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            anchor_language: "en".to_string(),
            target_languages: DEFAULT_TARGET_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            exceptions: DEFAULT_EXCEPTIONS.iter().map(|s| s.to_string()).collect(),
            scope_completeness: false,
        }
    }
}

impl AuditConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: AuditConfig = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display()))?,
            _ => return Err(anyhow!("unsupported config extension for {}", path.display())),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load the first known config file in `dir`, or defaults if none exists.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                debug!(path = %candidate.display(), "using config file");
                return Self::load(&candidate);
            }
        }
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.anchor_language.trim().is_empty() {
            return Err(anyhow!("anchor_language must not be empty"));
        }
        if let Some(blank) = self.target_languages.iter().find(|l| l.trim().is_empty()) {
            return Err(anyhow!("target_languages contains a blank code {:?}", blank));
        }
        Ok(())
    }

    /// Pick the catalog path: explicit argument, then config, then discovery.
    pub fn resolve_catalog(&self, explicit: Option<PathBuf>, search_root: &Path) -> Result<PathBuf> {
        if let Some(path) = explicit.or_else(|| self.catalog.clone()) {
            return Ok(path);
        }
        storage::discover(search_root).ok_or_else(|| {
            anyhow!(
                "no {} found under {} (pass a catalog path)",
                storage::DEFAULT_CATALOG_NAME,
                search_root.display()
            )
        })
    }

    pub fn completeness_analyzer(&self) -> CompletenessAnalyzer {
        if self.scope_completeness {
            let mut languages = self.target_languages.clone();
            languages.insert(self.anchor_language.clone());
            CompletenessAnalyzer::scoped(languages)
        } else {
            CompletenessAnalyzer::new()
        }
    }

    pub fn untranslated_reporter(&self) -> UntranslatedReporter {
        UntranslatedReporter::new(self.target_languages.clone(), self.exceptions.clone())
    }

    pub fn patch_merger(&self) -> PatchMerger {
        PatchMerger::new(self.anchor_language.clone())
    }
}
