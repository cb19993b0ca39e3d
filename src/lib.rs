// SPDX-License-Identifier: PMPL-1.0-or-later

//! xcstrings-audit: maintenance engine for Xcode string catalogs.
//!
//! Works on an in-memory `.xcstrings` document owned by a single run:
//! load it with [`storage::load`], pass it through the engine, then
//! persist it with [`storage::save`].
//!
//! ENGINE PASSES:
//! 1. **Prune**: drop entries the extractor marked `stale`.
//! 2. **Completeness**: flag every (key, language) pair that is missing,
//!    not `translated`, or blank.
//! 3. **Merge**: fold an operator patch into the catalog without touching
//!    values a translator entered by hand.
//! 4. **Untranslated**: list entries lacking coverage in configured
//!    target languages.

pub mod completeness;
pub mod config;
pub mod error;
pub mod merge;
pub mod patch;
pub mod prune;
pub mod report;
pub mod storage;
pub mod types;
pub mod untranslated;

pub use completeness::{AuditOutcome, CompletenessAnalyzer, CompletenessReport, IncompleteReason};
pub use config::AuditConfig;
pub use error::CatalogError;
pub use merge::{apply_translation_map, MergeSummary, PatchMerger};
pub use prune::prune_stale;
pub use types::{Catalog, CatalogDocument, Entry, TranslationMap, TranslationPatch};
pub use untranslated::{UntranslatedEntry, UntranslatedReporter};
