// SPDX-License-Identifier: PMPL-1.0-or-later

//! Conflict-averse merging of operator-supplied translations
//!
//! Merging runs in two phases:
//!
//! 1. **Seeding**: every patch key is made to exist and be translatable,
//!    and gets an anchor-language unit (the key itself) if it has none.
//!    Keys the patch introduces take all of their patch text directly.
//! 2. **Sweep**: every entry in the catalog gets a `translated`,
//!    non-blank anchor unit. Patch text for pre-existing entries is only
//!    written where the language is blank, or where it still holds a
//!    verbatim copy of the anchor text.
//!
//! A value a translator typed in is never replaced. Only placeholder
//! copies of the source string are.

use crate::types::{Catalog, Entry, StringUnit, TranslationMap, TranslationPatch, UnitState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Counters produced by one merge run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSummary {
    /// Anchor units created because the entry had none.
    pub added_anchor: usize,
    /// Anchor units promoted to `translated` or backfilled with the key.
    pub fixed_anchor_state: usize,
    /// Patch translations written that changed the catalog.
    pub applied_translations: usize,
}

impl MergeSummary {
    pub fn total_changes(&self) -> usize {
        self.added_anchor + self.fixed_anchor_state + self.applied_translations
    }
}

#[derive(Debug, Clone)]
pub struct PatchMerger {
    anchor_language: String,
}

impl PatchMerger {
    pub fn new(anchor_language: impl Into<String>) -> Self {
        Self {
            anchor_language: anchor_language.into(),
        }
    }

    pub fn merge(&self, catalog: &mut Catalog, patch: &TranslationPatch) -> MergeSummary {
        let mut summary = MergeSummary::default();
        let introduced = self.seed(catalog, patch, &mut summary);

        for (key, entry) in catalog.iter_mut() {
            let anchor_text = self.reconcile_anchor(key, entry, &mut summary);
            if introduced.contains(key) {
                continue;
            }
            if let Some(translations) = patch.get(key) {
                for (language, text) in translations {
                    if fill_or_replace_placeholder(entry, language, text, &anchor_text) {
                        debug!(key = %key, language = %language, "applied patch translation");
                        summary.applied_translations += 1;
                    }
                }
            }
        }

        info!(
            added_anchor = summary.added_anchor,
            fixed_anchor_state = summary.fixed_anchor_state,
            applied = summary.applied_translations,
            "merged translation patch"
        );
        summary
    }

    /// Phase one. Returns the keys the patch created.
    fn seed(
        &self,
        catalog: &mut Catalog,
        patch: &TranslationPatch,
        summary: &mut MergeSummary,
    ) -> BTreeSet<String> {
        let mut introduced = BTreeSet::new();
        for (key, translations) in patch {
            let is_new = !catalog.contains_key(key);
            let entry = catalog.entry(key.clone()).or_default();
            if entry.should_translate == Some(false) {
                debug!(key = %key, "clearing shouldTranslate for patched key");
                entry.should_translate = None;
            }
            if entry.unit(&self.anchor_language).is_none() {
                entry.set_translated(&self.anchor_language, key.clone());
            }
            if !is_new {
                continue;
            }
            introduced.insert(key.clone());
            for (language, text) in translations {
                let changed =
                    entry.unit(language).map(StringUnit::text) != Some(text.as_str());
                entry.set_translated(language, text.clone());
                if changed {
                    summary.applied_translations += 1;
                }
            }
        }
        introduced
    }

    /// Ensure the anchor unit is `translated` and non-blank. Returns the
    /// anchor text in effect before any patch text is considered.
    fn reconcile_anchor(
        &self,
        key: &str,
        entry: &mut Entry,
        summary: &mut MergeSummary,
    ) -> String {
        let loc = entry.localization_mut(&self.anchor_language);
        if loc.string_unit.is_none() {
            loc.string_unit = Some(StringUnit::translated(key));
            summary.added_anchor += 1;
            debug!(key = %key, "added missing anchor unit");
            return key.to_string();
        }
        let unit = loc.string_unit.get_or_insert_with(StringUnit::default);

        let mut fixed = false;
        if unit.text().trim().is_empty() {
            unit.value = Some(key.to_string());
            fixed = true;
        }
        if unit.state != Some(UnitState::Translated) {
            unit.state = Some(UnitState::Translated);
            fixed = true;
        }
        if fixed {
            summary.fixed_anchor_state += 1;
            debug!(key = %key, "promoted anchor unit to translated");
        }
        unit.text().to_string()
    }
}

/// Write `text` for `language` when the current value is blank, or when it
/// is an untouched copy of the anchor text and the patch differs from it.
fn fill_or_replace_placeholder(
    entry: &mut Entry,
    language: &str,
    text: &str,
    anchor: &str,
) -> bool {
    let current = entry.trimmed_value(language);
    if !current.is_empty() {
        let is_placeholder_copy = current == anchor && !text.is_empty() && text != anchor;
        if !is_placeholder_copy {
            return false;
        }
    } else if entry.unit(language) == Some(&StringUnit::translated(text)) {
        return false;
    }
    entry.set_translated(language, text);
    true
}

/// Fill `language` from a flat key → text map, only where that language
/// has no non-blank value yet. Keys missing from the catalog are skipped.
pub fn apply_translation_map(
    catalog: &mut Catalog,
    translations: &TranslationMap,
    language: &str,
) -> usize {
    let mut applied = 0;
    for (key, text) in translations {
        let Some(entry) = catalog.get_mut(key) else {
            debug!(key = %key, "skipping translation for unknown key");
            continue;
        };
        if !entry.trimmed_value(language).is_empty() {
            continue;
        }
        entry.set_translated(language, text.clone());
        applied += 1;
    }
    info!(language = %language, applied, "applied translation map");
    applied
}
