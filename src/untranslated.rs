// SPDX-License-Identifier: PMPL-1.0-or-later

//! Coverage report for a fixed set of target languages
//!
//! Unlike the completeness pass this ignores workflow state: any
//! non-blank value counts as covered.

use crate::types::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UntranslatedEntry {
    pub key: String,
    /// Sorted target languages with no usable value.
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UntranslatedReporter {
    targets: BTreeSet<String>,
    exceptions: BTreeSet<String>,
}

impl UntranslatedReporter {
    pub fn new<T, E>(targets: T, exceptions: E) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            exceptions: exceptions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn targets(&self) -> &BTreeSet<String> {
        &self.targets
    }

    pub fn report(&self, catalog: &Catalog) -> Vec<UntranslatedEntry> {
        let found: Vec<UntranslatedEntry> = catalog
            .iter()
            .filter(|(key, entry)| entry.is_translatable() && !self.exceptions.contains(*key))
            .filter_map(|(key, entry)| {
                let missing: Vec<String> = self
                    .targets
                    .iter()
                    .filter(|lang| entry.trimmed_value(lang).is_empty())
                    .cloned()
                    .collect();
                (!missing.is_empty()).then(|| UntranslatedEntry {
                    key: key.clone(),
                    missing,
                })
            })
            .collect();
        info!(
            targets = self.targets.len(),
            untranslated = found.len(),
            "untranslated scan finished"
        );
        found
    }
}
