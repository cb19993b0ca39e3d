// SPDX-License-Identifier: PMPL-1.0-or-later

//! Removal of entries the extraction tool has marked stale.

use crate::types::Catalog;
use tracing::debug;

/// Remove every entry whose `extractionState` is `stale`.
///
/// Returns the removed keys in catalog order, so repeated runs over an
/// unchanged catalog report the same list.
pub fn prune_stale(catalog: &mut Catalog) -> Vec<String> {
    let removed: Vec<String> = catalog
        .iter()
        .filter(|(_, entry)| entry.is_stale())
        .map(|(key, _)| key.clone())
        .collect();
    for key in &removed {
        catalog.remove(key);
        debug!(key = %key, "pruned stale entry");
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Entry, ExtractionState};

    fn entry(state: Option<ExtractionState>) -> Entry {
        Entry {
            extraction_state: state,
            ..Entry::default()
        }
    }

    #[test]
    fn removes_only_stale_entries() {
        let mut catalog = Catalog::new();
        catalog.insert("Old".into(), entry(Some(ExtractionState::Stale)));
        catalog.insert("Kept".into(), entry(Some(ExtractionState::Manual)));
        catalog.insert("Plain".into(), entry(None));
        catalog.insert("Also old".into(), entry(Some(ExtractionState::Stale)));

        let removed = prune_stale(&mut catalog);

        assert_eq!(removed, vec!["Also old".to_string(), "Old".to_string()]);
        assert!(catalog.values().all(|e| !e.is_stale()));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let mut catalog = Catalog::new();
        catalog.insert("Old".into(), entry(Some(ExtractionState::Stale)));
        assert_eq!(prune_stale(&mut catalog), vec!["Old".to_string()]);
        assert!(prune_stale(&mut catalog).is_empty());
    }
}
