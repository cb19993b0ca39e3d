// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests: load a catalog, run the engine passes, save, reload

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use xcstrings_audit::completeness::{CompletenessAnalyzer, IncompleteReason};
use xcstrings_audit::types::{StringUnit, UnitState};
use xcstrings_audit::{
    prune_stale, storage, AuditConfig, Catalog, CatalogDocument, Entry, PatchMerger,
    TranslationPatch,
};

fn write_catalog(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("Localizable.xcstrings");
    fs::write(&path, json).unwrap();
    path
}

fn single_patch(key: &str, language: &str, text: &str) -> TranslationPatch {
    let mut langs = BTreeMap::new();
    langs.insert(language.to_string(), text.to_string());
    let mut patch = TranslationPatch::new();
    patch.insert(key.to_string(), langs);
    patch
}

fn anchored_with(es: Option<&str>) -> Catalog {
    let mut entry = Entry::default();
    entry.set_translated("en", "Fetch");
    if let Some(es) = es {
        entry.set_translated("es", es);
    }
    let mut catalog = Catalog::new();
    catalog.insert("Fetch".to_string(), entry);
    catalog
}

#[test]
fn test_patch_fills_anchor_only_entry() {
    let mut catalog = anchored_with(None);

    let summary = PatchMerger::new("en").merge(&mut catalog, &single_patch("Fetch", "es", "Obtener"));

    assert_eq!(summary.applied_translations, 1);
    assert_eq!(
        catalog["Fetch"].unit("es"),
        Some(&StringUnit::translated("Obtener"))
    );
}

#[test]
fn test_placeholder_copy_is_overwritten_but_edit_is_kept() {
    let patch = single_patch("Fetch", "es", "Obtener");
    let merger = PatchMerger::new("en");

    let mut placeholder = anchored_with(Some("Fetch"));
    let summary = merger.merge(&mut placeholder, &patch);
    assert_eq!(summary.applied_translations, 1);
    assert_eq!(placeholder["Fetch"].trimmed_value("es"), "Obtener");

    let mut edited = anchored_with(Some("Buscar"));
    let summary = merger.merge(&mut edited, &patch);
    assert_eq!(summary.applied_translations, 0);
    assert_eq!(edited["Fetch"].trimmed_value("es"), "Buscar");
}

#[test]
fn test_merge_is_idempotent_across_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "Fetch" : {
      "localizations" : {
        "en" : { "stringUnit" : { "state" : "new", "value" : "" } },
        "es" : { "stringUnit" : { "state" : "translated", "value" : "Fetch" } }
      }
    },
    "Settings" : {}
  },
  "version" : "1.0"
}"#,
    );
    let mut patch = single_patch("Fetch", "es", "Obtener");
    patch.extend(single_patch("Remove Icon", "fr", "Supprimer l’icône"));
    let merger = AuditConfig::default().patch_merger();

    let mut document = storage::load(&path).unwrap();
    let first = merger.merge(&mut document.strings, &patch);
    storage::save(&path, &document).unwrap();
    let saved = fs::read_to_string(&path).unwrap();

    assert_eq!(first.added_anchor, 1);
    assert_eq!(first.fixed_anchor_state, 1);
    assert_eq!(first.applied_translations, 2);

    let mut reloaded = storage::load(&path).unwrap();
    let second = merger.merge(&mut reloaded.strings, &patch);
    storage::save(&path, &reloaded).unwrap();

    assert_eq!(second.total_changes(), 0);
    assert_eq!(reloaded, document);
    assert_eq!(fs::read_to_string(&path).unwrap(), saved);
}

#[test]
fn test_every_translatable_entry_has_anchor_after_merge() {
    let mut catalog = Catalog::new();
    for (key, state, value) in [
        ("A", Some(UnitState::New), ""),
        ("B", Some(UnitState::NeedsReview), "B"),
        ("C", None, "  "),
        ("D", Some(UnitState::Translated), "Delta"),
    ] {
        let mut entry = Entry::default();
        entry.localization_mut("en").string_unit = Some(StringUnit {
            state,
            value: Some(value.to_string()),
        });
        catalog.insert(key.to_string(), entry);
    }
    catalog.insert("E".to_string(), Entry::default());

    PatchMerger::new("en").merge(&mut catalog, &TranslationPatch::new());

    for (key, entry) in catalog.iter().filter(|(_, e)| e.is_translatable()) {
        let unit = entry.unit("en").expect("anchor unit");
        assert!(unit.is_translated(), "{} anchor not translated", key);
        assert!(!unit.text().trim().is_empty(), "{} anchor blank", key);
    }
    assert_eq!(catalog["D"].trimmed_value("en"), "Delta");
}

#[test]
fn test_stale_entry_is_pruned_and_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "Gone" : { "extractionState" : "stale" },
    "Kept" : {
      "localizations" : {
        "en" : { "stringUnit" : { "state" : "translated", "value" : "Kept" } }
      }
    }
  }
}"#,
    );

    let mut document = storage::load(&path).unwrap();
    assert!(document.strings.contains_key("Gone"));

    let removed = prune_stale(&mut document.strings);

    assert_eq!(removed, vec!["Gone".to_string()]);
    assert!(!document.strings.contains_key("Gone"));
    assert!(document.strings.values().all(|e| !e.is_stale()));
}

#[test]
fn test_new_language_surfaces_gaps_on_other_entries() {
    let mut document = CatalogDocument::new("en");
    let mut hello = Entry::default();
    hello.set_translated("en", "Hello");
    hello.set_translated("ko", "안녕하세요");
    let mut bye = Entry::default();
    bye.set_translated("en", "Bye");
    document.strings.insert("Hello".into(), hello);
    document.strings.insert("Bye".into(), bye);

    let report = CompletenessAnalyzer::new().analyze(&document.strings);

    assert_eq!(report.languages, vec!["en", "ko"]);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].key, "Bye");
    assert_eq!(report.issues[0].language, "ko");
    assert_eq!(report.issues[0].reason, IncompleteReason::MissingLocalization);
}

#[test]
fn test_complete_catalog_has_no_issues() {
    let mut document = CatalogDocument::new("en");
    for key in ["One", "Two"] {
        let mut entry = Entry::default();
        entry.set_translated("en", key);
        entry.set_translated("de", format!("{} (de)", key));
        document.strings.insert(key.into(), entry);
    }

    let report = CompletenessAnalyzer::new().analyze(&document.strings);

    assert!(report.is_complete());
    assert_eq!(document.translatable_count(), 2);
}

#[test]
fn test_untranslated_report_respects_config() {
    let mut catalog = Catalog::new();
    let mut fetch = Entry::default();
    fetch.set_translated("en", "Fetch");
    fetch.set_translated("es", "Obtener");
    catalog.insert("Fetch".into(), fetch);
    catalog.insert("%@".into(), Entry::default());
    let mut brand = Entry::default();
    brand.should_translate = Some(false);
    catalog.insert("SubZen".into(), brand);

    let config = AuditConfig {
        target_languages: ["es", "ja"].iter().map(|s| s.to_string()).collect(),
        ..AuditConfig::default()
    };
    let found = config.untranslated_reporter().report(&catalog);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].key, "Fetch");
    assert_eq!(found[0].missing, vec!["ja".to_string()]);
}
