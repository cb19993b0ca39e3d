// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for xcstrings-audit
//!
//! Models the `.xcstrings` document the way Xcode writes it: a top-level
//! document holding a map of string keys to entries, each entry carrying
//! per-language `stringUnit`s. Fields the engine does not reason about are
//! kept in `extra` maps so a load/save cycle never drops them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Key → entry. Ordered so that every pass iterates deterministically.
pub type Catalog = BTreeMap<String, Entry>;

/// Operator-supplied translations: key → (language → text).
pub type TranslationPatch = BTreeMap<String, BTreeMap<String, String>>;

/// Flat key → text map applied to a single target language.
pub type TranslationMap = BTreeMap<String, String>;

/// The whole on-disk catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(rename = "sourceLanguage", default = "default_source_language")]
    pub source_language: String,
    #[serde(default)]
    pub strings: Catalog,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn default_source_language() -> String {
    "en".to_string()
}

impl CatalogDocument {
    pub fn new(source_language: impl Into<String>) -> Self {
        Self {
            source_language: source_language.into(),
            strings: Catalog::new(),
            version: Some("1.0".to_string()),
            extra: BTreeMap::new(),
        }
    }

    /// Number of entries that take part in completeness checks.
    pub fn translatable_count(&self) -> usize {
        self.strings.values().filter(|e| e.is_translatable()).count()
    }
}

/// One translatable unit and its per-language states.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(
        rename = "shouldTranslate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub should_translate: Option<bool>,
    #[serde(
        rename = "extractionState",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub extraction_state: Option<ExtractionState>,
    /// `None` when the document has no `localizations` field at all, so an
    /// explicit empty map survives a load/save cycle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localizations: Option<BTreeMap<String, Localization>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Entry {
    /// Entries are translatable unless explicitly flagged `shouldTranslate: false`.
    pub fn is_translatable(&self) -> bool {
        self.should_translate != Some(false)
    }

    pub fn is_stale(&self) -> bool {
        matches!(self.extraction_state, Some(ExtractionState::Stale))
    }

    /// Language codes this entry has a localization for.
    pub fn languages(&self) -> impl Iterator<Item = &String> + '_ {
        self.localizations.iter().flat_map(|locs| locs.keys())
    }

    pub fn localization(&self, language: &str) -> Option<&Localization> {
        self.localizations.as_ref().and_then(|locs| locs.get(language))
    }

    /// The localization for `language`, created empty if absent.
    pub fn localization_mut(&mut self, language: &str) -> &mut Localization {
        self.localizations
            .get_or_insert_with(BTreeMap::new)
            .entry(language.to_string())
            .or_default()
    }

    /// The string unit for `language`, if that localization carries one.
    pub fn unit(&self, language: &str) -> Option<&StringUnit> {
        self.localization(language)
            .and_then(|loc| loc.string_unit.as_ref())
    }

    /// Trimmed value for `language`, empty when the unit is absent.
    pub fn trimmed_value(&self, language: &str) -> &str {
        self.unit(language).map(|u| u.text().trim()).unwrap_or("")
    }

    /// Replace the string unit for `language` with a translated value,
    /// keeping any other fields of the localization intact.
    pub fn set_translated(&mut self, language: &str, value: impl Into<String>) {
        self.localization_mut(language).string_unit = Some(StringUnit::translated(value));
    }
}

/// One language's localization. Only the `stringUnit` shape is modelled;
/// plural/device variations ride along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Localization {
    #[serde(
        rename = "stringUnit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub string_unit: Option<StringUnit>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<UnitState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl StringUnit {
    pub fn translated(value: impl Into<String>) -> Self {
        Self {
            state: Some(UnitState::Translated),
            value: Some(value.into()),
        }
    }

    /// The unit's text, empty when no value is stored.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    pub fn is_translated(&self) -> bool {
        self.state == Some(UnitState::Translated)
    }
}

/// Workflow state of a string unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UnitState {
    New,
    Translated,
    NeedsReview,
    Stale,
    Other(String),
}

impl UnitState {
    pub fn as_str(&self) -> &str {
        match self {
            UnitState::New => "new",
            UnitState::Translated => "translated",
            UnitState::NeedsReview => "needs_review",
            UnitState::Stale => "stale",
            UnitState::Other(raw) => raw,
        }
    }
}

impl From<String> for UnitState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "new" => UnitState::New,
            "translated" => UnitState::Translated,
            "needs_review" => UnitState::NeedsReview,
            "stale" => UnitState::Stale,
            _ => UnitState::Other(raw),
        }
    }
}

impl From<UnitState> for String {
    fn from(state: UnitState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for UnitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the extraction tool last saw an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExtractionState {
    Fresh,
    Manual,
    Stale,
    ExtractedWithValue,
    Migrated,
    Other(String),
}

impl ExtractionState {
    pub fn as_str(&self) -> &str {
        match self {
            ExtractionState::Fresh => "fresh",
            ExtractionState::Manual => "manual",
            ExtractionState::Stale => "stale",
            ExtractionState::ExtractedWithValue => "extracted_with_value",
            ExtractionState::Migrated => "migrated",
            ExtractionState::Other(raw) => raw,
        }
    }
}

impl From<String> for ExtractionState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "fresh" => ExtractionState::Fresh,
            "manual" => ExtractionState::Manual,
            "stale" => ExtractionState::Stale,
            "extracted_with_value" => ExtractionState::ExtractedWithValue,
            "migrated" => ExtractionState::Migrated,
            _ => ExtractionState::Other(raw),
        }
    }
}

impl From<ExtractionState> for String {
    fn from(state: ExtractionState) -> Self {
        state.as_str().to_string()
    }
}
