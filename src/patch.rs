// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading operator-supplied patches and translation maps.
//!
//! Patch files are JSON or YAML, picked by extension:
//!
//! ```yaml
//! "Remove Icon":
//!   de: Icon entfernen
//!   es: Eliminar icono
//! ```

use crate::types::{TranslationMap, TranslationPatch};
use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub fn load_patch(path: &Path) -> Result<TranslationPatch> {
    load_json_or_yaml(path, "translation patch")
}

/// A missing patch behaves like an empty one.
pub fn load_optional_patch(path: Option<&Path>) -> Result<TranslationPatch> {
    match path {
        Some(path) => load_patch(path),
        None => Ok(TranslationPatch::new()),
    }
}

pub fn load_translation_map(path: &Path) -> Result<TranslationMap> {
    load_json_or_yaml(path, "translation map")
}

fn load_json_or_yaml<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {} {}", what, path.display()))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("parsing json {} {}", what, path.display())),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("parsing yaml {} {}", what, path.display())),
        _ => Err(anyhow!("unsupported {} extension for {}", what, path.display())),
    }
}
