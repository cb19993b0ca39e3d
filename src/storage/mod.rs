// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading, saving and locating `.xcstrings` catalogs

use crate::error::CatalogError;
use crate::types::CatalogDocument;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// File name Xcode uses for the default string table.
pub const DEFAULT_CATALOG_NAME: &str = "Localizable.xcstrings";

const SKIPPED_DIRS: &[&str] = &[
    "build",
    "DerivedData",
    "Pods",
    "Carthage",
    "node_modules",
    "target",
];

pub fn load(path: &Path) -> Result<CatalogDocument, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CatalogError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let document: CatalogDocument =
        serde_json::from_str(&content).map_err(|source| CatalogError::Format {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        path = %path.display(),
        entries = document.strings.len(),
        "loaded catalog"
    );
    Ok(document)
}

pub fn save(path: &Path, document: &CatalogDocument) -> Result<(), CatalogError> {
    let bytes = to_xcode_json(document).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, bytes).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), entries = document.strings.len(), "saved catalog");
    Ok(())
}

/// Serialize in the layout Xcode itself writes: keys sorted, two-space
/// indent, `"key" : value` separators, non-ASCII text left unescaped.
pub fn to_xcode_json<T: Serialize>(value: &T) -> io::Result<Vec<u8>> {
    // Going through `Value` sorts every object's keys, flattened ones included.
    let value = serde_json::to_value(value).map_err(io::Error::from)?;
    let mut out = Vec::new();
    {
        let mut serializer = Serializer::with_formatter(&mut out, XcodeFormatter::new());
        value.serialize(&mut serializer).map_err(io::Error::from)?;
    }
    Ok(out)
}

/// Find the first `Localizable.xcstrings` below `root`, skipping hidden
/// and build output directories. Traversal is sorted so the answer is stable.
pub fn discover(root: &Path) -> Option<PathBuf> {
    let found = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry))
        .filter_map(|entry| entry.ok())
        .find(|entry| entry.file_type().is_file() && entry.file_name() == DEFAULT_CATALOG_NAME)
        .map(|entry| entry.into_path());
    if let Some(path) = &found {
        debug!(path = %path.display(), "discovered catalog");
    }
    found
}

fn is_skipped(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.iter().any(|dir| name == *dir)
}

struct XcodeFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> XcodeFormatter<'a> {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for XcodeFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b" : ")
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn xcode_layout_uses_spaced_separators() {
        let mut map = BTreeMap::new();
        map.insert("b", vec!["¿Qué?"]);
        map.insert("a", Vec::new());
        let text = String::from_utf8(to_xcode_json(&map).unwrap()).unwrap();
        assert_eq!(text, "{\n  \"a\" : [],\n  \"b\" : [\n    \"¿Qué?\"\n  ]\n}");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load(Path::new("/definitely/not/here.xcstrings")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }
}
