// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for machine-readable reports

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Serialize `report` for json/yaml; `None` for text, which the
    /// formatter renders instead.
    pub fn serialize<T: Serialize>(&self, report: &T) -> Result<Option<String>> {
        match self {
            OutputFormat::Text => Ok(None),
            OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(report)?)),
            OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(report)?)),
        }
    }
}
