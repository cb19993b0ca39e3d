// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report generation module

pub mod formatter;
pub mod generator;
pub mod output;

use anyhow::Result;
use serde::Serialize;

pub use formatter::ReportFormatter;
pub use generator::{ApplyReport, CheckReport, ReportGenerator, UntranslatedReport, UpdateReport};
pub use output::OutputFormat;

/// Print `report` in `format`, using `render` for the text form.
pub fn emit<T, F>(report: &T, format: OutputFormat, render: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&ReportFormatter, &T) -> String,
{
    match format.serialize(report)? {
        Some(encoded) => println!("{}", encoded),
        None => println!("{}", render(&ReportFormatter::new(), report)),
    }
    Ok(())
}
