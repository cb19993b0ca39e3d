// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console rendering of reports

use crate::report::generator::{ApplyReport, CheckReport, UntranslatedReport, UpdateReport};
use colored::*;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_check(&self, report: &CheckReport) -> String {
        let mut lines = Vec::new();
        let catalog = report.catalog.display();

        if report.removed_stale.is_empty() {
            lines.push("No stale strings found.".to_string());
        } else {
            lines.push(format!("{}", "Removed stale strings:".yellow()));
            for key in &report.removed_stale {
                lines.push(format!("  - {}", key));
            }
        }

        lines.push(format!("Found languages: {}", report.languages.join(", ")));
        lines.push(format!("Total strings: {}", report.total_strings));
        lines.push(String::new());

        if report.passed() {
            lines.push(format!(
                "{}",
                format!("All translations are complete in {}.", catalog).green()
            ));
        } else {
            lines.push(format!(
                "{}",
                format!("Incomplete translations in {}:", catalog).bold().red()
            ));
            for issue in &report.incomplete {
                lines.push(format!(
                    "  {} - {}: {}",
                    issue.key,
                    issue.language.bold(),
                    issue.reason
                ));
            }
        }
        lines.join("\n")
    }

    pub fn render_untranslated(&self, report: &UntranslatedReport) -> String {
        let mut lines = Vec::new();
        let catalog = report.catalog.display();
        lines.push(format!("Checking for untranslated strings in: {}", catalog));
        lines.push(String::new());

        if report.passed() {
            lines.push(format!(
                "{}",
                format!("All strings are properly translated in {}", catalog).green()
            ));
            return lines.join("\n");
        }

        lines.push(format!(
            "{}",
            format!(
                "Found {} untranslated strings in {}:",
                report.untranslated.len(),
                catalog
            )
            .bold()
            .red()
        ));
        lines.push(String::new());
        for item in &report.untranslated {
            lines.push(format!("  Key: {}", item.key));
            lines.push(format!("  Missing: {}", item.missing.join(", ").yellow()));
            lines.push(String::new());
        }
        lines.join("\n")
    }

    pub fn render_update(&self, report: &UpdateReport) -> String {
        [
            format!("{}", format!("Updated {}", report.catalog.display()).green()),
            format!(
                "   - Added {} missing anchor localizations",
                report.summary.added_anchor
            ),
            format!(
                "   - Fixed {} anchor localizations not marked translated",
                report.summary.fixed_anchor_state
            ),
            format!(
                "   - Applied {} provided translations",
                report.summary.applied_translations
            ),
        ]
        .join("\n")
    }

    pub fn render_apply(&self, report: &ApplyReport) -> String {
        if report.applied > 0 {
            format!(
                "{}",
                format!(
                    "Added {} {} translations in {}",
                    report.applied,
                    report.language,
                    report.catalog.display()
                )
                .green()
            )
        } else {
            format!(
                "No {} translations needed in {}",
                report.language,
                report.catalog.display()
            )
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completeness::{IncompleteReason, IncompleteTranslation};
    use crate::merge::MergeSummary;
    use crate::untranslated::UntranslatedEntry;
    use std::path::PathBuf;

    fn plain() -> ReportFormatter {
        colored::control::set_override(false);
        ReportFormatter::new()
    }

    #[test]
    fn check_lists_each_issue() {
        let report = CheckReport {
            created_at: String::new(),
            catalog: PathBuf::from("Localizable.xcstrings"),
            removed_stale: vec!["Old".into()],
            languages: vec!["en".into(), "es".into()],
            total_strings: 2,
            incomplete: vec![IncompleteTranslation {
                key: "Save".into(),
                language: "es".into(),
                reason: IncompleteReason::EmptyValue,
            }],
        };

        let text = plain().render_check(&report);

        assert!(text.contains("Removed stale strings:\n  - Old"));
        assert!(text.contains("Found languages: en, es"));
        assert!(text.contains("  Save - es: empty value"));
    }

    #[test]
    fn untranslated_groups_missing_languages() {
        let report = UntranslatedReport {
            created_at: String::new(),
            catalog: PathBuf::from("L.xcstrings"),
            target_languages: vec!["de".into(), "ja".into()],
            untranslated: vec![UntranslatedEntry {
                key: "Fetch".into(),
                missing: vec!["de".into(), "ja".into()],
            }],
        };

        let text = plain().render_untranslated(&report);

        assert!(text.contains("Found 1 untranslated strings in L.xcstrings:"));
        assert!(text.contains("  Key: Fetch\n  Missing: de, ja"));
    }

    #[test]
    fn update_prints_all_counters() {
        let report = UpdateReport {
            created_at: String::new(),
            catalog: PathBuf::from("L.xcstrings"),
            summary: MergeSummary {
                added_anchor: 1,
                fixed_anchor_state: 2,
                applied_translations: 3,
            },
        };
        let text = plain().render_update(&report);
        assert!(text.contains("Added 1 missing anchor"));
        assert!(text.contains("Fixed 2 anchor"));
        assert!(text.contains("Applied 3 provided"));
    }

    #[test]
    fn apply_reports_nothing_to_do() {
        let report = ApplyReport {
            created_at: String::new(),
            catalog: PathBuf::from("L.xcstrings"),
            language: "zh-Hans".into(),
            applied: 0,
        };
        assert_eq!(
            plain().render_apply(&report),
            "No zh-Hans translations needed in L.xcstrings"
        );
    }
}
