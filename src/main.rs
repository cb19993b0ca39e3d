// SPDX-License-Identifier: PMPL-1.0-or-later

//! xcstrings-audit: completeness checks and patch merging for Xcode string catalogs
//!
//! Every subcommand loads the catalog, runs one engine pass over it, writes
//! it back when the pass changed something, and exits non-zero when a
//! report found problems.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xcstrings_audit::config::AuditConfig;
use xcstrings_audit::report::{self, OutputFormat, ReportGenerator};
use xcstrings_audit::{merge, patch, storage};

#[derive(Parser)]
#[command(name = "xcstrings-audit")]
#[command(version)]
#[command(about = "Completeness checks, stale pruning and patch merging for Xcode string catalogs")]
#[command(long_about = None)]
struct Cli {
    /// Config file (defaults to xcstrings-audit.yaml in the working directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prune stale strings and report incomplete translations
    Check {
        /// Catalog to check
        #[arg(value_name = "CATALOG")]
        catalog: Option<PathBuf>,

        /// Keep entries marked stale
        #[arg(long)]
        no_prune: bool,

        /// Only check these languages (plus the anchor language)
        #[arg(short, long, value_delimiter = ',')]
        languages: Option<Vec<String>>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Report strings missing or blank in the target languages
    Untranslated {
        /// Catalog to scan
        #[arg(value_name = "CATALOG")]
        catalog: Option<PathBuf>,

        /// Target languages (default: from config)
        #[arg(short, long, value_delimiter = ',')]
        languages: Option<Vec<String>>,

        /// Extra keys to skip
        #[arg(short = 'x', long = "except", value_delimiter = ',')]
        exceptions: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Repair anchor localizations and merge a translation patch
    Update {
        /// Catalog to update
        #[arg(value_name = "CATALOG")]
        catalog: Option<PathBuf>,

        /// Patch file (JSON or YAML): key -> language -> text
        #[arg(short, long, value_name = "FILE")]
        patch: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Fill one language from a key -> text map where it is still blank
    Apply {
        /// Catalog to update
        #[arg(value_name = "CATALOG")]
        catalog: Option<PathBuf>,

        /// Translation map file (JSON or YAML)
        #[arg(short, long, value_name = "FILE")]
        map: PathBuf,

        /// Target language code
        #[arg(short, long, default_value = "zh-Hans")]
        language: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("reading working directory")?;
    let config = match &cli.config {
        Some(path) => AuditConfig::load(path)?,
        None => AuditConfig::load_from_dir(&cwd)?,
    };
    let generator = ReportGenerator::new();

    match cli.command {
        Commands::Check {
            catalog,
            no_prune,
            languages,
            format,
        } => {
            let mut config = config;
            if let Some(languages) = languages {
                config.target_languages = languages.into_iter().collect();
                config.scope_completeness = true;
            }
            let path = config.resolve_catalog(catalog, &cwd)?;
            let mut document = storage::load(&path)?;

            let outcome = config
                .completeness_analyzer()
                .audit(&mut document.strings, !no_prune);
            if !outcome.removed.is_empty() {
                storage::save(&path, &document)?;
            }

            let check = generator.check(&path, outcome);
            report::emit(&check, format, |f, r| f.render_check(r))?;
            Ok(exit_status(check.passed()))
        }

        Commands::Untranslated {
            catalog,
            languages,
            exceptions,
            format,
        } => {
            let mut config = config;
            if let Some(languages) = languages {
                config.target_languages = languages.into_iter().collect();
            }
            config.exceptions.extend(exceptions);
            let path = config.resolve_catalog(catalog, &cwd)?;
            let document = storage::load(&path)?;

            let reporter = config.untranslated_reporter();
            let found = reporter.report(&document.strings);
            let untranslated = generator.untranslated(&path, reporter.targets(), found);
            report::emit(&untranslated, format, |f, r| f.render_untranslated(r))?;
            Ok(exit_status(untranslated.passed()))
        }

        Commands::Update {
            catalog,
            patch: patch_path,
            format,
        } => {
            let path = config.resolve_catalog(catalog, &cwd)?;
            let patch = patch::load_optional_patch(patch_path.as_deref())?;
            let mut document = storage::load(&path)?;

            let summary = config.patch_merger().merge(&mut document.strings, &patch);
            storage::save(&path, &document)?;

            let update = generator.update(&path, summary);
            report::emit(&update, format, |f, r| f.render_update(r))?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Apply {
            catalog,
            map,
            language,
            format,
        } => {
            let path = config.resolve_catalog(catalog, &cwd)?;
            let translations = patch::load_translation_map(&map)?;
            let mut document = storage::load(&path)?;

            let applied =
                merge::apply_translation_map(&mut document.strings, &translations, &language);
            if applied > 0 {
                storage::save(&path, &document)?;
            } else {
                info!(path = %path.display(), "nothing applied, catalog left untouched");
            }

            let apply = generator.apply(&path, &language, applied);
            report::emit(&apply, format, |f, r| f.render_apply(r))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn exit_status(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
