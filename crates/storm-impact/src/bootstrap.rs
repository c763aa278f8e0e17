use std::path::Path;

use storm_core::settings::Settings;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// The CLI level becomes the default filter directive; a `RUST_LOG` value
/// in the environment takes precedence.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        _ => "info",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(normalised));
    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Create the charts output directory unless rendering is disabled.
pub fn ensure_charts_dir(settings: &Settings) -> anyhow::Result<()> {
    if settings.no_charts {
        return Ok(());
    }
    std::fs::create_dir_all(&settings.charts_dir)?;
    Ok(())
}

// ── Data-path diagnostics ──────────────────────────────────────────────────────

/// Log how many StormEvents files are visible under the data directory.
pub fn data_diagnostics(data_dir: &Path) {
    let files = storm_data::loader::find_storm_files(data_dir);
    if files.is_empty() {
        tracing::warn!(
            "No StormEvents CSV files found in {}",
            data_dir.display()
        );
    } else {
        tracing::info!(
            "{} StormEvents files available in {}",
            files.len(),
            data_dir.display()
        );
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn settings_with_charts_dir(dir: &Path, extra: &[&str]) -> Settings {
        let charts = dir.to_str().unwrap();
        let mut args = vec!["storm-impact", "--charts-dir", charts];
        args.extend_from_slice(extra);
        Settings::parse_from(args)
    }

    #[test]
    fn test_ensure_charts_dir_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("charts").join("nested");
        let settings = settings_with_charts_dir(&target, &[]);

        ensure_charts_dir(&settings).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_charts_dir_skipped_when_disabled() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("charts");
        let settings = settings_with_charts_dir(&target, &["--no-charts"]);

        ensure_charts_dir(&settings).unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn test_ensure_charts_dir_existing_directory_ok() {
        let tmp = TempDir::new().unwrap();
        let settings = settings_with_charts_dir(tmp.path(), &[]);

        ensure_charts_dir(&settings).unwrap();
        assert!(tmp.path().is_dir());
    }
}
