//! Application context for the carbase CLI.
//!
//! Combines CLI arguments with a lazily-loaded config file and owns the
//! logic for opening the record store.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;
use tracing::debug;

use carbase_core::{CarbaseError, LoadReport, RecordStore};

use crate::cli::Cli;
use crate::config::CarbaseConfig;
use crate::errors::CliError;
use crate::ui::format::cars;
use crate::ui::{warning, UiContext};

use super::resolver::{load_config, missing_data_message, resolve_data_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<CarbaseConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&CarbaseConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// Resolved path of the data file.
    pub fn data_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_data_path(self.cli.data.as_deref(), self.config()?))
    }

    /// Build the UI context for a command, falling back to the config's
    /// preferred format when `--format` is not given.
    pub fn ui(&self, json: bool, format: Option<&str>) -> anyhow::Result<UiContext> {
        let format = match format {
            Some(value) => Some(value.to_string()),
            None => self.config()?.ui.format.clone(),
        };
        Ok(UiContext::from_env(
            json,
            format.as_deref(),
            self.cli.no_color,
            self.cli.ascii,
        ))
    }

    /// Open the store for a read-only command. The data file must exist.
    pub fn open_store(&self) -> anyhow::Result<(RecordStore, PathBuf)> {
        let path = self.data_path()?;
        require_data_file(&path)?;
        let (store, report) = RecordStore::load(&path)?;
        self.report_interruption(&report)?;
        Ok((store, path))
    }

    /// Open the store for a command that saves it back.
    ///
    /// A file that stopped loading early is refused, since saving the partial
    /// store would drop every record after the stop. With `create`, a missing
    /// file starts an empty store.
    pub fn open_store_for_update(&self, create: bool) -> anyhow::Result<(RecordStore, PathBuf)> {
        let path = self.data_path()?;
        if create && !path.exists() {
            debug!(path = %path.display(), "data file absent; starting empty");
            return Ok((RecordStore::new(), path));
        }
        require_data_file(&path)?;
        let (store, report) = RecordStore::load(&path)?;
        if let Some(stop) = &report.interrupted {
            return Err(CliError::invalid_input(format!(
                "Refusing to modify {}: reading stopped at {} after {}. Fix the data file first; nothing was changed.",
                path.display(),
                stop,
                cars(report.loaded)
            ))
            .into());
        }
        Ok((store, path))
    }

    /// Open the store for the interactive menu.
    ///
    /// An unreadable data file is reported and the menu starts empty.
    pub fn open_store_lenient(&self) -> anyhow::Result<(RecordStore, Option<LoadReport>, PathBuf)> {
        let path = self.data_path()?;
        match RecordStore::load(&path) {
            Ok((store, report)) => {
                self.report_interruption(&report)?;
                Ok((store, Some(report), path))
            }
            Err(err @ CarbaseError::Io { .. }) => {
                debug!("starting with an empty store: {}", err);
                Ok((RecordStore::new(), None, path))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn report_interruption(&self, report: &LoadReport) -> anyhow::Result<()> {
        if let Some(stop) = &report.interrupted {
            if !self.quiet() {
                let ui = self.ui(false, None)?;
                eprintln!(
                    "{}",
                    warning(
                        &ui,
                        &format!(
                            "stopped reading data file at {}; kept {}",
                            stop,
                            cars(report.loaded)
                        )
                    )
                );
            }
        }
        Ok(())
    }
}

fn require_data_file(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        return Ok(());
    }
    Err(CliError::not_found(
        format!("Data file not found: {}", path.display()),
        missing_data_message(path),
    )
    .into())
}
