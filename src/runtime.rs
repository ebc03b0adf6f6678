//! Process-wide bootstrap of the external analyzer runtime.
//!
//! The analyzer is modeled as process-wide state with explicit idempotent
//! `ensure_started` semantics: the first call resolves and validates the
//! configured command, every later call returns the same handle. Adapter
//! calls go through [`AnalyzerRuntime::source`].

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::config::AnalyzerConfig;
use crate::error::SourceError;
use crate::source::AnalyzerProcessSource;

static RUNTIME: OnceCell<AnalyzerRuntime> = OnceCell::new();

/// Handle to the started analyzer runtime.
#[derive(Debug)]
pub struct AnalyzerRuntime {
    program: PathBuf,
    args: Vec<String>,
}

impl AnalyzerRuntime {
    /// Start the runtime if it is not running yet, returning the
    /// process-wide handle.
    ///
    /// Idempotent: the first caller's configuration wins; later calls get
    /// the existing runtime even if they pass a different config.
    pub fn ensure_started(cfg: &AnalyzerConfig) -> Result<&'static AnalyzerRuntime, SourceError> {
        RUNTIME.get_or_try_init(|| {
            let program = locate_program(&cfg.program)?;
            log::info!("analyzer runtime started: {}", program.display());
            Ok(AnalyzerRuntime {
                program,
                args: cfg.args.clone(),
            })
        })
    }

    /// Whether the runtime has been started in this process.
    pub fn is_started() -> bool {
        RUNTIME.get().is_some()
    }

    /// The resolved analyzer program path.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// A ready-to-use adapter bound to this runtime's command.
    pub fn source(&self) -> AnalyzerProcessSource {
        AnalyzerProcessSource::from_command(
            self.program.to_string_lossy().into_owned(),
            self.args.clone(),
        )
    }
}

/// Resolve an analyzer program name to an executable path.
///
/// Absolute and relative paths are checked directly; bare names are looked
/// up in `PATH`.
pub fn locate_program(name: &str) -> Result<PathBuf, SourceError> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        if candidate.is_file() {
            return Ok(candidate.to_path_buf());
        }
        return Err(SourceError::RuntimeUnavailable(format!(
            "no analyzer at {}",
            candidate.display()
        )));
    }

    if let Some(paths) = std::env::var_os("PATH") {
        for dir in std::env::split_paths(&paths) {
            let full = dir.join(name);
            if full.is_file() {
                return Ok(full);
            }
        }
    }
    Err(SourceError::RuntimeUnavailable(format!(
        "{name} not found in PATH"
    )))
}
