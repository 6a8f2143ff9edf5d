//! Runtime settings loaded via OrthoConfig.
//!
//! Only the base latency carries a configuration default; the remaining
//! accessors fall back to the demo defaults.

use std::path::{Path, PathBuf};

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::simulated_api::Latency;

const DEFAULT_SESSION_DIR: &str = ".projectmate";
const DEFAULT_GENERATOR_SEED: u64 = 2026;

/// Settings for the simulated backend and the durable session record.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PROJECTMATE")]
pub struct AppSettings {
    /// Base delay of every simulated request, in milliseconds.
    #[ortho_config(default = 1000)]
    pub latency_ms: u64,
    /// Upper bound of the random extra delay, in milliseconds.
    pub latency_jitter_ms: Option<u64>,
    /// Directory holding the session record.
    pub session_dir: Option<Utf8PathBuf>,
    /// Catalogue JSON replacing the bundled one.
    pub catalogue_path: Option<PathBuf>,
    /// Number of extra generated projects.
    pub generated_projects: Option<usize>,
    /// Seed for generated projects.
    pub generator_seed: Option<u64>,
}

impl AppSettings {
    /// Latency of the simulated backend.
    pub fn latency(&self) -> Latency {
        Latency::from_millis(
            self.latency_ms,
            self.latency_jitter_ms.unwrap_or(0),
        )
    }

    pub fn session_dir(&self) -> Utf8PathBuf {
        self.session_dir
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_SESSION_DIR))
    }

    /// Catalogue override, `None` for the bundled catalogue.
    pub fn catalogue_path(&self) -> Option<&Path> {
        self.catalogue_path.as_deref()
    }

    pub fn generated_projects(&self) -> usize {
        self.generated_projects.unwrap_or(0)
    }

    pub fn generator_seed(&self) -> u64 {
        self.generator_seed.unwrap_or(DEFAULT_GENERATOR_SEED)
    }
}
