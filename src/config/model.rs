// src/config/model.rs

use serde::Deserialize;

use crate::types::LogLevel;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [solver]
/// fork_after = 3
/// workers = 4
/// visualize = false
///
/// [logging]
/// level = "debug"
/// ```
///
/// All sections are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub solver: SolverSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

/// `[solver]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverSection {
    /// Nodes a task expands between forks; `<= 0` never forks.
    #[serde(default)]
    pub fork_after: i64,

    /// Worker threads for blocking solves. Defaults to one per core.
    #[serde(default)]
    pub workers: Option<usize>,

    /// Drive the maze's players while searching.
    #[serde(default = "default_visualize")]
    pub visualize: bool,
}

fn default_visualize() -> bool {
    true
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            fork_after: 0,
            workers: None,
            visualize: default_visualize(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    #[serde(default)]
    pub level: Option<LogLevel>,
}

/// Validated solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub fork_after: i64,
    pub workers: Option<usize>,
    pub visualize: bool,
}

impl SolverConfig {
    /// Set the fork threshold; `<= 0` disables forking.
    pub fn with_fork_after(mut self, fork_after: i64) -> Self {
        self.fork_after = fork_after;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_visualize(mut self, visualize: bool) -> Self {
        self.visualize = visualize;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        let section = SolverSection::default();
        Self {
            fork_after: section.fork_after,
            workers: section.workers,
            visualize: section.visualize,
        }
    }
}

/// Validated configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFile {
    pub solver: SolverConfig,
    pub log_level: Option<LogLevel>,
}

impl ConfigFile {
    /// Internal constructor used after validation.
    pub(crate) fn new_unchecked(solver: SolverSection, logging: LoggingSection) -> Self {
        Self {
            solver: SolverConfig {
                fork_after: solver.fork_after,
                workers: solver.workers,
                visualize: solver.visualize,
            },
            log_level: logging.level,
        }
    }
}
