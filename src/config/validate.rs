// src/config/validate.rs

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{MazewalkError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = MazewalkError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.solver, raw.logging))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_workers(cfg)?;
    note_sequential_setup(cfg);
    Ok(())
}

fn validate_workers(cfg: &RawConfigFile) -> Result<()> {
    if cfg.solver.workers == Some(0) {
        return Err(MazewalkError::ConfigError(
            "[solver].workers must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn note_sequential_setup(cfg: &RawConfigFile) {
    if cfg.solver.fork_after <= 0 && cfg.solver.workers.is_some_and(|w| w > 1) {
        debug!(
            workers = cfg.solver.workers,
            "fork_after <= 0 disables forking; extra workers will stay idle"
        );
    }
}
