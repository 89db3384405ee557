// src/load/dataset.rs

use anyhow::{Context, Result};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

use super::read::{load_national, load_states};
use crate::config::DataConfig;
use crate::table::{NationalTable, StateTable};

/// Both tables, loaded together and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub national: NationalTable,
    pub states: StateTable,
}

impl Dataset {
    pub fn new(national: NationalTable, states: StateTable) -> Self {
        Self { national, states }
    }

    pub fn load(config: &DataConfig) -> Result<Self> {
        let national = load_national(&config.national, config.batch_size)
            .with_context(|| format!("loading national table from {}", config.national))?;
        let states = load_states(&config.states, config.batch_size)
            .with_context(|| format!("loading state table from {}", config.states))?;
        Ok(Self { national, states })
    }
}

/// Holds the published dataset snapshot. Readers clone the `Arc` and keep
/// using that snapshot even if a reload swaps in a new one meanwhile.
pub struct DatasetStore {
    config: DataConfig,
    current: RwLock<Arc<Dataset>>,
}

impl DatasetStore {
    /// Load once from `config` and publish the result.
    pub fn open(config: DataConfig) -> Result<Self> {
        let dataset = Dataset::load(&config)?;
        Ok(Self {
            config,
            current: RwLock::new(Arc::new(dataset)),
        })
    }

    pub fn current(&self) -> Arc<Dataset> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Load a fresh snapshot and publish it. On failure the previous
    /// snapshot stays in place and the error is returned.
    pub fn reload(&self) -> Result<Arc<Dataset>> {
        let fresh = match Dataset::load(&self.config) {
            Ok(d) => Arc::new(d),
            Err(e) => {
                warn!("reload failed, keeping previous dataset: {:#}", e);
                return Err(e);
            }
        };
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&fresh);
        info!(
            national_rows = fresh.national.len(),
            state_rows = fresh.states.len(),
            "published reloaded dataset"
        );
        Ok(fresh)
    }
}
