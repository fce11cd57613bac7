//! # API Facade
//!
//! A thin facade over the command layer. It owns the store and the resolved
//! configuration for one root and dispatches to `commands/*.rs`.
//!
//! `RollApi<S: VersionStore>` is generic over the storage backend:
//! - Production: `RollApi<FsStore>`
//! - Testing: `RollApi<InMemoryStore>`
//!
//! The facade never prints. It returns `CmdResult` values for a client to render.

use crate::commands;
use crate::config::{RollConfig, SingleVersionPolicy};
use crate::error::Result;
use crate::store::fs::FsStore;
use crate::store::VersionStore;
use std::path::Path;

pub struct RollApi<S: VersionStore> {
    store: S,
    config: RollConfig,
}

impl<S: VersionStore> RollApi<S> {
    pub fn new(store: S, config: RollConfig) -> Self {
        Self { store, config }
    }

    /// Archive the lowest version, remove it, seed the next from the highest.
    pub fn roll(&mut self) -> Result<commands::CmdResult> {
        commands::roll::run(&mut self.store, &self.config)
    }

    /// Describe the next roll without performing it.
    pub fn plan(&self) -> Result<commands::CmdResult> {
        commands::plan::run(&self.store, &self.config)
    }

    /// List version directories, lowest first.
    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::scan::run(&self.store, &self.config)
    }

    pub fn config(&self) -> &RollConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl RollApi<FsStore> {
    /// Opens `root`, reading `<root>/.vroll.json` if present.
    ///
    /// `single_version` overrides the file's policy when given.
    pub fn open(root: &Path, single_version: Option<SingleVersionPolicy>) -> Result<Self> {
        let mut config = RollConfig::load(root)?;
        if let Some(policy) = single_version {
            config = config.with_single_version(policy);
        }
        Ok(Self::new(FsStore::new(root), config))
    }
}

pub use crate::commands::{
    CmdMessage, CmdResult, MessageLevel, RollOutcome, RollReport, NO_VERSIONS_MESSAGE,
};
