// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mgr_assign_audit::Actor;

use crate::config::{EngineConfig, HookMode};
use crate::metrics::ReconcileMetrics;
use crate::outbox::Outbox;
use crate::ports::ReconcileStore;

/// The manager assignment reconciliation engine.
///
/// Owns its store, the hook outbox and the metrics counters. The operations
/// live in separate modules as `impl` blocks on this type:
///
/// - resolution of a single department (`resolver`)
/// - alert deduplication (`dedup`)
/// - audit recording (`recorder`)
/// - lifecycle hooks and the outbox drain (`hooks`)
/// - batch sweeps (`batch`)
/// - the read-only overview (`overview`)
/// - administrator assignment (`manual`)
#[derive(Debug)]
pub struct Engine<S> {
    pub(crate) store: S,
    pub(crate) config: EngineConfig,
    pub(crate) outbox: Outbox,
    pub(crate) metrics: ReconcileMetrics,
}

impl<S: ReconcileStore> Engine<S> {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    #[must_use]
    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            outbox: Outbox::new(),
            metrics: ReconcileMetrics::default(),
        }
    }

    /// Counters accumulated since the engine was created.
    #[must_use]
    pub const fn metrics(&self) -> &ReconcileMetrics {
        &self.metrics
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pending resolution requests.
    #[must_use]
    pub const fn outbox(&self) -> &Outbox {
        &self.outbox
    }

    /// Shared access to the store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Exclusive access to the store, for the embedding application's own
    /// reads and writes between engine calls.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the engine and returns its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    pub(crate) fn system_actor(&self) -> Actor {
        Actor::system(&self.config.system_actor)
    }

    pub(crate) fn drains_immediately(&self) -> bool {
        self.config.hook_mode == HookMode::Immediate
    }
}
