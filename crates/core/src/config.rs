// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The identifier recorded as `performed_by` for automatic actions.
pub const DEFAULT_SYSTEM_ACTOR: &str = "SYSTEM";

/// When queued resolution requests are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookMode {
    /// Hooks drain the outbox before returning.
    #[default]
    Immediate,
    /// Hooks only enqueue. The caller or a periodic sweeper drains later.
    Deferred,
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Actor identifier recorded on automatic audit entries.
    pub system_actor: String,
    /// Hook processing mode.
    pub hook_mode: HookMode,
}

impl EngineConfig {
    /// Returns this configuration with a different system actor.
    #[must_use]
    pub fn with_system_actor(mut self, system_actor: impl Into<String>) -> Self {
        self.system_actor = system_actor.into();
        self
    }

    /// Returns this configuration with a different hook mode.
    #[must_use]
    pub const fn with_hook_mode(mut self, hook_mode: HookMode) -> Self {
        self.hook_mode = hook_mode;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            system_actor: String::from(DEFAULT_SYSTEM_ACTOR),
            hook_mode: HookMode::Immediate,
        }
    }
}
