//! Process-wide enable/disable switches for the log channels
//!
//! Three independent gates decide whether a log call produces output. They are
//! advisory toggles, so relaxed atomics are enough: a change becomes visible to
//! subsequent calls, in-flight calls are unaffected.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::Config;

use super::severity::{GateRule, Severity};

/// Enabled/disabled state of the general, memory and network gates
#[derive(Debug)]
pub struct ChannelRegistry {
    general: AtomicBool,
    memory: AtomicBool,
    network: AtomicBool,
}

impl ChannelRegistry {
    /// Create a registry with explicit gate values
    pub fn new(general: bool, memory: bool, network: bool) -> Self {
        Self {
            general: AtomicBool::new(general),
            memory: AtomicBool::new(memory),
            network: AtomicBool::new(network),
        }
    }

    /// Create a registry from the startup configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.general_logging,
            config.memory_logging,
            config.network_logging,
        )
    }

    pub fn general_enabled(&self) -> bool {
        self.general.load(Ordering::Relaxed)
    }

    pub fn set_general_enabled(&self, enabled: bool) {
        self.general.store(enabled, Ordering::Relaxed);
    }

    pub fn memory_enabled(&self) -> bool {
        self.memory.load(Ordering::Relaxed)
    }

    pub fn set_memory_enabled(&self, enabled: bool) {
        self.memory.store(enabled, Ordering::Relaxed);
    }

    pub fn network_enabled(&self) -> bool {
        self.network.load(Ordering::Relaxed)
    }

    pub fn set_network_enabled(&self, enabled: bool) {
        self.network.store(enabled, Ordering::Relaxed);
    }

    /// Check whether a line of the given severity should be produced
    pub fn is_open(&self, severity: Severity) -> bool {
        match severity.gates() {
            GateRule::General => self.general_enabled(),
            GateRule::Memory => self.memory_enabled(),
            GateRule::GeneralAndNetwork => self.general_enabled() && self.network_enabled(),
        }
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}
