//! Run configuration.
//!
//! Typically filled in by the application crate (CLI flags, a config file)
//! and handed to `wp_sim::SimBuilder`.

use std::time::Duration;

/// How a halt instruction that names no node is treated at setup.
///
/// An instruction that is absent altogether always means "never halt"; this
/// policy covers instructions that are present but name no usable node:
/// no digits at all, or digits too large for a node id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DirectivePolicy {
    /// Reject the whole setup with a configuration error.
    #[default]
    Strict,
    /// Log a warning and give the agent no halt condition.
    Lenient,
}

/// Top-level run configuration.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Pause between consecutive ticks, in milliseconds.
    ///
    /// Exists only so a presentation sink can render incrementally.  `0`
    /// runs headless; the final state is identical either way.
    pub tick_interval_ms: u64,

    /// Treatment of halt instructions without a node reference.
    pub directive_policy: DirectivePolicy,
}

impl SimConfig {
    /// Pacing used by the reference visual program: one tick per second.
    pub const REFERENCE_TICK_MS: u64 = 1_000;

    /// A configuration with no pacing delay and strict directive parsing.
    pub fn headless() -> Self {
        Self::default()
    }

    /// A configuration pacing ticks `ms` milliseconds apart.
    pub fn paced(ms: u64) -> Self {
        Self { tick_interval_ms: ms, ..Self::default() }
    }

    /// Builder-style override of the directive policy.
    pub fn with_directive_policy(mut self, policy: DirectivePolicy) -> Self {
        self.directive_policy = policy;
        self
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
