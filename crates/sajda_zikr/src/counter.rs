//! Cycle counter and running stats.

use serde::{Deserialize, Serialize};

use crate::error::ZikrError;
use crate::kind::ZikrKind;

/// Traditional tasbih length.
pub const DEFAULT_CYCLE_TARGET: u32 = 33;

/// Running recitation totals. `today` is reset by the host at day
/// rollover (the engine has no clock); `total` never resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZikrStats {
    pub today: u64,
    pub total: u64,
}

/// Serializable state of a [`ZikrCounter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZikrSnapshot {
    pub counts: [u32; 6],
    pub completed_cycles: [u32; 6],
    pub active: ZikrKind,
    pub cycle_target: u32,
    pub stats: ZikrStats,
}

/// Per-kind tally with a wrap-around cycle.
///
/// Counts run 0 to `cycle_target - 1`; the increment that reaches the
/// target wraps the count to 0 and records a completed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZikrCounter {
    counts: [u32; 6],
    completed_cycles: [u32; 6],
    active: ZikrKind,
    cycle_target: u32,
    stats: ZikrStats,
}

impl Default for ZikrCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl ZikrCounter {
    /// Counter with the default 33-bead cycle.
    pub fn new() -> Self {
        Self {
            counts: [0; 6],
            completed_cycles: [0; 6],
            active: ZikrKind::SubhanAllah,
            cycle_target: DEFAULT_CYCLE_TARGET,
            stats: ZikrStats::default(),
        }
    }

    /// Counter with a custom cycle target (≥ 1).
    pub fn with_target(cycle_target: u32) -> Result<Self, ZikrError> {
        if cycle_target == 0 {
            return Err(ZikrError::InvalidTarget(cycle_target));
        }
        Ok(Self {
            cycle_target,
            ..Self::new()
        })
    }

    /// Currently selected formula.
    pub fn active(&self) -> ZikrKind {
        self.active
    }

    /// Select the formula subsequent increments apply to.
    pub fn set_active(&mut self, kind: ZikrKind) {
        self.active = kind;
    }

    /// Cycle target in effect.
    pub fn cycle_target(&self) -> u32 {
        self.cycle_target
    }

    /// Current in-cycle count for a formula.
    pub fn count(&self, kind: ZikrKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Completed cycles for a formula.
    pub fn completed_cycles(&self, kind: ZikrKind) -> u32 {
        self.completed_cycles[kind.index()]
    }

    /// Running stats.
    pub fn stats(&self) -> ZikrStats {
        self.stats
    }

    /// Total recitations of a formula, cycles included.
    pub fn total_of(&self, kind: ZikrKind) -> u64 {
        let i = kind.index();
        u64::from(self.completed_cycles[i]) * u64::from(self.cycle_target)
            + u64::from(self.counts[i])
    }

    /// Advance the active count by one.
    ///
    /// Returns `true` when this increment completes a cycle (the count
    /// wraps back to 0).
    pub fn increment(&mut self) -> bool {
        let i = self.active.index();
        self.stats.today += 1;
        self.stats.total += 1;
        self.counts[i] += 1;
        if self.counts[i] == self.cycle_target {
            self.counts[i] = 0;
            self.completed_cycles[i] += 1;
            true
        } else {
            false
        }
    }

    /// Fraction of the current cycle completed, in [0, 1).
    pub fn progress(&self) -> f64 {
        f64::from(self.count(self.active)) / f64::from(self.cycle_target)
    }

    /// Reset the active formula's in-cycle count.
    pub fn reset_active(&mut self) {
        self.counts[self.active.index()] = 0;
    }

    /// Reset every in-cycle count and cycle tally. Stats are kept.
    pub fn reset_all(&mut self) {
        self.counts = [0; 6];
        self.completed_cycles = [0; 6];
    }

    /// Start a new day: zero the daily total.
    pub fn roll_day(&mut self) {
        self.stats.today = 0;
    }

    /// Serializable copy of the full state.
    pub fn snapshot(&self) -> ZikrSnapshot {
        ZikrSnapshot {
            counts: self.counts,
            completed_cycles: self.completed_cycles,
            active: self.active,
            cycle_target: self.cycle_target,
            stats: self.stats,
        }
    }

    /// Rebuild a counter from a snapshot.
    ///
    /// Snapshots with a zero cycle target are rejected; stored in-cycle
    /// counts are clamped into the cycle by the target.
    pub fn restore(snapshot: ZikrSnapshot) -> Result<Self, ZikrError> {
        if snapshot.cycle_target == 0 {
            return Err(ZikrError::InvalidTarget(snapshot.cycle_target));
        }
        let mut counts = snapshot.counts;
        for c in &mut counts {
            *c %= snapshot.cycle_target;
        }
        Ok(Self {
            counts,
            completed_cycles: snapshot.completed_cycles,
            active: snapshot.active,
            cycle_target: snapshot.cycle_target,
            stats: snapshot.stats,
        })
    }
}
