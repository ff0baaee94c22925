//! Endpoint liveness tracking.
//!
//! A counter with a threshold, not a circuit breaker: repeated failures mark
//! the endpoint sick, and nothing in the transport un-marks it. The flag is
//! advisory — calls are still attempted while sick — and a caller that wants
//! a fresh start uses [`HealthState::reset`].

/// Consecutive failures after which an endpoint is flagged sick.
pub(crate) const SICK_THRESHOLD: u32 = 5;

/// Mutable health counters for one endpoint. Lives behind the client's
/// `RwLock`; all mutation goes through the methods here.
#[derive(Debug, Default)]
pub(crate) struct HealthState {
    sick_count: u32,
    success_count: u32,
    sick: bool,
}

impl HealthState {
    /// Record a failed call. Returns true when this failure crossed the
    /// sick threshold, so the caller can log the transition once.
    pub(crate) fn record_failure(&mut self) -> bool {
        self.sick_count += 1;
        self.success_count = 0;
        if self.sick_count >= SICK_THRESHOLD && !self.sick {
            self.sick = true;
            return true;
        }
        false
    }

    /// Record a successful call. Does not clear the sick flag.
    pub(crate) fn record_success(&mut self) {
        self.success_count += 1;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn snapshot(&self) -> HealthSnapshot {
        HealthSnapshot {
            sick_count: self.sick_count,
            success_count: self.success_count,
            sick: self.sick,
        }
    }
}

/// Read-only copy of an endpoint's health counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthSnapshot {
    /// Failures recorded since construction or the last reset.
    pub sick_count: u32,
    /// Successes since the last failure.
    pub success_count: u32,
    /// Set once `sick_count` reaches the threshold; never cleared by the
    /// transport itself.
    pub sick: bool,
}
