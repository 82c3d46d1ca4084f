//! Stop criteria shared by the drivers.

use std::fmt;
use std::time::{Duration, Instant};

/// Why a driver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Wall-clock budget exhausted.
    TimeLimit,
    /// Too many consecutive iterations without a new best.
    Stagnation,
    /// Hard iteration cap reached.
    IterationLimit,
    /// Tabu search found every neighbour infeasible or tabu.
    NoAdmissibleMove,
    /// The instance has no items.
    EmptyInstance,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Termination::TimeLimit => "time limit",
            Termination::Stagnation => "stagnation",
            Termination::IterationLimit => "iteration limit",
            Termination::NoAdmissibleMove => "no admissible move",
            Termination::EmptyInstance => "empty instance",
        };
        f.write_str(s)
    }
}

/// Deadline plus patience, polled at the top of each driver iteration.
///
/// An iteration that has started always runs to completion; the budget is
/// only consulted between iterations.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Budget {
    start: Instant,
    time_limit: Duration,
    max_no_improve: usize,
    max_iterations: usize,
}

impl Budget {
    /// Starts the clock. `max_iterations == 0` means no iteration cap.
    pub(crate) fn start(
        time_limit: Duration,
        max_no_improve: usize,
        max_iterations: usize,
    ) -> Self {
        Self {
            start: Instant::now(),
            time_limit,
            max_no_improve,
            max_iterations,
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub(crate) fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    pub(crate) fn limit_secs(&self) -> f64 {
        self.time_limit.as_secs_f64()
    }

    /// Returns the reason to stop, if any.
    ///
    /// Stagnation triggers once `no_improve` *exceeds* the patience.
    pub(crate) fn check(
        &self,
        elapsed: f64,
        no_improve: usize,
        iterations: usize,
    ) -> Option<Termination> {
        if elapsed > self.limit_secs() {
            Some(Termination::TimeLimit)
        } else if no_improve > self.max_no_improve {
            Some(Termination::Stagnation)
        } else if self.max_iterations > 0 && iterations >= self.max_iterations {
            Some(Termination::IterationLimit)
        } else {
            None
        }
    }
}
