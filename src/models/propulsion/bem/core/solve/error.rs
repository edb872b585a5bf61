use thiserror::Error;

use crate::models::propulsion::bem::core::results::RotorPerformance;

/// Errors that can occur while solving a rotor operating point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The circulation residual had the same sign at both ends of the flow
    /// angle bracket, so bisection cannot start.
    ///
    /// The solve halts at the failing station; `partial` carries the
    /// stations solved before it, with loads integrated over those stations
    /// only.
    #[error("circulation residual does not change sign across the bracket at station {station}")]
    NoSignChange {
        station: usize,
        partial: Box<RotorPerformance>,
    },
}
