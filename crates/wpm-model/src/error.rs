use thiserror::Error;

use crate::criterion::Criterion;
use crate::enums::TimeSlot;

/// Errors that stop a ranking pass.
#[derive(Debug, Error, PartialEq)]
pub enum RankError {
    /// Every criterion weight is zero.
    #[error("criterion weights must not all be zero")]
    DegenerateWeights,

    #[error("expected {expected} criterion weights, got {actual}")]
    WeightCount { expected: usize, actual: usize },

    #[error("weight for {criterion} must be a finite non-negative number, got {value}")]
    InvalidWeight { criterion: Criterion, value: f64 },

    #[error("score for time slot {slot} must be between 1 and 5, got {score}")]
    InvalidPreference { slot: TimeSlot, score: u8 },

    #[error("time-slot preference is missing a score for {slot}")]
    IncompletePreference { slot: TimeSlot },

    /// A record holds a categorical value outside its fixed domain.
    #[error("record {record} ({flight}): unknown {criterion} value '{value}'")]
    InvalidCategory {
        record: usize,
        flight: String,
        criterion: Criterion,
        value: String,
    },

    /// A numeric cost value is negative, infinite or NaN.
    #[error("record {record} ({flight}): {criterion} must be a finite non-negative number, got {value}")]
    InvalidNumber {
        record: usize,
        flight: String,
        criterion: Criterion,
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, RankError>;
