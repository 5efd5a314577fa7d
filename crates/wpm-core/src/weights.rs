//! Weight normalization onto the probability simplex.

use tracing::debug;

use wpm_model::{CRITERIA_COUNT, Criterion, PreferenceWeights, RankError, Result};

/// Criterion weights rescaled to sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedWeights {
    values: [f64; CRITERIA_COUNT],
}

impl NormalizedWeights {
    pub fn get(&self, criterion: Criterion) -> f64 {
        self.values[criterion.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL
            .into_iter()
            .map(|criterion| (criterion, self.get(criterion)))
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Rescale raw importances so they sum to one.
///
/// # Errors
///
/// [`RankError::InvalidWeight`] for a negative or non-finite entry and
/// [`RankError::DegenerateWeights`] when every entry is zero.
pub fn normalize_weights(weights: &PreferenceWeights) -> Result<NormalizedWeights> {
    let raw = weights.values();
    for criterion in Criterion::ALL {
        let value = raw[criterion.index()];
        if !value.is_finite() || value < 0.0 {
            return Err(RankError::InvalidWeight { criterion, value });
        }
    }
    let largest = raw.iter().copied().fold(0.0, f64::max);
    if largest == 0.0 {
        return Err(RankError::DegenerateWeights);
    }
    // Scaled entries lie in [0, 1], so the sum cannot overflow.
    let scaled = raw.map(|value| value / largest);
    let total: f64 = scaled.iter().sum();
    let values = scaled.map(|value| value / total);
    debug!(?values, "normalized criterion weights");
    Ok(NormalizedWeights { values })
}

/// Same as [`normalize_weights`] for a positional slice in [`Criterion::ALL`] order.
///
/// # Errors
///
/// [`RankError::WeightCount`] unless the slice has exactly seven entries.
pub fn normalize_weight_values(values: &[f64]) -> Result<NormalizedWeights> {
    let values: [f64; CRITERIA_COUNT] =
        values.try_into().map_err(|_| RankError::WeightCount {
            expected: CRITERIA_COUNT,
            actual: values.len(),
        })?;
    normalize_weights(&PreferenceWeights::from_values(values))
}
