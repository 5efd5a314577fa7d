//! Weighted product scores and rank assignment.

use wpm_model::{Criterion, RankMethod};

use crate::matrix::DecisionMatrix;
use crate::weights::NormalizedWeights;

/// Product of every normalized cell raised to its criterion weight.
///
/// Expects a matrix already passed through [`DecisionMatrix::normalized`].
pub fn wpm_scores(normalized: &DecisionMatrix, weights: &NormalizedWeights) -> Vec<f64> {
    normalized
        .rows()
        .iter()
        .map(|row| {
            Criterion::ALL
                .iter()
                .map(|criterion| row[criterion.index()].powf(weights.get(*criterion)))
                .product::<f64>()
        })
        .collect()
}

/// Record indices from highest to lowest score; equal scores keep input order.
pub fn descending_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}

/// One-based rank per record (rank 1 = highest score), ties resolved by `method`.
pub fn rank_scores(scores: &[f64], method: RankMethod) -> Vec<usize> {
    let order = descending_order(scores);
    let mut ranks = vec![0usize; scores.len()];
    let mut dense_rank = 0usize;
    for (position, &index) in order.iter().enumerate() {
        let previous = position.checked_sub(1).map(|p| order[p]);
        let tied = previous.is_some_and(|prev| scores[prev].total_cmp(&scores[index]).is_eq());
        if !tied {
            dense_rank += 1;
        }
        ranks[index] = match (method, previous) {
            (RankMethod::Ordinal, _) => position + 1,
            (RankMethod::Dense, _) => dense_rank,
            (RankMethod::Competitive, Some(prev)) if tied => ranks[prev],
            (RankMethod::Competitive, _) => position + 1,
        };
    }
    ranks
}
