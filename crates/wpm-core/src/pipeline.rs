//! Ranking pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Weights**: Rescale the raw importances onto the simplex
//! 2. **Map**: Translate categorical fields into numeric criterion values and
//!    reject negative or non-finite cost values
//! 3. **Score**: Build and normalize the decision matrix, take weighted products
//! 4. **Rank**: Assign ranks and sort records by descending score
//!
//! Every stage is a pure function of the request; nothing is cached between
//! invocations and any error aborts the whole pass.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, info_span};

use wpm_model::{FlightRecord, RankMethod, RankingRequest, Result};

use crate::mapper::{MappedAttributes, map_all};
use crate::matrix::DecisionMatrix;
use crate::scoring::{descending_order, rank_scores, wpm_scores};
use crate::weights::{NormalizedWeights, normalize_weights};

/// A record with its derived values, score and rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFlight {
    /// Zero-based position of the record in the input dataset.
    #[serde(skip)]
    pub source_index: usize,
    pub rank: usize,
    #[serde(rename = "wpm_score")]
    pub score: f64,
    #[serde(flatten)]
    pub record: FlightRecord,
    #[serde(flatten)]
    pub attributes: MappedAttributes,
}

/// Result of one ranking pass, sorted by descending score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingOutcome {
    pub weights: NormalizedWeights,
    pub rank_method: RankMethod,
    pub flights: Vec<RankedFlight>,
}

impl RankingOutcome {
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// At most `n` best flights; never padded.
    pub fn top(&self, n: usize) -> &[RankedFlight] {
        &self.flights[..n.min(self.flights.len())]
    }

    pub fn best(&self) -> Option<&RankedFlight> {
        self.flights.first()
    }
}

/// Rank every flight of the request.
///
/// # Errors
///
/// Any [`wpm_model::RankError`] from mapping or weight normalization; no
/// partial outcome is produced.
pub fn rank_flights(request: &RankingRequest) -> Result<RankingOutcome> {
    let record_count = request.flights.len();
    let span = info_span!("rank", record_count, rank_method = request.rank_method.as_str());
    let _guard = span.enter();
    let start = Instant::now();

    // =========================================================================
    // Stage 1: Normalize weights
    // =========================================================================
    let weights = normalize_weights(&request.weights)?;

    // =========================================================================
    // Stage 2: Map attributes and check numeric ranges
    // =========================================================================
    let mapped = info_span!("map").in_scope(|| {
        map_all(&request.flights, &request.departure, &request.arrival)
    })?;

    // =========================================================================
    // Stage 3: Score
    // =========================================================================
    let scores = info_span!("score").in_scope(|| {
        let matrix = DecisionMatrix::build(&request.flights, &mapped);
        wpm_scores(&matrix.normalized(), &weights)
    });

    // =========================================================================
    // Stage 4: Rank and sort
    // =========================================================================
    let ranks = rank_scores(&scores, request.rank_method);
    let flights: Vec<RankedFlight> = descending_order(&scores)
        .into_iter()
        .map(|index| RankedFlight {
            source_index: index,
            rank: ranks[index],
            score: scores[index],
            record: request.flights[index].clone(),
            attributes: mapped[index],
        })
        .collect();

    if let Some(best) = flights.first() {
        debug!(
            flight = %best.record.flight,
            airline = %best.record.airline,
            score = best.score,
            "best flight"
        );
    }
    info!(
        record_count,
        duration_ms = start.elapsed().as_millis(),
        "ranking complete"
    );
    Ok(RankingOutcome {
        weights,
        rank_method: request.rank_method,
        flights,
    })
}
