//! Weighted Product Model ranking of flight offers.
//!
//! ```ignore
//! use wpm_core::rank_flights;
//! use wpm_model::RankingRequest;
//!
//! let outcome = rank_flights(&RankingRequest::new(flights))?;
//! for flight in outcome.top(5) {
//!     println!("{} {} {:.4}", flight.rank, flight.record.flight, flight.score);
//! }
//! ```

pub mod mapper;
pub mod matrix;
pub mod pipeline;
pub mod scoring;
pub mod weights;

pub use mapper::{MappedAttributes, map_all, map_attributes};
pub use matrix::{DecisionMatrix, EPSILON};
pub use pipeline::{RankedFlight, RankingOutcome, rank_flights};
pub use scoring::{descending_order, rank_scores, wpm_scores};
pub use weights::{NormalizedWeights, normalize_weight_values, normalize_weights};
