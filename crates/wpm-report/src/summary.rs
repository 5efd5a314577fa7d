//! Top-N summary of a ranking outcome.

use std::fmt;

use serde::Serialize;

use wpm_core::{RankedFlight, RankingOutcome};

/// Number of flights shown when no other count is requested.
pub const DEFAULT_TOP_N: usize = 5;

/// Display fields of one ranked flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSummary {
    pub rank: usize,
    /// WPM score rounded to four decimals.
    pub score: String,
    pub airline: String,
    pub flight: String,
    pub class: String,
    pub price: f64,
    pub duration: f64,
    pub days_left: u32,
    pub stops: u8,
    pub departure_time: String,
    pub arrival_time: String,
}

impl FlightSummary {
    pub fn from_ranked(ranked: &RankedFlight) -> Self {
        let record = &ranked.record;
        Self {
            rank: ranked.rank,
            score: format_score(ranked.score),
            airline: record.airline.clone(),
            flight: record.flight.clone(),
            class: record.class.clone(),
            price: record.price,
            duration: record.duration,
            days_left: record.days_left,
            stops: ranked.attributes.stops,
            departure_time: record.departure_time.clone(),
            arrival_time: record.arrival_time.clone(),
        }
    }

    /// Stop count as shown to a traveller.
    pub fn stops_label(&self) -> &'static str {
        match self.stops {
            0 => "non-stop",
            1 => "1 stop",
            _ => "2+ stops",
        }
    }
}

impl fmt::Display for FlightSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "#{} {} {} ({}) score {}",
            self.rank, self.airline, self.flight, self.class, self.score
        )?;
        writeln!(
            f,
            "   price {:.2} | {:.2} h | {} days left | {}",
            self.price,
            self.duration,
            self.days_left,
            self.stops_label()
        )?;
        write!(
            f,
            "   departs {} | arrives {}",
            self.departure_time, self.arrival_time
        )
    }
}

/// Score as printed in summaries.
pub fn format_score(score: f64) -> String {
    format!("{score:.4}")
}

/// Summaries of the `n` best flights; fewer when the outcome is smaller.
pub fn top_summaries(outcome: &RankingOutcome, n: usize) -> Vec<FlightSummary> {
    outcome
        .top(n)
        .iter()
        .map(FlightSummary::from_ranked)
        .collect()
}
