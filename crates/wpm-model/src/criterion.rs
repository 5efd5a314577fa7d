//! Ranking criteria and their cost/benefit classification.
//!
//! Each criterion is identified by name rather than by position so that the
//! association between a column, its direction and its weight cannot drift
//! apart when the criteria list is reordered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of criteria taking part in a ranking.
pub const CRITERIA_COUNT: usize = 7;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    /// Lower raw values are preferred (price, duration, ...).
    Cost,
    /// Higher raw values are preferred (cabin class, slot scores).
    Benefit,
}

impl CriterionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionKind::Cost => "cost",
            CriterionKind::Benefit => "benefit",
        }
    }

    pub fn is_cost(&self) -> bool {
        matches!(self, CriterionKind::Cost)
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single decision criterion of the flight ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Price,
    Duration,
    DaysLeft,
    Stops,
    Class,
    DepartureTime,
    ArrivalTime,
}

impl Criterion {
    /// All criteria in canonical order.
    pub const ALL: [Criterion; CRITERIA_COUNT] = [
        Criterion::Price,
        Criterion::Duration,
        Criterion::DaysLeft,
        Criterion::Stops,
        Criterion::Class,
        Criterion::DepartureTime,
        Criterion::ArrivalTime,
    ];

    /// Column name of the criterion in the source dataset.
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Price => "price",
            Criterion::Duration => "duration",
            Criterion::DaysLeft => "days_left",
            Criterion::Stops => "stops",
            Criterion::Class => "class",
            Criterion::DepartureTime => "departure_time",
            Criterion::ArrivalTime => "arrival_time",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Criterion::Price => "Ticket price (cheaper is better)",
            Criterion::Duration => "Flight duration in hours (shorter is better)",
            Criterion::DaysLeft => "Days until departure (sooner is better)",
            Criterion::Stops => "Number of stops (fewer is better)",
            Criterion::Class => "Cabin class (Business is better)",
            Criterion::DepartureTime => "Departure slot score (higher is better)",
            Criterion::ArrivalTime => "Arrival slot score (higher is better)",
        }
    }

    /// Fixed cost/benefit classification.
    pub fn kind(&self) -> CriterionKind {
        match self {
            Criterion::Price | Criterion::Duration | Criterion::DaysLeft | Criterion::Stops => {
                CriterionKind::Cost
            }
            Criterion::Class | Criterion::DepartureTime | Criterion::ArrivalTime => {
                CriterionKind::Benefit
            }
        }
    }

    /// Position of the criterion in [`Criterion::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Criterion::Price => 0,
            Criterion::Duration => 1,
            Criterion::DaysLeft => 2,
            Criterion::Stops => 3,
            Criterion::Class => 4,
            Criterion::DepartureTime => 5,
            Criterion::ArrivalTime => 6,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Criterion {
    type Err = String;

    /// Parse a criterion from its column name (case-insensitive, `-` accepted for `_`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Criterion::ALL
            .into_iter()
            .find(|criterion| criterion.name() == normalized)
            .ok_or_else(|| format!("Unknown criterion: {s}"))
    }
}
