use serde::{Deserialize, Serialize};

/// One flight offer as loaded from the dataset.
///
/// Categorical fields keep their source text; translating them into numbers is
/// the job of the attribute mapper, which reports unknown values instead of
/// guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub airline: String,
    pub flight: String,
    pub class: String,
    pub price: f64,
    /// Flight duration in hours.
    pub duration: f64,
    pub days_left: u32,
    pub stops: String,
    pub departure_time: String,
    pub arrival_time: String,
}

/// Source columns every flight dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "airline",
    "flight",
    "price",
    "duration",
    "days_left",
    "stops",
    "class",
    "departure_time",
    "arrival_time",
];
