use serde::{Deserialize, Serialize};

use crate::flight::FlightRecord;
use crate::preferences::{PreferenceWeights, RankMethod, TimeSlotPreference};

/// Everything a ranking pass needs, passed explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingRequest {
    pub flights: Vec<FlightRecord>,
    pub weights: PreferenceWeights,
    pub departure: TimeSlotPreference,
    pub arrival: TimeSlotPreference,
    #[serde(default)]
    pub rank_method: RankMethod,
}

impl RankingRequest {
    pub fn new(flights: Vec<FlightRecord>) -> Self {
        Self {
            flights,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_weights(mut self, weights: PreferenceWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_departure(mut self, departure: TimeSlotPreference) -> Self {
        self.departure = departure;
        self
    }

    #[must_use]
    pub fn with_arrival(mut self, arrival: TimeSlotPreference) -> Self {
        self.arrival = arrival;
        self
    }

    #[must_use]
    pub fn with_rank_method(mut self, rank_method: RankMethod) -> Self {
        self.rank_method = rank_method;
        self
    }
}
