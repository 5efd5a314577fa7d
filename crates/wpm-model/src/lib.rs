pub mod criterion;
pub mod enums;
pub mod error;
pub mod flight;
pub mod preferences;
pub mod request;

pub use criterion::{CRITERIA_COUNT, Criterion, CriterionKind};
pub use enums::{CabinClass, Stops, TimeSlot};
pub use error::{RankError, Result};
pub use flight::{FlightRecord, REQUIRED_COLUMNS};
pub use preferences::{
    DEFAULT_SLOT_SCORE, MAX_SLOT_SCORE, MIN_SLOT_SCORE, PreferenceWeights, RankMethod,
    TimeSlotPreference,
};
pub use request::RankingRequest;
