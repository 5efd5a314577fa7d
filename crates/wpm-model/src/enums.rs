//! Categorical domains of the flight dataset.
//!
//! Source values are matched exactly (after trimming surrounding whitespace),
//! the same spelling the dataset uses: `zero`, `one`, `two_or_more` for stops,
//! `Economy` and `Business` for the cabin class, and the five slot names for
//! departure and arrival times.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of stops on an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stops {
    #[serde(rename = "zero")]
    Zero,
    #[serde(rename = "one")]
    One,
    #[serde(rename = "two_or_more")]
    TwoOrMore,
}

impl Stops {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stops::Zero => "zero",
            Stops::One => "one",
            Stops::TwoOrMore => "two_or_more",
        }
    }

    /// Ordinal stop count used by the ranking (`two_or_more` counts as 2).
    pub fn count(&self) -> u8 {
        match self {
            Stops::Zero => 0,
            Stops::One => 1,
            Stops::TwoOrMore => 2,
        }
    }
}

impl fmt::Display for Stops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Stops {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "zero" => Ok(Stops::Zero),
            "one" => Ok(Stops::One),
            "two_or_more" => Ok(Stops::TwoOrMore),
            _ => Err(format!("Unknown stops value: {s}")),
        }
    }
}

/// Cabin class of a fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CabinClass {
    Economy,
    Business,
}

impl CabinClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::Business => "Business",
        }
    }

    /// Ordinal value used by the ranking (Economy = 0, Business = 1).
    pub fn value(&self) -> u8 {
        match self {
            CabinClass::Economy => 0,
            CabinClass::Business => 1,
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CabinClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Economy" => Ok(CabinClass::Economy),
            "Business" => Ok(CabinClass::Business),
            _ => Err(format!("Unknown cabin class: {s}")),
        }
    }
}

/// Named time-of-day slot for departures and arrivals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "Early_Morning")]
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeSlot {
    /// All slots in chronological order.
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::EarlyMorning,
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "Early_Morning",
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
            TimeSlot::Night => "Night",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == trimmed)
            .ok_or_else(|| format!("Unknown time slot: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_from_str() {
        assert_eq!("zero".parse::<Stops>().unwrap(), Stops::Zero);
        assert_eq!(" one ".parse::<Stops>().unwrap(), Stops::One);
        assert_eq!("two_or_more".parse::<Stops>().unwrap().count(), 2);
        assert!("three".parse::<Stops>().is_err());
        assert!("Zero".parse::<Stops>().is_err());
    }

    #[test]
    fn test_cabin_class_from_str() {
        assert_eq!("Business".parse::<CabinClass>().unwrap().value(), 1);
        assert_eq!("Economy".parse::<CabinClass>().unwrap().value(), 0);
        assert!("First".parse::<CabinClass>().is_err());
    }

    #[test]
    fn test_time_slot_round_trip_names() {
        for slot in TimeSlot::ALL {
            assert_eq!(slot.as_str().parse::<TimeSlot>().unwrap(), slot);
        }
        assert!("Late_Night".parse::<TimeSlot>().is_err());
    }
}
