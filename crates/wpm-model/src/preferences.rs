//! User-supplied ranking preferences.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::criterion::{CRITERIA_COUNT, Criterion};
use crate::enums::TimeSlot;
use crate::error::{RankError, Result};

/// Lowest score a time slot may receive.
pub const MIN_SLOT_SCORE: u8 = 1;
/// Highest score a time slot may receive.
pub const MAX_SLOT_SCORE: u8 = 5;
/// Score given to every slot when the user expresses no preference.
pub const DEFAULT_SLOT_SCORE: u8 = 3;

/// Raw importance of each criterion.
///
/// Values are relative: they are rescaled to sum to one before ranking, so
/// only their proportions matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreferenceWeights {
    pub price: f64,
    pub duration: f64,
    pub days_left: f64,
    pub stops: f64,
    pub class: f64,
    pub departure_time: f64,
    pub arrival_time: f64,
}

impl Default for PreferenceWeights {
    fn default() -> Self {
        Self {
            price: 0.2,
            duration: 0.2,
            days_left: 0.2,
            stops: 0.1,
            class: 0.1,
            departure_time: 0.1,
            arrival_time: 0.1,
        }
    }
}

impl PreferenceWeights {
    /// Same weight for every criterion.
    pub fn uniform(value: f64) -> Self {
        Self::from_values([value; CRITERIA_COUNT])
    }

    /// Build from values listed in [`Criterion::ALL`] order.
    pub fn from_values(values: [f64; CRITERIA_COUNT]) -> Self {
        let mut weights = Self::uniform_zero();
        for criterion in Criterion::ALL {
            weights.set(criterion, values[criterion.index()]);
        }
        weights
    }

    fn uniform_zero() -> Self {
        Self {
            price: 0.0,
            duration: 0.0,
            days_left: 0.0,
            stops: 0.0,
            class: 0.0,
            departure_time: 0.0,
            arrival_time: 0.0,
        }
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Price => self.price,
            Criterion::Duration => self.duration,
            Criterion::DaysLeft => self.days_left,
            Criterion::Stops => self.stops,
            Criterion::Class => self.class,
            Criterion::DepartureTime => self.departure_time,
            Criterion::ArrivalTime => self.arrival_time,
        }
    }

    pub fn set(&mut self, criterion: Criterion, value: f64) {
        let slot = match criterion {
            Criterion::Price => &mut self.price,
            Criterion::Duration => &mut self.duration,
            Criterion::DaysLeft => &mut self.days_left,
            Criterion::Stops => &mut self.stops,
            Criterion::Class => &mut self.class,
            Criterion::DepartureTime => &mut self.departure_time,
            Criterion::ArrivalTime => &mut self.arrival_time,
        };
        *slot = value;
    }

    #[must_use]
    pub fn with(mut self, criterion: Criterion, value: f64) -> Self {
        self.set(criterion, value);
        self
    }

    /// Values in [`Criterion::ALL`] order.
    pub fn values(&self) -> [f64; CRITERIA_COUNT] {
        Criterion::ALL.map(|criterion| self.get(criterion))
    }
}

/// Score (1 to 5) the user assigns to each time slot.
///
/// Always covers all five slots; construction rejects missing slots and
/// out-of-range scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<TimeSlot, u8>",
    into = "BTreeMap<TimeSlot, u8>"
)]
pub struct TimeSlotPreference {
    scores: BTreeMap<TimeSlot, u8>,
}

impl Default for TimeSlotPreference {
    fn default() -> Self {
        Self {
            scores: TimeSlot::ALL
                .into_iter()
                .map(|slot| (slot, DEFAULT_SLOT_SCORE))
                .collect(),
        }
    }
}

impl TimeSlotPreference {
    /// Build a complete preference mapping.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::InvalidPreference`] for a score outside `1..=5` and
    /// [`RankError::IncompletePreference`] when a slot has no score.
    pub fn new(scores: impl IntoIterator<Item = (TimeSlot, u8)>) -> Result<Self> {
        let scores: BTreeMap<TimeSlot, u8> = scores.into_iter().collect();
        for (&slot, &score) in &scores {
            validate_score(slot, score)?;
        }
        if let Some(slot) = TimeSlot::ALL
            .into_iter()
            .find(|slot| !scores.contains_key(slot))
        {
            return Err(RankError::IncompletePreference { slot });
        }
        Ok(Self { scores })
    }

    /// Same score for every slot.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::InvalidPreference`] for a score outside `1..=5`.
    pub fn uniform(score: u8) -> Result<Self> {
        Self::new(TimeSlot::ALL.into_iter().map(|slot| (slot, score)))
    }

    /// Replace the score of one slot.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::InvalidPreference`] for a score outside `1..=5`.
    pub fn with_score(mut self, slot: TimeSlot, score: u8) -> Result<Self> {
        validate_score(slot, score)?;
        self.scores.insert(slot, score);
        Ok(self)
    }

    pub fn score(&self, slot: TimeSlot) -> Option<u8> {
        self.scores.get(&slot).copied()
    }

    /// Look up a slot by its source name, `None` when the name is not a known slot.
    pub fn lookup(&self, name: &str) -> Option<u8> {
        let slot = name.parse::<TimeSlot>().ok()?;
        self.score(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimeSlot, u8)> + '_ {
        self.scores.iter().map(|(&slot, &score)| (slot, score))
    }
}

impl TryFrom<BTreeMap<TimeSlot, u8>> for TimeSlotPreference {
    type Error = RankError;

    fn try_from(scores: BTreeMap<TimeSlot, u8>) -> Result<Self> {
        Self::new(scores)
    }
}

impl From<TimeSlotPreference> for BTreeMap<TimeSlot, u8> {
    fn from(preference: TimeSlotPreference) -> Self {
        preference.scores
    }
}

fn validate_score(slot: TimeSlot, score: u8) -> Result<()> {
    if (MIN_SLOT_SCORE..=MAX_SLOT_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(RankError::InvalidPreference { slot, score })
    }
}

/// Tie rule applied when several records share exactly the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMethod {
    /// Ties share the best rank of their group and the next group skips ahead ("1224").
    #[default]
    Competitive,
    /// Ties share a rank and the next group follows without a gap ("1223").
    Dense,
    /// Ties are ordered by their position in the dataset ("1234").
    Ordinal,
}

impl RankMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankMethod::Competitive => "competitive",
            RankMethod::Dense => "dense",
            RankMethod::Ordinal => "ordinal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_follow_criterion_order() {
        let weights = PreferenceWeights::default();
        assert_eq!(weights.values(), [0.2, 0.2, 0.2, 0.1, 0.1, 0.1, 0.1]);
    }

    #[test]
    fn from_values_uses_named_slots() {
        let weights = PreferenceWeights::from_values([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(weights.days_left, 3.0);
        assert_eq!(weights.get(Criterion::ArrivalTime), 7.0);
    }

    #[test]
    fn preference_rejects_out_of_range_score() {
        let result = TimeSlotPreference::default().with_score(TimeSlot::Night, 6);
        assert_eq!(
            result,
            Err(RankError::InvalidPreference {
                slot: TimeSlot::Night,
                score: 6
            })
        );
    }

    #[test]
    fn uniform_rejects_out_of_range_score() {
        assert_eq!(
            TimeSlotPreference::uniform(0),
            Err(RankError::InvalidPreference {
                slot: TimeSlot::EarlyMorning,
                score: 0
            })
        );
        assert!(TimeSlotPreference::uniform(9).is_err());
        let preference = TimeSlotPreference::uniform(5).unwrap();
        assert!(preference.iter().all(|(_, score)| score == 5));
        assert_eq!(
            TimeSlotPreference::uniform(DEFAULT_SLOT_SCORE),
            Ok(TimeSlotPreference::default())
        );
    }

    #[test]
    fn preference_requires_every_slot() {
        let result = TimeSlotPreference::new([(TimeSlot::Morning, 5)]);
        assert_eq!(
            result,
            Err(RankError::IncompletePreference {
                slot: TimeSlot::EarlyMorning
            })
        );
    }

    #[test]
    fn lookup_by_source_name() {
        let preference = TimeSlotPreference::default()
            .with_score(TimeSlot::EarlyMorning, 5)
            .unwrap();
        assert_eq!(preference.lookup("Early_Morning"), Some(5));
        assert_eq!(preference.lookup("Evening"), Some(3));
        assert_eq!(preference.lookup("Late_Night"), None);
    }
}
