//! Attribute mapping: categorical fields to numeric criterion values, plus
//! the range check on the numeric cost fields.

use serde::Serialize;

use wpm_model::{
    CabinClass, Criterion, FlightRecord, RankError, Result, Stops, TimeSlotPreference,
};

/// Numeric values derived from the categorical fields of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MappedAttributes {
    #[serde(rename = "stops_mapped")]
    pub stops: u8,
    #[serde(rename = "class_mapped")]
    pub class: u8,
    #[serde(rename = "dep_time_score")]
    pub departure_score: u8,
    #[serde(rename = "arr_time_score")]
    pub arrival_score: u8,
}

/// Map one record. `index` is the zero-based position of the record in its
/// dataset and is reported one-based in errors.
///
/// # Errors
///
/// [`RankError::InvalidNumber`] for a negative, infinite or NaN price or
/// duration, [`RankError::InvalidCategory`] for an unknown stops value, cabin
/// class or time slot.
pub fn map_attributes(
    index: usize,
    record: &FlightRecord,
    departure: &TimeSlotPreference,
    arrival: &TimeSlotPreference,
) -> Result<MappedAttributes> {
    let invalid = |criterion: Criterion, value: &str| RankError::InvalidCategory {
        record: index + 1,
        flight: record.flight.clone(),
        criterion,
        value: value.to_string(),
    };
    for (criterion, value) in [
        (Criterion::Price, record.price),
        (Criterion::Duration, record.duration),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(RankError::InvalidNumber {
                record: index + 1,
                flight: record.flight.clone(),
                criterion,
                value,
            });
        }
    }
    let stops = record
        .stops
        .parse::<Stops>()
        .map_err(|_| invalid(Criterion::Stops, &record.stops))?;
    let class = record
        .class
        .parse::<CabinClass>()
        .map_err(|_| invalid(Criterion::Class, &record.class))?;
    let departure_score = departure
        .lookup(&record.departure_time)
        .ok_or_else(|| invalid(Criterion::DepartureTime, &record.departure_time))?;
    let arrival_score = arrival
        .lookup(&record.arrival_time)
        .ok_or_else(|| invalid(Criterion::ArrivalTime, &record.arrival_time))?;
    Ok(MappedAttributes {
        stops: stops.count(),
        class: class.value(),
        departure_score,
        arrival_score,
    })
}

/// Map every record, stopping at the first invalid one.
pub fn map_all(
    records: &[FlightRecord],
    departure: &TimeSlotPreference,
    arrival: &TimeSlotPreference,
) -> Result<Vec<MappedAttributes>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| map_attributes(index, record, departure, arrival))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wpm_model::TimeSlot;

    fn record(stops: &str, class: &str, departure: &str, arrival: &str) -> FlightRecord {
        FlightRecord {
            airline: "Air_India".to_string(),
            flight: "AI-868".to_string(),
            class: class.to_string(),
            price: 5000.0,
            duration: 2.5,
            days_left: 4,
            stops: stops.to_string(),
            departure_time: departure.to_string(),
            arrival_time: arrival.to_string(),
        }
    }

    #[test]
    fn maps_categories_and_slot_scores() {
        let departure = TimeSlotPreference::default()
            .with_score(TimeSlot::Morning, 5)
            .unwrap();
        let arrival = TimeSlotPreference::default()
            .with_score(TimeSlot::Night, 1)
            .unwrap();
        let mapped = map_attributes(
            0,
            &record("two_or_more", "Business", "Morning", "Night"),
            &departure,
            &arrival,
        )
        .unwrap();
        assert_eq!(
            mapped,
            MappedAttributes {
                stops: 2,
                class: 1,
                departure_score: 5,
                arrival_score: 1,
            }
        );
    }

    #[test]
    fn departure_and_arrival_use_their_own_mapping() {
        let departure = TimeSlotPreference::uniform(2).unwrap();
        let arrival = TimeSlotPreference::uniform(4).unwrap();
        let mapped = map_attributes(
            0,
            &record("zero", "Economy", "Evening", "Evening"),
            &departure,
            &arrival,
        )
        .unwrap();
        assert_eq!(mapped.departure_score, 2);
        assert_eq!(mapped.arrival_score, 4);
    }

    #[test]
    fn unknown_stops_value() {
        let preference = TimeSlotPreference::default();
        let error = map_attributes(
            2,
            &record("three", "Economy", "Morning", "Night"),
            &preference,
            &preference,
        )
        .unwrap_err();
        assert_eq!(
            error,
            RankError::InvalidCategory {
                record: 3,
                flight: "AI-868".to_string(),
                criterion: Criterion::Stops,
                value: "three".to_string(),
            }
        );
    }

    #[test]
    fn unknown_class_value() {
        let preference = TimeSlotPreference::default();
        let error = map_attributes(
            0,
            &record("one", "First", "Morning", "Night"),
            &preference,
            &preference,
        )
        .unwrap_err();
        assert!(matches!(
            error,
            RankError::InvalidCategory {
                criterion: Criterion::Class,
                ..
            }
        ));
    }

    #[test]
    fn slot_outside_mapping() {
        let preference = TimeSlotPreference::default();
        let error = map_attributes(
            0,
            &record("one", "Economy", "Morning", "Late_Night"),
            &preference,
            &preference,
        )
        .unwrap_err();
        assert!(matches!(
            error,
            RankError::InvalidCategory {
                criterion: Criterion::ArrivalTime,
                ref value,
                ..
            } if value == "Late_Night"
        ));
    }

    #[test]
    fn map_all_stops_at_first_error() {
        let preference = TimeSlotPreference::default();
        let records = vec![
            record("zero", "Economy", "Morning", "Night"),
            record("zero", "Premium", "Morning", "Night"),
            record("nine", "Economy", "Morning", "Night"),
        ];
        let error = map_all(&records, &preference, &preference).unwrap_err();
        assert!(matches!(
            error,
            RankError::InvalidCategory {
                record: 2,
                criterion: Criterion::Class,
                ..
            }
        ));
    }

    #[test]
    fn invalid_cost_numbers_are_rejected() {
        let preference = TimeSlotPreference::default();
        let mut negative = record("zero", "Economy", "Morning", "Night");
        negative.price = -5000.0;
        assert_eq!(
            map_attributes(1, &negative, &preference, &preference),
            Err(RankError::InvalidNumber {
                record: 2,
                flight: "AI-868".to_string(),
                criterion: Criterion::Price,
                value: -5000.0,
            })
        );

        let mut infinite = record("zero", "Economy", "Morning", "Night");
        infinite.duration = f64::INFINITY;
        assert!(matches!(
            map_attributes(0, &infinite, &preference, &preference),
            Err(RankError::InvalidNumber {
                criterion: Criterion::Duration,
                ..
            })
        ));

        let mut nan = record("zero", "Economy", "Morning", "Night");
        nan.price = f64::NAN;
        assert!(matches!(
            map_attributes(0, &nan, &preference, &preference),
            Err(RankError::InvalidNumber {
                criterion: Criterion::Price,
                ref value,
                ..
            }) if value.is_nan()
        ));
    }

    #[test]
    fn zero_cost_numbers_are_accepted() {
        let preference = TimeSlotPreference::default();
        let mut free = record("zero", "Economy", "Morning", "Night");
        free.price = 0.0;
        free.duration = 0.0;
        assert!(map_attributes(0, &free, &preference, &preference).is_ok());
    }
}
