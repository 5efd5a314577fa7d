//! Integration tests for the ranking pipeline.

use wpm_core::{EPSILON, rank_flights};
use wpm_model::{
    Criterion, FlightRecord, PreferenceWeights, RankError, RankMethod, RankingRequest, TimeSlot,
    TimeSlotPreference,
};

#[allow(clippy::too_many_arguments)]
fn flight(
    id: &str,
    price: f64,
    duration: f64,
    days_left: u32,
    stops: &str,
    class: &str,
    departure: &str,
    arrival: &str,
) -> FlightRecord {
    FlightRecord {
        airline: "TestAir".to_string(),
        flight: id.to_string(),
        class: class.to_string(),
        price,
        duration,
        days_left,
        stops: stops.to_string(),
        departure_time: departure.to_string(),
        arrival_time: arrival.to_string(),
    }
}

fn slot_preference() -> TimeSlotPreference {
    TimeSlotPreference::default()
        .with_score(TimeSlot::Morning, 5)
        .and_then(|p| p.with_score(TimeSlot::Evening, 3))
        .and_then(|p| p.with_score(TimeSlot::Night, 1))
        .unwrap()
}

fn scenario_request() -> RankingRequest {
    RankingRequest::new(vec![
        flight("A", 5000.0, 2.0, 10, "zero", "Economy", "Morning", "Evening"),
        flight("B", 3000.0, 3.0, 5, "one", "Economy", "Evening", "Night"),
        flight("C", 8000.0, 1.0, 20, "zero", "Business", "Night", "Morning"),
    ])
    .with_weights(PreferenceWeights::uniform(1.0))
    .with_departure(slot_preference())
    .with_arrival(slot_preference())
}

fn order(outcome: &wpm_core::RankingOutcome) -> String {
    outcome
        .flights
        .iter()
        .map(|f| format!("{}#{}", f.record.flight, f.rank))
        .collect::<Vec<_>>()
        .join(", ")
}

#[test]
fn scenario_ranks_c_then_a_then_b() {
    let outcome = rank_flights(&scenario_request()).unwrap();

    insta::assert_snapshot!(order(&outcome), @"C#1, A#2, B#3");
    let scores: Vec<f64> = outcome.flights.iter().map(|f| f.score).collect();
    assert!((scores[0] - 0.566_612_167_018_512_5).abs() < 1e-9);
    assert!((scores[1] - 0.098_506_120_544_111_56).abs() < 1e-9);
    assert!((scores[2] - 0.012_190_136_542_044_755).abs() < 1e-9);
    for (_, weight) in outcome.weights.iter() {
        assert!((weight - 1.0 / 7.0).abs() < 1e-12);
    }
}

#[test]
fn scenario_is_deterministic() {
    let request = scenario_request();
    let first = rank_flights(&request).unwrap();
    let second = rank_flights(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn previous_runs_do_not_influence_later_ones() {
    let request = scenario_request();
    let baseline = rank_flights(&request).unwrap();
    let price_only = request
        .clone()
        .with_weights(PreferenceWeights::uniform(0.0).with(Criterion::Price, 1.0));
    let other = rank_flights(&price_only).unwrap();
    assert_eq!(order(&other), "B#1, A#2, C#3");
    assert_eq!(rank_flights(&request).unwrap(), baseline);
}

#[test]
fn mapped_attributes_and_source_index_are_attached() {
    let outcome = rank_flights(&scenario_request()).unwrap();
    let best = outcome.best().unwrap();
    assert_eq!(best.source_index, 2);
    assert_eq!(best.attributes.class, 1);
    assert_eq!(best.attributes.stops, 0);
    assert_eq!(best.attributes.departure_score, 1);
    assert_eq!(best.attributes.arrival_score, 5);
    let last = &outcome.flights[2];
    assert_eq!(last.source_index, 1);
    assert_eq!(last.attributes.stops, 1);
}

#[test]
fn zero_price_does_not_fail() {
    let request = RankingRequest::new(vec![
        flight("FREE", 0.0, 2.0, 0, "zero", "Economy", "Morning", "Night"),
        flight("PAID", 4500.0, 2.0, 0, "zero", "Economy", "Morning", "Night"),
    ]);
    let outcome = rank_flights(&request).unwrap();
    assert_eq!(outcome.best().unwrap().record.flight, "FREE");
    for ranked in &outcome.flights {
        assert!(ranked.score.is_finite());
        assert!(ranked.score > 0.0);
    }
    let paid = &outcome.flights[1];
    let expected = (EPSILON / 4500.0).powf(0.2);
    assert!((paid.score - expected).abs() < 1e-12);
}

#[test]
fn zero_duration_and_days_left_do_not_fail() {
    let request = RankingRequest::new(vec![
        flight("Z", 9000.0, 0.0, 0, "zero", "Economy", "Morning", "Morning"),
        flight("P", 100.0, 2.0, 10, "zero", "Economy", "Morning", "Morning"),
    ])
    .with_weights(
        PreferenceWeights::uniform(0.0)
            .with(Criterion::Price, 1.0)
            .with(Criterion::Duration, 0.1)
            .with(Criterion::DaysLeft, 0.1),
    );
    let outcome = rank_flights(&request).unwrap();

    insta::assert_snapshot!(order(&outcome), @"P#1, Z#2");
    for ranked in &outcome.flights {
        assert!(ranked.score.is_finite());
        assert!(ranked.score > 0.0);
    }
    // Zero cells are the column minimum, so they normalize to exactly one.
    let zero = &outcome.flights[1];
    let expected = (100.0_f64 / 9000.0).powf(1.0 / 1.2);
    assert!((zero.score - expected).abs() < 1e-12);
}

#[test]
fn invalid_cost_numbers_abort_the_whole_pass() {
    let with_price = |price: f64| {
        let mut request = scenario_request();
        request.flights[1].price = price;
        rank_flights(&request)
    };

    assert_eq!(
        with_price(-5000.0),
        Err(RankError::InvalidNumber {
            record: 2,
            flight: "B".to_string(),
            criterion: Criterion::Price,
            value: -5000.0,
        })
    );
    assert!(matches!(
        with_price(f64::INFINITY),
        Err(RankError::InvalidNumber { criterion: Criterion::Price, value, .. })
            if value == f64::INFINITY
    ));
    assert!(matches!(
        with_price(f64::NAN),
        Err(RankError::InvalidNumber { record: 2, value, .. }) if value.is_nan()
    ));

    let mut request = scenario_request();
    request.flights[2].duration = -1.0;
    assert!(matches!(
        rank_flights(&request),
        Err(RankError::InvalidNumber { record: 3, criterion: Criterion::Duration, .. })
    ));
}

#[test]
fn degenerate_weights_are_reported_before_bad_records() {
    let mut request = scenario_request().with_weights(PreferenceWeights::uniform(0.0));
    request
        .flights
        .push(flight("D", -1.0, 1.0, 1, "zero", "Economy", "Late_Night", "Night"));
    assert_eq!(rank_flights(&request), Err(RankError::DegenerateWeights));
}

#[test]
fn unknown_category_aborts_the_whole_pass() {
    let mut request = scenario_request();
    request
        .flights
        .push(flight("D", 1000.0, 1.0, 1, "zero", "Economy", "Late_Night", "Night"));
    let error = rank_flights(&request).unwrap_err();
    assert_eq!(
        error,
        RankError::InvalidCategory {
            record: 4,
            flight: "D".to_string(),
            criterion: Criterion::DepartureTime,
            value: "Late_Night".to_string(),
        }
    );
}

#[test]
fn all_zero_weights_are_degenerate() {
    let request = scenario_request().with_weights(PreferenceWeights::uniform(0.0));
    assert_eq!(rank_flights(&request), Err(RankError::DegenerateWeights));
}

#[test]
fn empty_dataset_ranks_nothing() {
    let outcome = rank_flights(&RankingRequest::new(vec![])).unwrap();
    assert!(outcome.is_empty());
    assert!(outcome.top(5).is_empty());
    assert!(outcome.best().is_none());
}

#[test]
fn identical_records_tie_under_each_method() {
    let twin = || flight("T", 3000.0, 2.0, 5, "one", "Economy", "Morning", "Night");
    let mut flights = vec![twin(), twin()];
    flights[1].flight = "U".to_string();
    flights.push(flight("X", 9000.0, 4.0, 30, "two_or_more", "Economy", "Night", "Night"));

    let ranks = |method| {
        let request = RankingRequest::new(flights.clone()).with_rank_method(method);
        order(&rank_flights(&request).unwrap())
    };

    assert_eq!(ranks(RankMethod::Competitive), "T#1, U#1, X#3");
    assert_eq!(ranks(RankMethod::Dense), "T#1, U#1, X#2");
    assert_eq!(ranks(RankMethod::Ordinal), "T#1, U#2, X#3");
}

#[test]
fn top_never_pads() {
    let outcome = rank_flights(&scenario_request()).unwrap();
    assert_eq!(outcome.top(5).len(), 3);
    assert_eq!(outcome.top(2).len(), 2);
    assert_eq!(outcome.top(0).len(), 0);
}
