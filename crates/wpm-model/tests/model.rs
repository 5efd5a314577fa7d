//! Tests for wpm-model types.

use wpm_model::{
    Criterion, PreferenceWeights, RankMethod, RankingRequest, TimeSlot, TimeSlotPreference,
};

#[test]
fn time_slot_preference_deserializes_from_slot_names() {
    let json = r#"{"Early_Morning":1,"Morning":5,"Afternoon":4,"Evening":3,"Night":2}"#;
    let preference: TimeSlotPreference = serde_json::from_str(json).expect("parse preference");
    assert_eq!(preference.score(TimeSlot::EarlyMorning), Some(1));
    assert_eq!(preference.score(TimeSlot::Morning), Some(5));
    assert_eq!(preference.lookup("Night"), Some(2));
}

#[test]
fn time_slot_preference_rejects_out_of_range_json() {
    let json = r#"{"Early_Morning":0,"Morning":5,"Afternoon":4,"Evening":3,"Night":2}"#;
    let result: Result<TimeSlotPreference, _> = serde_json::from_str(json);
    let error = result.expect_err("score 0 must be rejected");
    assert!(error.to_string().contains("between 1 and 5"));
}

#[test]
fn time_slot_preference_rejects_partial_json() {
    let json = r#"{"Morning":5}"#;
    let result: Result<TimeSlotPreference, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn weights_deserialize_with_defaults_for_missing_keys() {
    let json = r#"{"price":0.7,"class":0.0}"#;
    let weights: PreferenceWeights = serde_json::from_str(json).expect("parse weights");
    assert_eq!(weights.get(Criterion::Price), 0.7);
    assert_eq!(weights.get(Criterion::Class), 0.0);
    assert_eq!(weights.get(Criterion::Duration), 0.2);
}

#[test]
fn weights_reject_unknown_criteria() {
    let json = r#"{"prices":0.7}"#;
    let result: Result<PreferenceWeights, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn request_serializes() {
    let request = RankingRequest::new(vec![])
        .with_weights(PreferenceWeights::uniform(1.0))
        .with_rank_method(RankMethod::Dense);
    let json = serde_json::to_string(&request).expect("serialize request");
    assert!(json.contains(r#""rank_method":"dense""#));
    let round: RankingRequest = serde_json::from_str(&json).expect("deserialize request");
    assert_eq!(round.rank_method, RankMethod::Dense);
    assert_eq!(round.weights, PreferenceWeights::uniform(1.0));
    assert_eq!(round.departure, TimeSlotPreference::default());
}
