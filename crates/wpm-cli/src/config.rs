//! Ranking preferences from a TOML file and command-line overrides.
//!
//! ```toml
//! rank_method = "dense"
//!
//! [weights]
//! price = 0.5
//! stops = 0.2
//!
//! [departure]
//! Morning = 5
//! Night = 1
//! ```
//!
//! Keys left out keep their defaults.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use wpm_model::{
    Criterion, FlightRecord, PreferenceWeights, RankMethod, RankingRequest, TimeSlot,
    TimeSlotPreference,
};

/// Contents of a preference file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreferenceFile {
    pub weights: PreferenceWeights,
    pub departure: BTreeMap<TimeSlot, u8>,
    pub arrival: BTreeMap<TimeSlot, u8>,
    pub rank_method: Option<RankMethod>,
}

/// Values given on the command line; applied after the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceOverrides {
    pub weights: Vec<(Criterion, f64)>,
    pub departure: Vec<(TimeSlot, u8)>,
    pub arrival: Vec<(TimeSlot, u8)>,
    pub rank_method: Option<RankMethod>,
}

/// Read and parse a preference file.
pub fn load_preference_file(path: &Path) -> Result<PreferenceFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read preference file {}", path.display()))?;
    let file = parse_preference_file(&contents)
        .with_context(|| format!("parse preference file {}", path.display()))?;
    debug!(path = %path.display(), "loaded preference file");
    Ok(file)
}

pub fn parse_preference_file(contents: &str) -> Result<PreferenceFile> {
    Ok(toml::from_str(contents)?)
}

/// Assemble the ranking request: defaults, then the file, then overrides.
///
/// # Errors
///
/// Fails when a slot score lies outside `1..=5`.
pub fn build_request(
    flights: Vec<FlightRecord>,
    file: Option<&PreferenceFile>,
    overrides: &PreferenceOverrides,
) -> Result<RankingRequest> {
    let mut weights = file.map(|f| f.weights).unwrap_or_default();
    for &(criterion, value) in &overrides.weights {
        weights.set(criterion, value);
    }

    let file_departure = file.map(|f| &f.departure);
    let file_arrival = file.map(|f| &f.arrival);
    let departure = slot_preference(file_departure, &overrides.departure)
        .context("invalid departure preference")?;
    let arrival = slot_preference(file_arrival, &overrides.arrival)
        .context("invalid arrival preference")?;

    let rank_method = overrides
        .rank_method
        .or_else(|| file.and_then(|f| f.rank_method))
        .unwrap_or_default();

    Ok(RankingRequest::new(flights)
        .with_weights(weights)
        .with_departure(departure)
        .with_arrival(arrival)
        .with_rank_method(rank_method))
}

fn slot_preference(
    file: Option<&BTreeMap<TimeSlot, u8>>,
    overrides: &[(TimeSlot, u8)],
) -> wpm_model::Result<TimeSlotPreference> {
    let from_file = file.into_iter().flatten().map(|(&slot, &score)| (slot, score));
    from_file
        .chain(overrides.iter().copied())
        .try_fold(TimeSlotPreference::default(), |preference, (slot, score)| {
            preference.with_score(slot, score)
        })
}

/// Parse `criterion=value` as given to `--weight`.
pub fn parse_weight_arg(raw: &str) -> std::result::Result<(Criterion, f64), String> {
    let (name, value) = split_pair(raw)?;
    let criterion = name.parse::<Criterion>()?;
    let value = value
        .parse::<f64>()
        .map_err(|_| format!("invalid weight for {criterion}: '{value}'"))?;
    Ok((criterion, value))
}

/// Parse `SLOT=SCORE` as given to `--departure` and `--arrival`.
pub fn parse_slot_arg(raw: &str) -> std::result::Result<(TimeSlot, u8), String> {
    let (name, score) = split_pair(raw)?;
    let slot = name.parse::<TimeSlot>()?;
    let score = score
        .parse::<u8>()
        .map_err(|_| format!("invalid score for {slot}: '{score}'"))?;
    Ok((slot, score))
}

fn split_pair(raw: &str) -> std::result::Result<(&str, &str), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}
