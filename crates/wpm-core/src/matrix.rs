//! Decision matrix construction and column normalization.

use wpm_model::{CRITERIA_COUNT, Criterion, CriterionKind, FlightRecord};

use crate::mapper::MappedAttributes;

/// Substitute for zero cells so ratios and powers stay defined.
pub const EPSILON: f64 = 1e-6;

/// One row per record, one column per criterion, zero cells replaced by [`EPSILON`].
///
/// Cells are expected to be finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    rows: Vec<[f64; CRITERIA_COUNT]>,
}

impl DecisionMatrix {
    /// Build the matrix from records and their mapped attributes.
    ///
    /// `records` and `mapped` must be the same length and in the same order.
    pub fn build(records: &[FlightRecord], mapped: &[MappedAttributes]) -> Self {
        debug_assert_eq!(records.len(), mapped.len());
        let rows = records
            .iter()
            .zip(mapped)
            .map(|(record, attributes)| {
                Criterion::ALL
                    .map(|criterion| guard_zero(raw_value(criterion, record, attributes)))
            })
            .collect();
        Self { rows }
    }

    pub fn from_rows(rows: Vec<[f64; CRITERIA_COUNT]>) -> Self {
        let rows = rows.into_iter().map(|row| row.map(guard_zero)).collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[[f64; CRITERIA_COUNT]] {
        &self.rows
    }

    pub fn value(&self, row: usize, criterion: Criterion) -> f64 {
        self.rows[row][criterion.index()]
    }

    pub fn column(&self, criterion: Criterion) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[criterion.index()])
    }

    /// Scale every column into `(0, 1]` relative to its best value.
    ///
    /// Cost columns become `min / value`, benefit columns `value / max`, so the
    /// best record in each column gets exactly 1.
    pub fn normalized(&self) -> DecisionMatrix {
        let mut rows = self.rows.clone();
        for criterion in Criterion::ALL {
            let column = criterion.index();
            match criterion.kind() {
                CriterionKind::Cost => {
                    let best = self.column(criterion).fold(f64::INFINITY, f64::min);
                    for row in &mut rows {
                        row[column] = best / row[column];
                    }
                }
                CriterionKind::Benefit => {
                    let best = self.column(criterion).fold(0.0, f64::max);
                    for row in &mut rows {
                        row[column] /= best;
                    }
                }
            }
        }
        DecisionMatrix { rows }
    }
}

fn raw_value(criterion: Criterion, record: &FlightRecord, attributes: &MappedAttributes) -> f64 {
    match criterion {
        Criterion::Price => record.price,
        Criterion::Duration => record.duration,
        Criterion::DaysLeft => f64::from(record.days_left),
        Criterion::Stops => f64::from(attributes.stops),
        Criterion::Class => f64::from(attributes.class),
        Criterion::DepartureTime => f64::from(attributes.departure_score),
        Criterion::ArrivalTime => f64::from(attributes.arrival_score),
    }
}

// Only exact zeros; ranges are checked during mapping.
fn guard_zero(value: f64) -> f64 {
    if value == 0.0 { EPSILON } else { value }
}
