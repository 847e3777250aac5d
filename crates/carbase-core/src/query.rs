//! Field-wise search over a record store.
//!
//! Each query targets exactly one field with one criterion and performs a
//! single linear scan. Hits borrow from the store and keep store order.

use serde::Serialize;

use crate::error::{CarbaseError, Result};
use crate::record::{Field, FieldKind, VehicleRecord};
use crate::store::RecordStore;

/// How to compare a field against the search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Case-sensitive full-string equality (text fields).
    Exact(String),
    /// Case-sensitive substring test (text fields).
    Contains(String),
    /// Single value (numeric fields).
    Equals(i32),
    /// Inclusive interval (numeric fields). `min > max` matches nothing.
    Range { min: i32, max: i32 },
}

impl Criterion {
    pub fn kind(&self) -> FieldKind {
        match self {
            Criterion::Exact(_) | Criterion::Contains(_) => FieldKind::Text,
            Criterion::Equals(_) | Criterion::Range { .. } => FieldKind::Numeric,
        }
    }

    fn matches(&self, record: &VehicleRecord, field: Field) -> bool {
        match self {
            Criterion::Exact(term) => record.text(field) == Some(term.as_str()),
            Criterion::Contains(term) => record
                .text(field)
                .is_some_and(|value| value.contains(term.as_str())),
            Criterion::Equals(target) => record.number(field) == Some(*target),
            Criterion::Range { min, max } => record
                .number(field)
                .is_some_and(|value| *min <= value && value <= *max),
        }
    }
}

/// The two-way choice offered after a field is picked: 1 = exact/single,
/// 2 = partial/range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    Contains,
    Equals,
    Range,
}

impl MatchMode {
    /// Resolve a mode menu number for a field.
    pub fn from_menu(field: Field, number: u32) -> Result<MatchMode> {
        match (field.kind(), number) {
            (FieldKind::Text, 1) => Ok(MatchMode::Exact),
            (FieldKind::Text, 2) => Ok(MatchMode::Contains),
            (FieldKind::Numeric, 1) => Ok(MatchMode::Equals),
            (FieldKind::Numeric, 2) => Ok(MatchMode::Range),
            (_, other) => Err(CarbaseError::InvalidMode(format!(
                "option {} (choose 1 or 2)",
                other
            ))),
        }
    }
}

/// A matching record together with its 1-based position in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hit<'a> {
    #[serde(rename = "number")]
    pub ordinal: usize,
    #[serde(flatten)]
    pub record: &'a VehicleRecord,
}

/// Return every record whose `field` satisfies `criterion`, in store order.
///
/// # Errors
///
/// Returns `CarbaseError::InvalidMode` when the criterion kind does not fit
/// the field (e.g. a substring test on `year`). No partial result is
/// produced in that case.
pub fn search<'a>(store: &'a RecordStore, field: Field, criterion: &Criterion) -> Result<Vec<Hit<'a>>> {
    if criterion.kind() != field.kind() {
        return Err(CarbaseError::InvalidMode(format!(
            "{:?} cannot be applied to {}",
            criterion, field
        )));
    }

    Ok(store
        .all()
        .iter()
        .enumerate()
        .filter(|(_, record)| criterion.matches(record, field))
        .map(|(index, record)| Hit {
            ordinal: index + 1,
            record,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RecordStore {
        RecordStore::from_records(vec![
            VehicleRecord::new("Toyota", "Corolla", 2020, 1800, "Petrol", "Sedan", "AB123CD"),
            VehicleRecord::new("Ford", "Focus", 2012, 1600, "Diesel", "Hatchback", "XY987ZT"),
            VehicleRecord::new("Toyota", "Yaris", 2015, 1300, "Hybrid", "Hatchback", "AB555EE"),
        ])
    }

    fn ordinals(hits: &[Hit<'_>]) -> Vec<usize> {
        hits.iter().map(|h| h.ordinal).collect()
    }

    #[test]
    fn test_exact_brand_and_year_scenario() {
        let store = store();
        let toyotas = search(&store, Field::Brand, &Criterion::Exact("Toyota".into())).unwrap();
        assert_eq!(ordinals(&toyotas), vec![1, 3]);

        let year = search(&store, Field::Year, &Criterion::Equals(2020)).unwrap();
        assert_eq!(ordinals(&year), vec![1]);
        assert_eq!(year[0].record.model, "Corolla");
    }

    #[test]
    fn test_exact_is_case_sensitive() {
        let store = store();
        let hits = search(&store, Field::Brand, &Criterion::Exact("toyota".into())).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_contains_substring() {
        let store = store();
        let hits = search(&store, Field::Registration, &Criterion::Contains("AB".into())).unwrap();
        assert_eq!(ordinals(&hits), vec![1, 3]);

        let hits = search(&store, Field::VehicleType, &Criterion::Contains("back".into())).unwrap();
        assert_eq!(ordinals(&hits), vec![2, 3]);
    }

    #[test]
    fn test_range_is_inclusive() {
        let store = store();
        let hits = search(
            &store,
            Field::Capacity,
            &Criterion::Range {
                min: 1300,
                max: 1600,
            },
        )
        .unwrap();
        assert_eq!(ordinals(&hits), vec![2, 3]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let store = store();
        let hits = search(
            &store,
            Field::Year,
            &Criterion::Range {
                min: 2020,
                max: 2010,
            },
        )
        .unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_mismatched_criterion_is_invalid_mode() {
        let store = store();
        assert!(matches!(
            search(&store, Field::Year, &Criterion::Contains("20".into())),
            Err(CarbaseError::InvalidMode(_))
        ));
        assert!(matches!(
            search(&store, Field::Brand, &Criterion::Equals(1)),
            Err(CarbaseError::InvalidMode(_))
        ));
    }

    #[test]
    fn test_hits_are_subsequence_of_store() {
        let store = store();
        for field in Field::ALL {
            let criterion = match field.kind() {
                FieldKind::Text => Criterion::Contains("o".into()),
                FieldKind::Numeric => Criterion::Range {
                    min: 1500,
                    max: 2015,
                },
            };
            let hits = search(&store, field, &criterion).unwrap();
            let positions = ordinals(&hits);
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            for hit in &hits {
                assert_eq!(store.get(hit.ordinal), Some(hit.record));
            }
        }
    }

    #[test]
    fn test_hit_serializes_flat_with_number() {
        let store = store();
        let hits = search(&store, Field::Model, &Criterion::Exact("Yaris".into())).unwrap();
        let value = serde_json::to_value(&hits).unwrap();
        assert_eq!(value[0]["number"], 3);
        assert_eq!(value[0]["brand"], "Toyota");
        assert_eq!(value[0]["type"], "Hatchback");
        assert!(value[0].get("record").is_none());
    }

    #[test]
    fn test_mode_from_menu() {
        assert_eq!(MatchMode::from_menu(Field::Fuel, 1).unwrap(), MatchMode::Exact);
        assert_eq!(MatchMode::from_menu(Field::Fuel, 2).unwrap(), MatchMode::Contains);
        assert_eq!(MatchMode::from_menu(Field::Year, 1).unwrap(), MatchMode::Equals);
        assert_eq!(MatchMode::from_menu(Field::Capacity, 2).unwrap(), MatchMode::Range);
        assert!(matches!(
            MatchMode::from_menu(Field::Model, 3),
            Err(CarbaseError::InvalidMode(_))
        ));
    }
}
