// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Records and validated record sets.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::error::{Field, ModelError};

/// One municipality row.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Display name; unique within a [`RecordSet`].
    pub name: String,
    /// Cases per 1000 population. Primary magnitude.
    pub rate: f64,
    /// Distance to the nearest hospital in km. Color-encoded.
    pub distance: f64,
    /// Population, shown in hover text only.
    pub population: Option<u64>,
}

impl Record {
    /// Creates a record without population.
    pub fn new(name: impl Into<String>, rate: f64, distance: f64) -> Self {
        Self {
            name: name.into(),
            rate,
            distance,
            population: None,
        }
    }

    /// Sets the population.
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    /// Returns the value of a numeric attribute.
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Rate => self.rate,
            Field::Distance => self.distance,
        }
    }
}

/// An ordered, immutable set of validated records.
///
/// Construction checks that every `rate` and `distance` is finite and non-negative and that
/// names are unique. An empty set is accepted here; operations that need a record reject it.
#[derive(Clone, Debug, Default)]
pub struct RecordSet {
    records: Vec<Record>,
    by_name: HashMap<String, usize>,
}

impl RecordSet {
    /// Validates `records` and takes ownership of them, keeping input order.
    pub fn new(records: Vec<Record>) -> Result<Self, ModelError> {
        let mut by_name = HashMap::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            for field in [Field::Rate, Field::Distance] {
                let value = record.value(field);
                if !value.is_finite() || value < 0.0 {
                    return Err(ModelError::InvalidRecord { row, field, value });
                }
            }
            if by_name.insert(record.name.clone(), row).is_some() {
                return Err(ModelError::DuplicateName {
                    name: record.name.clone(),
                });
            }
        }
        log::debug!("ingested {} records", records.len());
        Ok(Self { records, by_name })
    }

    /// Returns the records in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in input order.
    pub fn iter(&self) -> core::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns the record at `row`.
    pub fn get(&self, row: usize) -> Option<&Record> {
        self.records.get(row)
    }

    /// Returns the row index of the record called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Returns the record called `name`.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).and_then(|row| self.records.get(row))
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = core::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn keeps_input_order_and_indexes_names() {
        let set = RecordSet::new(vec![
            Record::new("Saldaña", 47.6, 7.3).with_population(14_450),
            Record::new("Capitanejo", 45.6, 4.5),
        ])
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[0].name, "Saldaña");
        assert_eq!(set.position("Capitanejo"), Some(1));
        assert_eq!(set.find("Saldaña").and_then(|r| r.population), Some(14_450));
        assert!(set.find("Leticia").is_none());
    }

    #[test]
    fn rejects_negative_and_non_finite_values() {
        let err = RecordSet::new(vec![
            Record::new("A", 1.0, 1.0),
            Record::new("B", -0.5, 1.0),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidRecord {
                row: 1,
                field: Field::Rate,
                value: -0.5,
            }
        );

        let err = RecordSet::new(vec![Record::new("A", 1.0, f64::INFINITY)]).unwrap_err();
        assert!(
            matches!(
                err,
                ModelError::InvalidRecord {
                    row: 0,
                    field: Field::Distance,
                    ..
                }
            ),
            "expected distance rejection, got {err:?}"
        );

        let err = RecordSet::new(vec![Record::new("A", f64::NAN, 1.0)]).unwrap_err();
        assert!(
            matches!(err, ModelError::InvalidRecord { field: Field::Rate, .. }),
            "expected rate rejection, got {err:?}"
        );
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = RecordSet::new(vec![Record::new("A", 1.0, 1.0), Record::new("A", 2.0, 2.0)])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateName {
                name: String::from("A")
            }
        );
    }

    #[test]
    fn empty_set_is_accepted_at_ingestion() {
        let set = RecordSet::new(Vec::new()).unwrap();
        assert!(set.is_empty());
    }
}
