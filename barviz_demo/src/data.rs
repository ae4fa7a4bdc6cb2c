// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sample data sets.

use barviz_model::{ModelError, Record, RecordSet};

/// Municipalities in Colombia with the highest dengue spread rate.
///
/// Columns: name, spread rate, distance to the nearest hospital (km), population.
const COLOMBIA: [(&str, f64, f64, u64); 9] = [
    ("Saldaña", 47.6, 7.3, 14450),
    ("Capitanejo", 45.6, 4.5, 5479),
    ("San Martín", 35.9, 27.3, 26571),
    ("Leticia", 34.3, 10.6, 48918),
    ("Medina", 32.2, 21.9, 8064),
    ("Cubarral", 31.8, 18.1, 7019),
    ("Alvarado", 28.9, 8.82, 8710),
    ("San Luis de Gaceno", 27.8, 10.7, 5476),
    ("Baraya", 27.2, 13.7, 8282),
];

/// Placeholder cities without populations.
const PLACEHOLDER: [(&str, f64, f64); 10] = [
    ("City A", 5.2, 2.5),
    ("City B", 4.8, 5.1),
    ("City C", 4.3, 1.7),
    ("City D", 3.9, 3.2),
    ("City E", 3.5, 4.9),
    ("City F", 3.2, 2.1),
    ("City G", 2.9, 6.0),
    ("City H", 2.5, 1.9),
    ("City I", 2.1, 4.5),
    ("City J", 1.8, 3.8),
];

pub(crate) fn colombia() -> Result<RecordSet, ModelError> {
    RecordSet::new(
        COLOMBIA
            .iter()
            .map(|&(name, rate, distance, population)| {
                Record::new(name, rate, distance).with_population(population)
            })
            .collect(),
    )
}

pub(crate) fn placeholder() -> Result<RecordSet, ModelError> {
    RecordSet::new(
        PLACEHOLDER
            .iter()
            .map(|&(name, rate, distance)| Record::new(name, rate, distance))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_sets_are_valid() {
        let colombia = colombia().unwrap();
        assert_eq!(colombia.len(), 9);
        assert_eq!(colombia.find("Leticia").and_then(|r| r.population), Some(48918));

        let placeholder = placeholder().unwrap();
        assert_eq!(placeholder.len(), 10);
        assert!(placeholder.iter().all(|r| r.population.is_none()));
    }
}
