//! Airport display attributes, maintained by the ingestion layer.
//!
//! The route graph itself only knows codes; callers that need to translate a
//! code back into a city, country, or coordinates keep an
//! [`AirportDirectory`] next to the graph.

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::AirportCode;

/// Display attributes for a single airport row from the source data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportRecord {
    pub code: AirportCode,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Code-keyed lookup of airport attributes.
///
/// Raw route data may repeat a code across rows with differing attributes;
/// the first occurrence in input order wins and later rows are ignored. This
/// only affects display lookups, never graph structure.
#[derive(Debug, Clone, Default)]
pub struct AirportDirectory {
    records: HashMap<AirportCode, AirportRecord>,
}

impl AirportDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless its code is already present.
    pub fn insert(&mut self, record: AirportRecord) {
        self.records.entry(record.code.clone()).or_insert(record);
    }

    /// Attributes for a code, if any row carried it.
    pub fn get(&self, code: &str) -> Option<&AirportRecord> {
        self.records.get(code)
    }

    /// Iterate over the known codes in arbitrary order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<AirportRecord> for AirportDirectory {
    fn from_iter<I: IntoIterator<Item = AirportRecord>>(iter: I) -> Self {
        let mut directory = Self::new();
        for record in iter {
            directory.insert(record);
        }
        directory
    }
}
