//! CSV ingestion for the routes dataset.
//!
//! Parsing and validation happen here, before anything reaches the core
//! library; the graph itself assumes well-formed numeric records.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use skyroutes_lib::{AirportDirectory, AirportRecord, RouteRecord};

/// One row of the routes CSV, keyed by the dataset's original headers.
#[derive(Debug, Deserialize)]
struct RouteRow {
    #[serde(rename = "Source Airport Code")]
    source_code: String,
    #[serde(rename = "Source Airport City")]
    source_city: String,
    #[serde(rename = "Source Airport Country")]
    source_country: String,
    #[serde(rename = "Source Airport Latitude")]
    source_lat: f64,
    #[serde(rename = "Source Airport Longitude")]
    source_lon: f64,
    #[serde(rename = "Destination Airport Code")]
    dest_code: String,
    #[serde(rename = "Destination Airport Latitude")]
    dest_lat: f64,
    #[serde(rename = "Destination Airport Longitude")]
    dest_lon: f64,
}

/// Parsed routes dataset: the typed records the graph is built from, plus
/// the code→attributes directory for display lookups.
pub struct Dataset {
    pub records: Vec<RouteRecord>,
    pub directory: AirportDirectory,
}

/// Read and parse the routes CSV. Malformed rows abort ingestion with the
/// offending row number in the error chain.
pub fn load_routes(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open routes file {}", path.display()))?;

    let mut records = Vec::new();
    let mut directory = AirportDirectory::new();

    for (index, row) in reader.deserialize::<RouteRow>().enumerate() {
        let row = row.with_context(|| format!("malformed route row {}", index + 1))?;

        directory.insert(AirportRecord {
            code: row.source_code.clone(),
            city: row.source_city,
            country: row.source_country,
            latitude: row.source_lat,
            longitude: row.source_lon,
        });
        records.push(RouteRecord {
            source_code: row.source_code,
            dest_code: row.dest_code,
            source_lat: row.source_lat,
            source_lon: row.source_lon,
            dest_lat: row.dest_lat,
            dest_lon: row.dest_lon,
        });
    }

    tracing::debug!(
        rows = records.len(),
        airports = directory.len(),
        "loaded routes dataset"
    );
    Ok(Dataset { records, directory })
}
