//! Static catalog of known places.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::prelude::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LocationRow {
    pub city: String,

    #[serde(rename = "type")]
    pub type_: String,

    pub name: String,
}

/// Place rows in their source order.
#[derive(Debug, Default)]
pub struct Catalog {
    rows: Vec<LocationRow>,
}

impl From<Vec<LocationRow>> for Catalog {
    fn from(rows: Vec<LocationRow>) -> Self {
        Self { rows }
    }
}

impl Catalog {
    #[instrument(level = "info")]
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open the location catalog `{}`", path.display()))?;
        let catalog = Self::from_reader(file)
            .with_context(|| format!("failed to read the location catalog `{}`", path.display()))?;
        info!(n_rows = catalog.len(), "loaded");
        Ok(catalog)
    }

    /// Reads CSV records with the `city`, `type` and `name` columns in any order.
    ///
    /// Fields are taken verbatim, surrounding whitespace included.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().from_reader(reader);
        let rows = reader
            .deserialize::<LocationRow>()
            .enumerate()
            .map(|(index, row)| row.with_context(|| format!("malformed record #{}", index + 1)))
            .collect::<Result<Vec<LocationRow>>>()?;
        Ok(Self::from(rows))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selects the rows whose city contains `city_query` and whose type equals `type_query`,
    /// ignoring case on both sides.
    pub fn filter(&self, city_query: &str, type_query: &str) -> Vec<&LocationRow> {
        let city_query = city_query.to_lowercase();
        let type_query = type_query.to_lowercase();
        self.rows
            .iter()
            .filter(|row| row.city.to_lowercase().contains(&city_query))
            .filter(|row| row.type_.to_lowercase() == type_query)
            .collect()
    }
}
