use std::collections::HashSet;
use std::sync::Arc;

use lazy_static::lazy_static;
use serde::Deserialize;
use thiserror::Error;

/// Location table shipped with the binary
const EMBEDDED_DATASET: &str = include_str!("../../../../data/locations.json");

lazy_static! {
    /// Island → province → city table, parsed once on first access and never mutated.
    /// The embedded file is covered by `test_embedded_dataset_is_valid`.
    pub static ref LOCATIONS: Arc<LocationDataset> = Arc::new(
        LocationDataset::from_json(EMBEDDED_DATASET).expect("embedded location dataset is valid")
    );
}

/// Island (pulau) node
#[derive(Debug, Clone, Deserialize)]
pub struct Island {
    pub key: String,
    pub label: String,
    pub provinces: Vec<Province>,
}

/// Province (provinsi) node nested under an island
#[derive(Debug, Clone, Deserialize)]
pub struct Province {
    pub key: String,
    pub label: String,
    /// City/regency labels in display order
    pub cities: Vec<String>,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Invalid location dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate island key '{0}'")]
    DuplicateIsland(String),

    #[error("Duplicate province key '{province}' in island '{island}'")]
    DuplicateProvince { island: String, province: String },
}

/// Ordered, immutable location table
#[derive(Debug, Clone, Default)]
pub struct LocationDataset {
    islands: Vec<Island>,
}

impl LocationDataset {
    /// Parse a dataset from its JSON form (an ordered array of islands).
    ///
    /// Keys must be unique per level. Labels are not checked; duplicated
    /// labels resolve to the first entry.
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let islands: Vec<Island> = serde_json::from_str(raw)?;

        let mut island_keys = HashSet::new();
        for island in &islands {
            if !island_keys.insert(island.key.as_str()) {
                return Err(DatasetError::DuplicateIsland(island.key.clone()));
            }

            let mut province_keys = HashSet::new();
            for province in &island.provinces {
                if !province_keys.insert(province.key.as_str()) {
                    return Err(DatasetError::DuplicateProvince {
                        island: island.key.clone(),
                        province: province.key.clone(),
                    });
                }
            }
        }

        Ok(Self { islands })
    }

    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    /// Find the key of the first island whose label equals `label`
    pub fn island_key_by_label(&self, label: &str) -> Option<&str> {
        self.islands
            .iter()
            .find(|island| island.label == label)
            .map(|island| island.key.as_str())
    }

    pub fn island(&self, key: &str) -> Option<&Island> {
        self.islands.iter().find(|island| island.key == key)
    }
}

impl Island {
    /// Find the key of the first province under this island whose label equals `label`
    pub fn province_key_by_label(&self, label: &str) -> Option<&str> {
        self.provinces
            .iter()
            .find(|province| province.label == label)
            .map(|province| province.key.as_str())
    }

    pub fn province(&self, key: &str) -> Option<&Province> {
        self.provinces.iter().find(|province| province.key == key)
    }
}
