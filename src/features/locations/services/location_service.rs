use std::sync::Arc;

use crate::features::locations::models::{LocationDataset, LOCATIONS};

/// Cascading selector over the location table.
///
/// Values coming from the form are labels. Each lookup resolves the label to
/// its dataset key first and indexes by that key. An unresolved label yields
/// an empty option list, never an error.
pub struct LocationService {
    dataset: Arc<LocationDataset>,
}

impl LocationService {
    pub fn new(dataset: Arc<LocationDataset>) -> Self {
        Self { dataset }
    }

    /// All island labels in dataset order
    pub fn island_options(&self) -> Vec<String> {
        self.dataset
            .islands()
            .iter()
            .map(|island| island.label.clone())
            .collect()
    }

    /// Province labels under the island labelled `island_label`
    pub fn province_options(&self, island_label: &str) -> Vec<String> {
        let Some(island) = self
            .dataset
            .island_key_by_label(island_label)
            .and_then(|key| self.dataset.island(key))
        else {
            return Vec::new();
        };

        island
            .provinces
            .iter()
            .map(|province| province.label.clone())
            .collect()
    }

    /// City labels under the (island, province) label pair
    pub fn city_options(&self, island_label: &str, province_label: &str) -> Vec<String> {
        let Some(island) = self
            .dataset
            .island_key_by_label(island_label)
            .and_then(|key| self.dataset.island(key))
        else {
            return Vec::new();
        };

        island
            .province_key_by_label(province_label)
            .and_then(|key| island.province(key))
            .map(|province| province.cities.clone())
            .unwrap_or_default()
    }

    pub fn island_count(&self) -> usize {
        self.dataset.islands().len()
    }
}

impl Default for LocationService {
    fn default() -> Self {
        Self::new(Arc::clone(&LOCATIONS))
    }
}
