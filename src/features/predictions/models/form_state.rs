use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::AppError;

/// One input of the house form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum FormField {
    #[serde(rename = "pulau")]
    Island,
    #[serde(rename = "provinsi")]
    Province,
    #[serde(rename = "kota")]
    City,
    #[serde(rename = "luas_tanah")]
    LandArea,
    #[serde(rename = "luas_bangunan")]
    BuildingArea,
    #[serde(rename = "jumlah_kamar_tidur")]
    Bedrooms,
    #[serde(rename = "jumlah_kamar_mandi")]
    Bathrooms,
    #[serde(rename = "muatan_parkir")]
    ParkingCapacity,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Island,
        FormField::Province,
        FormField::City,
        FormField::LandArea,
        FormField::BuildingArea,
        FormField::Bedrooms,
        FormField::Bathrooms,
        FormField::ParkingCapacity,
    ];

    /// Name used on the wire and in the form markup
    pub fn wire_name(self) -> &'static str {
        match self {
            FormField::Island => "pulau",
            FormField::Province => "provinsi",
            FormField::City => "kota",
            FormField::LandArea => "luas_tanah",
            FormField::BuildingArea => "luas_bangunan",
            FormField::Bedrooms => "jumlah_kamar_tidur",
            FormField::Bathrooms => "jumlah_kamar_mandi",
            FormField::ParkingCapacity => "muatan_parkir",
        }
    }

    /// English alias accepted by the API
    pub fn alias(self) -> &'static str {
        match self {
            FormField::Island => "island",
            FormField::Province => "province",
            FormField::City => "city",
            FormField::LandArea => "landArea",
            FormField::BuildingArea => "buildingArea",
            FormField::Bedrooms => "bedrooms",
            FormField::Bathrooms => "bathrooms",
            FormField::ParkingCapacity => "parkingCapacity",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            FormField::Island | FormField::Province | FormField::City
        )
    }

    /// Lower bound used by the stepper buttons; `None` for text fields
    pub fn minimum(self) -> Option<f64> {
        match self {
            FormField::Island | FormField::Province | FormField::City => None,
            FormField::LandArea | FormField::BuildingArea => Some(1.0),
            FormField::Bedrooms | FormField::Bathrooms => Some(1.0),
            FormField::ParkingCapacity => Some(0.0),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for FormField {
    type Err = AppError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.wire_name() == name || field.alias() == name)
            .ok_or_else(|| AppError::Validation(format!("Unknown form field '{}'", name)))
    }
}

/// Values of the house form.
///
/// Serializes with the wire names expected by the prediction server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct FormState {
    /// Island label
    #[serde(rename = "pulau")]
    #[validate(length(min = 1, message = "Pulau wajib dipilih"))]
    pub island: String,

    /// Province label
    #[serde(rename = "provinsi")]
    #[validate(length(min = 1, message = "Provinsi wajib dipilih"))]
    pub province: String,

    /// City/regency label
    #[serde(rename = "kota")]
    #[validate(length(min = 1, message = "Kota/Kabupaten wajib dipilih"))]
    pub city: String,

    /// Land area in m²
    #[serde(rename = "luas_tanah")]
    #[validate(range(min = 1.0, message = "Luas tanah minimal 1 m²"))]
    pub land_area: f64,

    /// Building area in m²
    #[serde(rename = "luas_bangunan")]
    #[validate(range(min = 1.0, message = "Luas bangunan minimal 1 m²"))]
    pub building_area: f64,

    #[serde(rename = "jumlah_kamar_tidur")]
    #[validate(range(min = 1.0, message = "Jumlah kamar tidur minimal 1"))]
    pub bedrooms: f64,

    #[serde(rename = "jumlah_kamar_mandi")]
    #[validate(range(min = 1.0, message = "Jumlah kamar mandi minimal 1"))]
    pub bathrooms: f64,

    /// Parking slots
    #[serde(rename = "muatan_parkir")]
    #[validate(range(min = 0.0, message = "Muatan parkir tidak boleh negatif"))]
    pub parking_capacity: f64,
}

impl FormState {
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Island => Some(&mut self.island),
            FormField::Province => Some(&mut self.province),
            FormField::City => Some(&mut self.city),
            _ => None,
        }
    }

    pub fn numeric(&self, field: FormField) -> Option<f64> {
        match field {
            FormField::LandArea => Some(self.land_area),
            FormField::BuildingArea => Some(self.building_area),
            FormField::Bedrooms => Some(self.bedrooms),
            FormField::Bathrooms => Some(self.bathrooms),
            FormField::ParkingCapacity => Some(self.parking_capacity),
            _ => None,
        }
    }

    pub fn numeric_mut(&mut self, field: FormField) -> Option<&mut f64> {
        match field {
            FormField::LandArea => Some(&mut self.land_area),
            FormField::BuildingArea => Some(&mut self.building_area),
            FormField::Bedrooms => Some(&mut self.bedrooms),
            FormField::Bathrooms => Some(&mut self.bathrooms),
            FormField::ParkingCapacity => Some(&mut self.parking_capacity),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parses_wire_name_and_alias() {
        assert_eq!(
            "jumlah_kamar_tidur".parse::<FormField>().unwrap(),
            FormField::Bedrooms
        );
        assert_eq!("island".parse::<FormField>().unwrap(), FormField::Island);
        assert_eq!(
            "parkingCapacity".parse::<FormField>().unwrap(),
            FormField::ParkingCapacity
        );
        assert!(matches!(
            "garage".parse::<FormField>(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_field_minimums() {
        assert_eq!(FormField::Bedrooms.minimum(), Some(1.0));
        assert_eq!(FormField::Bathrooms.minimum(), Some(1.0));
        assert_eq!(FormField::ParkingCapacity.minimum(), Some(0.0));
        assert_eq!(FormField::City.minimum(), None);
        assert!(FormField::ALL
            .iter()
            .all(|field| field.is_numeric() == field.minimum().is_some()));
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let form = FormState {
            island: "Jawa".to_string(),
            province: "DI Yogyakarta".to_string(),
            city: "Sleman".to_string(),
            land_area: 120.0,
            building_area: 90.0,
            bedrooms: 3.0,
            bathrooms: 2.0,
            parking_capacity: 1.0,
        };

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pulau": "Jawa",
                "provinsi": "DI Yogyakarta",
                "kota": "Sleman",
                "luas_tanah": 120.0,
                "luas_bangunan": 90.0,
                "jumlah_kamar_tidur": 3.0,
                "jumlah_kamar_mandi": 2.0,
                "muatan_parkir": 1.0
            })
        );
    }

    #[test]
    fn test_missing_fields_default_on_deserialize() {
        let form: FormState = serde_json::from_str(r#"{"pulau": "Bali"}"#).unwrap();
        assert_eq!(form.island, "Bali");
        assert_eq!(form.province, "");
        assert_eq!(form.bedrooms, 0.0);
    }
}
