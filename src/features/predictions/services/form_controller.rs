use lazy_static::lazy_static;
use regex::Regex;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::locations::LocationService;
use crate::features::predictions::models::{FormField, FormOptions, FormState};

lazy_static! {
    /// Longest decimal literal at the start of the input, e.g. `12` in `12abc`
    static ref LEADING_NUMBER_RE: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap();
}

/// Parse a raw input value into a number.
///
/// Leading whitespace is skipped and the leading decimal literal is used, so
/// `"12abc"` reads as 12. Empty, unparsable and non-finite input becomes 0.
pub fn coerce_numeric(raw: &str) -> f64 {
    LEADING_NUMBER_RE
        .find(raw.trim_start())
        .and_then(|number| number.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Required-field check run before a submission leaves the server
pub fn validate_form(form: &FormState) -> Result<()> {
    form.validate().map_err(|errors| {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let messages = fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} tidak valid", field))
                })
            })
            .collect();

        AppError::ValidationErrors(messages)
    })
}

/// Owns a [`FormState`] and applies the field update rules
#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Apply one field edit.
    ///
    /// Island clears province and city, province clears city, all in the same
    /// transition. Numeric fields are coerced with [`coerce_numeric`].
    pub fn update_field(&mut self, field: FormField, raw_value: &str) {
        match field {
            FormField::Island => {
                self.state.island = raw_value.to_string();
                self.state.province.clear();
                self.state.city.clear();
            }
            FormField::Province => {
                self.state.province = raw_value.to_string();
                self.state.city.clear();
            }
            _ => {
                if let Some(value) = self.state.numeric_mut(field) {
                    *value = coerce_numeric(raw_value);
                } else if let Some(value) = self.state.text_mut(field) {
                    *value = raw_value.to_string();
                }
            }
        }
    }

    /// [`Self::update_field`] addressed by wire name or alias
    pub fn update_field_by_name(&mut self, name: &str, raw_value: &str) -> Result<FormField> {
        let field: FormField = name.parse()?;
        self.update_field(field, raw_value);
        Ok(field)
    }

    /// Move a numeric field by `delta`, never below the field's minimum.
    /// Returns the new value.
    pub fn step_numeric_field(&mut self, field: FormField, delta: f64) -> Result<f64> {
        let (Some(current), Some(minimum)) = (self.state.numeric(field), field.minimum()) else {
            return Err(AppError::Validation(format!(
                "Field '{}' is not numeric",
                field
            )));
        };

        let next = minimum.max(current + delta);
        self.update_field(field, &next.to_string());
        Ok(next)
    }

    /// Options for each dropdown given the current selection
    pub fn options(&self, locations: &LocationService) -> FormOptions {
        FormOptions {
            islands: locations.island_options(),
            provinces: locations.province_options(&self.state.island),
            cities: locations.city_options(&self.state.island, &self.state.province),
            province_enabled: !self.state.island.is_empty(),
            city_enabled: !self.state.province.is_empty(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_form(&self.state)
    }
}
