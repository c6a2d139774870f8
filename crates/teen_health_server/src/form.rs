//! Parsing and validation of the submitted form.

use serde::Deserialize;
use teen_health_client::{Measurement, calculate_bmi};

use crate::error::{FormError, FormResult};

pub const MIN_AGE: i64 = 10;
pub const MAX_AGE: i64 = 19;

/// Raw form fields as posted. Every field is optional so that a missing value
/// is reported as a validation error instead of an extractor rejection.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AssessmentForm {
    pub age: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub gender: Option<String>,
}

impl AssessmentForm {
    /// Turn the raw fields into a [`Measurement`].
    ///
    /// Checks run in order: numbers parse, gender present, age in range,
    /// height and weight positive, resulting BMI finite.
    pub fn validate(&self) -> FormResult<Measurement> {
        let age = parse_age(self.age.as_deref())?;
        let height_cm = parse_real(self.height.as_deref())?;
        let weight_kg = parse_real(self.weight.as_deref())?;
        let gender = self
            .gender
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .ok_or(FormError::MissingGender)?;

        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(FormError::AgeOutOfRange);
        }
        if height_cm <= 0.0 || weight_kg <= 0.0 {
            return Err(FormError::NonPositiveMeasurement);
        }
        if !calculate_bmi(weight_kg, height_cm).is_finite() {
            return Err(FormError::ImplausibleMeasurement);
        }

        Ok(Measurement {
            age: u8::try_from(age).map_err(|_| FormError::AgeOutOfRange)?,
            gender: gender.to_string(),
            height_cm,
            weight_kg,
        })
    }
}

fn parse_age(raw: Option<&str>) -> FormResult<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .ok_or(FormError::InvalidNumber)
}

fn parse_real(raw: Option<&str>) -> FormResult<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or(FormError::InvalidNumber)
}
