//! Body Mass Index arithmetic and the adolescent category tables.

use serde::Serialize;
use std::fmt;

use crate::Measurement;

/// Age at which the adult-style cut points take over.
const OLDER_TEEN_AGE: u8 = 16;

/// Upper bounds (exclusive) of Underweight, Healthy weight and Overweight.
const YOUNGER_CUTS: [f64; 3] = [16.5, 23.0, 27.0];
const OLDER_CUTS: [f64; 3] = [18.5, 25.0, 30.0];

/// BMI = weight / (height in metres)², rounded to one decimal place.
///
/// Both inputs must already be validated as positive.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi * 10.0).round() / 10.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Healthy weight")]
    HealthyWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value using the table for the given age.
    ///
    /// Each band includes its lower bound, so a value sitting exactly on a
    /// threshold lands in the higher band.
    pub fn classify(bmi: f64, age: u8) -> Self {
        let cuts = if age < OLDER_TEEN_AGE {
            &YOUNGER_CUTS
        } else {
            &OLDER_CUTS
        };
        if bmi < cuts[0] {
            BmiCategory::Underweight
        } else if bmi < cuts[1] {
            BmiCategory::HealthyWeight
        } else if bmi < cuts[2] {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::HealthyWeight => "Healthy weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    pub fn compute(m: &Measurement) -> Self {
        let value = calculate_bmi(m.weight_kg, m.height_cm);
        Self {
            value,
            category: BmiCategory::classify(value, m.age),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_rounds_to_one_decimal() {
        assert_eq!(calculate_bmi(70.0, 175.0), 22.9);
        assert_eq!(calculate_bmi(50.0, 160.0), 19.5);
        assert_eq!(calculate_bmi(45.0, 150.0), 20.0);
    }

    #[test]
    fn younger_table_lower_bounds_are_inclusive() {
        assert_eq!(BmiCategory::classify(16.49, 15), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(16.5, 15), BmiCategory::HealthyWeight);
        assert_eq!(BmiCategory::classify(23.0, 15), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(26.9, 10), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(27.0, 10), BmiCategory::Obese);
    }

    #[test]
    fn older_table_starts_at_sixteen() {
        assert_eq!(BmiCategory::classify(18.49, 16), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5, 16), BmiCategory::HealthyWeight);
        assert_eq!(BmiCategory::classify(24.9, 19), BmiCategory::HealthyWeight);
        assert_eq!(BmiCategory::classify(25.0, 19), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0, 17), BmiCategory::Obese);
        // 17.0 is healthy for a 15-year-old but not for a 16-year-old
        assert_eq!(BmiCategory::classify(17.0, 15), BmiCategory::HealthyWeight);
        assert_eq!(BmiCategory::classify(17.0, 16), BmiCategory::Underweight);
    }

    #[test]
    fn category_labels_serialize_as_display_text() {
        let json = serde_json::to_string(&BmiCategory::HealthyWeight).unwrap();
        assert_eq!(json, "\"Healthy weight\"");
        assert_eq!(BmiCategory::Obese.to_string(), "Obese");
    }
}
