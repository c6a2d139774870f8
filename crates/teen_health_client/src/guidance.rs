//! The structured guidance record and its static fallback.
//!
//! Deserializing into [`GuidanceRecord`] doubles as schema validation: a
//! completion missing any section or field is rejected like unparsable text.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuidanceRecord {
    pub explanation: String,
    pub nutrition: NutritionPlan,
    pub hydration: HydrationPlan,
    pub sleep: SleepPlan,
    pub activity: ActivityPlan,
    pub weekly_plan: WeeklyPlan,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionPlan {
    pub title: String,
    pub calories: String,
    pub foods_to_eat: Vec<String>,
    pub foods_to_limit: Vec<String>,
    pub meal_timing: String,
    pub details: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HydrationPlan {
    pub title: String,
    pub daily_amount: String,
    pub importance: String,
    pub tips: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SleepPlan {
    pub title: String,
    pub hours: String,
    pub importance: String,
    pub tips: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityPlan {
    pub title: String,
    pub duration: String,
    pub types: Vec<String>,
    pub benefits: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyPlan {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl WeeklyPlan {
    pub const DAYS: [&'static str; 7] = [
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ];

    /// Goals in weekday order, paired with the weekday key.
    pub fn days(&self) -> [(&'static str, &str); 7] {
        [
            ("monday", self.monday.as_str()),
            ("tuesday", self.tuesday.as_str()),
            ("wednesday", self.wednesday.as_str()),
            ("thursday", self.thursday.as_str()),
            ("friday", self.friday.as_str()),
            ("saturday", self.saturday.as_str()),
            ("sunday", self.sunday.as_str()),
        ]
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Generic guidance shown whenever the completion service cannot deliver.
///
/// It does not depend on the BMI category, so every failed request in a run
/// gets the same record.
pub fn fallback_guidance() -> GuidanceRecord {
    GuidanceRecord {
        explanation: "During adolescence your body goes through rapid growth and development. \
            Growth spurts, hormonal changes and rising nutrient needs mean that balanced meals, \
            enough water and good rest all support healthy changes."
            .to_string(),
        nutrition: NutritionPlan {
            title: "Nutrition Plan".to_string(),
            calories: "2000-2500 calories daily".to_string(),
            foods_to_eat: strings(&[
                "Whole grains",
                "Lean proteins",
                "Colorful vegetables",
                "Fresh fruits",
                "Dairy or alternatives",
            ]),
            foods_to_limit: strings(&["Sugary drinks", "Processed snacks", "Fast food"]),
            meal_timing: "Eat 3 balanced meals plus 1-2 healthy snacks".to_string(),
            details: "Focus on whole, nutrient-dense foods to support growth and development."
                .to_string(),
        },
        hydration: HydrationPlan {
            title: "Hydration Guidelines".to_string(),
            daily_amount: "8-10 cups (2-2.5 liters)".to_string(),
            importance: "Water is essential for cellular functions and nutrient transport"
                .to_string(),
            tips: strings(&[
                "Carry a water bottle",
                "Drink water with meals",
                "Choose water over sugary drinks",
            ]),
        },
        sleep: SleepPlan {
            title: "Sleep Recommendations".to_string(),
            hours: "8-10 hours nightly".to_string(),
            importance: "Growth hormone is released during deep sleep".to_string(),
            tips: strings(&[
                "Keep consistent bedtime",
                "Avoid screens before bed",
                "Create a dark, cool room",
            ]),
        },
        activity: ActivityPlan {
            title: "Physical Activity".to_string(),
            duration: "60 minutes daily".to_string(),
            types: strings(&["Walking", "Sports", "Swimming", "Dancing", "Cycling"]),
            benefits:
                "Strengthens bones, improves cardiovascular health, supports mental wellbeing"
                    .to_string(),
        },
        weekly_plan: WeeklyPlan {
            monday: "Start the week with a nutritious breakfast and 30 minutes of activity"
                .to_string(),
            tuesday: "Focus on hydration - track your water intake today".to_string(),
            wednesday: "Try a new healthy recipe or vegetable".to_string(),
            thursday: "Get to bed 30 minutes earlier than usual".to_string(),
            friday: "Review your week's progress and celebrate small wins".to_string(),
            saturday: "Do a fun physical activity you enjoy".to_string(),
            sunday: "Meal prep healthy snacks for the week ahead".to_string(),
        },
    }
}
