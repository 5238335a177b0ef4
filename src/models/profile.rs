use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Intense,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Intense,
    ];
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light activity",
            ActivityLevel::Moderate => "Moderate activity",
            ActivityLevel::Intense => "Intense activity",
        })
    }
}

/// Workouts per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingFrequency {
    #[serde(rename = "1-2")]
    OneToTwo,
    #[serde(rename = "3-4")]
    ThreeToFour,
    #[serde(rename = "5+")]
    FiveOrMore,
}

impl TrainingFrequency {
    pub const ALL: [TrainingFrequency; 3] = [
        TrainingFrequency::OneToTwo,
        TrainingFrequency::ThreeToFour,
        TrainingFrequency::FiveOrMore,
    ];
}

impl fmt::Display for TrainingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrainingFrequency::OneToTwo => "1-2 times",
            TrainingFrequency::ThreeToFour => "3-4 times",
            TrainingFrequency::FiveOrMore => "5+ times",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Lose,
    Gain,
    Maintain,
}

impl Objective {
    pub const ALL: [Objective; 3] = [Objective::Lose, Objective::Gain, Objective::Maintain];
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Objective::Lose => "Lose weight",
            Objective::Gain => "Gain mass",
            Objective::Maintain => "Maintain",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Allergy {
    Gluten,
    Lactose,
    Nuts,
    Fish,
    Eggs,
    Soy,
}

impl Allergy {
    pub const ALL: [Allergy; 6] = [
        Allergy::Gluten,
        Allergy::Lactose,
        Allergy::Nuts,
        Allergy::Fish,
        Allergy::Eggs,
        Allergy::Soy,
    ];
}

impl fmt::Display for Allergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The saved result of onboarding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub age: Option<u32>,

    #[serde(default)]
    pub weight_kg: Option<f64>,

    #[serde(default)]
    pub height_cm: Option<f64>,

    #[serde(default)]
    pub activity: Option<ActivityLevel>,

    #[serde(default)]
    pub activity_frequency: Option<TrainingFrequency>,

    #[serde(default)]
    pub allergies: Vec<Allergy>,

    #[serde(default)]
    pub pregnancy: bool,

    #[serde(default)]
    pub family_members: Option<u32>,

    #[serde(default)]
    pub objective: Option<Objective>,

    /// Meal types to include, labels from `planner::MEAL_TYPES`.
    #[serde(default)]
    pub meals: Vec<String>,

    /// Hours between hydration reminders.
    #[serde(default)]
    pub hydration_frequency: Option<u8>,
}
