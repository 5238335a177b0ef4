use std::fmt;

use crate::models::{ActivityLevel, Allergy, Gender, Objective, Profile, TrainingFrequency};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    PersonalInfo,
    Lifestyle,
    Health,
    Family,
    Goals,
    Notifications,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 6] = [
        OnboardingStep::PersonalInfo,
        OnboardingStep::Lifestyle,
        OnboardingStep::Health,
        OnboardingStep::Family,
        OnboardingStep::Goals,
        OnboardingStep::Notifications,
    ];
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OnboardingStep::PersonalInfo => "Personal information",
            OnboardingStep::Lifestyle => "Lifestyle",
            OnboardingStep::Health => "Health & allergies",
            OnboardingStep::Family => "Family",
            OnboardingStep::Goals => "Goals",
            OnboardingStep::Notifications => "Notifications",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lifestyle {
    pub activity: Option<ActivityLevel>,
    pub frequency: Option<TrainingFrequency>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Health {
    pub allergies: Vec<Allergy>,
    pub pregnancy: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Goals {
    pub objective: Option<Objective>,
    pub meals: Vec<String>,
}

/// Answers collected so far, grouped by step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingData {
    pub personal_info: PersonalInfo,
    pub lifestyle: Lifestyle,
    pub health: Health,
    pub family_members: Option<u32>,
    pub goals: Goals,
    pub hydration_frequency: Option<u8>,
}

impl OnboardingData {
    pub fn into_profile(self) -> Profile {
        Profile {
            name: self.personal_info.name,
            gender: self.personal_info.gender,
            age: self.personal_info.age,
            weight_kg: self.personal_info.weight_kg,
            height_cm: self.personal_info.height_cm,
            activity: self.lifestyle.activity,
            activity_frequency: self.lifestyle.frequency,
            allergies: self.health.allergies,
            pregnancy: self.health.pregnancy,
            family_members: self.family_members,
            objective: self.goals.objective,
            meals: self.goals.meals,
            hydration_frequency: self.hydration_frequency,
        }
    }
}

impl From<Profile> for OnboardingData {
    fn from(profile: Profile) -> Self {
        Self {
            personal_info: PersonalInfo {
                name: profile.name,
                gender: profile.gender,
                age: profile.age,
                weight_kg: profile.weight_kg,
                height_cm: profile.height_cm,
            },
            lifestyle: Lifestyle {
                activity: profile.activity,
                frequency: profile.activity_frequency,
            },
            health: Health {
                allergies: profile.allergies,
                pregnancy: profile.pregnancy,
            },
            family_members: profile.family_members,
            goals: Goals {
                objective: profile.objective,
                meals: profile.meals,
            },
            hydration_frequency: profile.hydration_frequency,
        }
    }
}

/// Outcome of `OnboardingWizard::next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(OnboardingStep),
    Finished,
}

/// Step counter plus the draft it accumulates.
///
/// The draft is never persisted here; callers save `finish()`'s profile once
/// `next` reports `Finished`.
#[derive(Debug, Clone, Default)]
pub struct OnboardingWizard {
    current: usize,
    pub data: OnboardingData,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> OnboardingStep {
        OnboardingStep::ALL[self.current]
    }

    pub fn step_index(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        OnboardingStep::ALL.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.step_count()
    }

    pub fn progress_percent(&self) -> f64 {
        (self.current + 1) as f64 / self.step_count() as f64 * 100.0
    }

    pub fn next(&mut self) -> Advance {
        if self.is_last_step() {
            Advance::Finished
        } else {
            self.current += 1;
            Advance::Moved(self.current_step())
        }
    }

    /// Go back one step; stays on the first step. Answers are kept.
    pub fn back(&mut self) -> OnboardingStep {
        self.current = self.current.saturating_sub(1);
        self.current_step()
    }

    pub fn finish(self) -> Profile {
        self.data.into_profile()
    }
}
