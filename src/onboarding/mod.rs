mod wizard;

pub use wizard::{
    Advance, Goals, Health, Lifestyle, OnboardingData, OnboardingStep, OnboardingWizard,
    PersonalInfo,
};
