use std::fs;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::models::Profile;
use crate::state::MealPlanStore;

/// Load the meal plan store. A missing file is an empty store.
pub fn load_store<P: AsRef<Path>>(path: P) -> Result<MealPlanStore> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "store file missing, starting empty");
        return Ok(MealPlanStore::default());
    }

    let content = fs::read_to_string(path)?;
    let store: MealPlanStore = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), records = store.len(), "loaded store");
    Ok(store)
}

/// Save the meal plan store as pretty JSON.
pub fn save_store<P: AsRef<Path>>(path: P, store: &MealPlanStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the onboarding profile.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PlannerError::ProfileNotFound);
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Like `load_profile`, but a missing file is `None`.
pub fn load_profile_opt<P: AsRef<Path>>(path: P) -> Result<Option<Profile>> {
    match load_profile(path) {
        Ok(profile) => Ok(Some(profile)),
        Err(PlannerError::ProfileNotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn save_profile<P: AsRef<Path>>(path: P, profile: &Profile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Allergy, Objective};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_store_from_json() {
        let json = r#"[
            {"id": 4, "user_id": "local", "week_start": "2026-10-12",
             "meals_json": {"meals": [{"title": "Oats", "ingredients": [{"name": "Oats", "quantity": 80, "unit": "g"}]}]}}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let store = load_store(file.path()).unwrap();
        let record = store.latest_for("local").unwrap();
        assert_eq!(record.id, 4);
        assert_eq!(record.meals_json.meals[0].ingredients().len(), 1);
    }

    #[test]
    fn test_missing_store_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = load_store(dir.path().join("nope.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_profile_roundtrip_and_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");

        assert!(matches!(load_profile(&path), Err(PlannerError::ProfileNotFound)));
        assert!(load_profile_opt(&path).unwrap().is_none());

        let profile = Profile {
            allergies: vec![Allergy::Nuts],
            objective: Some(Objective::Gain),
            ..Default::default()
        };
        save_profile(&path, &profile).unwrap();
        assert_eq!(load_profile(&path).unwrap(), profile);
    }
}
