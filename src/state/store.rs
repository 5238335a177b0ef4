use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::MealPlan;

/// Week key for a plan generated now: today's date in UTC.
pub fn week_start_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// One stored weekly plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanRecord {
    pub id: u64,
    pub user_id: String,
    pub week_start: NaiveDate,
    pub meals_json: MealPlan,
}

/// All weekly plans, for every user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlanStore {
    records: Vec<MealPlanRecord>,
}

impl MealPlanStore {
    pub fn new(records: Vec<MealPlanRecord>) -> Self {
        Self { records }
    }

    /// The user's plan with the most recent week start.
    pub fn latest_for(&self, user_id: &str) -> Option<&MealPlanRecord> {
        self.records
            .iter()
            .filter(|r| r.user_id == user_id)
            .max_by_key(|r| r.week_start)
    }

    pub fn find(&self, user_id: &str, week_start: NaiveDate) -> Option<&MealPlanRecord> {
        self.records
            .iter()
            .find(|r| r.user_id == user_id && r.week_start == week_start)
    }

    /// Replace the plan for `(user_id, week_start)` or insert a new record.
    ///
    /// Returns `true` when a record was inserted.
    pub fn upsert(&mut self, user_id: &str, week_start: NaiveDate, plan: MealPlan) -> bool {
        if let Some(existing) = self
            .records
            .iter_mut()
            .find(|r| r.user_id == user_id && r.week_start == week_start)
        {
            existing.meals_json = plan;
            tracing::debug!(id = existing.id, %week_start, "replaced meal plan");
            return false;
        }

        let id = self.next_id();
        self.records.push(MealPlanRecord {
            id,
            user_id: user_id.to_string(),
            week_start,
            meals_json: plan,
        });
        tracing::debug!(id, %week_start, "inserted meal plan");
        true
    }

    pub fn records(&self) -> &[MealPlanRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_id(&self) -> u64 {
        self.records.iter().map(|r| r.id).max().map_or(1, |m| m + 1)
    }
}
