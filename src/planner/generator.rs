use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use serde_json::{json, Value};

use crate::error::{PlannerError, Result};
use crate::models::{MealPlan, Profile};
use crate::planner::constants::{DEFAULT_MODEL_URL, DEFAULT_TIMEOUT_SECS};
use crate::planner::parse::extract_plan_for;
use crate::planner::prompt::build_prompt;

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub api_token: Option<String>,
    pub model_url: String,
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            model_url: DEFAULT_MODEL_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GeneratorConfig {
    /// Read `HF_TOKEN`, `MEALPLAN_MODEL_URL` and `MEALPLAN_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        cfg.api_token = lookup("HF_TOKEN").filter(|t| !t.trim().is_empty());
        if let Some(url) = lookup("MEALPLAN_MODEL_URL") {
            cfg.model_url = url;
        }
        if let Some(timeout) = lookup("MEALPLAN_TIMEOUT_SECS") {
            match timeout.trim().parse::<u64>() {
                Ok(parsed) => cfg.timeout = Duration::from_secs(parsed),
                Err(_) => tracing::warn!(
                    value = %timeout,
                    default_secs = DEFAULT_TIMEOUT_SECS,
                    "ignoring invalid MEALPLAN_TIMEOUT_SECS"
                ),
            }
        }
        cfg
    }
}

/// Anything that turns a prompt into a raw generation response.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<Value>;
}

/// Blocking client for a Hugging Face style inference endpoint.
pub struct HfClient {
    http: HttpClient,
    cfg: GeneratorConfig,
}

impl HfClient {
    pub fn new(cfg: GeneratorConfig) -> Result<Self> {
        let http = HttpClient::builder().timeout(cfg.timeout).build()?;
        Ok(Self { http, cfg })
    }
}

impl TextGenerator for HfClient {
    fn generate(&self, prompt: &str) -> Result<Value> {
        let token = self
            .cfg
            .api_token
            .as_deref()
            .ok_or(PlannerError::MissingApiKey)?;

        tracing::info!(url = %self.cfg.model_url, "requesting meal plan");
        let response = self
            .http
            .post(&self.cfg.model_url)
            .bearer_auth(token)
            .json(&json!({
                "inputs": prompt,
                "parameters": { "return_full_text": false }
            }))
            .send()?;

        let status = response.status();
        let body = response.text()?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "generation response");

        if !status.is_success() {
            return Err(PlannerError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).or_else(|_| Ok(Value::String(body)))
    }
}

/// Prompt the generator and parse its answer into a plan.
pub fn generate_weekly_plan<G: TextGenerator>(
    generator: &G,
    profile: Option<&Profile>,
) -> Result<MealPlan> {
    let prompt = build_prompt(profile);
    let response = generator.generate(&prompt)?;
    let plan = extract_plan_for(&response, &prompt)?;
    tracing::info!(meals = plan.meals.len(), "parsed generated plan");
    Ok(plan)
}
