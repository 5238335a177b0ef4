use serde_json::Value;

use crate::error::{PlannerError, Result};
use crate::models::MealPlan;

/// Pull the meal plan out of a text-generation response.
///
/// Accepts `[{"generated_text": ...}]`, `{"generated_text": ...}`, a bare
/// string, or an already structured `{"meals": [...]}` object. Inside the
/// text, the span from the first `{` to the last `}` is parsed.
pub fn extract_plan(response: &Value) -> Result<MealPlan> {
    extract_plan_for(response, "")
}

/// Like `extract_plan`, dropping `prompt` when the service echoes it back
/// ahead of the completion.
pub fn extract_plan_for(response: &Value, prompt: &str) -> Result<MealPlan> {
    if response.get("meals").is_some() {
        return serde_json::from_value(response.clone())
            .map_err(|e| PlannerError::MalformedResponse(e.to_string()));
    }

    let text = generated_text(response).ok_or_else(|| {
        PlannerError::MalformedResponse("response carries no generated text".to_string())
    })?;

    parse_plan_text(text.strip_prefix(prompt).unwrap_or(text))
}

fn generated_text(response: &Value) -> Option<&str> {
    response
        .get(0)
        .and_then(|first| first.get("generated_text"))
        .or_else(|| response.get("generated_text"))
        .unwrap_or(response)
        .as_str()
}

/// Parse a plan from free text that may wrap the JSON in prose.
pub fn parse_plan_text(text: &str) -> Result<MealPlan> {
    let candidate = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    };

    serde_json::from_str(candidate).map_err(|e| {
        tracing::warn!(error = %e, "generated text is not a meal plan");
        PlannerError::MalformedResponse(e.to_string())
    })
}
