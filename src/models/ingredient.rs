use serde::{Deserialize, Serialize};

/// One line item required by a single meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    pub quantity: f64,

    pub unit: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Composite identity used when merging ingredients across meals.
///
/// A missing department keys the same as an empty one. No case folding or
/// trimming is applied, so "Rice" and "rice" stay separate items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IngredientKey {
    pub name: String,
    pub unit: String,
    pub department: String,
}

impl Ingredient {
    pub fn new(name: &str, quantity: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            department: None,
        }
    }

    pub fn with_department(mut self, department: &str) -> Self {
        self.department = Some(department.to_string());
        self
    }

    /// Department with the missing case normalized to "".
    pub fn department_or_empty(&self) -> &str {
        self.department.as_deref().unwrap_or("")
    }

    pub fn key(&self) -> IngredientKey {
        IngredientKey {
            name: self.name.clone(),
            unit: self.unit.clone(),
            department: self.department_or_empty().to_string(),
        }
    }

    /// Finite and non-negative.
    pub fn has_valid_quantity(&self) -> bool {
        self.quantity.is_finite() && self.quantity >= 0.0
    }
}

/// A shopping list entry: an ingredient total plus the user's checkbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedIngredient {
    pub name: String,

    pub quantity: f64,

    pub unit: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[serde(default)]
    pub checked: bool,
}

impl AggregatedIngredient {
    /// Seed an entry from the first ingredient seen for its key.
    pub fn seed(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            quantity: ingredient.quantity,
            unit: ingredient.unit.clone(),
            department: ingredient.department.clone(),
            checked: false,
        }
    }

    /// Quantity and unit as shown next to the checkbox, e.g. "300 g".
    pub fn amount_label(&self) -> String {
        format!("{} {}", format_quantity(self.quantity), self.unit)
    }
}

/// Whole numbers print without a fractional part, others with at most two decimals.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0}", quantity)
    } else {
        let s = format!("{:.2}", quantity);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
