use crate::error::{PlannerError, Result};
use crate::models::{AggregatedIngredient, MealPlan};
use crate::shopping::aggregate::try_aggregate;

/// The aggregated shopping list together with each item's checkbox state.
///
/// Built once per loaded plan. Toggling only touches `checked`; a new plan
/// means a new list.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<AggregatedIngredient>,
}

impl ShoppingList {
    pub fn new(items: Vec<AggregatedIngredient>) -> Self {
        Self { items }
    }

    pub fn from_plan(plan: &MealPlan) -> Result<Self> {
        Ok(Self::new(try_aggregate(&plan.meals)?))
    }

    pub fn items(&self) -> &[AggregatedIngredient] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&AggregatedIngredient> {
        self.items.get(index)
    }

    /// Flip the checkbox at `index` and return its new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(PlannerError::IndexOutOfRange { index, len })?;
        item.checked = !item.checked;
        Ok(item.checked)
    }

    /// Apply a full selection: listed indices become checked, the rest unchecked.
    pub fn apply_selection(&mut self, selected: &[usize]) -> Result<()> {
        let len = self.items.len();
        if let Some(&index) = selected.iter().find(|&&i| i >= len) {
            return Err(PlannerError::IndexOutOfRange { index, len });
        }
        for (i, item) in self.items.iter_mut().enumerate() {
            item.checked = selected.contains(&i);
        }
        Ok(())
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    /// Items still to buy.
    pub fn remaining(&self) -> Vec<&AggregatedIngredient> {
        self.items.iter().filter(|i| !i.checked).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, Meal};

    fn sample_list() -> ShoppingList {
        let plan = MealPlan::new(vec![Meal {
            ingredients: Some(vec![
                Ingredient::new("Rice", 200.0, "g"),
                Ingredient::new("Egg", 2.0, "pcs"),
                Ingredient::new("Spinach", 150.0, "g").with_department("Produce"),
            ]),
            ..Default::default()
        }]);
        ShoppingList::from_plan(&plan).unwrap()
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut list = sample_list();
        let before = list.items().to_vec();

        assert!(list.toggle(1).unwrap());
        assert!(!list.toggle(1).unwrap());
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_toggle_only_touches_target() {
        let mut list = sample_list();
        let before = list.items().to_vec();

        list.toggle(2).unwrap();

        for (i, (after, orig)) in list.items().iter().zip(&before).enumerate() {
            assert_eq!(after.name, orig.name);
            assert_eq!(after.quantity, orig.quantity);
            assert_eq!(after.unit, orig.unit);
            assert_eq!(after.department, orig.department);
            assert_eq!(after.checked, i == 2);
        }
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut list = sample_list();
        assert!(matches!(
            list.toggle(3),
            Err(PlannerError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(list.checked_count(), 0);
    }

    #[test]
    fn test_apply_selection() {
        let mut list = sample_list();
        list.toggle(0).unwrap();

        list.apply_selection(&[1, 2]).unwrap();
        assert!(!list.get(0).unwrap().checked);
        assert_eq!(list.checked_count(), 2);
        assert_eq!(list.remaining().len(), 1);

        assert!(list.apply_selection(&[7]).is_err());
        assert_eq!(list.checked_count(), 2);
    }
}
