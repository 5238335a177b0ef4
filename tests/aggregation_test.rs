#[macro_use]
extern crate assert_float_eq;

use meal_planner_rs::models::{Ingredient, Meal, MealPlan};
use meal_planner_rs::shopping::{aggregate_ingredients, ShoppingList};

fn meal_with(ingredients: Vec<Ingredient>) -> Meal {
    Meal {
        ingredients: Some(ingredients),
        ..Default::default()
    }
}

#[test]
fn test_rice_and_egg_scenario() {
    let plan: MealPlan = serde_json::from_str(
        r#"{"meals": [
            {"ingredients": [{"name": "Rice", "quantity": 200, "unit": "g"}]},
            {"ingredients": [{"name": "Rice", "quantity": 100, "unit": "g"},
                             {"name": "Egg", "quantity": 2, "unit": "pcs"}]}
        ]}"#,
    )
    .unwrap();

    let items = aggregate_ingredients(&plan.meals);
    assert_eq!(items.len(), 2);

    let rice = items.iter().find(|i| i.name == "Rice").unwrap();
    assert_float_absolute_eq!(rice.quantity, 300.0, 1e-9);
    assert_eq!(rice.unit, "g");
    assert!(!rice.checked);

    let egg = items.iter().find(|i| i.name == "Egg").unwrap();
    assert_float_absolute_eq!(egg.quantity, 2.0, 1e-9);
    assert_eq!(egg.unit, "pcs");
    assert!(!egg.checked);
}

#[test]
fn test_department_unset_and_empty_merge() {
    let meals = vec![
        meal_with(vec![Ingredient::new("Flour", 250.0, "g")]),
        meal_with(vec![Ingredient::new("Flour", 250.0, "g").with_department("")]),
        meal_with(vec![Ingredient::new("Flour", 100.0, "g").with_department("Bakery")]),
    ];

    let items = aggregate_ingredients(&meals);
    assert_eq!(items.len(), 2);
    assert_float_absolute_eq!(items[0].quantity, 500.0, 1e-9);
    assert_eq!(items[1].department.as_deref(), Some("Bakery"));
}

#[test]
fn test_fractional_quantities_sum() {
    let meals = vec![
        meal_with(vec![Ingredient::new("Olive oil", 0.1, "l")]),
        meal_with(vec![Ingredient::new("Olive oil", 0.2, "l")]),
        meal_with(vec![Ingredient::new("Olive oil", 0.05, "l")]),
    ];

    let items = aggregate_ingredients(&meals);
    assert_eq!(items.len(), 1);
    assert_float_absolute_eq!(items[0].quantity, 0.35, 1e-9);
}

#[test]
fn test_every_ingredient_counted_once() {
    let meals = vec![
        meal_with(vec![]),
        Meal::default(),
        meal_with(vec![
            Ingredient::new("Carrot", 1.0, "pcs"),
            Ingredient::new("Carrot", 1.0, "pcs"),
            Ingredient::new("Carrot", 1.0, "pcs"),
        ]),
        meal_with(vec![Ingredient::new("Onion", 1.0, "pcs")]),
    ];

    let items = aggregate_ingredients(&meals);
    let total: f64 = items.iter().map(|i| i.quantity).sum();
    assert_eq!(items.len(), 2);
    assert_float_absolute_eq!(total, 4.0, 1e-9);
}

#[test]
fn test_order_is_first_seen() {
    let meals = vec![
        meal_with(vec![
            Ingredient::new("Basil", 1.0, "bunch"),
            Ingredient::new("Pasta", 100.0, "g"),
        ]),
        meal_with(vec![
            Ingredient::new("Garlic", 2.0, "cloves"),
            Ingredient::new("Basil", 1.0, "bunch"),
        ]),
    ];

    let names: Vec<String> = aggregate_ingredients(&meals)
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, vec!["Basil", "Pasta", "Garlic"]);
}

#[test]
fn test_toggle_does_not_reaggregate() {
    let plan = MealPlan::new(vec![
        meal_with(vec![Ingredient::new("Rice", 200.0, "g")]),
        meal_with(vec![Ingredient::new("Rice", 100.0, "g")]),
    ]);
    let mut list = ShoppingList::from_plan(&plan).unwrap();

    list.toggle(0).unwrap();
    assert_eq!(list.len(), 1);
    assert_float_absolute_eq!(list.items()[0].quantity, 300.0, 1e-9);
    assert!(list.items()[0].checked);
}
