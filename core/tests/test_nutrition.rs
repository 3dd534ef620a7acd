// core/tests/test_nutrition.rs
use std::cell::RefCell;
use std::collections::HashMap;

use fuelmetrics_core::nutrition::{
    build_nutrition_table, fetch_catalog, fetch_food, NutritionProvider,
};
use fuelmetrics_core::nutrition_api::{FoodMatch, FoodNutrient};
use fuelmetrics_core::{FoodGroup, NutritionRecord};

/// Fabrikkert provider: kjente svar per navn, teller kall.
/// None dekker både tom treffliste og transportfeil (samme kontrakt).
struct FakeProvider {
    responses: HashMap<&'static str, Option<FoodMatch>>,
    calls: RefCell<Vec<String>>,
}

impl FakeProvider {
    fn new(responses: Vec<(&'static str, Option<FoodMatch>)>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl NutritionProvider for FakeProvider {
    fn lookup(&self, food: &str) -> Option<FoodMatch> {
        self.calls.borrow_mut().push(food.to_string());
        self.responses.get(food).cloned().flatten()
    }
}

fn nutrient(name: &str, value: f64) -> FoodNutrient {
    FoodNutrient {
        name: name.to_string(),
        value: Some(value),
    }
}

fn chicken_match() -> FoodMatch {
    FoodMatch {
        description: "Chicken, broilers or fryers, breast, meat only".to_string(),
        serving_size: Some(100.0),
        serving_size_unit: Some("g".to_string()),
        food_nutrients: vec![
            nutrient("Energy", 165.0),
            nutrient("Protein", 31.0),
            nutrient("Total lipid (fat)", 3.6),
            nutrient("Carbohydrate, by difference", 0.0),
            nutrient("Fiber, total dietary", 0.0),
            // Skal ignoreres
            nutrient("Sodium, Na", 74.0),
        ],
    }
}

#[test]
fn fetch_food_populates_all_five_fields() {
    let provider = FakeProvider::new(vec![("chicken breast", Some(chicken_match()))]);
    let rec = fetch_food(&provider, "chicken breast");

    assert_eq!(rec.food, "chicken breast");
    assert_eq!(rec.calories, Some(165.0));
    assert_eq!(rec.protein_g, Some(31.0));
    assert_eq!(rec.fat_g, Some(3.6));
    assert_eq!(rec.carbs_g, Some(0.0));
    assert_eq!(rec.fiber_g, Some(0.0));
    assert_eq!(rec.serving_size, Some(100.0));
}

#[test]
fn fetch_food_failure_yields_all_missing_record_with_name() {
    let provider = FakeProvider::new(vec![("unicorn steak", None)]);
    let rec = fetch_food(&provider, "unicorn steak");

    assert_eq!(rec.food, "unicorn steak");
    assert!(rec.calories.is_none());
    assert!(rec.protein_g.is_none());
    assert!(rec.fat_g.is_none());
    assert!(rec.carbs_g.is_none());
    assert!(rec.fiber_g.is_none());
}

#[test]
fn fetch_food_missing_single_nutrient_is_localized() {
    let mut m = chicken_match();
    m.food_nutrients.retain(|n| n.name != "Fiber, total dietary");
    let provider = FakeProvider::new(vec![("chicken breast", Some(m))]);

    let rec = fetch_food(&provider, "chicken breast");
    assert!(rec.fiber_g.is_none());
    assert_eq!(rec.calories, Some(165.0));
    assert_eq!(rec.protein_g, Some(31.0));
}

#[test]
fn duplicate_nutrient_name_last_occurrence_wins() {
    let m = FoodMatch {
        description: "oddball".to_string(),
        serving_size: None,
        serving_size_unit: None,
        food_nutrients: vec![
            nutrient("Energy", 100.0),
            nutrient("Protein", 10.0),
            nutrient("Energy", 250.0),
        ],
    };
    let provider = FakeProvider::new(vec![("oddball", Some(m))]);

    let rec = fetch_food(&provider, "oddball");
    assert_eq!(rec.calories, Some(250.0));
    assert_eq!(rec.protein_g, Some(10.0));
}

#[test]
fn batch_of_three_yields_one_row_after_calories_filter() {
    // Én full match, én tom treffliste, én transportfeil => 1 rad i tabellen
    let provider = FakeProvider::new(vec![
        ("chicken breast", Some(chicken_match())),
        ("ghost food", None),
        ("flaky food", None),
    ]);
    let catalog = ["chicken breast", "ghost food", "flaky food"];

    let records = fetch_catalog(&provider, &catalog);
    assert_eq!(records.len(), 3, "one record per catalog name");
    assert!(records.iter().all(|r| !r.food.is_empty()));

    let table = build_nutrition_table(records);
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].food, "chicken breast");
    assert_eq!(table[0].food_group, Some(FoodGroup::HighProtein));
}

#[test]
fn calories_filter_matches_non_missing_calories_exactly() {
    let provider = FakeProvider::new(vec![
        ("chicken breast", Some(chicken_match())),
        ("ghost food", None),
    ]);
    let records = fetch_catalog(&provider, &["chicken breast", "ghost food"]);

    let with_calories: Vec<String> = records
        .iter()
        .filter(|r| r.calories.is_some())
        .map(|r| r.food.clone())
        .collect();
    let table: Vec<String> = build_nutrition_table(records)
        .into_iter()
        .map(|r| r.food)
        .collect();

    assert_eq!(with_calories, table);
}

#[test]
fn repeated_catalog_name_is_memoized_to_one_lookup() {
    let provider = FakeProvider::new(vec![("chicken breast", Some(chicken_match()))]);
    let records = fetch_catalog(&provider, &["chicken breast", "chicken breast"]);

    assert_eq!(records.len(), 2);
    assert_eq!(provider.call_count(), 1, "second occurrence must hit the memo");
}

#[test]
fn dedup_keeps_first_occurrence() {
    let mut first = NutritionRecord::missing("banana");
    first.calories = Some(89.0);
    let mut second = NutritionRecord::missing("banana");
    second.calories = Some(999.0);

    let table = build_nutrition_table(vec![first, second]);
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].calories, Some(89.0));
}
