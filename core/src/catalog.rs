//! Fast katalog over pre-workout matvarer: fire disjunkte kandidatlister
//! (én per treningstype) og elleve kategorilister med "other" som fallback.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::WorkoutType;

/// Proteinrike valg før styrkeøkter.
pub const STRENGTH_FOODS: &[&str] = &[
    "chicken breast",
    "turkey breast",
    "lean beef",
    "salmon",
    "tuna",
    "shrimp",
    "eggs",
    "greek yogurt",
    "cottage cheese",
    "whey protein",
    "tofu",
    "lentils",
];

/// Raske karbohydrater + litt protein før intervaller.
pub const HIIT_FOODS: &[&str] = &[
    "banana",
    "oatmeal",
    "peanut butter",
    "protein bar",
    "rice cakes",
    "apple",
    "honey",
    "raisins",
    "white rice",
    "bagel",
    "chocolate milk",
    "dates",
];

/// Langsomme karbohydrater før kondisjonsøkter.
pub const CARDIO_FOODS: &[&str] = &[
    "brown rice",
    "sweet potato",
    "whole wheat bread",
    "pasta",
    "quinoa",
    "orange",
    "berries",
    "granola",
    "grapes",
    "mango",
    "pretzels",
    "melon",
];

/// Lette valg før yoga.
pub const YOGA_FOODS: &[&str] = &[
    "almonds",
    "walnuts",
    "avocado",
    "hummus",
    "carrots",
    "celery",
    "cucumber",
    "spinach",
    "chia seeds",
    "dark chocolate",
    "kefir",
    "kale",
];

pub fn candidates_for(workout: WorkoutType) -> &'static [&'static str] {
    match workout {
        WorkoutType::Strength => STRENGTH_FOODS,
        WorkoutType::Hiit => HIIT_FOODS,
        WorkoutType::Cardio => CARDIO_FOODS,
        WorkoutType::Yoga => YOGA_FOODS,
    }
}

/// Hele katalogen = de fire kandidatlistene etter hverandre.
pub static FOOD_CATALOG: Lazy<Vec<&'static str>> = Lazy::new(|| {
    STRENGTH_FOODS
        .iter()
        .chain(HIIT_FOODS)
        .chain(CARDIO_FOODS)
        .chain(YOGA_FOODS)
        .copied()
        .collect()
});

/// Elleve kategorier i fast rekkefølge. Hver matvare skal stå i nøyaktig
/// én liste; validate_categories() håndhever dette ved oppstart.
pub const CATEGORY_LISTS: &[(&str, &[&str])] = &[
    ("seafood", &["salmon", "tuna", "shrimp"]),
    ("poultry", &["chicken breast", "turkey breast"]),
    ("red meat", &["lean beef"]),
    (
        "dairy",
        &["greek yogurt", "cottage cheese", "chocolate milk", "kefir"],
    ),
    ("eggs", &["eggs"]),
    ("plant protein", &["tofu", "lentils", "hummus"]),
    (
        "whole grains",
        &[
            "oatmeal",
            "brown rice",
            "white rice",
            "quinoa",
            "whole wheat bread",
            "pasta",
            "bagel",
            "rice cakes",
            "granola",
            "pretzels",
        ],
    ),
    (
        "fruits",
        &[
            "banana", "apple", "orange", "berries", "raisins", "dates", "grapes", "mango",
            "melon",
        ],
    ),
    (
        "vegetables",
        &["sweet potato", "carrots", "celery", "cucumber", "spinach", "kale"],
    ),
    (
        "healthy fats",
        &["almonds", "walnuts", "avocado", "peanut butter", "chia seeds"],
    ),
    (
        "supplemental",
        &["whey protein", "protein bar", "honey", "dark chocolate"],
    ),
];

static CATEGORY_BY_FOOD: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (category, foods) in CATEGORY_LISTS {
        for food in *foods {
            // Ved duplikat vinner første liste; validate_categories avdekker det.
            map.entry(*food).or_insert(*category);
        }
    }
    map
});

/// Kategori for en matvare, "other" hvis den ikke står i noen liste.
pub fn category_for(food: &str) -> &'static str {
    CATEGORY_BY_FOOD.get(food).copied().unwrap_or("other")
}

/// Invariant: ingen matvare i to kategorilister, og kandidatlistene er disjunkte.
pub fn validate_categories() -> Result<(), String> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (category, foods) in CATEGORY_LISTS {
        for food in *foods {
            if let Some(prev) = seen.insert(*food, *category) {
                return Err(format!(
                    "{food:?} listed under both {prev:?} and {category:?}"
                ));
            }
        }
    }

    let mut catalog_seen: HashMap<&str, WorkoutType> = HashMap::new();
    for workout in WorkoutType::ALL {
        for food in candidates_for(workout) {
            if let Some(prev) = catalog_seen.insert(*food, workout) {
                return Err(format!(
                    "{food:?} is a candidate for both {prev} and {workout}"
                ));
            }
        }
    }
    Ok(())
}
