use serde::{Deserialize, Serialize};

/// Lukket sett med treningstyper. Label-casing følger datasettet
/// og må matche kandidatlistene i catalog.rs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    Strength,
    #[serde(rename = "HIIT")]
    Hiit,
    Cardio,
    Yoga,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 4] = [
        WorkoutType::Strength,
        WorkoutType::Hiit,
        WorkoutType::Cardio,
        WorkoutType::Yoga,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "Strength",
            WorkoutType::Hiit => "HIIT",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Yoga => "Yoga",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Strength" => Some(WorkoutType::Strength),
            "HIIT" => Some(WorkoutType::Hiit),
            "Cardio" => Some(WorkoutType::Cardio),
            "Yoga" => Some(WorkoutType::Yoga),
            _ => None,
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Én treningsøkt. Avledede felter beregnes én gang ved innlasting
/// og er rene funksjoner av råfeltene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub age: f64,             // år
    pub bmi: f64,             // kg/m²
    pub duration_h: f64,      // timer
    pub calories_burned: f64, // kcal
    pub max_hr: f64,          // bpm
    pub avg_hr: f64,          // bpm
    pub resting_hr: f64,      // bpm
    pub workout_type: WorkoutType,

    // Avledet ved innlasting
    pub calories_per_hour: f64,
    pub efficiency_ratio: f64, // kcal/time per gjennomsnittlig hjerteslag
    pub hr_reserve: f64,       // max - hvile
    pub bmi_class: &'static str,
    pub age_group: &'static str,
}

pub fn bmi_class(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "underweight"
    } else if bmi < 25.0 {
        "normal"
    } else if bmi < 30.0 {
        "overweight"
    } else {
        "obese"
    }
}

pub fn age_group(age: f64) -> &'static str {
    if age < 30.0 {
        "18-29"
    } else if age < 40.0 {
        "30-39"
    } else if age < 50.0 {
        "40-49"
    } else {
        "50+"
    }
}

/// Fire-veis klassifisering av matvarer etter makrofordeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodGroup {
    HighProtein,
    HighCarb,
    HighFat,
    Balanced,
}

impl FoodGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodGroup::HighProtein => "high protein",
            FoodGroup::HighCarb => "high carb",
            FoodGroup::HighFat => "high fat",
            FoodGroup::Balanced => "balanced",
        }
    }
}

impl std::fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Næringsinnhold for én matvare fra katalogen. Hvert næringsfelt er
/// uavhengig nullable; manglende verdier defaultes ALDRI til 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub food: String,
    pub calories: Option<f64>, // kcal per serving
    pub protein_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub serving_size: Option<f64>,
    pub serving_unit: Option<String>,

    // Avledet i build_nutrition_table
    pub protein_ratio: Option<f64>,   // protein / (protein + fett + karbo)
    pub calorie_density: Option<f64>, // kcal per 100 g
    pub food_group: Option<FoodGroup>,
}

impl NutritionRecord {
    /// Record der alle næringsfelter mangler. Navnet er alltid satt.
    pub fn missing(food: &str) -> Self {
        Self {
            food: food.to_string(),
            calories: None,
            protein_g: None,
            fat_g: None,
            carbs_g: None,
            fiber_g: None,
            serving_size: None,
            serving_unit: None,
            protein_ratio: None,
            calorie_density: None,
            food_group: None,
        }
    }
}

/// Økt + tilordnet pre-workout mat + oppslått næringsinnhold.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedRecord {
    pub session: SessionRecord,
    pub food: String,
    pub category: &'static str,
    pub nutrition: NutritionRecord,
}
