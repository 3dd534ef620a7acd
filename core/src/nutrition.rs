//! Batch-orkestrering av næringsoppslag: én henting per katalognavn,
//! kalorifilter, dedup og avledede felter.

use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};

use crate::models::{FoodGroup, NutritionRecord};
use crate::nutrition_api::FoodMatch;

/// Sømmen mellom orkestrering og HTTP. Prod: FdcClient.
/// Tester bruker fabrikkerte providere.
pub trait NutritionProvider {
    /// Ett søk mot den eksterne katalogen, maks ett treff.
    /// None dekker både transportfeil, ikke-2xx og tom treffliste.
    fn lookup(&self, food: &str) -> Option<FoodMatch>;
}

/// De fem feltene vi henter ut, ved eksakt navnematch mot FDC.
pub const NUTRIENT_ENERGY: &str = "Energy";
pub const NUTRIENT_PROTEIN: &str = "Protein";
pub const NUTRIENT_FAT: &str = "Total lipid (fat)";
pub const NUTRIENT_CARBS: &str = "Carbohydrate, by difference";
pub const NUTRIENT_FIBER: &str = "Fiber, total dietary";

/// Nøyaktig ett oppslag per navn. Feil absorberes lokalt: resultatet har
/// alltid navnet satt, med alle næringsfelter manglende i verste fall.
pub fn fetch_food(provider: &dyn NutritionProvider, food: &str) -> NutritionRecord {
    let mut rec = NutritionRecord::missing(food);

    let Some(m) = provider.lookup(food) else {
        warn!("no nutrition data resolved for {food:?}");
        return rec;
    };

    rec.serving_size = m.serving_size;
    rec.serving_unit = m.serving_size_unit;

    for entry in &m.food_nutrients {
        // Mapping fra næringsnavn til målfelt. Dukker samme navn opp flere
        // ganger vinner siste forekomst – eksplisitt tie-break, testet.
        let slot = match entry.name.as_str() {
            NUTRIENT_ENERGY => &mut rec.calories,
            NUTRIENT_PROTEIN => &mut rec.protein_g,
            NUTRIENT_FAT => &mut rec.fat_g,
            NUTRIENT_CARBS => &mut rec.carbs_g,
            NUTRIENT_FIBER => &mut rec.fiber_g,
            _ => continue,
        };
        *slot = entry.value;
    }

    rec
}

/// Sekvensiell batch over katalogen, i katalogrekkefølge. Memoisering per
/// kjøring: et gjentatt navn utløser ikke et nytt API-kall. Ingen persistens.
pub fn fetch_catalog(provider: &dyn NutritionProvider, foods: &[&str]) -> Vec<NutritionRecord> {
    let mut memo: HashMap<String, NutritionRecord> = HashMap::new();
    let mut records = Vec::with_capacity(foods.len());

    for &food in foods {
        let rec = match memo.get(food) {
            Some(hit) => {
                debug!("memoized nutrition for {food:?}");
                hit.clone()
            }
            None => {
                let fetched = fetch_food(provider, food);
                memo.insert(food.to_string(), fetched.clone());
                fetched
            }
        };
        records.push(rec);
    }

    info!("fetched nutrition for {} catalog entries", records.len());
    records
}

/// Kvalitetsport + avledning:
/// 1) dropp records uten kalorier (bærende felt, raden er ubrukelig uten)
/// 2) dedup på navn, første forekomst vinner
/// 3) protein-ratio, kaloritetthet og matgruppe
pub fn build_nutrition_table(records: Vec<NutritionRecord>) -> Vec<NutritionRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut table = Vec::new();

    for mut rec in records {
        if rec.calories.is_none() {
            debug!("dropping {:?}: calories unresolved", rec.food);
            continue;
        }
        if !seen.insert(rec.food.clone()) {
            continue;
        }

        rec.protein_ratio = protein_ratio(rec.protein_g, rec.fat_g, rec.carbs_g);
        rec.calorie_density =
            calorie_density(rec.calories, rec.serving_size, rec.serving_unit.as_deref());
        rec.food_group = Some(classify_food_group(
            rec.protein_ratio,
            rec.carbs_g,
            rec.fat_g,
        ));
        table.push(rec);
    }

    info!("nutrition table holds {} foods after calories filter", table.len());
    table
}

/// protein / (protein + fett + karbo). Udefinert hvis en komponent mangler
/// eller nevneren er 0.
pub fn protein_ratio(protein: Option<f64>, fat: Option<f64>, carbs: Option<f64>) -> Option<f64> {
    let (p, f, c) = (protein?, fat?, carbs?);
    let total = p + f + c;
    if total > 0.0 {
        Some(p / total)
    } else {
        None
    }
}

/// kcal per 100 g. Udefinert for ikke-gram-serveringer.
pub fn calorie_density(
    calories: Option<f64>,
    serving_size: Option<f64>,
    serving_unit: Option<&str>,
) -> Option<f64> {
    let cal = calories?;
    let size = serving_size?;
    // FDC oppgir gram-serveringer som "g" eller "GRM"
    match serving_unit? {
        "g" | "G" | "GRM" if size > 0.0 => Some(cal / size * 100.0),
        _ => None,
    }
}

/// Presedensrekkefølgen er en del av kontrakten: protein sjekkes før karbo,
/// karbo før fett. Alle terskler er strengt `>`; manglende operand feiler testen.
pub fn classify_food_group(
    protein_ratio: Option<f64>,
    carbs_g: Option<f64>,
    fat_g: Option<f64>,
) -> FoodGroup {
    if protein_ratio.is_some_and(|r| r > 0.4) {
        FoodGroup::HighProtein
    } else if carbs_g.is_some_and(|c| c > 50.0) {
        FoodGroup::HighCarb
    } else if fat_g.is_some_and(|f| f > 30.0) {
        FoodGroup::HighFat
    } else {
        FoodGroup::Balanced
    }
}
