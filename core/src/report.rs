//! Terminalrapporten. Ren presentasjon pluss orkestrering av analysene;
//! ingen egen tilstand. Tabellene er kjøre-artefakter, ikke et API.

use log::warn;
use ordered_float::OrderedFloat;

use crate::error::FuelError;
use crate::models::{EnrichedRecord, FoodGroup, NutritionRecord, SessionRecord, WorkoutType};
use crate::modeling::{fit_regression, fit_tree};
use crate::stats::{
    correlation_matrix, one_way_anova, pairwise_welch, summarize, CorrelationMatrix,
};

/// Kjører hele analyselaget over ferdig berikede data og printer rapporten.
/// For få rader til modellene er en advarsel, ikke en fatal feil.
pub fn run_report(
    sessions: &[SessionRecord],
    nutrition: &[NutritionRecord],
    enriched: &[EnrichedRecord],
) -> Result<(), FuelError> {
    print_dataset_summary(sessions);
    print_nutrition_rankings(nutrition);
    print_group_summaries(enriched);

    // Grupper med < 2 rader kan verken bidra til ANOVA eller post-hoc
    let groups: Vec<(String, Vec<f64>)> = efficiency_by_workout(enriched)
        .into_iter()
        .filter(|(_, values)| values.len() >= 2)
        .collect();

    match one_way_anova(&groups.iter().map(|(_, v)| v.clone()).collect::<Vec<_>>()) {
        Ok(anova) => {
            println!("\n--- One-way ANOVA: efficiency ~ workout type ---");
            println!(
                "F({:.0}, {:.0}) = {:.3}, p = {:.4}",
                anova.df_between, anova.df_within, anova.f_stat, anova.p_value
            );
        }
        Err(e) => warn!("skipping ANOVA: {e}"),
    }

    match pairwise_welch(&groups) {
        Ok(comparisons) => {
            println!("\n--- Post-hoc: pairwise Welch t-tests (Bonferroni) ---");
            for c in &comparisons {
                println!(
                    "{:>8} vs {:<8} diff={:>8.3}  t={:>7.3}  p={:.4}  p_adj={:.4}",
                    c.a, c.b, c.mean_diff, c.t_stat, c.p_raw, c.p_adjusted
                );
            }
        }
        Err(e) => warn!("skipping post-hoc comparison: {e}"),
    }

    print_correlations(&correlation_matrix(&numeric_columns(enriched)));

    match fit_regression(enriched) {
        Ok(reg) => {
            println!("\n--- Linear regression: efficiency ~ macronutrients ---");
            println!("n = {}, R² = {:.4}", reg.n, reg.r_squared);
            println!("intercept = {:.4}", reg.intercept);
            for (name, coef) in reg.feature_names.iter().zip(&reg.coefficients) {
                println!("{name:>12}: {coef:>9.5}");
            }
        }
        Err(e) => warn!("skipping regression: {e}"),
    }

    match fit_tree(enriched) {
        Ok(tree) => {
            println!("\n--- Decision tree: efficiency tercile ~ macronutrients ---");
            println!(
                "n = {}, depth = {}, leaves = {}, training accuracy = {:.1}%",
                tree.n,
                tree.depth,
                tree.num_leaves,
                tree.accuracy * 100.0
            );
            for (name, importance) in &tree.feature_importance {
                println!("{name:>12}: importance {importance:.4}");
            }
        }
        Err(e) => warn!("skipping decision tree: {e}"),
    }

    Ok(())
}

fn print_dataset_summary(sessions: &[SessionRecord]) {
    println!("--- Dataset ---");
    println!("{} sessions", sessions.len());
    for workout in WorkoutType::ALL {
        let eff: Vec<f64> = sessions
            .iter()
            .filter(|s| s.workout_type == workout)
            .map(|s| s.efficiency_ratio)
            .collect();
        let s = summarize(&eff);
        println!(
            "{:>8}: n={:<4} efficiency mean={:.3} std={:.3}",
            workout, s.n, s.mean, s.std
        );
    }
}

fn print_nutrition_rankings(nutrition: &[NutritionRecord]) {
    println!("\n--- Nutrition table ({} foods) ---", nutrition.len());

    let mut by_protein: Vec<&NutritionRecord> = nutrition
        .iter()
        .filter(|r| r.protein_ratio.is_some())
        .collect();
    by_protein.sort_by_key(|r| std::cmp::Reverse(OrderedFloat(r.protein_ratio.unwrap_or(0.0))));

    println!("top foods by protein ratio:");
    for rec in by_protein.iter().take(10) {
        println!(
            "{:>20}  ratio={:.3}  group={}",
            rec.food,
            rec.protein_ratio.unwrap_or(f64::NAN),
            rec.food_group.map_or("-", |g| g.as_str()),
        );
    }

    let mut by_density: Vec<&NutritionRecord> = nutrition
        .iter()
        .filter(|r| r.calorie_density.is_some())
        .collect();
    by_density.sort_by_key(|r| std::cmp::Reverse(OrderedFloat(r.calorie_density.unwrap_or(0.0))));

    println!("top foods by calorie density (kcal/100g):");
    for rec in by_density.iter().take(10) {
        println!(
            "{:>20}  {:.0} kcal/100g",
            rec.food,
            rec.calorie_density.unwrap_or(f64::NAN)
        );
    }

    println!("food group counts:");
    for group in [
        FoodGroup::HighProtein,
        FoodGroup::HighCarb,
        FoodGroup::HighFat,
        FoodGroup::Balanced,
    ] {
        let count = nutrition.iter().filter(|r| r.food_group == Some(group)).count();
        println!("{:>14}: {}", group.as_str(), count);
    }
}

fn print_group_summaries(enriched: &[EnrichedRecord]) {
    println!("\n--- Efficiency by pre-workout food group ---");
    for group in [
        FoodGroup::HighProtein,
        FoodGroup::HighCarb,
        FoodGroup::HighFat,
        FoodGroup::Balanced,
    ] {
        let eff: Vec<f64> = enriched
            .iter()
            .filter(|r| r.nutrition.food_group == Some(group))
            .map(|r| r.session.efficiency_ratio)
            .collect();
        let s = summarize(&eff);
        println!(
            "{:>14}: n={:<4} mean={:.3} std={:.3}",
            group.as_str(),
            s.n,
            s.mean,
            s.std
        );
    }
}

fn print_correlations(matrix: &CorrelationMatrix) {
    println!("\n--- Correlation matrix (pairwise complete) ---");
    print!("{:>18}", "");
    for label in &matrix.labels {
        print!("{label:>18}");
    }
    println!();
    for (label, row) in matrix.labels.iter().zip(&matrix.values) {
        print!("{label:>18}");
        for value in row {
            print!("{value:>18.3}");
        }
        println!();
    }
}

fn efficiency_by_workout(enriched: &[EnrichedRecord]) -> Vec<(String, Vec<f64>)> {
    WorkoutType::ALL
        .iter()
        .map(|&workout| {
            let values: Vec<f64> = enriched
                .iter()
                .filter(|r| r.session.workout_type == workout)
                .map(|r| r.session.efficiency_ratio)
                .collect();
            (workout.to_string(), values)
        })
        .collect()
}

/// Numeriske kolonner for korrelasjonsmatrisen. Øktfeltene finnes alltid,
/// næringsfeltene er nullable og håndteres parvis-komplett i stats.
fn numeric_columns(enriched: &[EnrichedRecord]) -> Vec<(String, Vec<Option<f64>>)> {
    let col = |f: &dyn Fn(&EnrichedRecord) -> Option<f64>| -> Vec<Option<f64>> {
        enriched.iter().map(f).collect()
    };
    vec![
        (
            "efficiency".into(),
            col(&|r| Some(r.session.efficiency_ratio)),
        ),
        (
            "kcal_per_hour".into(),
            col(&|r| Some(r.session.calories_per_hour)),
        ),
        ("hr_reserve".into(), col(&|r| Some(r.session.hr_reserve))),
        ("calories".into(), col(&|r| r.nutrition.calories)),
        ("protein_g".into(), col(&|r| r.nutrition.protein_g)),
        ("fat_g".into(), col(&|r| r.nutrition.fat_g)),
        ("carbs_g".into(), col(&|r| r.nutrition.carbs_g)),
        ("fiber_g".into(), col(&|r| r.nutrition.fiber_g)),
        ("protein_ratio".into(), col(&|r| r.nutrition.protein_ratio)),
    ]
}
