use std::collections::HashMap;

use log::info;

use crate::assignment::AssignedFood;
use crate::models::{EnrichedRecord, NutritionRecord, SessionRecord};

/// Venstre-join av økter mot næringstabellen på matnavn, deretter droppes
/// rader der oppslaget ikke løste kalorier. Ren funksjon: samme input gir
/// identisk output; tilfeldigheten ligger oppstrøms i assign_foods og må
/// være seedet der.
pub fn merge(
    sessions: &[SessionRecord],
    assignments: &[AssignedFood],
    nutrition: &[NutritionRecord],
) -> Vec<EnrichedRecord> {
    // Kontrakt: én tilordning per økt, i samme rekkefølge
    debug_assert_eq!(sessions.len(), assignments.len());

    let by_name: HashMap<&str, &NutritionRecord> = nutrition
        .iter()
        .map(|rec| (rec.food.as_str(), rec))
        .collect();

    let mut enriched = Vec::with_capacity(sessions.len());
    for (session, assigned) in sessions.iter().zip(assignments) {
        let Some(rec) = by_name.get(assigned.food) else {
            continue;
        };
        // Tabellen fra build_nutrition_table har alltid kalorier; porten står
        // her også for kallere som joiner rå records direkte.
        if rec.calories.is_none() {
            continue;
        }
        enriched.push(EnrichedRecord {
            session: session.clone(),
            food: assigned.food.to_string(),
            category: assigned.category,
            nutrition: (*rec).clone(),
        });
    }

    info!(
        "merged {} of {} sessions against the nutrition table",
        enriched.len(),
        sessions.len()
    );
    enriched
}
