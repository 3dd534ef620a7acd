use rand::Rng;
use serde::Serialize;

use crate::catalog::{candidates_for, category_for};
use crate::models::SessionRecord;

/// Tilordnet pre-workout mat for én økt, med kategori fra catalog.rs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignedFood {
    pub food: &'static str,
    pub category: &'static str,
}

/// Ett uavhengig, uniformt trekk med tilbakelegging per økt, fra listen som
/// matcher øktens treningstype. RNG-en injiseres: reproduserbarhet krever en
/// seedet generator hos kalleren (ChaCha8Rng i binæren og i tester), det er
/// ingen skjult default.
pub fn assign_foods<R: Rng + ?Sized>(
    sessions: &[SessionRecord],
    rng: &mut R,
) -> Vec<AssignedFood> {
    sessions
        .iter()
        .map(|session| {
            let candidates = candidates_for(session.workout_type);
            let food = candidates[rng.gen_range(0..candidates.len())];
            AssignedFood {
                food,
                category: category_for(food),
            }
        })
        .collect()
}
