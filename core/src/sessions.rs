use std::io::Read;

use log::{info, warn};
use serde::Deserialize;

use crate::error::FuelError;
use crate::models::{age_group, bmi_class, SessionRecord, WorkoutType};

/// Råkolonner slik de står i det publiserte gym-datasettet.
/// Øvrige kolonner (Gender, Water_Intake osv.) ignoreres av csv/serde.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Age")]
    age: f64,
    #[serde(rename = "BMI")]
    bmi: f64,
    #[serde(rename = "Session_Duration (hours)")]
    duration_h: f64,
    #[serde(rename = "Calories_Burned")]
    calories_burned: f64,
    #[serde(rename = "Max_BPM")]
    max_bpm: f64,
    #[serde(rename = "Avg_BPM")]
    avg_bpm: f64,
    #[serde(rename = "Resting_BPM")]
    resting_bpm: f64,
    #[serde(rename = "Workout_Type")]
    workout_type: String,
}

impl RawRow {
    /// Avledede felter beregnes her og bare her (én gang, ved innlasting).
    fn into_session(self) -> Result<SessionRecord, FuelError> {
        let workout_type = WorkoutType::from_label(&self.workout_type)
            .ok_or_else(|| FuelError::UnknownWorkoutType(self.workout_type.clone()))?;

        let calories_per_hour = self.calories_burned / self.duration_h;
        let efficiency_ratio = calories_per_hour / self.avg_bpm;

        Ok(SessionRecord {
            age: self.age,
            bmi: self.bmi,
            duration_h: self.duration_h,
            calories_burned: self.calories_burned,
            max_hr: self.max_bpm,
            avg_hr: self.avg_bpm,
            resting_hr: self.resting_bpm,
            workout_type,
            calories_per_hour,
            efficiency_ratio,
            hr_reserve: self.max_bpm - self.resting_bpm,
            bmi_class: bmi_class(self.bmi),
            age_group: age_group(self.age),
        })
    }
}

/// Leser økter fra CSV. Rader med ikke-positiv varighet eller puls kan ikke
/// gi meningsfulle ratioer og droppes med en warn, de stopper ikke lasten.
pub fn load_sessions<R: Read>(reader: R) -> Result<Vec<SessionRecord>, FuelError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut sessions = Vec::new();
    let mut dropped = 0usize;

    for row in csv_reader.deserialize::<RawRow>() {
        let raw = row?;
        if raw.duration_h <= 0.0 || raw.avg_bpm <= 0.0 {
            dropped += 1;
            continue;
        }
        sessions.push(raw.into_session()?);
    }

    if dropped > 0 {
        warn!("dropped {dropped} rows with non-positive duration or heart rate");
    }
    info!("loaded {} sessions", sessions.len());
    Ok(sessions)
}

/// Henter det eksternt hostede datasettet én gang ved oppstart.
pub fn fetch_sessions(url: &str) -> Result<Vec<SessionRecord>, FuelError> {
    let resp = ureq::get(url)
        .timeout(std::time::Duration::from_secs(30))
        .call()
        .map_err(|e| FuelError::DatasetFetch(e.to_string()))?;
    load_sessions(resp.into_reader())
}
