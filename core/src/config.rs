use std::env;
use std::time::Duration;

use crate::error::FuelError;

/// Publisert speil av gym-datasettet (lest én gang ved oppstart).
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/valakhorasani/gym-members-exercise-dataset/main/gym_members_exercise_tracking.csv";

/// Default-pacing holder seg godt under FDC-grensen på ~60 req/min.
pub const DEFAULT_PACE: Duration = Duration::from_millis(1100);

#[derive(Debug, Clone)]
pub enum DataSource {
    Url(String),
    Path(String),
}

/// All miljøtilstand leses her, én gang, og sendes videre eksplisitt.
/// Klient og tilordning tar konfigurasjon som vanlige argumenter.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub seed: u64,
    pub dataset: DataSource,
    pub pace: Option<Duration>,
}

impl Config {
    /// Manglende API-nøkkel er fatal FØR noe kall gjøres; ingen delvis kjøring.
    pub fn from_env() -> Result<Self, FuelError> {
        let api_key = env::var("FDC_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(FuelError::MissingApiKey)?;

        let seed = env::var("FUELMETRICS_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(42);

        let dataset = match env::var("FUELMETRICS_DATASET") {
            Ok(path) => DataSource::Path(path),
            Err(_) => DataSource::Url(DEFAULT_DATASET_URL.to_string()),
        };

        let pace = match env::var("FUELMETRICS_PACE_MS") {
            Ok(ms) => ms.parse().ok().map(Duration::from_millis),
            Err(_) => Some(DEFAULT_PACE),
        };

        Ok(Self {
            api_key,
            seed,
            dataset,
            pace,
        })
    }
}
