// core/src/nutrition_api.rs
use std::time::Duration;

use log::warn;
use serde::Deserialize;
use ureq::Agent;

use crate::nutrition::NutritionProvider;

const SEARCH_URL: &str = "https://api.nal.usda.gov/fdc/v1/foods/search";

#[derive(Debug, Clone, Deserialize)]
pub struct FdcSearchResponse {
    #[serde(default)]
    pub foods: Vec<FoodMatch>,
}

/// Ett treff fra søket. servingSize/servingSizeUnit er valgfrie i API-et,
/// det samme er hver enkelt næringsverdi.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodMatch {
    #[serde(default)]
    pub description: String,
    #[serde(rename = "servingSize")]
    pub serving_size: Option<f64>,
    #[serde(rename = "servingSizeUnit")]
    pub serving_size_unit: Option<String>,
    #[serde(rename = "foodNutrients", default)]
    pub food_nutrients: Vec<FoodNutrient>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodNutrient {
    #[serde(rename = "nutrientName")]
    pub name: String,
    pub value: Option<f64>,
}

/// FoodData Central-klient – enkel blocking-versjon (ureq).
/// API-nøkkelen er eksplisitt konstruktør-input; klienten leser aldri env selv.
pub struct FdcClient {
    agent: Agent,
    api_key: String,
    pace: Option<Duration>,
}

impl FdcClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();
        Self {
            agent,
            api_key: api_key.into(),
            pace: None,
        }
    }

    /// Fast pause før hvert kall, for å holde seg under API-ets
    /// dokumenterte ~60 req/min. Ingen token-bucket, ingen backoff.
    pub fn with_pacing(mut self, pace: Duration) -> Self {
        self.pace = Some(pace);
        self
    }
}

impl NutritionProvider for FdcClient {
    fn lookup(&self, food: &str) -> Option<FoodMatch> {
        if let Some(pace) = self.pace {
            std::thread::sleep(pace);
        }

        // Ett søk per navn, maks ett treff. Transportfeil og ikke-2xx
        // absorberes her som None; batchen fortsetter hos kalleren.
        let resp = self
            .agent
            .get(SEARCH_URL)
            .query("api_key", &self.api_key)
            .query("query", food)
            .query("pageSize", "1")
            .call()
            .map_err(|e| warn!("nutrition lookup failed for {food:?}: {e}"))
            .ok()?;

        let body: serde_json::Value = resp
            .into_json()
            .map_err(|e| warn!("nutrition response for {food:?} was not JSON: {e}"))
            .ok()?;

        let parsed: FdcSearchResponse = match serde_path_to_error::deserialize(body) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(
                    "nutrition response for {food:?} failed to decode at {}: {}",
                    e.path(),
                    e
                );
                return None;
            }
        };

        parsed.foods.into_iter().next()
    }
}
