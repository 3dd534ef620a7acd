pub mod assignment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod merge;
pub mod models;
pub mod modeling;
pub mod nutrition;
pub mod nutrition_api;
pub mod report;
pub mod sessions;
pub mod stats;

pub use config::Config;
pub use error::FuelError;
pub use models::{EnrichedRecord, FoodGroup, NutritionRecord, SessionRecord, WorkoutType};
pub use nutrition::NutritionProvider;
pub use nutrition_api::FdcClient;
