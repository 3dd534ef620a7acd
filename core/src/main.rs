use std::fs::File;

use anyhow::Context;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fuelmetrics_core::config::{Config, DataSource};
use fuelmetrics_core::{assignment, catalog, merge, nutrition, report, sessions};
use fuelmetrics_core::{FdcClient, FuelError};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = Config::from_env().context("configuration")?;
    catalog::validate_categories().map_err(FuelError::Catalog)?;

    let sessions = match &cfg.dataset {
        DataSource::Path(path) => {
            info!("loading sessions from {path}");
            sessions::load_sessions(File::open(path)?)?
        }
        DataSource::Url(url) => {
            info!("fetching sessions from {url}");
            sessions::fetch_sessions(url)?
        }
    };

    let mut client = FdcClient::new(cfg.api_key.clone());
    if let Some(pace) = cfg.pace {
        client = client.with_pacing(pace);
    }

    let records = nutrition::fetch_catalog(&client, &catalog::FOOD_CATALOG);
    let table = nutrition::build_nutrition_table(records);

    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
    info!("assigning pre-workout foods with seed {}", cfg.seed);
    let assignments = assignment::assign_foods(&sessions, &mut rng);

    let enriched = merge::merge(&sessions, &assignments, &table);
    report::run_report(&sessions, &table, &enriched)?;
    Ok(())
}
