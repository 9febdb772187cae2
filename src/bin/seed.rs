//! Seeds the database with sample data.
//!
//! Clears all existing rows and inserts a small set of scientists, planets,
//! and missions to explore the API with. Run with `cargo run --bin seed`.

use tracing::info;
use tracing_subscriber::prelude::*;

use missionboard::server::{
    config::Config,
    data::{mission::MissionRepository, planet::PlanetRepository, scientist::ScientistRepository},
    error::AppError,
    model::{
        mission::CreateMissionParams, planet::CreatePlanetParams, scientist::CreateScientistParams,
    },
    startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,missionboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let scientists = ScientistRepository::new(&db);
    let planets = PlanetRepository::new(&db);
    let missions = MissionRepository::new(&db);

    info!("Clearing existing data");

    // Missions reference both other tables
    missions.delete_all().await?;
    scientists.delete_all().await?;
    planets.delete_all().await?;

    info!("Seeding scientists");

    let sagan = scientists
        .create(CreateScientistParams {
            name: "Carl Sagan".to_string(),
            field_of_study: "Astrophysics".to_string(),
        })
        .await?;
    let rubin = scientists
        .create(CreateScientistParams {
            name: "Vera Rubin".to_string(),
            field_of_study: "Astronomy".to_string(),
        })
        .await?;
    let bell_burnell = scientists
        .create(CreateScientistParams {
            name: "Jocelyn Bell Burnell".to_string(),
            field_of_study: "Radio Astronomy".to_string(),
        })
        .await?;
    scientists
        .create(CreateScientistParams {
            name: "Kip Thorne".to_string(),
            field_of_study: "Gravitational Physics".to_string(),
        })
        .await?;

    info!("Seeding planets");

    // Distances are whole light years from Earth
    let proxima_b = planets
        .create(CreatePlanetParams {
            name: "Proxima Centauri b".to_string(),
            distance_from_earth: 4,
            nearest_star: "Proxima Centauri".to_string(),
        })
        .await?;
    let trappist_1e = planets
        .create(CreatePlanetParams {
            name: "TRAPPIST-1e".to_string(),
            distance_from_earth: 41,
            nearest_star: "TRAPPIST-1".to_string(),
        })
        .await?;
    let kepler_442b = planets
        .create(CreatePlanetParams {
            name: "Kepler-442b".to_string(),
            distance_from_earth: 1206,
            nearest_star: "Kepler-442".to_string(),
        })
        .await?;

    info!("Seeding missions");

    missions
        .create(CreateMissionParams {
            name: "Pale Blue Dot Survey".to_string(),
            scientist_id: sagan.id,
            planet_id: proxima_b.id,
        })
        .await?;
    missions
        .create(CreateMissionParams {
            name: "Habitability Index Study".to_string(),
            scientist_id: sagan.id,
            planet_id: trappist_1e.id,
        })
        .await?;
    missions
        .create(CreateMissionParams {
            name: "Galactic Rotation Mapping".to_string(),
            scientist_id: rubin.id,
            planet_id: kepler_442b.id,
        })
        .await?;
    missions
        .create(CreateMissionParams {
            name: "Pulsar Beacon Relay".to_string(),
            scientist_id: bell_burnell.id,
            planet_id: trappist_1e.id,
        })
        .await?;

    info!("Seeding complete");

    Ok(())
}
