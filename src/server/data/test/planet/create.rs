use super::*;

/// Tests creating a new planet.
///
/// Verifies that the repository persists the name, distance, and nearest star
/// and assigns an ID.
///
/// Expected: Ok with planet created
#[tokio::test]
async fn creates_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo
        .create(CreatePlanetParams {
            name: "Kepler-452b".to_string(),
            distance_from_earth: 1800,
            nearest_star: "Kepler-452".to_string(),
        })
        .await?;

    assert_eq!(planet.name, "Kepler-452b");
    assert_eq!(planet.distance_from_earth, 1800);
    assert_eq!(planet.nearest_star, "Kepler-452");

    // Verify planet exists in database
    let db_planet = entity::prelude::Planet::find_by_id(planet.id).one(db).await?;
    assert!(db_planet.is_some());
    assert_eq!(db_planet.unwrap().distance_from_earth, 1800);

    Ok(())
}
