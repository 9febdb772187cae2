use super::*;

/// Tests getting a planet by ID.
///
/// Expected: Ok with the planet
#[tokio::test]
async fn returns_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::planet::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    let found = repo.get_by_id(planet.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().name, planet.name);

    Ok(())
}

/// Tests getting a planet that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let found = repo.get_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
