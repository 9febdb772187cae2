use super::*;

/// Tests creating a new mission.
///
/// Verifies that the repository persists the name and both foreign keys.
///
/// Expected: Ok with mission created
#[tokio::test]
async fn creates_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scientist = factory::scientist::create_scientist(db).await?;
    let planet = factory::planet::create_planet(db).await?;

    let repo = MissionRepository::new(db);
    let mission = repo
        .create(CreateMissionParams {
            name: "Transit Photometry Run".to_string(),
            scientist_id: scientist.id,
            planet_id: planet.id,
        })
        .await?;

    assert_eq!(mission.name, "Transit Photometry Run");
    assert_eq!(mission.scientist_id, scientist.id);
    assert_eq!(mission.planet_id, planet.id);

    // Verify mission exists in database
    let db_mission = entity::prelude::Mission::find_by_id(mission.id).one(db).await?;
    assert!(db_mission.is_some());

    Ok(())
}

/// Tests that the entity save hook rejects a missing scientist reference.
///
/// Verifies that a zero scientist ID fails before reaching the database.
///
/// Expected: Err with no mission created
#[tokio::test]
async fn rejects_missing_scientist_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::planet::create_planet(db).await?;

    let repo = MissionRepository::new(db);
    let result = repo
        .create(CreateMissionParams {
            name: "Orphan Mission".to_string(),
            scientist_id: 0,
            planet_id: planet.id,
        })
        .await;

    let error = result.unwrap_err();
    assert_eq!(error.to_string(), "Custom Error: scientist_id must be set");

    let count = entity::prelude::Mission::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
