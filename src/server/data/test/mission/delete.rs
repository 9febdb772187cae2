use super::*;

/// Tests deleting a mission.
///
/// Verifies that only the given mission is removed while its scientist,
/// its planet, and unrelated missions stay untouched.
///
/// Expected: Ok with only the mission deleted
#[tokio::test]
async fn deletes_only_the_given_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (scientist, planet, mission) =
        factory::helpers::create_mission_with_dependencies(db).await?;
    let (_, _, other_mission) = factory::helpers::create_mission_with_dependencies(db).await?;

    let repo = MissionRepository::new(db);
    repo.delete(mission.id).await?;

    // Verify the mission is gone
    let db_mission = entity::prelude::Mission::find_by_id(mission.id).one(db).await?;
    assert!(db_mission.is_none());

    // Verify its scientist and planet survive
    let db_scientist = entity::prelude::Scientist::find_by_id(scientist.id)
        .one(db)
        .await?;
    assert!(db_scientist.is_some());
    let db_planet = entity::prelude::Planet::find_by_id(planet.id).one(db).await?;
    assert!(db_planet.is_some());

    // Verify the other mission survives
    let db_other_mission = entity::prelude::Mission::find_by_id(other_mission.id)
        .one(db)
        .await?;
    assert!(db_other_mission.is_some());

    Ok(())
}

/// Tests deleting a mission that does not exist.
///
/// Verifies that deleting an unknown ID succeeds as a no-op.
///
/// Expected: Ok
#[tokio::test]
async fn succeeds_for_missing_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MissionRepository::new(db);
    repo.delete(999).await?;

    Ok(())
}
