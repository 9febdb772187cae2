use super::*;

/// Tests deleting a scientist with missions.
///
/// Verifies that the scientist and all of their missions are removed while
/// other scientists, their missions, and all planets stay untouched.
///
/// Expected: Ok with scientist and their missions deleted
#[tokio::test]
async fn deletes_scientist_and_their_missions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scientist = factory::scientist::create_scientist(db).await?;
    factory::helpers::create_mission_for_scientist(db, &scientist).await?;
    factory::helpers::create_mission_for_scientist(db, &scientist).await?;

    let (other, _other_planet, other_mission) =
        factory::helpers::create_mission_with_dependencies(db).await?;

    let repo = ScientistRepository::new(db);
    repo.delete(scientist.id).await?;

    // Verify the scientist is gone
    let db_scientist = entity::prelude::Scientist::find_by_id(scientist.id)
        .one(db)
        .await?;
    assert!(db_scientist.is_none());

    // Verify their missions are gone
    let remaining_missions = entity::prelude::Mission::find()
        .filter(entity::mission::Column::ScientistId.eq(scientist.id))
        .count(db)
        .await?;
    assert_eq!(remaining_missions, 0);

    // Verify the other scientist and their mission survive
    let db_other = entity::prelude::Scientist::find_by_id(other.id).one(db).await?;
    assert!(db_other.is_some());
    let db_other_mission = entity::prelude::Mission::find_by_id(other_mission.id)
        .one(db)
        .await?;
    assert!(db_other_mission.is_some());

    // Verify planets are never deleted with their visitors
    let planet_count = entity::prelude::Planet::find().count(db).await?;
    assert_eq!(planet_count, 3);

    Ok(())
}

/// Tests deleting a scientist that does not exist.
///
/// Verifies that deleting an unknown ID succeeds as a no-op. Existence
/// checks belong to the service layer.
///
/// Expected: Ok
#[tokio::test]
async fn succeeds_for_missing_scientist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScientistRepository::new(db);
    repo.delete(999).await?;

    Ok(())
}
