use super::*;

/// Tests clearing the missions table.
///
/// Verifies that every mission is removed while the scientists and planets
/// they referenced stay in place.
///
/// Expected: Ok with zero mission rows remaining
#[tokio::test]
async fn removes_all_missions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_mission_with_dependencies(db).await?;
    factory::helpers::create_mission_with_dependencies(db).await?;

    let repo = MissionRepository::new(db);
    repo.delete_all().await?;

    let missions = entity::prelude::Mission::find().count(db).await?;
    assert_eq!(missions, 0);

    let scientists = entity::prelude::Scientist::find().count(db).await?;
    assert_eq!(scientists, 2);
    let planets = entity::prelude::Planet::find().count(db).await?;
    assert_eq!(planets, 2);

    Ok(())
}
