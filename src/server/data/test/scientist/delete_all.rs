use super::*;

/// Tests clearing the scientists table.
///
/// Verifies that every scientist row is removed.
///
/// Expected: Ok with zero rows remaining
#[tokio::test]
async fn removes_all_scientists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::scientist::create_scientist(db).await?;
    factory::scientist::create_scientist(db).await?;
    factory::scientist::create_scientist(db).await?;

    let repo = ScientistRepository::new(db);
    repo.delete_all().await?;

    let count = entity::prelude::Scientist::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
