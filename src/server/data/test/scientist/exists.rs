use super::*;

/// Tests the existence check for a stored scientist.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_scientist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scientist = factory::scientist::create_scientist(db).await?;

    let repo = ScientistRepository::new(db);
    assert!(repo.exists(scientist.id).await?);

    Ok(())
}

/// Tests the existence check for an unknown ID.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_scientist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScientistRepository::new(db);
    assert!(!repo.exists(999).await?);

    Ok(())
}
