use super::*;

/// Tests listing scientists from an empty database.
///
/// Verifies that the handler responds with 200 and an empty JSON array.
///
/// Expected: 200 OK with []
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = get_scientists(app_state(db)).await.unwrap().into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let scientists: Vec<ScientistListItemDto> = response_json(response).await;
    assert!(scientists.is_empty());

    Ok(())
}

/// Tests listing scientists.
///
/// Verifies that every scientist appears as a summary in ID order and that
/// list items never carry mission data.
///
/// Expected: 200 OK with all scientists
#[tokio::test]
async fn returns_all_scientists_without_missions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::scientist::ScientistFactory::new(db)
        .name("Katherine Johnson")
        .field_of_study("Orbital Mechanics")
        .build()
        .await?;
    // The second scientist has a mission which must not appear in the list
    let (second, _planet, _mission) =
        factory::helpers::create_mission_with_dependencies(db).await?;

    let response = get_scientists(app_state(db)).await.unwrap().into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response_json(response).await;
    let scientists = body.as_array().unwrap();
    assert_eq!(scientists.len(), 2);
    assert_eq!(scientists[0]["id"], first.id);
    assert_eq!(scientists[0]["name"], "Katherine Johnson");
    assert_eq!(scientists[0]["field_of_study"], "Orbital Mechanics");
    assert_eq!(scientists[1]["id"], second.id);
    assert!(scientists[1].get("missions").is_none());

    Ok(())
}
