use super::*;

/// Tests updating a scientist through the PATCH endpoint.
///
/// Verifies that provided fields are applied, omitted fields keep their
/// current values, and the handler responds with 202.
///
/// Expected: 202 Accepted with the updated scientist
#[tokio::test]
async fn updates_scientist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scientist = factory::scientist::ScientistFactory::new(db)
        .name("Mae Jemison")
        .field_of_study("Chemical Engineering")
        .build()
        .await?;

    let payload = UpdateScientistDto {
        name: Some("Mae Carol Jemison".to_string()),
        field_of_study: None,
    };
    let response = patch_scientist(app_state(db), Path(scientist.id), Ok(Json(payload)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let dto: ScientistDto = response_json(response).await;
    assert_eq!(dto.id, scientist.id);
    assert_eq!(dto.name, "Mae Carol Jemison");
    assert_eq!(dto.field_of_study, "Chemical Engineering");

    let stored = entity::prelude::Scientist::find_by_id(scientist.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Mae Carol Jemison");
    assert_eq!(stored.field_of_study, "Chemical Engineering");

    Ok(())
}

/// Tests updating a scientist that does not exist.
///
/// Verifies that the existence check runs first: even an invalid payload
/// yields 404 rather than a validation response.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn returns_404_before_validating_payload() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payload = UpdateScientistDto {
        name: Some(String::new()),
        field_of_study: None,
    };
    let result = patch_scientist(app_state(db), Path(999), Ok(Json(payload))).await;
    let error = match result {
        Err(error) => error,
        Ok(_) => panic!("Expected missing scientist"),
    };

    match &error {
        AppError::NotFound(message) => assert_eq!(message, "Scientist not found"),
        other => panic!("Expected NotFound, got: {:?}", other),
    }

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests updating a scientist with an empty name.
///
/// Verifies that the handler responds with 422 and leaves the stored row
/// untouched.
///
/// Expected: 422 Unprocessable Entity, row unchanged
#[tokio::test]
async fn rejects_empty_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scientist = factory::scientist::ScientistFactory::new(db)
        .name("Chien-Shiung Wu")
        .field_of_study("Nuclear Physics")
        .build()
        .await?;

    let payload = UpdateScientistDto {
        name: Some(String::new()),
        field_of_study: Some("Particle Physics".to_string()),
    };
    let result = patch_scientist(app_state(db), Path(scientist.id), Ok(Json(payload))).await;
    let error = match result {
        Err(error) => error,
        Ok(_) => panic!("Expected validation rejection"),
    };

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: ValidationErrorsDto = response_json(response).await;
    assert_eq!(body.errors, vec!["validation errors".to_string()]);

    let stored = entity::prelude::Scientist::find_by_id(scientist.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Chien-Shiung Wu");
    assert_eq!(stored.field_of_study, "Nuclear Physics");

    Ok(())
}

/// Tests updating a scientist with an empty field of study.
///
/// Verifies that an explicitly provided empty value is rejected even when
/// no other field is part of the patch.
///
/// Expected: 422 Unprocessable Entity, row unchanged
#[tokio::test]
async fn rejects_empty_field_of_study() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scientist = factory::scientist::ScientistFactory::new(db)
        .name("Vera Rubin")
        .field_of_study("Astronomy")
        .build()
        .await?;

    let payload = UpdateScientistDto {
        name: None,
        field_of_study: Some(String::new()),
    };
    let result = patch_scientist(app_state(db), Path(scientist.id), Ok(Json(payload))).await;
    let error = match result {
        Err(error) => error,
        Ok(_) => panic!("Expected validation rejection"),
    };

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let stored = entity::prelude::Scientist::find_by_id(scientist.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.field_of_study, "Astronomy");

    Ok(())
}

/// Tests a PATCH request with an empty body.
///
/// Verifies that a patch with no fields succeeds and returns the current
/// row unchanged.
///
/// Expected: 202 Accepted with the unchanged scientist
#[tokio::test]
async fn accepts_empty_patch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scientist = factory::scientist::create_scientist(db).await?;

    let payload = UpdateScientistDto {
        name: None,
        field_of_study: None,
    };
    let response = patch_scientist(app_state(db), Path(scientist.id), Ok(Json(payload)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let dto: ScientistDto = response_json(response).await;
    assert_eq!(dto.name, scientist.name);
    assert_eq!(dto.field_of_study, scientist.field_of_study);

    Ok(())
}
