use super::*;

/// Tests adding an author.
///
/// Verifies that the service generates an id and the author is stored under it.
///
/// Expected: Ok(id) with a stored row carrying the supplied name
#[tokio::test]
async fn adds_author_with_generated_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Author)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthorService::new(db);
    let id = service
        .add_author(AddAuthorParam {
            name: "Axell".to_string(),
        })
        .await?;

    assert!(uuid::Uuid::parse_str(&id).is_ok());

    let stored = entity::prelude::Author::find_by_id(id).one(db).await?.unwrap();
    assert_eq!(stored.name, "Axell");

    Ok(())
}

/// Tests that every added author gets a distinct id.
///
/// Expected: two different ids
#[tokio::test]
async fn generates_distinct_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Author)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthorService::new(db);
    let first = service
        .add_author(AddAuthorParam {
            name: "Axell".to_string(),
        })
        .await?;
    let second = service
        .add_author(AddAuthorParam {
            name: "Axell".to_string(),
        })
        .await?;

    assert_ne!(first, second);

    Ok(())
}

/// Tests that a store fault surfaces as an opaque database error.
///
/// The author table is never created, so the insert fails.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn propagates_store_fault() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthorService::new(db)
        .add_author(AddAuthorParam {
            name: "Axell".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
}
