use super::*;

/// Tests getting an existing author.
///
/// Expected: Ok(Some(Author))
#[tokio::test]
async fn gets_existing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Author)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::author::AuthorFactory::new(db)
        .name("Axell")
        .build()
        .await?;

    let repo = AuthorRepository::new(db);
    let author = repo.get_by_id(&created.id).await?;

    assert!(author.is_some());
    let author = author.unwrap();
    assert_eq!(author.id, created.id);
    assert_eq!(author.name, "Axell");

    Ok(())
}

/// Tests getting an author that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Author)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let author = repo.get_by_id("missing").await?;

    assert!(author.is_none());

    Ok(())
}
