use super::*;

/// Tests creating an author with a supplied id.
///
/// Expected: Ok with the stored author and one row in the table
#[tokio::test]
async fn creates_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Author)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let author = repo
        .create("author-1".to_string(), "Axell".to_string())
        .await?;

    assert_eq!(author.id, "author-1");
    assert_eq!(author.name, "Axell");
    assert_eq!(entity::prelude::Author::find().count(db).await?, 1);

    Ok(())
}

/// Tests that the primary key rejects a duplicate id.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Author)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_author(db).await?;

    let repo = AuthorRepository::new(db);
    let result = repo.create(existing.id, "Someone Else".to_string()).await;

    assert!(result.is_err());

    Ok(())
}
