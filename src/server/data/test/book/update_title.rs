use super::*;

/// Tests updating a book's title.
///
/// Expected: Ok with the new title and the original author reference
#[tokio::test]
async fn updates_title_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, book) = factory::create_book_with_author(db).await?;

    let repo = BookRepository::new(db);
    let updated = repo
        .update_title(book.id.clone(), "Renamed".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.id, book.id);
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.author_id, author.id);

    let stored = entity::prelude::Book::find_by_id(book.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, "Renamed");
    assert_eq!(stored.author_id, author.id);

    Ok(())
}

/// Tests updating the title of a book that doesn't exist.
///
/// A row deleted after the service's lookup ends up here, so the miss must come back as
/// `None` rather than an error.
///
/// Expected: Ok(None) and no rows written
#[tokio::test]
async fn returns_none_for_missing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, book) = factory::create_book_with_author(db).await?;

    let repo = BookRepository::new(db);
    let updated = repo
        .update_title("missing".to_string(), "Renamed".to_string())
        .await?;

    assert!(updated.is_none());
    assert_eq!(entity::prelude::Book::find().count(db).await?, 1);

    let stored = entity::prelude::Book::find_by_id(book.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, book.title);

    Ok(())
}

/// Tests updating the title of a book deleted after it was read.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_book_deleted_after_lookup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, book) = factory::create_book_with_author(db).await?;

    let repo = BookRepository::new(db);
    let found = repo.get_by_id(&book.id).await?.unwrap();
    repo.delete(&book.id).await?;

    let updated = repo.update_title(found.id, "Renamed".to_string()).await?;

    assert!(updated.is_none());

    Ok(())
}
