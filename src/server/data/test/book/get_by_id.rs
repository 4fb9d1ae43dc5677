use super::*;

/// Tests getting an existing book.
///
/// Expected: Ok(Some(Book)) with the stored author reference
#[tokio::test]
async fn gets_existing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, created) = factory::create_book_with_author(db).await?;

    let repo = BookRepository::new(db);
    let book = repo.get_by_id(&created.id).await?.unwrap();

    assert_eq!(book.id, created.id);
    assert_eq!(book.title, created.title);
    assert_eq!(book.author_id, author.id);

    Ok(())
}

/// Tests getting a book that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);

    assert!(repo.get_by_id("missing").await?.is_none());

    Ok(())
}
