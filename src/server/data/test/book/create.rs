use super::*;

/// Tests creating a book for an existing author.
///
/// Expected: Ok with the stored book referencing the author
#[tokio::test]
async fn creates_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let repo = BookRepository::new(db);
    let book = repo
        .create(
            "book-1".to_string(),
            AddBookParam {
                title: "Book1".to_string(),
                author_id: author.id.clone(),
            },
        )
        .await?;

    assert_eq!(book.id, "book-1");
    assert_eq!(book.title, "Book1");
    assert_eq!(book.author_id, author.id);
    assert_eq!(entity::prelude::Book::find().count(db).await?, 1);

    Ok(())
}

/// Tests that the store's foreign key rejects a book whose author doesn't exist.
///
/// The service never relies on this, but the schema still guards the invariant.
///
/// Expected: Err from the store
#[tokio::test]
async fn rejects_book_for_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let result = repo
        .create(
            "book-1".to_string(),
            AddBookParam {
                title: "Book1".to_string(),
                author_id: "missing".to_string(),
            },
        )
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Book::find().count(db).await?, 0);

    Ok(())
}
