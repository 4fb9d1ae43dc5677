use super::*;

/// Tests getting the detail of an existing book.
///
/// Expected: Ok(BookView) with the author's name
#[tokio::test]
async fn gets_book_detail() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::author::AuthorFactory::new(db)
        .name("Axell")
        .build()
        .await?;
    let book = factory::book::BookFactory::new(db, &author.id)
        .title("Book1")
        .build()
        .await?;

    let view = BookService::new(db).get_book_detail(&book.id).await?;

    assert_eq!(view.id, book.id);
    assert_eq!(view.title, "Book1");
    assert_eq!(view.author_name, "Axell");

    Ok(())
}

/// Tests getting the detail of a book that doesn't exist.
///
/// Expected: Err(AppError::EntityNotFound)
#[tokio::test]
async fn fails_for_missing_book() {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookService::new(db).get_book_detail("missing").await;

    assert!(matches!(
        result,
        Err(AppError::EntityNotFound { entity: "Book", .. })
    ));
}
