use super::*;

/// Tests DELETE /api/books/{id} for a stored book.
///
/// Expected: 200, then 404 on the following detail request
#[tokio::test]
async fn deletes_book() {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, book) = factory::create_book_with_author(db).await.unwrap();
    let uri = format!("/api/books/{}", book.id);

    let response = send(db, Method::DELETE, &uri, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "errorCode": null, "data": null }));

    let detail = send(db, Method::GET, &uri, None).await;
    assert_eq!(detail.status, StatusCode::NOT_FOUND);
}

/// Tests DELETE /api/books/{id} for a book that doesn't exist.
///
/// Expected: 404 with `ENTITY_NOT_FOUND`
#[tokio::test]
async fn returns_not_found_for_missing_book() {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = send(db, Method::DELETE, "/api/books/missing", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({ "errorCode": "ENTITY_NOT_FOUND", "data": null })
    );
}
