use std::path::Path;

use vpat_publish::publish::{upload, MockObjectStore};

#[tokio::test]
async fn uploads_full_document_under_computed_key() {
    let html = "<html><body class=\"markdown-body\"><h1>Report</h1></body></html>";
    let expected = html.as_bytes().to_vec();

    let mut store = MockObjectStore::new();
    store
        .expect_put_object()
        .withf(move |key, body| key == "acme-widgets.html" && *body == expected)
        .times(1)
        .returning(|_, _| Ok(()));

    upload(
        &store,
        Path::new("reports/vpat-2024-q1.md"),
        "vpat-bucket",
        "acme-widgets.html",
        html,
    )
    .await
    .expect("upload succeeds");
}

#[tokio::test]
async fn store_failure_is_surfaced_without_retry() {
    let mut store = MockObjectStore::new();
    store
        .expect_put_object()
        .times(1)
        .returning(|_, _| Err("access denied".into()));

    let err = upload(
        &store,
        Path::new("reports/vpat-2024-q1.md"),
        "vpat-bucket",
        "acme-widgets.html",
        "<html></html>",
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("access denied"));
}
