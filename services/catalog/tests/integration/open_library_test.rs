use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shelf_catalog::domain::repository::OpenLibraryPort;
use shelf_catalog::infra::open_library::{OpenLibraryClient, SEARCH_FIELDS};

const COVERS: &str = "https://covers.example.org/b";

fn client_for(server: &MockServer) -> OpenLibraryClient {
    OpenLibraryClient::new(&server.uri(), COVERS, Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn should_search_with_title_limit_and_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("title", "dune"))
        .and(query_param("limit", "1"))
        .and(query_param("fields", SEARCH_FIELDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numFound": 1,
            "docs": [{
                "key": "/works/OL893415W",
                "title": "Dune",
                "author_name": ["Frank Herbert"],
                "first_publish_year": 1965,
                "isbn": ["9780441013593", "0441013597"],
                "cover_i": 11481354,
                "subject": ["Science fiction"]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let hits = client_for(&server).search("dune", 1).await.unwrap();

    assert_eq!(hits.len(), 1);
    let dune = &hits[0];
    assert_eq!(dune.external_key.as_deref(), Some("/works/OL893415W"));
    assert_eq!(dune.title, "Dune");
    assert_eq!(dune.author_names, vec!["Frank Herbert"]);
    assert_eq!(dune.publication_year, "1965");
    assert_eq!(dune.isbn, "9780441013593");
    assert_eq!(dune.cover_image, format!("{COVERS}/id/11481354-M.jpg"));
    assert_eq!(dune.subjects, vec!["Science fiction"]);
}

#[tokio::test]
async fn should_fill_defaults_for_sparse_docs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{ "title": null, "author_name": null }]
        })))
        .mount(&server)
        .await;

    let hits = client_for(&server).search("anything", 5).await.unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].external_key, None);
    assert_eq!(hits[0].title, "Unknown Title");
    assert!(hits[0].author_names.is_empty());
    assert_eq!(hits[0].publication_year, "");
    assert_eq!(hits[0].cover_image, "");
}

#[tokio::test]
async fn should_fail_search_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client_for(&server).search("dune", 1).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn should_fail_search_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).search("dune", 1).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn should_fetch_details_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works/OL893415W.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": "/works/OL893415W",
            "title": "Dune",
            "revision": 42
        })))
        .mount(&server)
        .await;

    let document = client_for(&server)
        .details("/works/OL893415W")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(document["title"], "Dune");
    assert_eq!(document["revision"], 42);
}

#[tokio::test]
async fn should_return_none_for_missing_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works/OL0W.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let document = client_for(&server).details("/works/OL0W").await.unwrap();

    assert!(document.is_none());
}

#[tokio::test]
async fn should_fail_details_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works/OL1W.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client_for(&server).details("/works/OL1W").await;

    assert!(result.is_err());
}
