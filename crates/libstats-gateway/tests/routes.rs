//! HTTP route tests against a mocked upstream.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use libstats_client::{MockFailure, MockFetcher};
use libstats_core::{LanguageStat, LibraryStats, ReadershipRecord, ServiceEndpoints};
use libstats_gateway::json::StatusResponse;
use libstats_gateway::{create_router, AppState};
use serde_json::{json, Value};

const CATALOG: &str = "http://catalog.test/books/";
const LOOKUP: &str = "http://lookup.test/language2countries/";
const POPULATION: &str = "http://population.test/v3.1";

fn book(id: u64, author: &str, born: i32, died: i32, language: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Book {}", id),
        "authors": [{"name": author, "birth_year": born, "death_year": died}],
        "languages": [language]
    })
}

fn country(alpha2: &str, alpha3: &str, name: &str) -> Value {
    json!({
        "ISO3166_1_Alpha_3": alpha3,
        "ISO3166_1_Alpha_2": alpha2,
        "Official_Name": name,
        "Region_Name": "Europe",
        "Sub_Region_Name": "Northern Europe",
        "Language": "no"
    })
}

fn upstream() -> MockFetcher {
    MockFetcher::new()
        .with_json(CATALOG, &json!({"count": 1000, "results": []}))
        .with_json(
            format!("{}?languages=no", CATALOG),
            &json!({
                "count": 3,
                "next": format!("{}?languages=no&page=2", CATALOG),
                "previous": null,
                "results": [
                    book(1, "Ibsen, Henrik", 1828, 1906, "no"),
                    book(2, "Hamsun, Knut", 1859, 1952, "no")
                ]
            }),
        )
        .with_json(
            format!("{}?languages=no&page=2", CATALOG),
            &json!({
                "count": 3,
                "next": null,
                "previous": format!("{}?languages=no", CATALOG),
                "results": [book(3, "Ibsen, Henrik", 1828, 1906, "no")]
            }),
        )
        .with_json(
            format!("{}?languages=la", CATALOG),
            &json!({"count": 1, "next": null, "results": [book(4, "Vergilius Maro, Publius", 0, 0, "la")]}),
        )
        .with_json(format!("{}?languages=zz", CATALOG), &json!({"count": 0, "results": []}))
        .with_json(
            format!("{}no", LOOKUP),
            &json!([
                country("NO", "NOR", "Norway"),
                country("SJ", "SJM", "Svalbard and Jan Mayen"),
                country("BV", "BVT", "Bouvet Island")
            ]),
        )
        .with_json(format!("{}/alpha/NOR", POPULATION), &json!([{"population": 5379475}]))
        .with_json(format!("{}/alpha/SJM", POPULATION), &json!([{"population": 2562}]))
        .with_json(format!("{}/alpha/BVT", POPULATION), &json!([{"population": 0}]))
        .with_status(format!("{}la", LOOKUP), 204, "")
        .with_failure(format!("{}sv", LOOKUP), MockFailure::Timeout)
        .with_json(format!("{}en", LOOKUP), &json!([country("GB", "GBR", "United Kingdom")]))
        .with_json(format!("{}/all", POPULATION), &json!([]))
}

fn server(fetcher: MockFetcher) -> TestServer {
    let endpoints = ServiceEndpoints::new(CATALOG, LOOKUP, POPULATION);
    let stats = LibraryStats::new(Arc::new(fetcher), endpoints);
    let state = AppState::new(stats);
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_index_lists_paths() {
    let server = server(upstream());
    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("/librarystats/v1/bookcount/"));
    assert!(body.contains("/librarystats/v1/readership/"));
    assert!(body.contains("/librarystats/v1/status/"));
}

#[tokio::test]
async fn test_book_count() {
    let server = server(upstream());
    let response = server
        .get("/librarystats/v1/bookcount/")
        .add_query_param("language", "no,la,zz,invalid,no")
        .await;

    response.assert_status_ok();
    let stats: Vec<LanguageStat> = response.json();
    assert_eq!(
        stats,
        vec![
            LanguageStat { language: "no".into(), books: 3, authors: 2, fraction: 0.003 },
            LanguageStat { language: "la".into(), books: 1, authors: 1, fraction: 0.001 },
        ]
    );
}

#[tokio::test]
async fn test_book_count_without_trailing_slash() {
    let server = server(upstream());
    let response = server
        .get("/librarystats/v1/bookcount")
        .add_query_param("language", "la")
        .await;

    response.assert_status_ok();
    let stats: Vec<LanguageStat> = response.json();
    assert_eq!(stats.len(), 1);
}

#[tokio::test]
async fn test_book_count_requires_language() {
    let server = server(upstream());

    let missing = server.get("/librarystats/v1/bookcount/").await;
    missing.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = missing.json();
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "BAD_REQUEST");

    let empty = server
        .get("/librarystats/v1/bookcount/")
        .add_query_param("language", "")
        .await;
    empty.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_book_count_catalog_down() {
    let server = server(upstream().with_failure(CATALOG, MockFailure::Timeout));
    let response = server
        .get("/librarystats/v1/bookcount/")
        .add_query_param("language", "no")
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_readership() {
    let server = server(upstream());
    let response = server.get("/librarystats/v1/readership/no").await;

    response.assert_status_ok();
    let records: Vec<ReadershipRecord> = response.json();
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        ReadershipRecord {
            country: "Norway".into(),
            isocode: "NO".into(),
            books: 3,
            authors: 2,
            readership: 5379475,
        }
    );
    assert_eq!(records[1].isocode, "SJ");
    assert_eq!(records[2].readership, 0);
}

#[tokio::test]
async fn test_readership_limit_and_extra_segments() {
    let server = server(upstream());
    let response = server
        .get("/librarystats/v1/readership/no/en/fr")
        .add_query_param("limit", "2")
        .await;

    response.assert_status_ok();
    let records: Vec<ReadershipRecord> = response.json();
    let isocodes: Vec<&str> = records.iter().map(|r| r.isocode.as_str()).collect();
    assert_eq!(isocodes, vec!["NO", "SJ"]);
}

#[tokio::test]
async fn test_readership_trailing_slash() {
    let server = server(upstream());
    let response = server.get("/librarystats/v1/readership/no/").await;

    response.assert_status_ok();
    let records: Vec<ReadershipRecord> = response.json();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn test_readership_rejects_bad_limit() {
    let server = server(upstream());

    for limit in ["0", "-3", "many"] {
        let response = server
            .get("/librarystats/v1/readership/no")
            .add_query_param("limit", limit)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_readership_rejects_bad_code() {
    let server = server(upstream());

    server
        .get("/librarystats/v1/readership/")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .get("/librarystats/v1/readership")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .get("/librarystats/v1/readership/nor")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .get("/librarystats/v1/readership/%C3%A6%C3%B8")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_readership_not_found_and_unavailable() {
    let server = server(upstream());

    let not_found = server.get("/librarystats/v1/readership/la").await;
    not_found.assert_status(StatusCode::NOT_FOUND);
    let body: Value = not_found.json();
    assert_eq!(body["code"], "NOT_FOUND");

    let unavailable = server.get("/librarystats/v1/readership/sv").await;
    unavailable.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = unavailable.json();
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_readership_population_failure() {
    let server = server(upstream().with_status(format!("{}/alpha/SJM", POPULATION), 500, ""));
    let response = server.get("/librarystats/v1/readership/no").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_status() {
    let server = server(upstream().with_failure(format!("{}/all", POPULATION), MockFailure::Timeout));
    let response = server.get("/librarystats/v1/status/").await;

    response.assert_status_ok();
    let status: StatusResponse = response.json();
    assert_eq!(status.gutendexapi, 200);
    assert_eq!(status.languageapi, 200);
    assert_eq!(status.countriesapi, 503);
    assert_eq!(status.version, "v1");
    assert!(status.uptime >= 0.0);
}
