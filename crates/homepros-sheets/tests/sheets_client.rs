//! Integration tests for `SheetsClient` and the sync fallback policy,
//! using wiremock HTTP mocks.

use homepros_sheets::{load_services, sample_services, SheetsClient, SheetsError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Addresses here are comma-free: the naive cell split would shift any row
// that embedded commas (see homepros_sheets::csv for that limitation).
const EXPORT: &str = "\
S no,Title,Rating,Reviews,Phone,Industry,Address,Website,Google Maps Link,Email,Featured,Verified,Licensed,duplicate
1,River City Plumbing,4.6,58,(309) 555-0101,Plumber,14 Bridge Street Peoria IL,,,,No,Yes,Yes,false
2,Peak Performance HVAC,4.2,33,(309) 555-0155,HVAC Contractor,72 Summit Avenue Peoria IL,,,,Yes,Yes,No,false
";

fn test_client() -> SheetsClient {
    SheetsClient::new(30, "homepros-tests/0.1").expect("client construction should not fail")
}

#[tokio::test]
async fn fetch_csv_returns_export_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/export"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EXPORT))
        .mount(&server)
        .await;

    let client = test_client();
    let body = client
        .fetch_csv(&format!("{}/export", server.uri()))
        .await
        .expect("should fetch export");

    assert!(body.starts_with("S no,Title"));
}

#[tokio::test]
async fn fetch_csv_rejects_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client();
    let err = client
        .fetch_csv(&format!("{}/export", server.uri()))
        .await
        .expect_err("500 should be an error");

    assert!(
        matches!(err, SheetsError::UnexpectedStatus { status: 500, .. }),
        "expected UnexpectedStatus, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_csv_rejects_blank_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("  \n"))
        .mount(&server)
        .await;

    let client = test_client();
    let err = client
        .fetch_csv(&format!("{}/export", server.uri()))
        .await
        .expect_err("blank body should be an error");

    assert!(
        matches!(err, SheetsError::EmptyBody { .. }),
        "expected EmptyBody, got: {err:?}"
    );
}

#[tokio::test]
async fn load_services_parses_export_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EXPORT))
        .mount(&server)
        .await;

    let client = test_client();
    let services = load_services(&client, &format!("{}/export", server.uri())).await;

    assert_eq!(services.len(), 2);
    assert_eq!(services[0].title, "River City Plumbing");
    assert_eq!(services[0].phone, "(309) 555-0101");
    assert!(services[0].verified);
    assert!(services[1].featured);
}

#[tokio::test]
async fn load_services_falls_back_to_sample_set_on_upstream_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client();
    let services = load_services(&client, &format!("{}/export", server.uri())).await;

    let expected = sample_services();
    assert_eq!(services.len(), expected.len());
    for (got, want) in services.iter().zip(&expected) {
        assert_eq!(got.id, want.id);
        assert_eq!(got.title, want.title);
    }
}

#[tokio::test]
async fn load_services_falls_back_when_export_is_headers_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("S no,Title,Industry\n"))
        .mount(&server)
        .await;

    let client = test_client();
    let services = load_services(&client, &format!("{}/export", server.uri())).await;

    assert_eq!(services.len(), sample_services().len());
}

#[tokio::test]
async fn load_services_falls_back_on_unreachable_host() {
    // Nothing is listening on this port; the connect fails fast.
    let client = test_client();
    let services = load_services(&client, "http://127.0.0.1:9/export").await;

    assert_eq!(services.len(), sample_services().len());
}
