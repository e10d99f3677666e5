use std::net::SocketAddr;
use std::time::Duration;

use reachr_common::probe::failure::ProbeFailure;
use reachr_common::probe::outcome::ProbeOutcome;
use reachr_core::network::http::HttpProbe;

use crate::util::{closed_addr, response, spawn_http_server, spawn_silent_server};

const TIMEOUT: Duration = Duration::from_secs(5);

fn canned(path: &str) -> String {
    match path {
        "/ok" => response(200, "OK", &[("Content-Type", "application/json"), ("X-Probe", "fixture")]),
        "/moved" => response(302, "Found", &[("Location", "/ok")]),
        "/not-modified" => response(304, "Not Modified", &[]),
        "/missing" => response(404, "Not Found", &[]),
        "/teapot" => response(418, "I'm a teapot", &[]),
        "/busy" => response(429, "Too Many Requests", &[("Retry-After", "30")]),
        "/broken" => response(500, "Internal Server Error", &[]),
        "/unavailable" => response(503, "Service Unavailable", &[]),
        _ => response(404, "Not Found", &[]),
    }
}

async fn get(addr: SocketAddr, path: &str) -> ProbeOutcome {
    let probe = HttpProbe::direct().unwrap();
    probe.probe(&format!("http://{addr}{path}"), TIMEOUT).await
}

/*************************************************************
                    Responses received
**************************************************************/

#[tokio::test]
async fn ok_response_passes_with_status_time_and_headers() {
    let addr = spawn_http_server(canned).await;
    let outcome = get(addr, "/ok").await;

    assert!(outcome.succeeded());
    assert!(outcome.error().is_none());

    let response = outcome.response().unwrap();
    assert_eq!(response.status_code, 200);
    assert!(response.response_time < TIMEOUT);
    assert_eq!(response.headers["content-type"], "application/json");
    assert_eq!(response.headers["x-probe"], "fixture");
}

#[tokio::test]
async fn redirect_is_followed() {
    let addr = spawn_http_server(canned).await;
    let outcome = get(addr, "/moved").await;

    assert!(outcome.succeeded());
    assert_eq!(outcome.response().unwrap().status_code, 200);
    assert_eq!(outcome.response().unwrap().headers["x-probe"], "fixture");
}

#[tokio::test]
async fn not_modified_counts_as_pass() {
    let addr = spawn_http_server(canned).await;
    let outcome = get(addr, "/not-modified").await;

    assert!(outcome.succeeded());
    assert_eq!(outcome.response().unwrap().status_code, 304);
}

#[tokio::test]
async fn rate_limit_is_classified_before_client_error() {
    let addr = spawn_http_server(canned).await;
    let outcome = get(addr, "/busy").await;

    assert!(!outcome.succeeded());
    assert_eq!(outcome.response().unwrap().status_code, 429);
    assert_eq!(outcome.error().unwrap().to_string(), "Rate limited");
    assert_eq!(outcome.response().unwrap().headers["retry-after"], "30");
}

#[tokio::test]
async fn client_errors_carry_status_in_message() {
    let addr = spawn_http_server(canned).await;

    let missing = get(addr, "/missing").await;
    assert!(!missing.succeeded());
    assert_eq!(missing.error().unwrap().to_string(), "Client error (404)");

    let teapot = get(addr, "/teapot").await;
    assert_eq!(teapot.error(), Some(&ProbeFailure::ClientError(418)));
}

#[tokio::test]
async fn server_errors_carry_status_in_message() {
    let addr = spawn_http_server(canned).await;

    let broken = get(addr, "/broken").await;
    assert!(!broken.succeeded());
    assert_eq!(broken.error().unwrap().to_string(), "Server error (500)");
    assert_eq!(broken.response().unwrap().status_code, 500);

    let unavailable = get(addr, "/unavailable").await;
    assert_eq!(unavailable.error(), Some(&ProbeFailure::ServerError(503)));
}

/*************************************************************
                    Failures before a response
**************************************************************/

#[tokio::test]
async fn silent_server_times_out() {
    let addr = spawn_silent_server().await;
    let probe = HttpProbe::direct().unwrap();

    let outcome = probe
        .probe(&format!("http://{addr}/"), Duration::from_millis(300))
        .await;

    assert!(!outcome.succeeded());
    assert_eq!(outcome.error(), Some(&ProbeFailure::RequestTimeout));
    assert!(outcome.response().is_none());
}

#[tokio::test]
async fn closed_port_is_connection_refused() {
    let addr = closed_addr().await;
    let outcome = get(addr, "/").await;

    assert!(!outcome.succeeded());
    assert_eq!(outcome.error(), Some(&ProbeFailure::ConnectionRefused));
    assert!(outcome.response().is_none());
}

#[tokio::test]
async fn unresolvable_host_is_connection_error() {
    let probe = HttpProbe::direct().unwrap();
    let outcome = probe.probe("http://nonexistent.invalid/", TIMEOUT).await;

    assert!(!outcome.succeeded());
    assert_eq!(outcome.error(), Some(&ProbeFailure::ConnectionError));
}

#[tokio::test]
async fn unsupported_scheme_is_request_failed() {
    let probe = HttpProbe::direct().unwrap();
    let outcome = probe.probe("ftp://127.0.0.1/", TIMEOUT).await;

    assert!(!outcome.succeeded());
    assert_eq!(outcome.error(), Some(&ProbeFailure::RequestFailed));
}
