//! In-process tests of the layered router, without binding the gateway to a port.

use axum::body::Body;
use axum::http::header::{COOKIE, HOST, LOCATION};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use locale_gateway::config::GatewayConfig;
use locale_gateway::locale::LocaleCode;
use locale_gateway::http::ServerError;
use locale_gateway::HttpServer;

fn server(config: GatewayConfig) -> HttpServer {
    HttpServer::new(config).unwrap()
}

async fn location(server: &HttpServer, request: Request<Body>) -> (StatusCode, Option<String>) {
    let response = server.router().oneshot(request).await.unwrap();
    let location = response
        .headers()
        .get(LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    (response.status(), location)
}

#[tokio::test]
async fn test_redirect_uses_host_and_forwarded_proto() {
    let server = server(GatewayConfig::default());
    let request = Request::builder()
        .uri("/news?tag=tax")
        .header(HOST, "lawyers.ge")
        .header("x-forwarded-proto", "https")
        .header(COOKIE, "theme=dark; NEXT_LOCALE=ru")
        .body(Body::empty())
        .unwrap();

    let (status, location) = location(&server, request).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("https://lawyers.ge/ru/news?tag=tax"));
}

#[tokio::test]
async fn test_redirect_without_host_is_relative() {
    let server = server(GatewayConfig::default());
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let (status, location) = location(&server, request).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/ka"));
}

#[tokio::test]
async fn test_untrusted_cookie_is_not_echoed() {
    let server = server(GatewayConfig::default());
    let request = Request::builder()
        .uri("/kazakhstan")
        .header(HOST, "lawyers.ge")
        .header(COOKIE, "NEXT_LOCALE=//evil.example")
        .body(Body::empty())
        .unwrap();

    let (_, location) = location(&server, request).await;
    assert_eq!(location.as_deref(), Some("http://lawyers.ge/ka/kazakhstan"));
}

#[tokio::test]
async fn test_custom_cookie_and_locales() {
    let mut config = GatewayConfig::default();
    config.locales.supported = vec![LocaleCode::En, LocaleCode::Ka];
    config.locales.default = LocaleCode::En;
    config.locales.cookie_name = "lang".to_string();
    let server = server(config);

    let with_cookie = Request::builder()
        .uri("/companies")
        .header(COOKIE, "lang=ka; NEXT_LOCALE=ru")
        .body(Body::empty())
        .unwrap();
    assert_eq!(location(&server, with_cookie).await.1.as_deref(), Some("/ka/companies"));

    let unsupported = Request::builder()
        .uri("/companies")
        .header(COOKIE, "lang=ru")
        .body(Body::empty())
        .unwrap();
    assert_eq!(location(&server, unsupported).await.1.as_deref(), Some("/en/companies"));
}

#[test]
fn test_invalid_registry_fails_fast() {
    let mut config = GatewayConfig::default();
    config.locales.supported = vec![LocaleCode::Ru];
    assert!(matches!(HttpServer::new(config), Err(ServerError::Config(_))));
}

#[test]
fn test_empty_bypass_prefix_is_rejected() {
    let mut config = GatewayConfig::default();
    config.bypass.api_prefix = String::new();

    match HttpServer::new(config) {
        Err(ServerError::Config(errors)) => {
            assert!(errors.iter().any(|e| e.to_string().contains("bypass.api_prefix")));
        }
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("empty bypass prefix accepted"),
    }
}
