//! Tests for the recipe API client
//!
//! Requests go to a one-shot HTTP stub bound on loopback, so the real
//! reqwest stack (query encoding, status handling) is exercised.

use super::*;
use insta::assert_snapshot;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serve exactly one HTTP response, returning the request line received
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (format!("http://{}", addr), handle)
}

fn test_client(base_url: &str) -> RecipeClient {
    let config = ApiConfig {
        api_key: Some("test-key".to_string()),
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    };
    let http = Client::builder().no_proxy().build().unwrap();
    RecipeClient::with_http_client(&config, http).unwrap()
}

/// Helper to run async tests with a tokio runtime
fn run_async<F: std::future::Future>(f: F) -> F::Output {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");
    rt.block_on(f)
}

#[test]
fn test_from_config_without_key_is_not_configured() {
    let result = RecipeClient::from_config(&ApiConfig::default());
    assert!(matches!(result, Err(ApiError::NotConfigured(_))));
}

#[test]
fn test_from_config_with_key() {
    let config = ApiConfig {
        api_key: Some("abc".to_string()),
        request_timeout_secs: Some(5),
        ..ApiConfig::default()
    };
    let client = RecipeClient::from_config(&config).unwrap();
    assert!(format!("{:?}", client).contains("RecipeClient"));
}

#[test]
fn test_autocomplete_request_and_parse() {
    let (base_url, server) = serve_once("200 OK", r#"[{"name":"garlic"},{"name":"ginger"}]"#);
    let client = test_client(&base_url);

    let result = run_async(client.autocomplete("g", &CancellationToken::new())).unwrap();

    assert_eq!(
        result,
        vec![
            IngredientSuggestion {
                name: "garlic".to_string()
            },
            IngredientSuggestion {
                name: "ginger".to_string()
            },
        ]
    );
    assert_snapshot!(
        server.join().unwrap(),
        @"GET /food/ingredients/autocomplete?apiKey=test-key&query=g&number=5 HTTP/1.1"
    );
}

#[test]
fn test_find_by_ingredients_encodes_query() {
    let (base_url, server) = serve_once("200 OK", "[]");
    let client = test_client(&base_url);

    let result =
        run_async(client.find_by_ingredients("garlic,onion", &CancellationToken::new())).unwrap();

    assert!(result.is_empty());
    assert_snapshot!(
        server.join().unwrap(),
        @"GET /recipes/findByIngredients?apiKey=test-key&ingredients=garlic%2Conion&number=5 HTTP/1.1"
    );
}

#[test]
fn test_find_by_ingredients_parses_recipes() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"[{"id":7,"title":"Garlic Bread","image":"http://img/7.jpg","usedIngredients":[{"originalString":"1 head garlic"}]}]"#,
    );
    let client = test_client(&base_url);

    let result =
        run_async(client.find_by_ingredients("garlic", &CancellationToken::new())).unwrap();
    server.join().unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 7);
    assert_eq!(result[0].title, "Garlic Bread");
    assert_eq!(result[0].used_ingredients[0].description(), "1 head garlic");
}

#[test]
fn test_non_list_payload_is_empty() {
    let (base_url, server) = serve_once("200 OK", r#"{"status":"ok","results":5}"#);
    let client = test_client(&base_url);

    let result =
        run_async(client.find_by_ingredients("garlic", &CancellationToken::new())).unwrap();
    server.join().unwrap();

    assert!(result.is_empty());
}

#[test]
fn test_non_success_status_is_http_error() {
    let (base_url, server) = serve_once("402 Payment Required", r#"{"status":"failure"}"#);
    let client = test_client(&base_url);

    let result = run_async(client.find_by_ingredients("garlic", &CancellationToken::new()));
    server.join().unwrap();

    assert_eq!(
        result,
        Err(ApiError::Http {
            endpoint: Endpoint::FindByIngredients,
            status: 402
        })
    );
}

#[test]
fn test_invalid_json_is_parse_error() {
    let (base_url, server) = serve_once("200 OK", "<html>oops</html>");
    let client = test_client(&base_url);

    let result = run_async(client.autocomplete("garlic", &CancellationToken::new()));
    server.join().unwrap();

    assert!(matches!(
        result,
        Err(ApiError::Parse {
            endpoint: Endpoint::Autocomplete,
            ..
        })
    ));
}

#[test]
fn test_list_with_wrong_shape_is_parse_error() {
    let (base_url, server) = serve_once("200 OK", r#"[{"title":"no id"}]"#);
    let client = test_client(&base_url);

    let result = run_async(client.find_by_ingredients("garlic", &CancellationToken::new()));
    server.join().unwrap();

    assert!(matches!(result, Err(ApiError::Parse { .. })));
}

#[test]
fn test_recipe_information_request_and_parse() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"id":42,"title":"Soup","instructions":"<ol><li>Simmer.</li></ol>"}"#,
    );
    let client = test_client(&base_url);

    let detail = run_async(client.recipe_information(42, &CancellationToken::new())).unwrap();

    assert_eq!(detail.instructions(), Some("<ol><li>Simmer.</li></ol>"));
    assert_snapshot!(
        server.join().unwrap(),
        @"GET /recipes/42/information?apiKey=test-key HTTP/1.1"
    );
}

#[test]
fn test_trailing_slash_in_base_url_is_ignored() {
    let (base_url, server) = serve_once("200 OK", "{}");
    let client = test_client(&format!("{}/", base_url));

    let detail = run_async(client.recipe_information(1, &CancellationToken::new())).unwrap();

    assert_eq!(detail.instructions(), None);
    assert_snapshot!(
        server.join().unwrap(),
        @"GET /recipes/1/information?apiKey=test-key HTTP/1.1"
    );
}

#[test]
fn test_pre_cancelled_request_makes_no_call() {
    // Nothing listens here; a real request would fail with a network error
    let client = test_client("http://127.0.0.1:9");
    let token = CancellationToken::new();
    token.cancel();

    let result = run_async(client.autocomplete("garlic", &token));

    assert_eq!(result, Err(ApiError::Cancelled));
}

#[test]
fn test_connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = test_client(&format!("http://{}", addr));

    let result = run_async(client.find_by_ingredients("garlic", &CancellationToken::new()));

    match result {
        Err(err @ ApiError::Network { .. }) => assert!(err.is_user_visible()),
        other => panic!("Expected network error, got {:?}", other),
    }
}

#[test]
fn test_user_visible_errors() {
    assert!(ApiError::NotConfigured("x".to_string()).is_user_visible());
    assert!(
        ApiError::Http {
            endpoint: Endpoint::FindByIngredients,
            status: 500
        }
        .is_user_visible()
    );
    assert!(
        !ApiError::Parse {
            endpoint: Endpoint::FindByIngredients,
            message: "bad".to_string()
        }
        .is_user_visible()
    );
    assert!(!ApiError::Cancelled.is_user_visible());
    assert!(ApiError::Worker("task panicked".to_string()).is_user_visible());
}

#[test]
fn test_error_messages_name_the_endpoint() {
    let err = ApiError::Http {
        endpoint: Endpoint::Information,
        status: 404,
    };
    assert_eq!(err.to_string(), "[recipe information] HTTP error (404)");
}
