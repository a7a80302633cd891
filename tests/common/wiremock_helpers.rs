use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a SerpAPI-shaped response body from (title, link, snippet) rows.
pub fn serp_response(results: &[(&str, &str, &str)]) -> serde_json::Value {
    let organic: Vec<serde_json::Value> = results
        .iter()
        .map(|(title, link, snippet)| {
            serde_json::json!({
                "title": title,
                "link": link,
                "snippet": snippet,
            })
        })
        .collect();

    serde_json::json!({
        "search_metadata": { "status": "Success" },
        "organic_results": organic,
    })
}

/// Mounts a mock for one search query on an existing server.
///
/// Matches GET `/search.json` with the `q` parameter equal to `query` and
/// responds with the given organic results.
pub async fn mount_serp_query(server: &MockServer, query: &str, results: &[(&str, &str, &str)]) {
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", query))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serp_response(results))
                .insert_header("content-type", "application/json"),
        )
        .mount(server)
        .await;
}

/// Creates a mock search provider that returns the given results for a
/// single query.
pub async fn mock_serp_server(query: &str, results: &[(&str, &str, &str)]) -> MockServer {
    let server = MockServer::start().await;
    mount_serp_query(&server, query, results).await;
    server
}

/// Creates a mock server that returns the specified HTTP error status code
/// for every request.
pub async fn mock_error_server(status_code: u16) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status_code))
        .mount(&server)
        .await;

    server
}

/// Creates a mock server that delays responses to simulate network
/// timeouts.
pub async fn mock_timeout_server(delay_ms: u64) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serp_response(&[]))
                .set_delay(Duration::from_millis(delay_ms)),
        )
        .mount(&server)
        .await;

    server
}

/// Creates a mock server that returns a 200 with a non-JSON body.
pub async fn mock_malformed_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>not json</html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    server
}
