//! Shared fixtures for the cube-overview integration tests.
//!
//! Stands up wiremock mounts for the CubeCobra CSV download and the
//! Scryfall search endpoint, and builds a generator pointed at the mock
//! server with a temp-dir cache.

use std::path::Path;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cube_overview::OverviewGenerator;

pub const CUBE_ID: &str = "test-cube";

/// Catalog CSV with the columns the generator consumes plus a few extras,
/// the way CubeCobra exports them.
pub const SAMPLE_CSV: &str = "\
name,CMC,Type,Color,Set,Collector Number\n\
Card A,1,Instant,r,XYZ,XYZ-7\n\
Lightning Bolt,1,Instant,r,lea,161\n\
Counterspell,2,Instant,u,a25,50\n";

/// Mount the catalog CSV download on the mock server.
pub async fn mount_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/cube/download/csv/{}", CUBE_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_CSV))
        .mount(server)
        .await;
}

/// Minimal Scryfall card record for mock search responses.
pub fn scryfall_card_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "set": "xyz",
        "collector_number": "7",
    })
}

/// Scryfall list envelope wrapping the given records.
pub fn search_response_json(cards: &[serde_json::Value]) -> serde_json::Value {
    serde_json::json!({
        "object": "list",
        "total_cards": cards.len(),
        "data": cards,
    })
}

/// Mount a search response for one exact query string.
pub async fn mount_search(server: &MockServer, query: &str, cards: &[serde_json::Value]) {
    Mock::given(method("GET"))
        .and(path("/cards/search"))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_response_json(cards)))
        .mount(server)
        .await;
}

/// Build a generator pointed at the mock server with a temp-dir cache.
pub fn generator_for(server_uri: &str, cache_dir: &Path) -> OverviewGenerator {
    OverviewGenerator::builder()
        .cube_id(CUBE_ID)
        .cubecobra_base_url(server_uri)
        .scryfall_base_url(server_uri)
        .cache_dir(cache_dir)
        .build()
        .unwrap()
}
