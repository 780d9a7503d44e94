//! Common test utilities for YouVersion API tests.

use serde::Serialize;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use youversion::{Language, YouVersionClient};

pub const TOKEN: &str = "test-token";

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> YouVersionClient {
    YouVersionClient::builder()
        .url(server.uri())
        .token(TOKEN)
        .language(Language::English)
        .build()
        .unwrap()
}

/// Create a successful JSON response.
pub fn mock_json<T: Serialize>(body: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Mount a mock for a GET on `resource`, expecting the API headers.
pub async fn mock_get(server: &MockServer, resource: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(resource))
        .and(header("x-youversion-developer-token", TOKEN))
        .and(header("accept", "application/json"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// A versions listing with KJV (id 1), ASV (id 12), and NIV (id 111).
#[allow(dead_code)] // Not all test files use this
pub fn versions_body() -> Value {
    json!({
        "data": [
            {
                "id": 1,
                "title": "King James Version",
                "abbreviation": "KJV",
                "local_title": "King James Version",
                "local_abbreviation": "KJV",
                "copyright_short": "Crown Copyright in UK"
            },
            {
                "id": 12,
                "title": "American Standard Version",
                "abbreviation": "ASV",
                "local_title": "American Standard Version",
                "local_abbreviation": "ASV",
                "copyright_short": "Public Domain"
            },
            {
                "id": 111,
                "title": "New International Version",
                "abbreviation": "NIV",
                "local_title": "New International Version",
                "local_abbreviation": "NIV",
                "copyright_short": "Biblica"
            }
        ]
    })
}

/// A verse of the day payload whose image template points at `image_host`.
#[allow(dead_code)] // Not all test files use this
pub fn votd_body(day: u16, image_host: &str) -> Value {
    json!({
        "day": day,
        "verse": {
            "human_reference": "Psalms 23:1",
            "text": "The LORD is my shepherd; I shall not want.",
            "html": "<p>The LORD is my shepherd; I shall not want.</p>",
            "url": "https://www.bible.com/bible/1/PSA.23.1",
            "usfms": ["PSA.23.1"]
        },
        "image": {
            "url": format!("{}/{{width}}x{{height}}/votd.jpg", image_host),
            "attribution": "© YouVersion"
        }
    })
}
