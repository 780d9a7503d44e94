//! Downloading without a destination writes into the working directory.
//!
//! Kept in its own test binary because it changes the process's current
//! directory.

mod common;

use common::{client_for, mock_get, mock_json, setup_mock_server, votd_body};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};
use youversion::DownloadOptions;

#[tokio::test]
async fn test_download_to_current_directory() {
    let server = setup_mock_server().await;
    mock_get(
        &server,
        "/verse_of_the_day/1",
        mock_json(votd_body(1, &server.uri())),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/1280x1280/votd.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"not really a jpeg".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let client = client_for(&server);
    let votd = client.get_verse_of_the_day_for(1).await.unwrap();
    let written = client
        .images()
        .download(&votd.image, DownloadOptions::default())
        .await
        .unwrap();

    let expected = std::env::current_dir().unwrap().join("psalms231.jpg");
    assert_eq!(written, expected);
    assert_eq!(std::fs::read(&expected).unwrap(), b"not really a jpeg");
}
