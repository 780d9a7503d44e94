//! Tests for image actions.

mod common;

use common::{client_for, mock_get, mock_json, setup_mock_server, votd_body};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use youversion::{DownloadOptions, Error, Image, VerseOfTheDay};

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0xFF, 0xD9];

/// Fetch a verse of the day whose image is served by the same mock server.
async fn verse_of_the_day(server: &MockServer) -> VerseOfTheDay {
    mock_get(
        server,
        "/verse_of_the_day/1",
        mock_json(votd_body(1, &server.uri())),
    )
    .await;
    client_for(server).get_verse_of_the_day_for(1).await.unwrap()
}

async fn mock_image(server: &MockServer, image_path: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(image_path))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_image_urls_from_response() {
    let server = setup_mock_server().await;
    let votd = verse_of_the_day(&server).await;

    let url = votd.image.square_url(256).unwrap();
    assert!(url.contains("256"));
    assert_eq!(url, format!("{}/256x256/votd.jpg", server.uri()));

    let err = votd.image.square_url(1281).unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_protocol_relative_image_url() {
    let server = setup_mock_server().await;
    mock_get(
        &server,
        "/verse_of_the_day/1",
        mock_json(votd_body(1, "//imageproxy.youversionapi.com")),
    )
    .await;

    let votd = client_for(&server).get_verse_of_the_day_for(1).await.unwrap();
    assert_eq!(
        votd.image.url(320, 240).unwrap(),
        "https://imageproxy.youversionapi.com/320x240/votd.jpg"
    );
}

#[tokio::test]
async fn test_download_to_path() {
    let server = setup_mock_server().await;
    let votd = verse_of_the_day(&server).await;
    mock_image(
        &server,
        "/512x512/votd.jpg",
        ResponseTemplate::new(200).set_body_bytes(JPEG_BYTES),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("thumb.jpg");

    let client = client_for(&server);
    let written = client
        .images()
        .download(&votd.image, DownloadOptions::new().square(512).path(&target))
        .await
        .unwrap();

    assert_eq!(written, target);
    assert_eq!(std::fs::read(&target).unwrap(), JPEG_BYTES);
}

#[tokio::test]
async fn test_download_default_name_in_directory() {
    let server = setup_mock_server().await;
    let votd = verse_of_the_day(&server).await;
    mock_image(
        &server,
        "/1280x1280/votd.jpg",
        ResponseTemplate::new(200).set_body_bytes(JPEG_BYTES),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let client = client_for(&server);
    let written = client
        .images()
        .download(&votd.image, DownloadOptions::new().directory(dir.path()))
        .await
        .unwrap();

    assert_eq!(written, dir.path().join("psalms231.jpg"));
    assert!(std::fs::metadata(&written).unwrap().len() > 0);
}

#[tokio::test]
async fn test_download_unwritable_target() {
    let server = setup_mock_server().await;
    let votd = verse_of_the_day(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("missing").join("votd.jpg");

    let client = client_for(&server);
    let err = client
        .images()
        .download(&votd.image, DownloadOptions::new().path(&target))
        .await
        .unwrap_err();

    assert!(err.is_io(), "expected I/O error, got: {}", err);
    assert!(!target.exists());
}

#[tokio::test]
async fn test_download_onto_directory_leaves_no_partial_file() {
    let server = setup_mock_server().await;
    let votd = verse_of_the_day(&server).await;
    mock_image(
        &server,
        "/1280x1280/votd.jpg",
        ResponseTemplate::new(200).set_body_bytes(JPEG_BYTES),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("occupied");
    std::fs::create_dir(&target).unwrap();

    let client = client_for(&server);
    let err = client
        .images()
        .download(&votd.image, DownloadOptions::new().path(&target))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Io(_)), "got: {}", err);
    // Only the pre-existing directory remains; the temp file was cleaned up
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert!(target.is_dir());
}

#[tokio::test]
async fn test_download_server_error() {
    let server = setup_mock_server().await;
    let votd = verse_of_the_day(&server).await;
    mock_image(&server, "/1280x1280/votd.jpg", ResponseTemplate::new(500)).await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("votd.jpg");

    let client = client_for(&server);
    let err = client
        .images()
        .download(&votd.image, DownloadOptions::new().path(&target))
        .await
        .unwrap_err();

    assert!(err.is_remote());
    assert!(!target.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_download_invalid_size() {
    let server = setup_mock_server().await;
    let image = Image::new(format!("{}/{{width}}x{{height}}/votd.jpg", server.uri()), "", "John 3:16");

    let client = client_for(&server);
    let err = client
        .images()
        .download(&image, DownloadOptions::new().size(2000, 100))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidImageSize(2000)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
