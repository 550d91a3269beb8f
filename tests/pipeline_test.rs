use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ymdl::catalog;
use ymdl::content;
use ymdl::error::Error;
use ymdl::pipeline::Downloader;
use ymdl::transport::{RetryPolicy, Transport};

// Transport pointed at the mock catalog, with a shrunken backoff so retry
// paths stay fast
fn test_transport(base: &str) -> Transport {
    Transport::with_options(
        "test-token",
        base,
        RetryPolicy {
            max_attempts: 3,
            backoff_factor: 0.001,
        },
    )
    .expect("transport")
}

fn album_json() -> serde_json::Value {
    serde_json::json!({
        "result": {
            "title": "Night Drive",
            "year": 2021,
            "artists": [{ "name": "Neon City" }]
        }
    })
}

#[tokio::test]
async fn transport_sends_credential_and_retries_transient_statuses() {
    let server = MockServer::start().await;

    // Two transient failures, then success; the client must also present
    // the OAuth credential and its fixed user-agent on every attempt
    Mock::given(method("GET"))
        .and(path("/albums/1"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/albums/1"))
        .and(header("Authorization", "OAuth test-token"))
        .and(header("User-Agent", "Yandex-Music-API"))
        .respond_with(ResponseTemplate::new(200).set_body_json(album_json()))
        .expect(1)
        .mount(&server)
        .await;

    let transport = test_transport(&server.uri());
    let album = catalog::albums::get_album(&transport, "1").await.unwrap();
    assert_eq!(album.title.as_deref(), Some("Night Drive"));
}

#[tokio::test]
async fn transport_surfaces_last_status_once_budget_is_exhausted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/albums/2"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let transport = test_transport(&server.uri());
    let err = catalog::albums::get_album(&transport, "2")
        .await
        .expect_err("retry budget should not mask the failure");

    match err {
        Error::Status(status) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected a status error, got {other}"),
    }
}

#[tokio::test]
async fn absent_track_fails_without_creating_a_directory() {
    let server = MockServer::start().await;

    // The lookup succeeds at the HTTP level but carries an empty result list
    Mock::given(method("GET"))
        .and(path("/tracks/9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let workdir = TempDir::new().unwrap();
    let download_dir = workdir.path().join("music");
    let downloader = Downloader::with_transport(test_transport(&server.uri()), download_dir.clone());

    let result = downloader.download_track("9").await;

    assert!(matches!(result, Err(Error::Absence(_))));
    assert!(
        !download_dir.exists(),
        "a failed lookup must not leave a directory behind"
    );
}

#[tokio::test]
async fn manifest_missing_signature_fails_resolution() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks/5/download-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": [{
                "codec": "mp3",
                "bitrateInKbps": 320,
                "downloadInfoUrl": format!("{}/manifest/5", server.uri())
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Manifest without the signature element
    Mock::given(method("GET"))
        .and(path("/manifest/5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<download-info><host>h</host><path>/p</path><ts>1</ts></download-info>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let transport = test_transport(&server.uri());
    let err = catalog::download::resolve(&transport, "5")
        .await
        .expect_err("incomplete manifest must fail resolution");

    assert!(matches!(err, Error::Shape(_)));
}

#[tokio::test]
async fn empty_candidate_list_is_a_definitive_absence() {
    let server = MockServer::start().await;

    // Exactly one request: a definitive absence is never retried
    Mock::given(method("GET"))
        .and(path("/tracks/6/download-info"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transport = test_transport(&server.uri());
    let err = catalog::download::resolve(&transport, "6")
        .await
        .expect_err("no candidates, no resolution");

    assert!(matches!(err, Error::Absence(_)));
}

#[tokio::test]
async fn album_batch_continues_past_failed_tracks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/albums/77"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "title": "Night Drive",
                "year": 2021,
                "artists": [{ "name": "Neon City" }],
                "cover_uri": format!("{}/album-cover.jpg", server.uri())
            }
        })))
        .mount(&server)
        .await;

    // Track listing nested under volumes, ids served as numbers
    Mock::given(method("GET"))
        .and(path("/albums/77/with-tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "title": "Night Drive",
                "artists": [{ "name": "Neon City" }],
                "volumes": [[
                    { "id": 101, "title": "First Light", "artists": [{ "name": "Neon City" }] },
                    { "id": 102, "title": "Afterglow", "artists": [{ "name": "Neon City" }] }
                ]]
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/album-cover.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"\xff\xd8\xff fake jpeg".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    // Both tracks fail resolution: candidate lists are empty
    for id in [101, 102] {
        Mock::given(method("GET"))
            .and(path(format!("/tracks/{id}/download-info")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": [] })),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let workdir = TempDir::new().unwrap();
    let download_dir = workdir.path().join("music");
    let downloader = Downloader::with_transport(test_transport(&server.uri()), download_dir.clone());

    // Per-track failures never fail the batch itself
    downloader.download_album("77").await.unwrap();

    // Directory is named from the sanitized artist/album pair and holds the
    // shared cover, but no audio since every resolution failed
    let album_dir = download_dir.join("Neon City - Night Drive");
    assert!(album_dir.is_dir());
    assert!(album_dir.join("cover.jpg").is_file());
    let mp3_count = std::fs::read_dir(&album_dir)
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .path()
                .extension()
                .is_some_and(|ext| ext == "mp3")
        })
        .count();
    assert_eq!(mp3_count, 0);

    // Tracks were attempted in catalog order
    let attempts: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .filter(|p| p.ends_with("/download-info"))
        .collect();
    assert_eq!(
        attempts,
        vec!["/tracks/101/download-info", "/tracks/102/download-info"]
    );
}

#[tokio::test]
async fn content_fetch_streams_body_to_disk() {
    let server = MockServer::start().await;

    let body = b"ID3 fake audio payload".repeat(100);
    Mock::given(method("GET"))
        .and(path("/audio/1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let workdir = TempDir::new().unwrap();
    let destination = workdir.path().join("01. First Light.mp3");

    let transport = test_transport(&server.uri());
    content::fetch_to_file(&transport, &format!("{}/audio/1", server.uri()), &destination)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&destination).unwrap(), body);
}

#[tokio::test]
async fn content_fetch_leaves_no_file_on_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/audio/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let workdir = TempDir::new().unwrap();
    let destination = workdir.path().join("gone.mp3");

    let transport = test_transport(&server.uri());
    let err = content::fetch_to_file(
        &transport,
        &format!("{}/audio/gone", server.uri()),
        &destination,
    )
    .await
    .expect_err("non-200 must not count as success");

    assert!(matches!(err, Error::Status(_)));
    assert!(!destination.exists(), "rejected fetch left a file behind");
}
