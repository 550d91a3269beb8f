use reqwest::StatusCode;

use crate::{
    Res,
    error::Error,
    transport::{CONTROL_TIMEOUT, Transport},
    types::{Album, ApiResponse, Track, TrackListing},
};

/// Retrieves the album descriptor for `album_id`.
///
/// A non-200 answer or an empty envelope means the album is not available;
/// both surface as errors for the caller to log.
pub async fn get_album(transport: &Transport, album_id: &str) -> Res<Album> {
    let api_url = format!(
        "{base}/albums/{id}",
        base = transport.api_base(),
        id = album_id
    );

    let response = transport.get(&api_url, CONTROL_TIMEOUT).await?;
    if response.status() != StatusCode::OK {
        return Err(Error::Status(response.status()));
    }

    let body = response.text().await?;
    let envelope: ApiResponse<Album> =
        serde_json::from_str(&body).map_err(|e| Error::Shape(e.to_string()))?;

    envelope.result.ok_or(Error::Absence("album not found"))
}

/// Retrieves the ordered track listing for `album_id`.
///
/// The service answers with one of two shapes: tracks nested under a
/// `volumes` grouping, or a flat `tracks` list. The shape is resolved here
/// into a single ordered sequence (first volume wins for the nested form);
/// a response carrying neither is a protocol-shape error, not a transient
/// failure, and is not retried.
pub async fn get_album_tracks(transport: &Transport, album_id: &str) -> Res<Vec<Track>> {
    let api_url = format!(
        "{base}/albums/{id}/with-tracks",
        base = transport.api_base(),
        id = album_id
    );

    let response = transport.get(&api_url, CONTROL_TIMEOUT).await?;
    if response.status() != StatusCode::OK {
        return Err(Error::Status(response.status()));
    }

    let body = response.text().await?;
    let envelope: ApiResponse<Album> =
        serde_json::from_str(&body).map_err(|e| Error::Shape(e.to_string()))?;
    let album = envelope.result.ok_or(Error::Absence("album not found"))?;

    let listing = match (album.volumes, album.tracks) {
        (Some(volumes), _) => TrackListing::Volumes(volumes),
        (None, Some(tracks)) => TrackListing::Flat(tracks),
        (None, None) => {
            return Err(Error::Shape(
                "album response carries neither volumes nor tracks".into(),
            ));
        }
    };

    Ok(listing.into_ordered())
}
