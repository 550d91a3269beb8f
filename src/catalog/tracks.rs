use reqwest::StatusCode;

use crate::{
    Res,
    error::Error,
    transport::{CONTROL_TIMEOUT, Transport},
    types::{ApiResponse, Track},
};

/// Retrieves the track descriptor for `track_id`.
///
/// The endpoint wraps the record in a one-element list; an empty list is a
/// definitive absence.
pub async fn get_track(transport: &Transport, track_id: &str) -> Res<Track> {
    let api_url = format!(
        "{base}/tracks/{id}",
        base = transport.api_base(),
        id = track_id
    );

    let response = transport.get(&api_url, CONTROL_TIMEOUT).await?;
    if response.status() != StatusCode::OK {
        return Err(Error::Status(response.status()));
    }

    let body = response.text().await?;
    let envelope: ApiResponse<Vec<Track>> =
        serde_json::from_str(&body).map_err(|e| Error::Shape(e.to_string()))?;

    envelope
        .result
        .and_then(|mut list| {
            if list.is_empty() {
                None
            } else {
                Some(list.remove(0))
            }
        })
        .ok_or(Error::Absence("track not found"))
}
