use reqwest::StatusCode;

use crate::{
    Res,
    error::Error,
    transport::{CONTROL_TIMEOUT, Transport},
    types::{ApiResponse, DownloadCandidate, DownloadManifest, ResolvedUrl},
};

/// Resolves a track identifier into a final, single-use signed content URL.
///
/// This is the two-hop negotiation: fetch the candidate list, pick one
/// encoding, rewrite its descriptor URL, fetch the XML signing manifest
/// behind it and recombine the manifest fields into the content URL.
///
/// # Errors
///
/// An empty candidate list is a definitive absence and is not retried; a
/// non-200 on either hop or a manifest missing any required field also fails
/// the resolution. Callers treat every failure here as "could not resolve"
/// for the current track and keep going with the batch.
pub async fn resolve(transport: &Transport, track_id: &str) -> Res<ResolvedUrl> {
    let candidates = get_candidates(transport, track_id).await?;
    let candidate =
        select_candidate(&candidates).ok_or(Error::Absence("no download candidate offered"))?;

    let manifest = fetch_manifest(transport, &candidate.download_info_url).await?;

    Ok(ResolvedUrl {
        url: content_url(&manifest, &candidate.codec),
        codec: candidate.codec.clone(),
    })
}

/// Fetches the download candidates (codec/bitrate pairs) offered for a track.
pub async fn get_candidates(
    transport: &Transport,
    track_id: &str,
) -> Res<Vec<DownloadCandidate>> {
    let api_url = format!(
        "{base}/tracks/{id}/download-info",
        base = transport.api_base(),
        id = track_id
    );

    let response = transport.get(&api_url, CONTROL_TIMEOUT).await?;
    if response.status() != StatusCode::OK {
        return Err(Error::Status(response.status()));
    }

    let body = response.text().await?;
    let envelope: ApiResponse<Vec<DownloadCandidate>> =
        serde_json::from_str(&body).map_err(|e| Error::Shape(e.to_string()))?;

    Ok(envelope.result.unwrap_or_default())
}

/// Picks the encoding to download.
///
/// Prefers 320 kbps MP3 wherever it appears in the list; otherwise falls
/// back to the first listed candidate. Selection is pure and never mutates
/// the list.
pub fn select_candidate(candidates: &[DownloadCandidate]) -> Option<&DownloadCandidate> {
    candidates
        .iter()
        .find(|c| c.codec == "mp3" && c.bitrate_in_kbps == 320)
        .or_else(|| candidates.first())
}

/// Rewrites a raw descriptor URL into a fetchable absolute URL.
///
/// The service hands out descriptor URLs with `%%` standing in for a path
/// separator; the rewritten value is prefixed with `https://` (after
/// stripping any leading slash) unless it is already absolute.
pub fn descriptor_url(raw: &str) -> String {
    let rewritten = raw.replace("%%", "/");
    if rewritten.starts_with("http") {
        rewritten
    } else {
        format!("https://{}", rewritten.trim_start_matches('/'))
    }
}

/// Fetches and parses the XML signing manifest behind a descriptor URL.
async fn fetch_manifest(transport: &Transport, raw_descriptor: &str) -> Res<DownloadManifest> {
    let url = descriptor_url(raw_descriptor);

    let response = transport.get(&url, CONTROL_TIMEOUT).await?;
    if response.status() != StatusCode::OK {
        return Err(Error::Status(response.status()));
    }

    let body = response.text().await?;
    parse_manifest(&body)
}

/// Parses the manifest document.
///
/// All four fields (host, path, signature, timestamp) are mandatory; a
/// document missing any of them fails before URL construction is attempted.
pub fn parse_manifest(body: &str) -> Res<DownloadManifest> {
    quick_xml::de::from_str(body).map_err(|e| Error::Shape(format!("malformed manifest: {e}")))
}

/// Builds the final signed content URL.
///
/// The exact shape is `https://{host}/get-{codec}/{signature}/{timestamp}/`
/// followed by the manifest path percent-encoded with no character treated
/// as safe, separators included. The content host rejects any deviation in
/// encoding or field order.
pub fn content_url(manifest: &DownloadManifest, codec: &str) -> String {
    format!(
        "https://{host}/get-{codec}/{signature}/{timestamp}/{path}",
        host = manifest.host,
        codec = codec,
        signature = manifest.signature,
        timestamp = manifest.timestamp,
        path = urlencoding::encode(&manifest.path),
    )
}
