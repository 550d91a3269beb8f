use std::path::{Path, PathBuf};

use reqwest::StatusCode;

use crate::{
    Res,
    error::Error,
    transport::{CONTROL_TIMEOUT, Transport},
};

/// File name the cover is stored under, at most once per directory.
pub const COVER_FILENAME: &str = "cover.jpg";

const COVER_SIZE: &str = "1000x1000";
const COVER_REFERER: &str = "https://music.yandex.ru/";
const COVER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Resolves a cover-art URI variant into a concrete image URL.
///
/// Already-absolute URLs pass through unmodified; templated host paths get
/// the `%%` size placeholder replaced with `1000x1000` and an `https://`
/// prefix.
pub fn cover_url(uri: &str) -> String {
    if uri.starts_with("http") {
        uri.to_string()
    } else {
        format!("https://{}", uri.replace("%%", COVER_SIZE))
    }
}

/// Downloads the cover image into `directory` as `cover.jpg`.
///
/// The cover host rejects requests without a referer, so this call overrides
/// the default header set with the web player referer and a browser-like
/// user-agent. Any failure is reported to the caller, which logs it and
/// proceeds without embedded art.
pub async fn download_cover(
    transport: &Transport,
    cover_uri: &str,
    directory: &Path,
) -> Res<PathBuf> {
    let url = cover_url(cover_uri);

    let response = transport
        .get_with_headers(
            &url,
            CONTROL_TIMEOUT,
            &[
                ("Referer", COVER_REFERER),
                ("User-Agent", COVER_USER_AGENT),
            ],
        )
        .await?;
    if response.status() != StatusCode::OK {
        return Err(Error::Status(response.status()));
    }

    let bytes = response.bytes().await?;
    let cover_path = directory.join(COVER_FILENAME);
    async_fs::write(&cover_path, &bytes).await?;
    Ok(cover_path)
}
