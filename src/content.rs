//! Streaming download of a resolved content URL to a local file.

use std::path::Path;

use reqwest::StatusCode;
use tokio::{
    fs,
    io::{AsyncWriteExt, BufWriter},
};

use crate::{
    Res,
    error::Error,
    transport::{CONTENT_TIMEOUT, Transport},
};

// write-side buffer; keeps memory bounded while the body streams in
const WRITE_BUFFER: usize = 16 * 1024;

/// Streams the response body at `url` into `destination`.
///
/// Only a 200 status counts as success. Each call starts from byte zero;
/// there is no resumption. On any failure the half-written destination file
/// is removed, so a failed fetch never leaves partial audio behind.
pub async fn fetch_to_file(transport: &Transport, url: &str, destination: &Path) -> Res<()> {
    match stream_body(transport, url, destination).await {
        Ok(()) => Ok(()),
        Err(err) => {
            let _ = fs::remove_file(destination).await;
            Err(err)
        }
    }
}

async fn stream_body(transport: &Transport, url: &str, destination: &Path) -> Res<()> {
    let mut response = transport.get(url, CONTENT_TIMEOUT).await?;
    if response.status() != StatusCode::OK {
        return Err(Error::Status(response.status()));
    }

    let file = fs::File::create(destination).await?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER, file);
    while let Some(chunk) = response.chunk().await? {
        writer.write_all(&chunk).await?;
    }
    writer.flush().await?;
    Ok(())
}
