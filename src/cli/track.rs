use crate::{error, pipeline::Downloader, success};

pub async fn track(track_id: String) {
    let config = super::load_config().await;

    let downloader = match Downloader::new(&config) {
        Ok(d) => d,
        Err(e) => error!("Cannot initialize downloader: {}", e),
    };

    match downloader.download_track(&track_id).await {
        Ok(()) => success!("Track downloaded"),
        Err(e) => error!("Track download failed: {}", e),
    }
}
