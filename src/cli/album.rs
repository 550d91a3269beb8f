use tabled::{Table, Tabled};

use crate::{
    catalog, error,
    pipeline::Downloader,
    transport::Transport,
    utils,
};

#[derive(Tabled)]
struct TrackRow {
    #[tabled(rename = "#")]
    number: String,
    title: String,
    artists: String,
}

pub async fn album(album_id: String, list_only: bool) {
    let config = super::load_config().await;

    if list_only {
        list_tracks(&config.token, &album_id).await;
        return;
    }

    let downloader = match Downloader::new(&config) {
        Ok(d) => d,
        Err(e) => error!("Cannot initialize downloader: {}", e),
    };

    if let Err(e) = downloader.download_album(&album_id).await {
        error!("Album download failed: {}", e);
    }
}

async fn list_tracks(token: &str, album_id: &str) {
    let transport = match Transport::new(token) {
        Ok(t) => t,
        Err(e) => error!("Cannot initialize transport: {}", e),
    };

    let pb = super::spinner("Fetching album tracks...");
    let album = catalog::albums::get_album(&transport, album_id).await;
    let tracks = catalog::albums::get_album_tracks(&transport, album_id).await;
    pb.finish_and_clear();

    let (album, tracks) = match (album, tracks) {
        (Ok(album), Ok(tracks)) => (album, tracks),
        (Err(e), _) | (_, Err(e)) => error!("Cannot fetch album {}: {}", album_id, e),
    };

    let rows: Vec<TrackRow> = tracks
        .iter()
        .enumerate()
        .map(|(index, track)| TrackRow {
            number: format!("{:02}", index + 1),
            title: track.title.clone(),
            artists: utils::join_artists(&track.artists),
        })
        .collect();

    println!(
        "{} - {}\n{}",
        utils::primary_artist(&album.artists),
        album.title.as_deref().unwrap_or("Unknown Album"),
        Table::new(rows)
    );
}
