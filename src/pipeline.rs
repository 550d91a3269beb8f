//! Orchestration of album and single-track downloads.
//!
//! One [`Downloader`] is built from the loaded configuration and drives the
//! whole run over a single shared transport. Tracks are processed strictly
//! sequentially in catalog order; a failed track is logged and never stops
//! the rest of the batch, while a failed album/track lookup aborts only that
//! top-level request.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res, catalog,
    config::Config,
    content,
    error::Error,
    info,
    tagging::{self, TagSet},
    transport::Transport,
    types::{Album, Track},
    utils, warning,
};

pub struct Downloader {
    transport: Transport,
    download_dir: PathBuf,
}

impl Downloader {
    /// Builds a downloader from an explicit configuration value.
    pub fn new(config: &Config) -> Res<Self> {
        Ok(Self::with_transport(
            Transport::new(&config.token)?,
            config.download_dir.clone(),
        ))
    }

    /// Builds a downloader over a pre-configured transport; used by tests to
    /// point the pipeline at a local catalog.
    pub fn with_transport(transport: Transport, download_dir: PathBuf) -> Self {
        Self {
            transport,
            download_dir,
        }
    }

    /// Downloads a whole album: directory per album, shared cover, tracks
    /// numbered in catalog order.
    pub async fn download_album(&self, album_id: &str) -> Res<()> {
        let album = catalog::albums::get_album(&self.transport, album_id).await?;
        let tracks = catalog::albums::get_album_tracks(&self.transport, album_id).await?;
        if tracks.is_empty() {
            return Err(Error::Absence("album has no tracks"));
        }

        let artist = utils::primary_artist(&album.artists);
        let title = album
            .title
            .clone()
            .unwrap_or_else(|| "Unknown Album".to_string());

        let album_dir = self.download_dir.join(format!(
            "{} - {}",
            utils::sanitize_component(&artist),
            utils::sanitize_component(&title)
        ));
        async_fs::create_dir_all(&album_dir).await?;

        info!("Found album: {artist} - {title}");
        info!("Found {} tracks. Starting download...", tracks.len());

        match album_cover_uri(&album) {
            Some(uri) => self.fetch_cover(uri, &album_dir).await,
            None => warning!("No cover available for this album"),
        }
        let cover_file = album_dir.join(catalog::covers::COVER_FILENAME);

        let pb = ProgressBar::new(tracks.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=> "),
        );

        for (index, track) in tracks.iter().enumerate() {
            // the numeric prefix reflects catalog order, failures included
            let file_name = utils::album_track_filename(index + 1, &track.title);
            let destination = album_dir.join(&file_name);
            pb.set_message(track.title.clone());

            if let Err(err) = self
                .download_one(track, Some(&album), &destination, &cover_file)
                .await
            {
                pb.suspend(|| warning!("Skipping {}: {}", track.title, err));
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        info!("Album saved under {}", album_dir.display());
        Ok(())
    }

    /// Downloads a single track into an artist-named directory.
    pub async fn download_track(&self, track_id: &str) -> Res<()> {
        let track = catalog::tracks::get_track(&self.transport, track_id).await?;

        let artist = utils::primary_artist(&track.artists);
        let track_dir = self.download_dir.join(utils::sanitize_component(&artist));
        async_fs::create_dir_all(&track_dir).await?;

        info!("Found track: {artist} - {}", track.title);

        match track_cover_uri(&track) {
            Some(uri) => self.fetch_cover(uri, &track_dir).await,
            None => warning!("No cover available for this track"),
        }
        let cover_file = track_dir.join(catalog::covers::COVER_FILENAME);

        let destination = track_dir.join(utils::single_track_filename(&artist, &track.title));
        self.download_one(&track, None, &destination, &cover_file)
            .await
    }

    /// Shared single-track routine: resolve, stream, tag.
    ///
    /// The destination path is fully determined by the caller before any
    /// network I/O for the track starts. Tagging is best-effort and never
    /// fails the download.
    async fn download_one(
        &self,
        track: &Track,
        album: Option<&Album>,
        destination: &Path,
        cover_file: &Path,
    ) -> Res<()> {
        let resolved = catalog::download::resolve(&self.transport, &track.id).await?;
        content::fetch_to_file(&self.transport, &resolved.url, destination).await?;
        tagging::write_tags(destination, &TagSet::build(track, album), Some(cover_file));
        Ok(())
    }

    async fn fetch_cover(&self, uri: &str, directory: &Path) {
        match catalog::covers::download_cover(&self.transport, uri, directory).await {
            Ok(_) => info!("Downloaded cover"),
            Err(err) => warning!("Cover download failed: {err}"),
        }
    }
}

// first non-empty source wins: explicit field, alternate image, nested cover
fn album_cover_uri(album: &Album) -> Option<&str> {
    non_empty(album.cover_uri.as_deref())
        .or_else(|| non_empty(album.og_image.as_deref()))
        .or_else(|| non_empty(album.cover.as_ref().and_then(|c| c.uri.as_deref())))
}

// the track's own field, then its first album's cover sources
fn track_cover_uri(track: &Track) -> Option<&str> {
    non_empty(track.cover_uri.as_deref()).or_else(|| {
        track.albums.first().and_then(|album| {
            non_empty(album.cover_uri.as_deref())
                .or_else(|| non_empty(album.cover.as_ref().and_then(|c| c.uri.as_deref())))
        })
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
