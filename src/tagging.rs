//! ID3 tag cascade and embedding.
//!
//! Tag values are merged from the track descriptor with an optional album
//! descriptor fallback, then written with lofty. Tagging is best-effort
//! throughout: a file that cannot be read or written is logged and left as
//! downloaded, never deleted or truncated.

use std::path::Path;

use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::tag::{Accessor, Tag, TagExt};

use crate::{
    Res,
    types::{Album, Track},
    utils, warning,
};

/// The concrete values written into the output file.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub year: Option<u32>,
    pub track_number: Option<u32>,
}

impl TagSet {
    /// Merges track and album metadata into the final tag values.
    ///
    /// Album title and year come from the explicit album descriptor when one
    /// is supplied (the album batch case), otherwise from the first album
    /// nested in the track descriptor; both may end up absent. The track
    /// number uses the position index when the position object is present at
    /// all, and only otherwise falls back to the legacy flat index field.
    pub fn build(track: &Track, album: Option<&Album>) -> Self {
        let album_source = album.or_else(|| track.albums.first());

        TagSet {
            title: track.title.clone(),
            artist: utils::join_artists(&track.artists),
            album: album_source
                .map(|a| a.title.clone().unwrap_or_else(|| "Unknown Album".to_string())),
            year: album_source.and_then(|a| a.year),
            track_number: match &track.track_position {
                Some(position) => Some(position.index.unwrap_or(0)),
                None => track.track_index,
            },
        }
    }
}

/// Writes `tags` into the audio file at `path`, embedding the cover image
/// when `cover_path` exists on disk at tagging time.
///
/// Failures are logged and swallowed; the audio file itself still counts as
/// successfully downloaded.
pub fn write_tags(path: &Path, tags: &TagSet, cover_path: Option<&Path>) {
    if let Err(err) = try_write(path, tags, cover_path) {
        warning!("Could not tag {}: {}", path.display(), err);
    }
}

fn try_write(path: &Path, tags: &TagSet, cover_path: Option<&Path>) -> Res<()> {
    let mut tagged_file = lofty::read_from_path(path)?;

    let tag = match tagged_file.primary_tag_mut() {
        Some(tag) => tag,
        None => {
            let tag_type = tagged_file.primary_tag_type();
            tagged_file.insert_tag(Tag::new(tag_type));
            tagged_file
                .primary_tag_mut()
                .expect("tag was just inserted")
        }
    };

    tag.set_title(tags.title.clone());
    tag.set_artist(tags.artist.clone());
    if let Some(album) = &tags.album {
        tag.set_album(album.clone());
    }
    if let Some(year) = tags.year {
        tag.set_year(year);
    }
    if let Some(number) = tags.track_number {
        tag.set_track(number);
    }

    if let Some(cover) = cover_path {
        if cover.exists() {
            let data = std::fs::read(cover)?;
            let picture =
                Picture::new_unchecked(PictureType::CoverFront, Some(MimeType::Jpeg), None, data);
            tag.push_picture(picture);
        }
    }

    tag.save_to_path(path, WriteOptions::default())?;
    Ok(())
}
