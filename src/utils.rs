use crate::types::Artist;

pub fn sanitize_component(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim_end()
        .to_string()
}

pub fn join_artists(artists: &[Artist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn primary_artist(artists: &[Artist]) -> String {
    artists
        .first()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| "Unknown Artist".to_string())
}

pub fn album_track_filename(index: usize, title: &str) -> String {
    format!("{index:02}. {title}.mp3").replace('/', "_")
}

pub fn single_track_filename(artist: &str, title: &str) -> String {
    format!(
        "{} - {}.mp3",
        sanitize_component(artist),
        sanitize_component(title)
    )
    .replace('/', "_")
}
