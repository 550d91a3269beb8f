use serde::{Deserialize, Deserializer};

/// Top-level envelope every catalog endpoint wraps its payload in.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cover {
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackPosition {
    pub index: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub title: Option<String>,
    pub year: Option<u32>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub cover_uri: Option<String>,
    pub og_image: Option<String>,
    pub cover: Option<Cover>,
    // only present on the /with-tracks shape
    pub volumes: Option<Vec<Vec<Track>>>,
    pub tracks: Option<Vec<Track>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(rename = "trackPosition")]
    pub track_position: Option<TrackPosition>,
    #[serde(rename = "trackIndex")]
    pub track_index: Option<u32>,
    pub cover_uri: Option<String>,
}

/// One encoding offered for a track by the download-info endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadCandidate {
    pub codec: String,
    #[serde(rename = "bitrateInKbps", default)]
    pub bitrate_in_kbps: u32,
    #[serde(rename = "downloadInfoUrl")]
    pub download_info_url: String,
}

/// Signing parameters served as a small XML document behind the descriptor
/// URL. All four fields are mandatory; a manifest missing any of them is
/// rejected before URL construction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "download-info")]
pub struct DownloadManifest {
    pub host: String,
    pub path: String,
    #[serde(rename = "ts")]
    pub timestamp: String,
    #[serde(rename = "s")]
    pub signature: String,
}

/// Final signed content URL plus the codec it was signed for. Signatures are
/// short-lived, so a resolved URL is fetched once and discarded.
#[derive(Debug, Clone)]
pub struct ResolvedUrl {
    pub url: String,
    pub codec: String,
}

/// The two shapes the album track listing arrives in. Resolved to a flat
/// ordered list once at the catalog boundary; downstream code never inspects
/// the shape again.
#[derive(Debug, Clone)]
pub enum TrackListing {
    Volumes(Vec<Vec<Track>>),
    Flat(Vec<Track>),
}

impl TrackListing {
    /// Flattens to the ordered track sequence. For the nested shape the
    /// first volume carries the album's track order.
    pub fn into_ordered(self) -> Vec<Track> {
        match self {
            TrackListing::Volumes(volumes) => volumes.into_iter().next().unwrap_or_default(),
            TrackListing::Flat(tracks) => tracks,
        }
    }
}

// Track ids arrive as JSON numbers from some endpoints and strings from
// others; normalize to a string either way.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n.to_string(),
        Raw::Str(s) => s,
    })
}
