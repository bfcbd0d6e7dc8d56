use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Library entry kind as reported by the upstream `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Movie,
    Series,
    Cartoon,
    Anime,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
            Self::Cartoon => "cartoon",
            Self::Anime => "anime",
        }
    }

    /// Parse a kind filter value. Unknown strings yield `None`, which the
    /// caller treats as "no filter" rather than an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "movie" => Some(Self::Movie),
            "series" => Some(Self::Series),
            "cartoon" => Some(Self::Cartoon),
            "anime" => Some(Self::Anime),
            _ => None,
        }
    }

    /// Series-like kinds carry per-season episode metadata.
    pub fn is_series_like(self) -> bool {
        matches!(self, Self::Series | Self::Cartoon | Self::Anime)
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One library entry as returned by the upstream library API.
///
/// The same shape serves both the list endpoint (no `seasons`) and the
/// detail endpoint (`seasons` populated for series-like kinds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryItem {
    #[serde(rename = "kp_id")]
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub added_at: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub voices: Vec<String>,
    #[serde(default)]
    pub seasons_count: Option<u32>,
    #[serde(default)]
    pub episodes_count: Option<u32>,
    #[serde(default)]
    pub seasons: Vec<SeasonMeta>,
}

impl LibraryItem {
    /// Ingestion timestamp, or `None` when absent or unparseable.
    /// Malformed timestamps fall back to absent rather than erroring.
    pub fn added_at_ts(&self) -> Option<DateTime<Utc>> {
        let raw = self.added_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Rating for display; absent reads as 0.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

/// Per-season metadata nested in a detail record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonMeta {
    pub number: u32,
    #[serde(default)]
    pub episodes: Vec<EpisodeMeta>,
}

/// Per-episode voice/quality metadata. Empty or whitespace-only values
/// are treated as absent by consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeMeta {
    pub number: u32,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
}
