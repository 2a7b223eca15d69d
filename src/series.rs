//! Series records and the head/tail reshaping applied before rendering.

use crate::Episode;
use serde::{Deserialize, Serialize};

/// A series as returned by the tracker: an episode list plus whatever other
/// fields the server chose to send, carried through untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct Series {
    /// Episode list, oldest first. Absent means empty.
    #[serde(default)]
    pub episodes: Vec<Episode>,
    /// Pass-through fields (name, etc.).
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// A series as the template sees it: the original episode list split into
/// head and tail, plus the episode count.
///
/// Derived fields are computed here, once per response, and thrown away with
/// the render cycle.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesView {
    /// Original episode list, unchanged.
    pub episodes: Vec<Episode>,
    /// First episode. Omitted when the list is empty so the template sees a
    /// missing key, not a null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Episode>,
    /// Every episode after the first.
    pub tail: Vec<Episode>,
    /// Episode count of the original list.
    #[serde(rename = "numEpisodes")]
    pub num_episodes: usize,
    /// Pass-through fields, unchanged.
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl From<Series> for SeriesView {
    fn from(series: Series) -> Self {
        let num_episodes = series.episodes.len();
        let head = series.episodes.first().cloned();
        let tail = series.episodes.get(1..).unwrap_or_default().to_vec();

        Self {
            episodes: series.episodes,
            head,
            tail,
            num_episodes,
            rest: series.rest,
        }
    }
}
