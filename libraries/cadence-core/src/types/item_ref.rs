//! Typed references from playlists into the catalog

use super::ids::{PodcastEpisodeId, TrackId};
use crate::error::CadenceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of catalog entity a playlist item points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A library track
    Track,
    /// A podcast episode
    PodcastEpisode,
}

impl ItemKind {
    /// Short tag used in storage and in the textual reference form
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Track => "tr",
            ItemKind::PodcastEpisode => "pe",
        }
    }

    /// Parse a short tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "tr" => Some(ItemKind::Track),
            "pe" => Some(ItemKind::PodcastEpisode),
            _ => None,
        }
    }
}

/// Reference to exactly one catalog entity, used as a playlist item.
///
/// Serialized as `tr-<id>` or `pe-<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CatalogItemRef {
    /// A library track
    Track(TrackId),
    /// A podcast episode
    PodcastEpisode(PodcastEpisodeId),
}

impl CatalogItemRef {
    /// Build a reference from its stored parts. Returns `None` for a zero id.
    pub fn from_parts(kind: ItemKind, value: i64) -> Option<Self> {
        match kind {
            ItemKind::Track => TrackId::new(value).map(Self::Track),
            ItemKind::PodcastEpisode => PodcastEpisodeId::new(value).map(Self::PodcastEpisode),
        }
    }

    /// Kind of the referenced entity
    pub fn kind(&self) -> ItemKind {
        match self {
            CatalogItemRef::Track(_) => ItemKind::Track,
            CatalogItemRef::PodcastEpisode(_) => ItemKind::PodcastEpisode,
        }
    }

    /// Raw id of the referenced entity
    pub fn value(&self) -> i64 {
        match self {
            CatalogItemRef::Track(id) => id.get(),
            CatalogItemRef::PodcastEpisode(id) => id.get(),
        }
    }
}

impl From<TrackId> for CatalogItemRef {
    fn from(id: TrackId) -> Self {
        Self::Track(id)
    }
}

impl From<PodcastEpisodeId> for CatalogItemRef {
    fn from(id: PodcastEpisodeId) -> Self {
        Self::PodcastEpisode(id)
    }
}

impl fmt::Display for CatalogItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind().as_str(), self.value())
    }
}

impl FromStr for CatalogItemRef {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CadenceError::invalid_input(format!("invalid item reference {s:?}"));

        let (tag, value) = s.split_once('-').ok_or_else(invalid)?;
        let kind = ItemKind::from_tag(tag).ok_or_else(invalid)?;
        let value: i64 = value.parse().map_err(|_| invalid())?;

        Self::from_parts(kind, value).ok_or_else(invalid)
    }
}

impl From<CatalogItemRef> for String {
    fn from(item: CatalogItemRef) -> Self {
        item.to_string()
    }
}

impl TryFrom<String> for CatalogItemRef {
    type Error = CadenceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
