//! Playlist types

use super::ids::{PlaylistId, UserId};
use super::item_ref::CatalogItemRef;
use serde::{Deserialize, Serialize};

/// Playlist owned by a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist id
    pub id: PlaylistId,
    /// Owning user
    pub owner_id: UserId,
    /// Name, unique per owner
    pub name: String,
    /// Creation time (`SQLite` `datetime('now')` format)
    pub created_at: String,
    /// Time of the last item replacement
    pub updated_at: String,

    /// Ordered items (optional, populated when requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CatalogItemRef>>,
}

impl Playlist {
    /// Number of items, zero when the items were not loaded
    pub fn item_count(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }
}
