//! Building a stable descriptor snapshot from a store of media dimensions.
//!
//! The engine never reads a store directly. Callers take a snapshot here,
//! substituting a placeholder for media whose size is not known yet, and
//! pass the snapshot to [`compute`](crate::compute).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::config::AlbumConfig;
use crate::geometry::scale_to_box;
use crate::media::{ItemId, MediaDescriptor, MediaKind};

/// Read-only view of intrinsic media sizes, e.g. a message store.
pub trait DimensionSource {
    /// Raw pixel size, or `None` while the media is not available.
    fn dimensions(&self, id: ItemId) -> Option<(u32, u32)>;

    /// Content type of the item.
    fn kind(&self, _id: ItemId) -> MediaKind {
        MediaKind::Photo
    }
}

/// Size substituted for an item whose dimensions are unknown or degenerate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placeholder {
    /// A 1:1 tile.
    #[default]
    Square,
    /// A previously known aspect ratio, as width × height.
    Aspect(u32, u32),
}

impl Placeholder {
    /// Placeholder pixel size at display scale: the largest size of this
    /// shape inside `max_width` × `max_row_height`, so a lone pending item
    /// gets a full-size tile. Degenerate aspects fall back to square.
    pub fn size(self, config: &AlbumConfig) -> (u32, u32) {
        let (w, h) = match self {
            Self::Aspect(w, h) if w > 0 && h > 0 => (w, h),
            _ => (1, 1),
        };
        let size = scale_to_box(w, h, config.max_width.max(1), config.max_row_height.max(1));
        (size.width, size.height)
    }
}

/// Snapshot `ids` from `source` into descriptors the engine accepts.
///
/// Missing dimensions, or dimensions with a zero side, are replaced by the
/// placeholder, sized for `config`, so the engine is never handed an
/// invalid item.
pub fn snapshot<S: DimensionSource + ?Sized>(
    source: &S,
    ids: &[ItemId],
    placeholder: Placeholder,
    config: &AlbumConfig,
) -> Vec<MediaDescriptor> {
    ids.iter()
        .map(|&id| {
            let (width, height) = match source.dimensions(id) {
                Some((w, h)) if w > 0 && h > 0 => (w, h),
                other => {
                    log::trace!("item {id}: dimensions {other:?}, using {placeholder:?}");
                    placeholder.size(config)
                }
            };
            MediaDescriptor {
                id,
                width,
                height,
                kind: source.kind(id),
            }
        })
        .collect()
}
