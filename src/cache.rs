//! Caller-owned memo of the most recent album layout.
//!
//! An album view recomputes its layout when the ordered item list changes or
//! when an item's content changes (a placeholder replaced by loaded media),
//! and never for anything else such as selection state. The cache key is
//! therefore the ordered ids plus a content version the owner bumps on
//! content updates, plus the configuration.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::config::AlbumConfig;
use crate::engine::compute;
use crate::error::AlbumError;
use crate::layout::GroupedLayout;
use crate::media::{ItemId, MediaDescriptor};

#[derive(Clone, Debug, PartialEq)]
struct CacheKey {
    ids: Vec<ItemId>,
    version: u64,
    config: AlbumConfig,
}

impl CacheKey {
    fn matches(&self, items: &[MediaDescriptor], version: u64, config: &AlbumConfig) -> bool {
        self.version == version
            && self.config == *config
            && self.ids.len() == items.len()
            && self.ids.iter().zip(items).all(|(id, m)| *id == m.id)
    }
}

/// Holds the last computed layout and the key it was computed for.
///
/// # Example
///
/// ```
/// use albumlayout::{AlbumConfig, LayoutCache, MediaDescriptor};
///
/// let mut cache = LayoutCache::new();
/// let config = AlbumConfig::default();
/// let items = [MediaDescriptor::new(1, 640, 480), MediaDescriptor::new(2, 480, 640)];
///
/// cache.get_or_compute(&items, 0, &config).unwrap();
/// cache.get_or_compute(&items, 0, &config).unwrap();
/// assert_eq!(cache.computations(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayoutCache {
    entry: Option<(CacheKey, GroupedLayout)>,
    computations: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached layout if `items` (by id and order), `version`, and
    /// `config` match the last computation; otherwise recompute and replace.
    ///
    /// On error the previous entry is dropped, so a stale layout is never
    /// served for an input that failed.
    pub fn get_or_compute(
        &mut self,
        items: &[MediaDescriptor],
        version: u64,
        config: &AlbumConfig,
    ) -> Result<&GroupedLayout, AlbumError> {
        let entry = match self.entry.take() {
            Some(entry) if entry.0.matches(items, version, config) => entry,
            _ => {
                let layout = compute(items, config)?;
                self.computations += 1;
                log::trace!("album layout recomputed (version {version})");
                let key = CacheKey {
                    ids: items.iter().map(|m| m.id).collect(),
                    version,
                    config: *config,
                };
                (key, layout)
            }
        };
        Ok(&self.entry.insert(entry).1)
    }

    /// The cached layout, if any.
    pub fn get(&self) -> Option<&GroupedLayout> {
        self.entry.as_ref().map(|(_, layout)| layout)
    }

    /// Drop the cached layout.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// How many times a layout has actually been computed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
