//! Media descriptors: the immutable per-computation input to the engine.

/// Opaque, stable identity of one album item (typically a message id).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u64);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Content type of an album item.
///
/// Geometry never depends on the kind; it only tells the rendering layer
/// whether the tile is drawn inside a message bubble.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaKind {
    #[default]
    Photo,
    Video,
    Animation,
    Sticker,
    /// Round video message.
    VideoNote,
}

impl MediaKind {
    /// Whether the item is drawn with bubble chrome around it.
    ///
    /// Stickers and video notes float without a bubble.
    pub fn has_chrome(self) -> bool {
        !matches!(self, Self::Sticker | Self::VideoNote)
    }
}

/// One item of an album with its intrinsic pixel size.
///
/// The aspect ratio is always derived from `width`/`height` so it cannot
/// drift out of sync with them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaDescriptor {
    pub id: ItemId,
    /// Intrinsic width in pixels. Must be > 0.
    pub width: u32,
    /// Intrinsic height in pixels. Must be > 0.
    pub height: u32,
    pub kind: MediaKind,
}

impl MediaDescriptor {
    /// A photo descriptor.
    pub fn new(id: u64, width: u32, height: u32) -> Self {
        Self {
            id: ItemId(id),
            width,
            height,
            kind: MediaKind::Photo,
        }
    }

    /// Set the media kind.
    pub fn kind(mut self, kind: MediaKind) -> Self {
        self.kind = kind;
        self
    }

    /// Width / height. Only meaningful when both dimensions are non-zero.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Both dimensions are non-zero.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
