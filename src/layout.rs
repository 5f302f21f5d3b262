//! Computed album geometry: per-tile positions and the bounding box.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use alloc::collections::BTreeMap;

use crate::geometry::Size;
use crate::media::ItemId;

/// Which sides of the album's bounding box a tile touches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

/// Outer corners of a tile, i.e. corners that coincide with a corner of the
/// album and get rounded by the renderer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Corners {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl Edges {
    pub fn corners(&self) -> Corners {
        Corners {
            top_left: self.top && self.left,
            top_right: self.top && self.right,
            bottom_left: self.bottom && self.left,
            bottom_right: self.bottom && self.right,
        }
    }
}

/// Placement of one tile in album-local coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Index of the first row the tile occupies.
    pub row: u32,
    /// Number of rows the tile spans (more than one only for a tall anchor column).
    pub row_span: u32,
    pub first_in_row: bool,
    pub last_in_row: bool,
    pub edges: Edges,
}

impl Position {
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn corners(&self) -> Corners {
        self.edges.corners()
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Whether the two tiles share any pixel.
    pub fn overlaps(&self, other: &Position) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// How two tiles share a box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PairLayout {
    /// One row, common height.
    SideBySide,
    /// One column, full width each.
    Stacked,
}

/// Which convention produced a layout.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arrangement {
    Single,
    Pair(PairLayout),
    /// A wide end item takes a full row; the other two follow the pair rule.
    AnchorRow {
        anchor_first: bool,
        pair: PairLayout,
    },
    /// A tall end item takes a full-height column beside the stacked pair.
    AnchorColumn { anchor_first: bool },
    /// One full-width tile above a row of three.
    OneOverThree,
    /// Two rows of two.
    Grid,
    /// Generic row balancing, with the number of tiles per row.
    Balanced { rows: Vec<usize> },
}

/// Pixels a clamped row could not honor while keeping aspect ratios.
///
/// For a row clamped to the configured height bounds this is residual
/// width: positive when the tiles at the clamped height would fall short of
/// the row width, negative when they would overshoot. The engine absorbs it
/// by stretching widths proportionally.
///
/// For a row whose solved height exceeds the largest tile extent the engine
/// emits, it is the height cut off, always positive.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowDeviation {
    pub row: u32,
    pub residual: f64,
}

/// The result of one layout computation. Immutable once returned.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupedLayout {
    /// Item identities in input (draw) order.
    pub items: Vec<ItemId>,
    /// Exactly one entry per item.
    pub positions: BTreeMap<ItemId, Position>,
    pub total_width: u32,
    pub total_height: u32,
    pub arrangement: Arrangement,
    /// Rows whose height had to be clamped.
    pub deviations: Vec<RowDeviation>,
}

impl GroupedLayout {
    pub fn position(&self, id: ItemId) -> Option<&Position> {
        self.positions.get(&id)
    }

    /// Items paired with their positions, in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Position)> + '_ {
        self.items
            .iter()
            .filter_map(|id| self.positions.get(id).map(|p| (*id, p)))
    }

    pub fn size(&self) -> Size {
        Size::new(self.total_width, self.total_height)
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.total_width as f64 / self.total_height as f64
    }

    /// Number of rows.
    pub fn row_count(&self) -> u32 {
        self.positions
            .values()
            .map(|p| p.row + p.row_span)
            .max()
            .unwrap_or(0)
    }

    /// Items whose first row is `row`, left to right.
    pub fn row(&self, row: u32) -> Vec<ItemId> {
        let mut ids: Vec<(u32, ItemId)> = self
            .iter()
            .filter(|(_, p)| p.row == row)
            .map(|(id, p)| (p.x, id))
            .collect();
        ids.sort_by_key(|&(x, _)| x);
        ids.into_iter().map(|(_, id)| id).collect()
    }

    /// Largest absolute residual over all clamped rows, zero when none.
    pub fn max_deviation(&self) -> f64 {
        self.deviations
            .iter()
            .map(|d| d.residual.abs())
            .fold(0.0, f64::max)
    }
}
