//! Album layout computation.
//!
//! Small albums (1–4 items) follow fixed, hand-tuned conventions; larger
//! albums are split into rows by [`balance`](crate::balance). Every
//! multi-item layout fills the configured width exactly, so each band of
//! tiles goes through [`distribute`](crate::distribute) for its integer
//! widths.
//!
//! # Example
//!
//! ```
//! use albumlayout::{AlbumConfig, MediaDescriptor, compute};
//!
//! let items = [MediaDescriptor::new(1, 800, 800), MediaDescriptor::new(2, 800, 800)];
//! let layout = compute(&items, &AlbumConfig::new(320)).unwrap();
//!
//! assert_eq!(layout.total_width, 320);
//! assert_eq!(layout.position(items[0].id).unwrap().width, 159);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use alloc::collections::BTreeMap;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::balance::{fill_height, partition_rows};
use crate::config::AlbumConfig;
use crate::distribute::distribute;
use crate::error::{AlbumError, InputError};
use crate::geometry::{MAX_EXTENT, fit_within, to_px};
use crate::layout::{Arrangement, Edges, GroupedLayout, PairLayout, Position, RowDeviation};
use crate::media::MediaDescriptor;

/// Compute the layout of an album.
///
/// Pure and deterministic: identical inputs always produce an identical
/// layout, and nothing is retained between calls.
pub fn compute(
    items: &[MediaDescriptor],
    config: &AlbumConfig,
) -> Result<GroupedLayout, AlbumError> {
    validate_items(items)?;
    config.validate()?;

    let ratios: Vec<f64> = items.iter().map(MediaDescriptor::aspect_ratio).collect();
    let mut board = Board::new(config);

    let arrangement = match items.len() {
        1 => {
            let item = &items[0];
            let size = fit_within(item.width, item.height, config.max_width, config.max_row_height);
            board.push(0, 0, 0, size.width, size.height, 0, 1);
            board.width = size.width;
            board.height = size.height;
            Arrangement::Single
        }
        2 => {
            let pair = choose_pair(ratios[0], ratios[1], config.max_width, config);
            let (height, _) = board.place_pair([0, 1], &ratios, 0, config.max_width, 0, 0, pair);
            board.height = height;
            Arrangement::Pair(pair)
        }
        3 => board.place_three(&ratios),
        4 => board.place_four(&ratios),
        _ => board.place_balanced(&ratios),
    };

    log::debug!(
        "album of {} items -> {:?}, {}x{}",
        items.len(),
        arrangement,
        board.width,
        board.height
    );
    for d in &board.deviations {
        log::debug!("row {} clamped, residual {:.2}px", d.row, d.residual);
    }

    Ok(board.finish(items, arrangement))
}

fn validate_items(items: &[MediaDescriptor]) -> Result<(), InputError> {
    if items.is_empty() {
        return Err(InputError::Empty);
    }
    for (index, item) in items.iter().enumerate() {
        if !item.is_valid() {
            return Err(InputError::ZeroDimension {
                index,
                id: item.id,
                width: item.width,
                height: item.height,
            });
        }
        if items[..index].iter().any(|other| other.id == item.id) {
            return Err(InputError::DuplicateId { id: item.id });
        }
    }
    Ok(())
}

/// Sum of stacked extents, saturating instead of wrapping.
fn span(parts: &[u32]) -> u32 {
    parts.iter().fold(0u32, |acc, &p| acc.saturating_add(p))
}

// ============================================================================
// Balance test shared by the 2-, 3- and 4-item conventions
// ============================================================================

/// Whether an aggregate ratio lies inside the widened balanced window.
fn is_balanced(aggregate: f64, config: &AlbumConfig) -> bool {
    aggregate >= config.min_balanced_ratio / config.balance_tolerance
        && aggregate <= config.max_balanced_ratio * config.balance_tolerance
}

/// Log distance from an aggregate ratio to the balanced window; zero inside.
fn window_distance(aggregate: f64, config: &AlbumConfig) -> f64 {
    if aggregate < config.min_balanced_ratio {
        (config.min_balanced_ratio / aggregate).ln()
    } else if aggregate > config.max_balanced_ratio {
        (aggregate / config.max_balanced_ratio).ln()
    } else {
        0.0
    }
}

/// Pick between two candidate aggregate ratios. The preferred candidate wins
/// whenever it passes the balance test, and on exact ties otherwise.
fn prefer(preferred: f64, other: f64, config: &AlbumConfig) -> bool {
    if is_balanced(preferred, config) {
        return true;
    }
    if is_balanced(other, config) {
        return false;
    }
    window_distance(preferred, config) <= window_distance(other, config)
}

fn choose_pair(r1: f64, r2: f64, width: u32, config: &AlbumConfig) -> PairLayout {
    let g = config.spacing as f64;
    let w = width as f64;
    let side = w / fill_height(&[r1, r2], width, config.spacing);
    let stacked = w / (w / r1 + g + w / r2);
    log::trace!("pair: side-by-side {side:.3}, stacked {stacked:.3}");
    if prefer(side, stacked, config) {
        PairLayout::SideBySide
    } else {
        PairLayout::Stacked
    }
}

// ============================================================================
// Board: tile accumulation and finalization
// ============================================================================

/// A placed tile before edge flags are derived.
struct Tile {
    index: usize,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    row: u32,
    row_span: u32,
}

struct Board<'a> {
    config: &'a AlbumConfig,
    tiles: Vec<Tile>,
    deviations: Vec<RowDeviation>,
    width: u32,
    height: u32,
}

impl<'a> Board<'a> {
    fn new(config: &'a AlbumConfig) -> Self {
        Self {
            config,
            tiles: Vec::new(),
            deviations: Vec::new(),
            width: config.max_width,
            height: 0,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        index: usize,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        row: u32,
        row_span: u32,
    ) {
        self.tiles.push(Tile {
            index,
            x,
            y,
            width,
            height,
            row,
            row_span,
        });
    }

    /// Round a solved tile height, cut off at [`MAX_EXTENT`]. A cut records
    /// the lost height against `row`.
    fn height_px(&mut self, exact: f64, row: u32) -> u32 {
        let px = to_px(exact);
        if px <= MAX_EXTENT {
            return px;
        }
        log::warn!("row {row}: height {exact:.0}px cut off at {MAX_EXTENT}px");
        self.deviations.push(RowDeviation {
            row,
            residual: exact - MAX_EXTENT as f64,
        });
        MAX_EXTENT
    }

    /// Place `indices` side by side in `[x, x + width)` at a common height.
    fn place_row(
        &mut self,
        indices: &[usize],
        widths: &[u32],
        x: u32,
        y: u32,
        height: u32,
        row: u32,
    ) {
        let mut cursor = x;
        for (&index, &w) in indices.iter().zip(widths) {
            self.push(index, cursor, y, w, height, row, 1);
            cursor = span(&[cursor, w, self.config.spacing]);
        }
    }

    /// Place a row that fills `width` exactly at its natural height.
    /// Returns the rounded height.
    fn place_fill_row(
        &mut self,
        indices: &[usize],
        ratios: &[f64],
        x: u32,
        width: u32,
        y: u32,
        row: u32,
    ) -> u32 {
        let row_ratios: Vec<f64> = indices.iter().map(|&i| ratios[i]).collect();
        let gaps = self.config.spacing * (indices.len() as u32 - 1);
        let widths = distribute(width - gaps, &row_ratios);
        let height = self.height_px(fill_height(&row_ratios, width, self.config.spacing), row);
        self.place_row(indices, &widths, x, y, height, row);
        height
    }

    /// Place two items in a box of `width` starting at (`x`, `y`).
    /// Returns the height used and the number of rows.
    #[allow(clippy::too_many_arguments)]
    fn place_pair(
        &mut self,
        indices: [usize; 2],
        ratios: &[f64],
        x: u32,
        width: u32,
        y: u32,
        row: u32,
        pair: PairLayout,
    ) -> (u32, u32) {
        match pair {
            PairLayout::SideBySide => {
                let height = self.place_fill_row(&indices, ratios, x, width, y, row);
                (height, 1)
            }
            PairLayout::Stacked => {
                let g = self.config.spacing;
                let h1 = self.height_px(width as f64 / ratios[indices[0]], row);
                let h2 = self.height_px(width as f64 / ratios[indices[1]], row + 1);
                self.push(indices[0], x, y, width, h1, row, 1);
                self.push(indices[1], x, span(&[y, h1, g]), width, h2, row + 1, 1);
                (span(&[h1, g, h2]), 2)
            }
        }
    }

    // ------------------------------------------------------------------------
    // Three items
    // ------------------------------------------------------------------------

    fn place_three(&mut self, ratios: &[f64]) -> Arrangement {
        // Only an end item can take a full row or column without breaking
        // reading order.
        let anchor_first = ratios[0].ln().abs() >= ratios[2].ln().abs();
        let (anchor, pair) = if anchor_first {
            (0, [1, 2])
        } else {
            (2, [0, 1])
        };

        if ratios[anchor] >= 1.0 {
            self.place_anchor_row(ratios, anchor, pair, anchor_first)
        } else {
            self.place_anchor_column(ratios, anchor, pair, anchor_first)
        }
    }

    fn place_anchor_row(
        &mut self,
        ratios: &[f64],
        anchor: usize,
        pair: [usize; 2],
        anchor_first: bool,
    ) -> Arrangement {
        let w = self.config.max_width;
        let g = self.config.spacing;
        let anchor_exact = w as f64 / ratios[anchor];
        let pair_layout = choose_pair(ratios[pair[0]], ratios[pair[1]], w, self.config);

        if anchor_first {
            let anchor_h = self.height_px(anchor_exact, 0);
            self.push(anchor, 0, 0, w, anchor_h, 0, 1);
            let pair_y = span(&[anchor_h, g]);
            let (pair_h, _) = self.place_pair(pair, ratios, 0, w, pair_y, 1, pair_layout);
            self.height = span(&[anchor_h, g, pair_h]);
        } else {
            let (pair_h, pair_rows) = self.place_pair(pair, ratios, 0, w, 0, 0, pair_layout);
            let anchor_h = self.height_px(anchor_exact, pair_rows);
            self.push(anchor, 0, span(&[pair_h, g]), w, anchor_h, pair_rows, 1);
            self.height = span(&[pair_h, g, anchor_h]);
        }
        Arrangement::AnchorRow {
            anchor_first,
            pair: pair_layout,
        }
    }

    fn place_anchor_column(
        &mut self,
        ratios: &[f64],
        anchor: usize,
        pair: [usize; 2],
        anchor_first: bool,
    ) -> Arrangement {
        let w = self.config.max_width;
        let g = self.config.spacing;
        let gf = g as f64;
        let ra = ratios[anchor];
        let (r1, r2) = (ratios[pair[0]], ratios[pair[1]]);

        // Column of width P holds the pair stacked: height P/r1 + G + P/r2.
        // The anchor matches that height, so its width is ra times it, and
        // anchor + G + P must equal the album width.
        let inv = 1.0 / r1 + 1.0 / r2;
        let pair_w_exact = (w as f64 - gf - ra * gf) / (1.0 + ra * inv);
        let pair_w = to_px(pair_w_exact).min(w - g - 1);
        let anchor_w = w - g - pair_w;

        // The column spans both pair rows, so a cut distorts both.
        let column_exact = pair_w_exact * inv + gf;
        if to_px(column_exact) > MAX_EXTENT {
            log::warn!("column height {column_exact:.0}px cut off at {MAX_EXTENT}px");
            for row in 0..2 {
                self.deviations.push(RowDeviation {
                    row,
                    residual: column_exact - MAX_EXTENT as f64,
                });
            }
        }
        let column_h = to_px(column_exact).min(MAX_EXTENT).max(g + 2);
        let top_h = to_px(pair_w_exact / r1).min(column_h - g - 1);
        let bottom_h = column_h - g - top_h;

        let (anchor_x, pair_x) = if anchor_first {
            (0, anchor_w + g)
        } else {
            (pair_w + g, 0)
        };
        self.push(anchor, anchor_x, 0, anchor_w, column_h, 0, 2);
        self.push(pair[0], pair_x, 0, pair_w, top_h, 0, 1);
        self.push(pair[1], pair_x, top_h + g, pair_w, bottom_h, 1, 1);
        self.height = column_h;
        Arrangement::AnchorColumn { anchor_first }
    }

    // ------------------------------------------------------------------------
    // Four items
    // ------------------------------------------------------------------------

    fn place_four(&mut self, ratios: &[f64]) -> Arrangement {
        let w = self.config.max_width;
        let g = self.config.spacing;
        let wf = w as f64;
        let gf = g as f64;

        let top_single = wf / ratios[0];
        let bottom_three = fill_height(&ratios[1..4], w, g);
        let one_over_three = wf / (top_single + gf + bottom_three);

        let grid_top = fill_height(&ratios[0..2], w, g);
        let grid_bottom = fill_height(&ratios[2..4], w, g);
        let grid = wf / (grid_top + gf + grid_bottom);

        log::trace!("four: grid {grid:.3}, one-over-three {one_over_three:.3}");
        let (arrangement, top_row, bottom_row) = if prefer(grid, one_over_three, self.config) {
            (Arrangement::Grid, &[0, 1][..], &[2, 3][..])
        } else {
            (Arrangement::OneOverThree, &[0][..], &[1, 2, 3][..])
        };
        let top = self.place_fill_row(top_row, ratios, 0, w, 0, 0);
        let bottom = self.place_fill_row(bottom_row, ratios, 0, w, span(&[top, g]), 1);
        self.height = span(&[top, g, bottom]);
        arrangement
    }

    // ------------------------------------------------------------------------
    // Five or more
    // ------------------------------------------------------------------------

    fn place_balanced(&mut self, ratios: &[f64]) -> Arrangement {
        let w = self.config.max_width;
        let g = self.config.spacing;
        let min = self.config.min_row_height.min(MAX_EXTENT) as f64;
        let max = self.config.max_row_height.min(MAX_EXTENT) as f64;
        let rows = partition_rows(ratios, self.config);

        let mut start = 0;
        let mut y = 0;
        for (row, &len) in rows.iter().enumerate() {
            let indices: Vec<usize> = (start..start + len).collect();
            let row_ratios = &ratios[start..start + len];
            let gaps = g * (len as u32 - 1);

            let natural = fill_height(row_ratios, w, g);
            let clamped = natural.clamp(min, max);
            if clamped != natural {
                let sum: f64 = row_ratios.iter().sum();
                self.deviations.push(RowDeviation {
                    row: row as u32,
                    residual: (w - gaps) as f64 - clamped * sum,
                });
            }

            // Widths keep the exact fill; a clamped height absorbs the residual.
            let widths = distribute(w - gaps, row_ratios);
            let height = to_px(clamped);
            self.place_row(&indices, &widths, 0, y, height, row as u32);

            y = span(&[y, height, g]);
            start += len;
        }
        self.height = y - g;
        Arrangement::Balanced { rows }
    }

    /// Derive edge flags and build the output, keyed by item identity.
    fn finish(self, items: &[MediaDescriptor], arrangement: Arrangement) -> GroupedLayout {
        let mut positions = BTreeMap::new();
        for t in &self.tiles {
            let edges = Edges {
                top: t.y == 0,
                bottom: span(&[t.y, t.height]) == self.height,
                left: t.x == 0,
                right: span(&[t.x, t.width]) == self.width,
            };
            positions.insert(
                items[t.index].id,
                Position {
                    x: t.x,
                    y: t.y,
                    width: t.width,
                    height: t.height,
                    row: t.row,
                    row_span: t.row_span,
                    first_in_row: edges.left,
                    last_in_row: edges.right,
                    edges,
                },
            );
        }
        GroupedLayout {
            items: items.iter().map(|m| m.id).collect(),
            positions,
            total_width: self.width,
            total_height: self.height,
            arrangement,
            deviations: self.deviations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::media::ItemId;

    fn items(dims: &[(u32, u32)]) -> Vec<MediaDescriptor> {
        dims.iter()
            .enumerate()
            .map(|(i, &(w, h))| MediaDescriptor::new(i as u64 + 1, w, h))
            .collect()
    }

    fn layout_of(dims: &[(u32, u32)]) -> GroupedLayout {
        compute(&items(dims), &AlbumConfig::new(320)).unwrap()
    }

    fn pos(layout: &GroupedLayout, id: u64) -> Position {
        *layout.position(ItemId(id)).unwrap()
    }

    // ── Single ──────────────────────────────────────────────────────────

    #[test]
    fn single_scaled_to_width() {
        let layout = layout_of(&[(1000, 500)]);
        let p = pos(&layout, 1);
        assert_eq!((p.x, p.y, p.width, p.height), (0, 0, 320, 160));
        assert_eq!((layout.total_width, layout.total_height), (320, 160));
        assert_eq!(layout.arrangement, Arrangement::Single);
        assert!(p.edges.top && p.edges.bottom && p.edges.left && p.edges.right);
    }

    #[test]
    fn single_tall_capped_by_max_height() {
        let layout = layout_of(&[(500, 1000)]);
        assert_eq!((layout.total_width, layout.total_height), (210, 420));
    }

    #[test]
    fn single_small_not_enlarged() {
        let layout = layout_of(&[(90, 60)]);
        assert_eq!((layout.total_width, layout.total_height), (90, 60));
    }

    // ── Pair ────────────────────────────────────────────────────────────

    #[test]
    fn two_squares_side_by_side() {
        let layout = layout_of(&[(800, 800), (800, 800)]);
        assert_eq!(layout.arrangement, Arrangement::Pair(PairLayout::SideBySide));
        let (a, b) = (pos(&layout, 1), pos(&layout, 2));
        assert_eq!((a.x, a.width, a.height), (0, 159, 159));
        assert_eq!((b.x, b.width, b.height), (161, 159, 159));
        assert_eq!(layout.total_width, 320);
        assert_eq!(layout.total_height, 159);
        assert!(a.first_in_row && !a.last_in_row);
        assert!(!b.first_in_row && b.last_in_row);
        assert!(a.corners().top_left && a.corners().bottom_left && !a.corners().top_right);
    }

    #[test]
    fn wide_and_tall_stacked() {
        let layout = layout_of(&[(1000, 500), (500, 1000)]);
        assert_eq!(layout.arrangement, Arrangement::Pair(PairLayout::Stacked));
        let (a, b) = (pos(&layout, 1), pos(&layout, 2));
        assert_eq!((a.x, a.y, a.width, a.height), (0, 0, 320, 160));
        assert_eq!((b.x, b.y, b.width, b.height), (0, 162, 320, 640));
        assert_eq!(layout.total_height, 802);
        assert_eq!((a.row, b.row), (0, 1));
    }

    #[test]
    fn two_landscapes_stacked() {
        let layout = layout_of(&[(1600, 900), (1600, 900)]);
        assert_eq!(layout.arrangement, Arrangement::Pair(PairLayout::Stacked));
    }

    #[test]
    fn two_portraits_side_by_side() {
        let layout = layout_of(&[(900, 1200), (900, 1200)]);
        assert_eq!(layout.arrangement, Arrangement::Pair(PairLayout::SideBySide));
        assert_eq!(pos(&layout, 1).height, 212);
    }

    // ── Three ───────────────────────────────────────────────────────────

    #[test]
    fn three_with_wide_first_anchor_row() {
        let layout = layout_of(&[(2000, 1000), (800, 1000), (800, 1000)]);
        assert_eq!(
            layout.arrangement,
            Arrangement::AnchorRow {
                anchor_first: true,
                pair: PairLayout::SideBySide
            }
        );
        let a = pos(&layout, 1);
        assert_eq!((a.x, a.y, a.width, a.height), (0, 0, 320, 160));
        let (b, c) = (pos(&layout, 2), pos(&layout, 3));
        assert_eq!(b.y, 162);
        assert_eq!(c.y, 162);
        assert_eq!(b.width + 2 + c.width, 320);
        assert_eq!(layout.total_height, 162 + b.height);
        assert!(a.edges.top && !a.edges.bottom);
        assert!(b.edges.bottom && c.edges.bottom);
    }

    #[test]
    fn three_with_tall_first_anchor_column() {
        let layout = layout_of(&[(500, 1000), (1000, 1000), (1000, 1000)]);
        assert_eq!(layout.arrangement, Arrangement::AnchorColumn { anchor_first: true });
        let (a, b, c) = (pos(&layout, 1), pos(&layout, 2), pos(&layout, 3));
        assert_eq!(a.x, 0);
        assert_eq!(b.x, a.width + 2);
        assert_eq!(a.width + 2 + b.width, 320);
        assert_eq!(b.width, c.width);
        assert_eq!(c.y, b.height + 2);
        assert_eq!(a.height, b.height + 2 + c.height);
        assert_eq!(a.row_span, 2);
        assert!(a.edges.top && a.edges.bottom && a.edges.left && !a.edges.right);
        assert!(!b.first_in_row && b.last_in_row);
    }

    #[test]
    fn three_with_tall_last_anchor_column() {
        let layout = layout_of(&[(1000, 1000), (1000, 1000), (300, 1000)]);
        assert_eq!(layout.arrangement, Arrangement::AnchorColumn { anchor_first: false });
        let (a, b, c) = (pos(&layout, 1), pos(&layout, 2), pos(&layout, 3));
        assert_eq!((a.x, b.x), (0, 0));
        assert_eq!(c.x, a.width + 2);
        assert_eq!(c.right(), 320);
    }

    #[test]
    fn three_with_wide_last_anchor_row() {
        let layout = layout_of(&[(900, 1000), (900, 1000), (3000, 1000)]);
        assert!(matches!(
            layout.arrangement,
            Arrangement::AnchorRow {
                anchor_first: false,
                ..
            }
        ));
        let c = pos(&layout, 3);
        assert_eq!(c.bottom(), layout.total_height);
        assert_eq!(c.width, 320);
    }

    #[test]
    fn three_with_extreme_middle_keeps_end_anchor() {
        // The 5:1 middle item is the most extreme, but only an end item can
        // anchor; the squares tie, so the first one takes the full row.
        let layout = layout_of(&[(1000, 1000), (5000, 1000), (1000, 1000)]);
        assert_eq!(
            layout.arrangement,
            Arrangement::AnchorRow {
                anchor_first: true,
                pair: PairLayout::Stacked
            }
        );
        let (a, b, c) = (pos(&layout, 1), pos(&layout, 2), pos(&layout, 3));
        assert_eq!((a.x, a.y, a.width, a.height), (0, 0, 320, 320));
        assert_eq!((b.x, b.y, b.width, b.height), (0, 322, 320, 64));
        assert_eq!((c.x, c.y, c.width, c.height), (0, 388, 320, 320));
        assert_eq!(layout.total_height, 708);
        assert_eq!((a.row, b.row, c.row), (0, 1, 2));
    }

    // ── Four ────────────────────────────────────────────────────────────

    #[test]
    fn four_squares_grid() {
        let layout = layout_of(&[(500, 500); 4]);
        assert_eq!(layout.arrangement, Arrangement::Grid);
        assert_eq!(layout.row(0), vec![ItemId(1), ItemId(2)]);
        assert_eq!(layout.row(1), vec![ItemId(3), ItemId(4)]);
        assert_eq!(layout.total_height, 159 + 2 + 159);
    }

    #[test]
    fn four_panoramas_one_over_three() {
        // A 2x2 grid of 3:1 tiles is far too wide (320x108); one over three
        // is close enough to the window (320x144).
        let layout = layout_of(&[(3000, 1000); 4]);
        assert_eq!(layout.arrangement, Arrangement::OneOverThree);
        assert_eq!(layout.row(0), vec![ItemId(1)]);
        assert_eq!(layout.row(1), vec![ItemId(2), ItemId(3), ItemId(4)]);
    }

    // ── Generic ─────────────────────────────────────────────────────────

    #[test]
    fn five_squares_two_rows() {
        let config = AlbumConfig::new(320).with_spacing(2).max_per_row(3);
        let layout = compute(&items(&[(600, 600); 5]), &config).unwrap();
        assert_eq!(layout.arrangement, Arrangement::Balanced { rows: vec![2, 3] });
        for row in 0..2 {
            let ids = layout.row(row);
            let widths: u32 = ids.iter().map(|&id| layout.position(id).unwrap().width).sum();
            assert_eq!(widths + 2 * (ids.len() as u32 - 1), 320, "row {row}");
        }
        assert!(layout.deviations.is_empty());
    }

    #[test]
    fn clamped_row_reports_residual() {
        // Min row height above what three squares can reach forces a clamp.
        let config = AlbumConfig::new(320).row_heights(150, 420).height_penalty(0.0);
        let layout = compute(&items(&[(600, 600); 6]), &config).unwrap();
        assert!(!layout.deviations.is_empty());
        assert!(layout.max_deviation() > 1.0);
        for row in 0..layout.row_count() {
            let ids = layout.row(row);
            let widths: u32 = ids.iter().map(|&id| layout.position(id).unwrap().width).sum();
            assert_eq!(widths + 2 * (ids.len() as u32 - 1), 320);
        }
    }

    // ── Extreme shapes ──────────────────────────────────────────────────

    #[test]
    fn extreme_ratios_are_cut_off_without_overflow() {
        for count in 1..=6 {
            for dims in [(1, 100_000_000), (100_000_000, 1)] {
                let layout = layout_of(&vec![dims; count]);
                assert_eq!(layout.positions.len(), count);
                assert!(layout.total_height <= 2 * MAX_EXTENT + 2, "{count} x {dims:?}");
                for p in layout.positions.values() {
                    assert!(p.width >= 1 && p.height >= 1, "{p:?}");
                    assert!(p.height <= MAX_EXTENT, "{p:?}");
                    assert!(p.bottom() <= layout.total_height, "{p:?}");
                }
            }
        }
    }

    #[test]
    fn cut_off_row_reports_lost_height() {
        let layout = layout_of(&[(1, 100_000_000), (1, 100_000_000)]);
        assert_eq!(layout.arrangement, Arrangement::Pair(PairLayout::SideBySide));
        assert_eq!(layout.total_height, MAX_EXTENT);
        assert_eq!(layout.deviations.len(), 1);
        assert_eq!(layout.deviations[0].row, 0);
        assert!(layout.deviations[0].residual > 1e9);
    }

    // ── Errors ──────────────────────────────────────────────────────────

    #[test]
    fn empty_is_invalid_input() {
        assert_eq!(
            compute(&[], &AlbumConfig::default()),
            Err(AlbumError::InvalidInput(InputError::Empty))
        );
    }

    #[test]
    fn zero_height_is_invalid_input() {
        let err = compute(&items(&[(100, 100), (100, 0)]), &AlbumConfig::default()).unwrap_err();
        assert_eq!(
            err,
            AlbumError::InvalidInput(InputError::ZeroDimension {
                index: 1,
                id: ItemId(2),
                width: 100,
                height: 0
            })
        );
    }

    #[test]
    fn duplicate_id_is_invalid_input() {
        let dup = [MediaDescriptor::new(7, 10, 10), MediaDescriptor::new(7, 20, 20)];
        assert_eq!(
            compute(&dup, &AlbumConfig::default()),
            Err(AlbumError::InvalidInput(InputError::DuplicateId { id: ItemId(7) }))
        );
    }

    #[test]
    fn bad_config_is_invalid_config() {
        let err = compute(&items(&[(100, 100)]), &AlbumConfig::new(0)).unwrap_err();
        assert_eq!(err, AlbumError::InvalidConfig(ConfigError::ZeroMaxWidth));
        let config = AlbumConfig::default().row_heights(10, 5);
        let err = compute(&items(&[(100, 100)]), &config).unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn input_checked_before_config() {
        let err = compute(&[], &AlbumConfig::new(0)).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
