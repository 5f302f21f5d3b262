//! Pixel sizes and aspect-preserving scaling with snap-aware rounding.

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Largest tile height the engine emits.
///
/// Sums of a few tiles plus spacing stay far below `u32::MAX`, so band
/// offsets never overflow. Taller solutions are cut off and reported as a
/// [`RowDeviation`](crate::RowDeviation).
pub(crate) const MAX_EXTENT: u32 = 1 << 24;

/// Scale `sw`×`sh` to fit inside `bw`×`bh`, preserving aspect ratio, without
/// ever enlarging past 1:1.
pub(crate) fn fit_within(sw: u32, sh: u32, bw: u32, bh: u32) -> Size {
    if sw <= bw && sh <= bh {
        return Size::new(sw, sh);
    }
    scale_to_box(sw, sh, bw, bh)
}

/// Scale `sw`×`sh` up or down to the largest size inside `bw`×`bh`.
pub(crate) fn scale_to_box(sw: u32, sh: u32, bw: u32, bh: u32) -> Size {
    let ratio_w = bw as f64 / sw as f64;
    let ratio_h = bh as f64 / sh as f64;
    if ratio_w <= ratio_h {
        // Width constrains.
        Size::new(bw, proportional(sw, sh, bw, true, bw, bh))
    } else {
        Size::new(proportional(sw, sh, bh, false, bw, bh), bh)
    }
}

/// The free side of a single tile, given the side pinned to the box.
///
/// A lone item should touch the box on both axes when its shape allows it,
/// so the album's bubble hugs the media. The free side snaps to the box
/// (or to the source size) when plain rounding would land within the
/// unavoidable rounding error of it: a 1200×400 photo in a 100×33 box
/// stays 100×33 rather than drifting to 99×33.
fn proportional(
    ratio_w: u32,
    ratio_h: u32,
    basis: u32,
    basis_is_width: bool,
    box_w: u32,
    box_h: u32,
) -> u32 {
    let ratio = ratio_w as f64 / ratio_h as f64;

    let snap_amount = if basis_is_width {
        rounding_loss_height(ratio_w, ratio_h, box_h)
    } else {
        rounding_loss_width(ratio_w, ratio_h, box_w)
    };

    let snap_a = if basis_is_width { ratio_h } else { ratio_w };
    let snap_b = if basis_is_width { box_h } else { box_w };

    let float = if basis_is_width {
        basis as f64 / ratio
    } else {
        ratio * basis as f64
    };

    let delta_a = (float - snap_a as f64).abs();
    let delta_b = (float - snap_b as f64).abs();

    let v = if delta_a <= snap_amount && delta_a <= delta_b {
        snap_a
    } else if delta_b <= snap_amount {
        snap_b
    } else {
        float.round() as u32
    };

    v.max(1)
}

fn rounding_loss_width(ratio_w: u32, ratio_h: u32, box_w: u32) -> f64 {
    let ratio = ratio_w as f64 / ratio_h as f64;
    let rounded_y = (ratio_h as f64 * (box_w as f64 / ratio_w as f64)).round();
    (box_w as f64 - rounded_y * ratio).abs()
}

fn rounding_loss_height(ratio_w: u32, ratio_h: u32, box_h: u32) -> f64 {
    let ratio = ratio_w as f64 / ratio_h as f64;
    let rounded_x = (ratio_w as f64 * (box_h as f64 / ratio_h as f64)).round();
    (box_h as f64 - rounded_x / ratio).abs()
}

/// Round a positive float length to whole pixels, never below one.
pub(crate) fn to_px(v: f64) -> u32 {
    (v.round() as u32).max(1)
}
