//! SVG visualization of a computed album layout.
//!
//! Draws the album's bounding box with every tile at its computed position,
//! labelled with its item id and size. Outer corners (the ones the renderer
//! rounds) are drawn rounded here too, and clamped rows are annotated with
//! their residual.
//!
//! # Example
//!
//! ```
//! use albumlayout::{AlbumConfig, MediaDescriptor, compute, svg::render_album_svg};
//!
//! let items = [
//!     MediaDescriptor::new(1, 1600, 900),
//!     MediaDescriptor::new(2, 900, 1600),
//!     MediaDescriptor::new(3, 1000, 1000),
//! ];
//! let layout = compute(&items, &AlbumConfig::default()).unwrap();
//!
//! let svg = render_album_svg(&layout);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::layout::{Arrangement, Corners, GroupedLayout, Position};

/// Largest width the album is drawn at.
const MAX_PANEL_W: f64 = 480.0;
/// Largest height the album is drawn at.
const MAX_PANEL_H: f64 = 640.0;
/// Horizontal margin.
const MARGIN_X: f64 = 40.0;
/// Top margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of the title line above the album.
const LABEL_H: f64 = 22.0;
/// Height of one annotation line below the album.
const NOTE_H: f64 = 16.0;
/// Radius for outer corners.
const CORNER_R: f64 = 6.0;

/// Render a complete SVG document showing every tile of `layout`.
pub fn render_album_svg(layout: &GroupedLayout) -> String {
    let (pw, ph, scale) = scale_to_fit(layout.total_width, layout.total_height);
    let notes = annotations(layout);

    let total_w = pw.max(MAX_PANEL_W * 0.5) + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + ph + NOTE_H * (notes.len() as f64 + 1.0) + MARGIN_TOP;
    let center_x = total_w / 2.0;
    let panel_x = center_x - pw / 2.0;
    let panel_y = MARGIN_TOP + LABEL_H;

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Style: light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .tile-label { font-size: 10px; fill: #fff; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .tile { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .tile { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 14.0,
        escape_xml(&format!(
            "Album  {}×{}  ({} items)",
            layout.total_width,
            layout.total_height,
            layout.items.len()
        ))
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="outer" rx="{}"/>"#,
        panel_x, panel_y, pw, ph, CORNER_R
    ));
    svg.push('\n');

    for (id, p) in layout.iter() {
        let x = panel_x + p.x as f64 * scale;
        let y = panel_y + p.y as f64 * scale;
        let w = p.width as f64 * scale;
        let h = p.height as f64 * scale;
        svg.push_str(&format!(
            r#"<path d="{}" class="tile"/>"#,
            tile_path(x, y, w, h, p.corners())
        ));
        svg.push('\n');
        if w >= 40.0 && h >= 14.0 {
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" class="tile-label" text-anchor="middle">{}</text>"#,
                x + w / 2.0,
                y + h / 2.0 + 4.0,
                escape_xml(&tile_label(id.0, p))
            ));
            svg.push('\n');
        }
    }

    let mut note_y = panel_y + ph + NOTE_H;
    for note in &notes {
        svg.push_str(&format!(
            r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
            center_x,
            note_y,
            escape_xml(note)
        ));
        svg.push('\n');
        note_y += NOTE_H;
    }

    svg.push_str("</svg>\n");
    svg
}

fn tile_label(id: u64, p: &Position) -> String {
    format!("#{id} {}×{}", p.width, p.height)
}

fn annotations(layout: &GroupedLayout) -> Vec<String> {
    let mut notes = Vec::new();
    notes.push(match &layout.arrangement {
        Arrangement::Balanced { rows } => format!("balanced rows {rows:?}"),
        other => format!("{other:?}"),
    });
    for d in &layout.deviations {
        notes.push(format!("row {} clamped, residual {:.1}px", d.row, d.residual));
    }
    notes
}

/// Scale the album to fit within MAX_PANEL_W × MAX_PANEL_H, never enlarging.
fn scale_to_fit(width: u32, height: u32) -> (f64, f64, f64) {
    let w = width as f64;
    let h = height as f64;
    if w == 0.0 || h == 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h).min(1.0);
    (w * scale, h * scale, scale)
}

/// Rectangle path with only the outer corners rounded.
fn tile_path(x: f64, y: f64, w: f64, h: f64, corners: Corners) -> String {
    let r = CORNER_R.min(w / 2.0).min(h / 2.0);
    let tl = if corners.top_left { r } else { 0.0 };
    let tr = if corners.top_right { r } else { 0.0 };
    let br = if corners.bottom_right { r } else { 0.0 };
    let bl = if corners.bottom_left { r } else { 0.0 };
    format!(
        "M{:.1},{:.1} H{:.1} A{tr:.1},{tr:.1} 0 0 1 {:.1},{:.1} V{:.1} A{br:.1},{br:.1} 0 0 1 {:.1},{:.1} H{:.1} A{bl:.1},{bl:.1} 0 0 1 {:.1},{:.1} V{:.1} A{tl:.1},{tl:.1} 0 0 1 {:.1},{:.1} Z",
        x + tl,
        y,
        x + w - tr,
        x + w,
        y + tr,
        y + h - br,
        x + w - br,
        y + h,
        x + bl,
        x,
        y + h - bl,
        y + tl,
        x + tl,
        y,
    )
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
