//! 2D raster primitives over `RgbaImage`.
//!
//! Circles and rounded rectangles are filled from signed distance so their
//! edges get a one-pixel antialiased ramp. Strokes grow inward from the
//! shape boundary. Polygons are rasterized hard-edged via `imageproc`.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

/// Source-over blend of `color` into the canvas at (x, y).
/// Out-of-bounds writes are ignored.
pub fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let dst = *img.get_pixel(x as u32, y as u32);
    let sa = color[3] as f32 / 255.0;
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return;
    }
    let mut out = [0u8; 4];
    for c in 0..3 {
        let blended = (color[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
        out[c] = blended.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    img.put_pixel(x as u32, y as u32, Rgba(out));
}

fn blend_covered(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
    if coverage <= 0.0 {
        return;
    }
    let alpha = (color[3] as f32 * coverage.min(1.0)).round() as u8;
    blend_pixel(img, x, y, Rgba([color[0], color[1], color[2], alpha]));
}

/// Filled disc centered at (cx, cy) with a one-pixel antialiased rim.
pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    if radius <= 0.0 {
        return;
    }
    let x0 = (cx - radius - 1.0).floor() as i64;
    let x1 = (cx + radius + 1.0).ceil() as i64;
    let y0 = (cy - radius - 1.0).floor() as i64;
    let y1 = (cy + radius + 1.0).ceil() as i64;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let fx = x as f32 + 0.5 - cx;
            let fy = y as f32 + 0.5 - cy;
            let dist = (fx * fx + fy * fy).sqrt();
            let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
            blend_covered(img, x, y, color, coverage);
        }
    }
}

/// Circle outline of the given stroke width, drawn inward from `radius`.
pub fn stroke_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, width: f32, color: Rgba<u8>) {
    if radius <= 0.0 || width <= 0.0 {
        return;
    }
    let inner = (radius - width).max(0.0);
    let x0 = (cx - radius - 1.0).floor() as i64;
    let x1 = (cx + radius + 1.0).ceil() as i64;
    let y0 = (cy - radius - 1.0).floor() as i64;
    let y1 = (cy + radius + 1.0).ceil() as i64;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let fx = x as f32 + 0.5 - cx;
            let fy = y as f32 + 0.5 - cy;
            let dist = (fx * fx + fy * fy).sqrt();
            let outer_cov = (radius - dist + 0.5).clamp(0.0, 1.0);
            let inner_cov = (dist - inner + 0.5).clamp(0.0, 1.0);
            blend_covered(img, x, y, color, outer_cov.min(inner_cov));
        }
    }
}

/// Signed distance from (px, py) to a rounded rectangle; negative inside.
fn rounded_rect_dist(px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32, radius: f32) -> f32 {
    let cx = (x0 + x1) / 2.0;
    let cy = (y0 + y1) / 2.0;
    let hx = (x1 - x0) / 2.0 - radius;
    let hy = (y1 - y0) / 2.0 - radius;
    let qx = (px - cx).abs() - hx.max(0.0);
    let qy = (py - cy).abs() - hy.max(0.0);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - radius
}

/// Filled rounded rectangle spanning [x0, x1] x [y0, y1].
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
    color: Rgba<u8>,
) {
    let bx0 = (x0 - 1.0).floor() as i64;
    let bx1 = (x1 + 1.0).ceil() as i64;
    let by0 = (y0 - 1.0).floor() as i64;
    let by1 = (y1 + 1.0).ceil() as i64;

    for y in by0..=by1 {
        for x in bx0..=bx1 {
            let d = rounded_rect_dist(x as f32 + 0.5, y as f32 + 0.5, x0, y0, x1, y1, radius);
            blend_covered(img, x, y, color, (0.5 - d).clamp(0.0, 1.0));
        }
    }
}

/// Rounded-rectangle outline of the given stroke width, drawn inward.
pub fn stroke_rounded_rect(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
    width: f32,
    color: Rgba<u8>,
) {
    if width <= 0.0 {
        return;
    }
    let bx0 = (x0 - 1.0).floor() as i64;
    let bx1 = (x1 + 1.0).ceil() as i64;
    let by0 = (y0 - 1.0).floor() as i64;
    let by1 = (y1 + 1.0).ceil() as i64;

    for y in by0..=by1 {
        for x in bx0..=bx1 {
            let d = rounded_rect_dist(x as f32 + 0.5, y as f32 + 0.5, x0, y0, x1, y1, radius);
            let outer_cov = (0.5 - d).clamp(0.0, 1.0);
            let inner_cov = (d + width + 0.5).clamp(0.0, 1.0);
            blend_covered(img, x, y, color, outer_cov.min(inner_cov));
        }
    }
}

/// Rounds vertices to pixel coordinates, dropping consecutive duplicates
/// and a duplicated closing vertex (`draw_polygon_mut` rejects both).
fn polygon_points(points: &[(f32, f32)]) -> Vec<Point<i32>> {
    let mut out: Vec<Point<i32>> = Vec::with_capacity(points.len());
    for &(x, y) in points {
        let p = Point::new(x.round() as i32, y.round() as i32);
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    while out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

/// Filled polygon with hard edges.
pub fn fill_polygon(img: &mut RgbaImage, points: &[(f32, f32)], color: Rgba<u8>) {
    let pts = polygon_points(points);
    if pts.len() >= 3 {
        draw_polygon_mut(img, &pts, color);
    }
}

/// Filled polygon with an outline of roughly `outline_width` pixels.
///
/// The outline polygon is drawn at full size and the fill polygon is shrunk
/// toward the centroid, so the stroke grows inward.
pub fn fill_polygon_outlined(
    img: &mut RgbaImage,
    points: &[(f32, f32)],
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    outline_width: f32,
) {
    fill_polygon(img, points, outline);

    let n = points.len() as f32;
    if n < 3.0 {
        return;
    }
    let cx = points.iter().map(|p| p.0).sum::<f32>() / n;
    let cy = points.iter().map(|p| p.1).sum::<f32>() / n;

    let shrunk: Vec<(f32, f32)> = points
        .iter()
        .map(|&(x, y)| {
            let dx = x - cx;
            let dy = y - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist <= outline_width {
                (cx, cy)
            } else {
                let scale = (dist - outline_width) / dist;
                (cx + dx * scale, cy + dy * scale)
            }
        })
        .collect();
    fill_polygon(img, &shrunk, fill);
}

/// Vertical two-color gradient across the whole canvas.
///
/// Scanline `y` gets `base + (accent - base) * y / height` per channel,
/// truncated to u8.
pub fn vertical_gradient(img: &mut RgbaImage, base: Rgba<u8>, accent: Rgba<u8>) {
    let height = img.height();
    let width = img.width();
    for y in 0..height {
        let factor = y as f32 / height as f32;
        let mut row = [0u8; 4];
        for c in 0..3 {
            row[c] = (base[c] as f32 + (accent[c] as f32 - base[c] as f32) * factor) as u8;
        }
        row[3] = 255;
        let color = Rgba(row);
        for x in 0..width {
            img.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_over_transparent_keeps_color() {
        let mut img = RgbaImage::new(4, 4);
        blend_pixel(&mut img, 1, 1, Rgba([200, 100, 50, 255]));
        assert_eq!(*img.get_pixel(1, 1), Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn test_blend_out_of_bounds_is_ignored() {
        let mut img = RgbaImage::new(4, 4);
        blend_pixel(&mut img, -1, 0, Rgba([255, 255, 255, 255]));
        blend_pixel(&mut img, 4, 4, Rgba([255, 255, 255, 255]));
        assert!(img.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn test_blend_translucent_over_opaque() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        blend_pixel(&mut img, 0, 0, Rgba([255, 255, 255, 128]));
        let px = *img.get_pixel(0, 0);
        // ~50% white over black
        assert_eq!(px[3], 255);
        assert!(px[0] > 120 && px[0] < 136, "blended value was {}", px[0]);
    }

    #[test]
    fn test_fill_circle_center_and_exterior() {
        let mut img = RgbaImage::new(32, 32);
        fill_circle(&mut img, 16.0, 16.0, 10.0, Rgba([10, 20, 30, 255]));
        assert_eq!(*img.get_pixel(16, 16), Rgba([10, 20, 30, 255]));
        assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_stroke_circle_leaves_interior_untouched() {
        let mut img = RgbaImage::new(32, 32);
        stroke_circle(&mut img, 16.0, 16.0, 12.0, 3.0, Rgba([255, 0, 0, 255]));
        // Well inside the inner edge of the stroke band
        assert_eq!(*img.get_pixel(16, 16), Rgba([0, 0, 0, 0]));
        // On the ring, one pixel inside the outer edge
        assert_eq!(*img.get_pixel(16, 6), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_fill_rounded_rect_corners_clipped() {
        let mut img = RgbaImage::new(40, 40);
        fill_rounded_rect(&mut img, 4.0, 4.0, 36.0, 36.0, 8.0, Rgba([0, 255, 0, 255]));
        // Center is solid
        assert_eq!(*img.get_pixel(20, 20), Rgba([0, 255, 0, 255]));
        // The square corner is outside the rounded corner arc
        assert_eq!(*img.get_pixel(4, 4), Rgba([0, 0, 0, 0]));
        // Edge midpoints are solid
        assert_eq!(*img.get_pixel(20, 5), Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn test_fill_polygon_degenerate_is_noop() {
        let mut img = RgbaImage::new(8, 8);
        fill_polygon(
            &mut img,
            &[(2.0, 2.0), (2.1, 2.1), (2.0, 2.0)],
            Rgba([255, 255, 255, 255]),
        );
        assert!(img.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn test_fill_polygon_triangle_covers_centroid() {
        let mut img = RgbaImage::new(32, 32);
        fill_polygon(
            &mut img,
            &[(4.0, 28.0), (28.0, 28.0), (16.0, 4.0)],
            Rgba([9, 9, 9, 255]),
        );
        assert_eq!(*img.get_pixel(16, 20), Rgba([9, 9, 9, 255]));
    }

    #[test]
    fn test_vertical_gradient_lerp_per_scanline() {
        let mut img = RgbaImage::new(8, 100);
        let base = Rgba([76, 175, 80, 255]);
        let accent = Rgba([46, 125, 50, 255]);
        vertical_gradient(&mut img, base, accent);

        for y in 0..100u32 {
            let factor = y as f32 / 100.0;
            let expected = Rgba([
                (76.0 + (46.0 - 76.0) * factor) as u8,
                (175.0 + (125.0 - 175.0) * factor) as u8,
                (80.0 + (50.0 - 80.0) * factor) as u8,
                255,
            ]);
            assert_eq!(*img.get_pixel(3, y), expected, "scanline {}", y);
        }
    }
}
