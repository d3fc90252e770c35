//! App icon composer.
//!
//! Draws the Photo Points icon onto a transparent square canvas: a green
//! disc, a camera body with lens, a location pin, a compass, a fading row
//! of time-series dots, and two leaf accents. All geometry is a fixed ratio
//! of the requested edge length, so the same composition holds at any size.

use crate::draw::{
    fill_circle, fill_polygon, fill_polygon_outlined, fill_rounded_rect, stroke_circle,
    stroke_rounded_rect,
};
use crate::palette::{
    BACKGROUND_GREEN, CAMERA_OUTLINE, CAMERA_WHITE, COMPASS_GRAY, COMPASS_GRAY_DARK, LEAF_GREEN,
    LENS_BLUE, LENS_BLUE_DARK, LENS_DARK, LENS_RING, PIN_RED, PIN_RED_DARK, TEXT_WHITE,
};
use image::{Rgba, RgbaImage};

/// Opacity steps for the time-series dots, brightest first.
const DOT_ALPHAS: [f32; 3] = [0.9, 0.7, 0.5];

/// Compose the app icon at the given edge length.
///
/// Returns a `size`x`size` RGBA canvas with a transparent background.
pub fn compose_app_icon(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let s = size as f32;
    let center = s / 2.0;

    // Background disc
    let margin = s * 0.05;
    let bg_radius = (s - 2.0 * margin) / 2.0;
    fill_circle(&mut img, center, center, bg_radius, BACKGROUND_GREEN);

    // Camera body
    let cam_width = s * 0.5;
    let cam_height = s * 0.31;
    let cam_x = (s - cam_width) / 2.0;
    let cam_y = s * 0.29;
    let cam_radius = s * 0.04;
    fill_rounded_rect(
        &mut img,
        cam_x,
        cam_y,
        cam_x + cam_width,
        cam_y + cam_height,
        cam_radius,
        CAMERA_WHITE,
    );
    stroke_rounded_rect(
        &mut img,
        cam_x,
        cam_y,
        cam_x + cam_width,
        cam_y + cam_height,
        cam_radius,
        4.0,
        CAMERA_OUTLINE,
    );

    // Lens: outer ring, blue inner ring, solid center
    let lens_x = center;
    let lens_y = s * 0.45;
    let lens_radius = s * 0.1;
    fill_circle(&mut img, lens_x, lens_y, lens_radius, LENS_DARK);
    stroke_circle(&mut img, lens_x, lens_y, lens_radius, 6.0, LENS_RING);

    let inner_radius = s * 0.07;
    fill_circle(&mut img, lens_x, lens_y, inner_radius, LENS_BLUE);
    stroke_circle(&mut img, lens_x, lens_y, inner_radius, 3.0, LENS_BLUE_DARK);

    let center_radius = s * 0.04;
    fill_circle(&mut img, lens_x, lens_y, center_radius, LENS_BLUE_DARK);

    // Location pin: triangle plus a white accent dot at its head
    let pin_x = s * 0.69;
    let pin_y = s * 0.15;
    let pin_size = s * 0.08;
    fill_polygon_outlined(
        &mut img,
        &[
            (pin_x, pin_y),
            (pin_x - pin_size / 2.0, pin_y - pin_size),
            (pin_x + pin_size / 2.0, pin_y - pin_size),
        ],
        PIN_RED,
        PIN_RED_DARK,
        2.0,
    );
    fill_circle(&mut img, pin_x, pin_y - pin_size, s * 0.02, TEXT_WHITE);

    // Compass with needle pointing up
    let compass_x = s * 0.39;
    let compass_y = s * 0.68;
    let compass_radius = s * 0.06;
    fill_circle(&mut img, compass_x, compass_y, compass_radius, COMPASS_GRAY);
    stroke_circle(
        &mut img,
        compass_x,
        compass_y,
        compass_radius,
        3.0,
        COMPASS_GRAY_DARK,
    );

    let needle_length = compass_radius * 0.7;
    fill_polygon(
        &mut img,
        &[
            (compass_x, compass_y - needle_length),
            (compass_x - 5.0, compass_y),
            (compass_x + 5.0, compass_y),
        ],
        PIN_RED,
    );

    // Time-series dots fading to the right
    let dots_y = s * 0.68;
    let dot_radius = s * 0.008;
    for (i, &alpha) in DOT_ALPHAS.iter().enumerate() {
        let dot_x = s * 0.60 + i as f32 * s * 0.025;
        let dot_color = Rgba([
            (76.0 * alpha) as u8,
            (175.0 * alpha) as u8,
            (80.0 * alpha) as u8,
            (255.0 * alpha) as u8,
        ]);
        fill_circle(&mut img, dot_x, dots_y, dot_radius, dot_color);
    }

    // Leaf accents in opposite corners of the disc
    fill_polygon(
        &mut img,
        &[
            (s * 0.20, s * 0.20),
            (s * 0.15, s * 0.17),
            (s * 0.12, s * 0.20),
            (s * 0.15, s * 0.23),
        ],
        LEAF_GREEN,
    );
    fill_polygon(
        &mut img,
        &[
            (s * 0.83, s * 0.76),
            (s * 0.86, s * 0.73),
            (s * 0.89, s * 0.76),
            (s * 0.86, s * 0.79),
        ],
        LEAF_GREEN,
    );

    img
}
