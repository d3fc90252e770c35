//! Launch-screen composer.
//!
//! Draws a vertical gradient, a simplified camera logo, the app name with a
//! drop shadow, a tagline, and a sparse decorative dot lattice. Text is
//! rendered through the font-resolution chain in [`crate::font`].

use crate::draw::{
    fill_circle, fill_polygon_outlined, fill_rounded_rect, stroke_circle, stroke_rounded_rect,
    vertical_gradient,
};
use crate::font::{self, text_width};
use crate::palette::{
    ACCENT_GREEN, BACKGROUND_GREEN, CAMERA_OUTLINE_SOFT, CAMERA_WHITE, LENS_BLUE, LENS_BLUE_DARK,
    LENS_DARK, LENS_RING, PIN_RED, PIN_RED_DARK, SHADOW_BLACK, TEXT_WHITE,
};
use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, RgbImage, RgbaImage};
use imageproc::drawing::draw_text_mut;

/// Vertical offset of the logo center above the canvas middle, in pixels.
const LOGO_RAISE: f32 = 100.0;
/// Drop-shadow offset for the app name, in pixels.
const SHADOW_OFFSET: i32 = 2;
/// Grid spacing of the decorative dot lattice, in pixels.
const DOT_SPACING: u32 = 40;
/// Lattice sampling rule: only grid points whose coordinate sum is a
/// multiple of this survive, which keeps the pattern sparse.
const DOT_MODULUS: u32 = 80;
/// Dot diameter in pixels.
const DOT_DIAMETER: f32 = 4.0;

/// Compose a launch screen, resolving fonts through the default chain.
///
/// Returns an opaque `width`x`height` RGB canvas.
pub fn compose_launch_screen(width: u32, height: u32, name: &str, tagline: &str) -> RgbImage {
    let app_font = font::load_font();
    compose_launch_screen_with_font(width, height, name, tagline, &app_font)
}

/// Compose a launch screen with an explicit font, so tests can exercise the
/// all-fallbacks-exhausted path deterministically.
pub fn compose_launch_screen_with_font(
    width: u32,
    height: u32,
    name: &str,
    tagline: &str,
    app_font: &FontVec,
) -> RgbImage {
    let mut img = RgbaImage::new(width, height);
    let w = width as f32;

    vertical_gradient(&mut img, BACKGROUND_GREEN, ACCENT_GREEN);

    // Logo sits above the vertical middle to leave room for text below
    let center_x = w / 2.0;
    let center_y = height as f32 / 2.0 - LOGO_RAISE;

    // Simplified camera body
    let cam_width = w * 0.25;
    let cam_height = cam_width * 0.6;
    let cam_x = center_x - cam_width / 2.0;
    let cam_y = center_y - cam_height / 2.0;
    let cam_radius = w * 0.02;
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
        3.0,
        CAMERA_OUTLINE_SOFT,
    );

    // Lens
    let lens_radius = w * 0.06;
    fill_circle(&mut img, center_x, center_y, lens_radius, LENS_DARK);
    stroke_circle(&mut img, center_x, center_y, lens_radius, 4.0, LENS_RING);

    let inner_radius = w * 0.04;
    fill_circle(&mut img, center_x, center_y, inner_radius, LENS_BLUE);
    stroke_circle(&mut img, center_x, center_y, inner_radius, 2.0, LENS_BLUE_DARK);

    // Small location pin beside the lens
    let pin_x = center_x + w * 0.08;
    let pin_y = center_y - w * 0.08;
    let pin_size = w * 0.04;
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
    fill_circle(&mut img, pin_x, pin_y - pin_size, w * 0.012, TEXT_WHITE);

    // App name with drop shadow, centered via measured width
    let name_px = w * 0.08;
    let name_scale = PxScale::from(name_px);
    let name_width = text_width(app_font, name_px, name);
    let name_x = (center_x - name_width / 2.0) as i32;
    let name_y = (center_y + w * 0.12) as i32;
    draw_text_mut(
        &mut img,
        SHADOW_BLACK,
        name_x + SHADOW_OFFSET,
        name_y + SHADOW_OFFSET,
        name_scale,
        app_font,
        name,
    );
    draw_text_mut(&mut img, TEXT_WHITE, name_x, name_y, name_scale, app_font, name);

    // Tagline beneath the name
    let tagline_px = name_px * 0.4;
    let tagline_width = text_width(app_font, tagline_px, tagline);
    let tagline_x = (center_x - tagline_width / 2.0) as i32;
    let tagline_y = name_y + (w * 0.06) as i32;
    draw_text_mut(
        &mut img,
        TEXT_WHITE,
        tagline_x,
        tagline_y,
        PxScale::from(tagline_px),
        app_font,
        tagline,
    );

    // Sparse dot lattice over the whole canvas
    for i in (0..width).step_by(DOT_SPACING as usize) {
        for j in (0..height).step_by(DOT_SPACING as usize) {
            if (i + j) % DOT_MODULUS == 0 {
                fill_circle(
                    &mut img,
                    i as f32 + DOT_DIAMETER / 2.0,
                    j as f32 + DOT_DIAMETER / 2.0,
                    DOT_DIAMETER / 2.0,
                    TEXT_WHITE,
                );
            }
        }
    }

    DynamicImage::from(img).into_rgb8()
}
