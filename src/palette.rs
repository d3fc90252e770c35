//! Fixed brand colors used by the icon and launch-screen composers.

use image::Rgba;

/// Primary brand green, used for the icon disc and launch-screen gradient top.
pub const BACKGROUND_GREEN: Rgba<u8> = Rgba([76, 175, 80, 255]);
/// Darker green at the bottom of the launch-screen gradient.
pub const ACCENT_GREEN: Rgba<u8> = Rgba([46, 125, 50, 255]);
/// Leaf accents on the icon.
pub const LEAF_GREEN: Rgba<u8> = Rgba([102, 187, 106, 255]);

pub const CAMERA_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const CAMERA_OUTLINE: Rgba<u8> = Rgba([189, 189, 189, 255]);
/// Lighter camera outline used on launch screens.
pub const CAMERA_OUTLINE_SOFT: Rgba<u8> = Rgba([220, 220, 220, 255]);

pub const LENS_DARK: Rgba<u8> = Rgba([66, 66, 66, 255]);
pub const LENS_RING: Rgba<u8> = Rgba([117, 117, 117, 255]);
pub const LENS_BLUE: Rgba<u8> = Rgba([25, 118, 210, 255]);
pub const LENS_BLUE_DARK: Rgba<u8> = Rgba([13, 71, 161, 255]);

pub const PIN_RED: Rgba<u8> = Rgba([244, 67, 54, 255]);
pub const PIN_RED_DARK: Rgba<u8> = Rgba([183, 28, 28, 255]);

pub const COMPASS_GRAY: Rgba<u8> = Rgba([55, 71, 79, 255]);
pub const COMPASS_GRAY_DARK: Rgba<u8> = Rgba([38, 50, 56, 255]);

pub const TEXT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const SHADOW_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
