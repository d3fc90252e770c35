//! App asset generator
//!
//! Generates the app icon (master plus downsampled variants) and the full
//! launch-screen matrix into `assets/`.
//!
//! Run with: `cargo run --bin generate_assets`

use photopoints_assets::{GeneratorConfig, generate_all, verify_png_support};

fn main() {
    println!("Generating Photo Points app assets...");

    if let Err(err) = verify_png_support() {
        println!("Missing imaging capability: {}", err);
        println!("Rebuild with the `image` crate's default features (PNG support) enabled.");
        std::process::exit(1);
    }

    let config = GeneratorConfig::default();
    if let Err(err) = generate_all(&config) {
        println!("Asset generation failed: {}", err);
        std::process::exit(1);
    }
}
