//! Driver: composes every asset in the configuration matrix and persists
//! each one as a PNG, printing one confirmation line per file.
//!
//! The master icon is composed once at full size; smaller variants are
//! Lanczos3 downsamples of it rather than fresh compositions. Launch
//! screens are independent outputs, so they are composed in parallel and
//! then written sequentially to keep the progress log deterministic.

use crate::config::GeneratorConfig;
use crate::icon::compose_app_icon;
use crate::launch::compose_launch_screen;
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};
use rayon::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

/// Confirm PNG encoding works before any file is touched, by encoding a
/// one-pixel probe image in memory.
pub fn verify_png_support() -> Result<(), String> {
    let probe = RgbImage::new(1, 1);
    let mut buf = Cursor::new(Vec::new());
    probe
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| format!("PNG encoding unavailable: {}", e))
}

/// Generate every asset described by `config`, returning the written paths.
///
/// No partial work happens if the capability probe fails. Directory
/// creation is idempotent; rerunning produces the same filename set.
pub fn generate_all(config: &GeneratorConfig) -> Result<Vec<PathBuf>, String> {
    verify_png_support()?;

    for dir in [&config.assets_dir, &config.scripts_dir] {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;
            println!("Created directory: {}", dir.display());
        }
    }

    let mut written = Vec::new();

    println!("\n=== Generating App Icons ===");

    let master = compose_app_icon(config.master_icon_size);
    let master_path = config
        .assets_dir
        .join(GeneratorConfig::icon_filename(config.master_icon_size));
    master
        .save(&master_path)
        .map_err(|e| format!("Failed to save {}: {}", master_path.display(), e))?;
    println!("Created: {}", master_path.display());
    written.push(master_path);

    for &size in &config.icon_variants {
        let variant = imageops::resize(&master, size, size, FilterType::Lanczos3);
        let path = config.assets_dir.join(GeneratorConfig::icon_filename(size));
        variant
            .save(&path)
            .map_err(|e| format!("Failed to save {}: {}", path.display(), e))?;
        println!("Created: {}", path.display());
        written.push(path);
    }

    println!("\n=== Generating Launch Screens ===");

    let mut jobs: Vec<(PathBuf, u32, u32)> = config
        .launch_screens
        .iter()
        .map(|spec| {
            (
                config
                    .assets_dir
                    .join(GeneratorConfig::launch_filename(&spec.suffix)),
                spec.width,
                spec.height,
            )
        })
        .collect();
    jobs.push((
        config
            .assets_dir
            .join(GeneratorConfig::square_launch_filename()),
        config.square_launch_size,
        config.square_launch_size,
    ));

    let rendered: Vec<(PathBuf, RgbImage)> = jobs
        .par_iter()
        .map(|(path, width, height)| {
            let screen =
                compose_launch_screen(*width, *height, &config.app_name, &config.tagline);
            (path.clone(), screen)
        })
        .collect();

    for (path, screen) in rendered {
        screen
            .save(&path)
            .map_err(|e| format!("Failed to save {}: {}", path.display(), e))?;
        println!("Created: {}", path.display());
        written.push(path);
    }

    println!("\n=== Asset generation complete: {} files ===", written.len());

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaunchSpec;

    fn scratch_config(tag: &str) -> GeneratorConfig {
        let root = std::env::temp_dir().join(format!(
            "photopoints_assets_test_{}_{}",
            tag,
            std::process::id()
        ));
        GeneratorConfig {
            assets_dir: root.join("assets"),
            scripts_dir: root.join("scripts"),
            app_name: "Photo Points".to_string(),
            tagline: "Environmental Monitoring".to_string(),
            master_icon_size: 64,
            icon_variants: vec![32, 16],
            launch_screens: vec![
                LaunchSpec::new(100, 160, "hdpi"),
                LaunchSpec::new(120, 200, "xhdpi"),
            ],
            square_launch_size: 64,
        }
    }

    #[test]
    fn test_verify_png_support() {
        assert!(verify_png_support().is_ok());
    }

    #[test]
    fn test_end_to_end_writes_expected_files() {
        let config = scratch_config("e2e");
        let _ = fs::remove_dir_all(config.assets_dir.parent().unwrap());

        let written = generate_all(&config).unwrap();
        // 1 master + 2 variants + 2 launch screens + 1 square
        assert_eq!(written.len(), 6);
        assert!(config.scripts_dir.is_dir());
        for path in &written {
            assert!(path.is_file(), "missing {}", path.display());
        }

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert!(names.contains(&"app_icon_64.png".to_string()));
        assert!(names.contains(&"app_icon_16.png".to_string()));
        assert!(names.contains(&"launch_screen_hdpi.png".to_string()));
        assert!(names.contains(&"launch_screen_square.png".to_string()));

        let _ = fs::remove_dir_all(config.assets_dir.parent().unwrap());
    }

    #[test]
    fn test_variant_dimensions_come_from_resampling() {
        let config = scratch_config("variants");
        let _ = fs::remove_dir_all(config.assets_dir.parent().unwrap());

        generate_all(&config).unwrap();
        for size in [64u32, 32, 16] {
            let path = config.assets_dir.join(GeneratorConfig::icon_filename(size));
            let (w, h) = image::image_dimensions(&path).unwrap();
            assert_eq!((w, h), (size, size));
        }
        let launch = config.assets_dir.join("launch_screen_xhdpi.png");
        assert_eq!(image::image_dimensions(&launch).unwrap(), (120, 200));

        let _ = fs::remove_dir_all(config.assets_dir.parent().unwrap());
    }

    #[test]
    fn test_rerun_is_idempotent_on_filenames() {
        let config = scratch_config("rerun");
        let _ = fs::remove_dir_all(config.assets_dir.parent().unwrap());

        let first = generate_all(&config).unwrap();
        let second = generate_all(&config).unwrap();
        assert_eq!(first, second);

        let _ = fs::remove_dir_all(config.assets_dir.parent().unwrap());
    }
}
