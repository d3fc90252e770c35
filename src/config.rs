//! Generator configuration.
//!
//! All layout and naming constants live here as an explicit structure passed
//! into the driver, so tests can run the full pipeline against alternate
//! size sets and a scratch directory. The defaults reproduce the shipped
//! asset matrix.

use std::path::PathBuf;

/// One launch-screen output: canvas size plus the filename suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub width: u32,
    pub height: u32,
    pub suffix: String,
}

impl LaunchSpec {
    pub fn new(width: u32, height: u32, suffix: &str) -> Self {
        Self {
            width,
            height,
            suffix: suffix.to_string(),
        }
    }
}

/// Full configuration for one generator run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory receiving the generated PNGs. Created if missing.
    pub assets_dir: PathBuf,
    /// Companion directory for build scripts. Created if missing.
    pub scripts_dir: PathBuf,
    /// Display name rendered on launch screens.
    pub app_name: String,
    /// Secondary line rendered beneath the app name.
    pub tagline: String,
    /// Edge length of the master icon; variants are downsampled from it.
    pub master_icon_size: u32,
    /// Variant icon edge lengths, produced by Lanczos3 resampling.
    pub icon_variants: Vec<u32>,
    /// Launch screens, one per target screen density.
    pub launch_screens: Vec<LaunchSpec>,
    /// Edge length of the additional square launch screen.
    pub square_launch_size: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            scripts_dir: PathBuf::from("scripts"),
            app_name: "Photo Points".to_string(),
            tagline: "Environmental Monitoring".to_string(),
            master_icon_size: 1024,
            icon_variants: vec![512, 256, 128, 64],
            launch_screens: vec![
                LaunchSpec::new(1080, 1920, "hdpi"),
                LaunchSpec::new(1440, 2560, "xhdpi"),
                LaunchSpec::new(1125, 2436, "ios"),
                LaunchSpec::new(1242, 2208, "ios_plus"),
                LaunchSpec::new(828, 1792, "ios_xr"),
            ],
            square_launch_size: 1024,
        }
    }
}

impl GeneratorConfig {
    pub fn icon_filename(size: u32) -> String {
        format!("app_icon_{}.png", size)
    }

    pub fn launch_filename(suffix: &str) -> String {
        format!("launch_screen_{}.png", suffix)
    }

    pub fn square_launch_filename() -> String {
        "launch_screen_square.png".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_icon_matrix() {
        let config = GeneratorConfig::default();
        assert_eq!(config.master_icon_size, 1024);
        assert_eq!(config.icon_variants, vec![512, 256, 128, 64]);
    }

    #[test]
    fn test_default_launch_matrix() {
        let config = GeneratorConfig::default();
        let suffixes: Vec<&str> = config
            .launch_screens
            .iter()
            .map(|spec| spec.suffix.as_str())
            .collect();
        assert_eq!(suffixes, vec!["hdpi", "xhdpi", "ios", "ios_plus", "ios_xr"]);
        assert_eq!(config.launch_screens[0].width, 1080);
        assert_eq!(config.launch_screens[0].height, 1920);
        assert_eq!(config.square_launch_size, 1024);
    }

    #[test]
    fn test_filenames_are_deterministic() {
        assert_eq!(GeneratorConfig::icon_filename(512), "app_icon_512.png");
        assert_eq!(
            GeneratorConfig::launch_filename("hdpi"),
            "launch_screen_hdpi.png"
        );
        assert_eq!(
            GeneratorConfig::square_launch_filename(),
            "launch_screen_square.png"
        );
    }
}
