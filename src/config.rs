use crate::controls::PointerMode;
use log::{info, warn, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub obstacles: ObstacleConfig,
    #[serde(default)]
    pub lighting: LightingConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Screen size used when no window reports one (headless runs, tests)
#[derive(Debug, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

/// Initial simulation parameters
#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_ray_count")]
    pub ray_count: f32,
    #[serde(default = "default_rect_count")]
    pub rect_count: f32,
    #[serde(default = "default_circle_count")]
    pub circle_count: f32,
    /// Cone width as a fraction of PI
    #[serde(default = "default_cone_size")]
    pub cone_size: f32,
    /// Pixels the source moves per frame while an arrow key is held
    #[serde(default = "default_move_step")]
    pub move_step: f32,
    #[serde(default)]
    pub pointer_mode: PointerMode,
}

/// Random obstacle generation
#[derive(Debug, Clone, Deserialize)]
pub struct ObstacleConfig {
    #[serde(default = "default_size_min")]
    pub size_min: f32,
    #[serde(default = "default_size_span")]
    pub size_span: f32,
    #[serde(default = "default_min_brightness")]
    pub min_brightness: u8,
}

#[derive(Debug, Deserialize)]
pub struct LightingConfig {
    #[serde(default = "default_falloff_distance")]
    pub falloff_distance: f32,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default)]
    pub background_r: u8,
    #[serde(default)]
    pub background_g: u8,
    #[serde(default)]
    pub background_b: u8,
    #[serde(default = "default_line_width")]
    pub line_width: f32,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f32,
    #[serde(default = "default_show_sensor_bar")]
    pub show_sensor_bar: bool,
    #[serde(default = "default_sensor_bar_height")]
    pub sensor_bar_height: f32,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Default env_logger filter, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_width() -> f32 { 1280.0 }
fn default_height() -> f32 { 720.0 }
fn default_ray_count() -> f32 { 200.0 }
fn default_rect_count() -> f32 { 5.0 }
fn default_circle_count() -> f32 { 5.0 }
fn default_cone_size() -> f32 { 2.0 }
fn default_move_step() -> f32 { 10.0 }
fn default_size_min() -> f32 { 100.0 }
fn default_size_span() -> f32 { 251.0 }
fn default_min_brightness() -> u8 { 50 }
fn default_falloff_distance() -> f32 { 800.0 }
fn default_window_title() -> String { "Raylight - 2D Ray Casting".to_string() }
fn default_line_width() -> f32 { 3.0 }
fn default_marker_radius() -> f32 { 10.0 }
fn default_show_sensor_bar() -> bool { true }
fn default_sensor_bar_height() -> f32 { 24.0 }
fn default_log_level() -> String { "info".to_string() }

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ray_count: default_ray_count(),
            rect_count: default_rect_count(),
            circle_count: default_circle_count(),
            cone_size: default_cone_size(),
            move_step: default_move_step(),
            pointer_mode: PointerMode::default(),
        }
    }
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            size_min: default_size_min(),
            size_span: default_size_span(),
            min_brightness: default_min_brightness(),
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            falloff_distance: default_falloff_distance(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            background_r: 0,
            background_g: 0,
            background_b: 0,
            line_width: default_line_width(),
            marker_radius: default_marker_radius(),
            show_sensor_bar: default_show_sensor_bar(),
            sensor_bar_height: default_sensor_bar_height(),
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`, or None when it is not a known filter name
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.level.trim().parse().ok()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            simulation: SimulationConfig::default(),
            obstacles: ObstacleConfig::default(),
            lighting: LightingConfig::default(),
            visual: VisualConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from config.toml, or use defaults if it doesn't exist
    pub fn load() -> Self {
        Self::load_from("config.toml")
    }

    /// Load configuration from `path`, falling back to defaults on any failure
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("{}; using default configuration", e);
                    Config::default()
                }
            },
            Err(_) => {
                info!("No {} found, using default configuration", path.display());
                Config::default()
            }
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config: {}", e))
    }
}
