use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub classes: ClassesConfig,
    #[serde(default)]
    pub layers: LayersConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_fetch_path")]
    pub fetch_path: String,
    #[serde(default = "default_push_path")]
    pub push_path: String,
    #[serde(default)]
    pub csrf_token: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub scene_id: i64,
    #[serde(default)]
    pub algo_id: i64,
    #[serde(default = "default_srid")]
    pub srid: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassesConfig {
    pub config_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayersConfig {
    #[serde(default = "default_primary_basemap")]
    pub primary_basemap: String,
    #[serde(default = "default_secondary_basemap")]
    pub secondary_basemap: String,
    /// Extra tile layers bound to Ctrl+1..Ctrl+8, in key order.
    #[serde(default)]
    pub auxiliary: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Zoom difference between the satellite and the sentinel view.
    #[serde(default = "default_zoom_offset")]
    pub zoom_offset: f64,
    #[serde(default = "default_zoom")]
    pub initial_zoom: f64,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_fetch_path() -> String {
    "/api/superpixels/get_sp/".to_string()
}

// Bulk `{upd: [...]}` endpoint of this tool. The stock server only has the
// single-record `save_one_sp`; point this at whatever accepts batches.
fn default_push_path() -> String {
    "/api/superpixels/save_sp/".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_srid() -> u32 {
    3857
}

fn default_primary_basemap() -> String {
    "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_secondary_basemap() -> String {
    "https://server.arcgisonline.com/arcgis/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
        .to_string()
}

fn default_zoom_offset() -> f64 {
    1.0
}

fn default_zoom() -> f64 {
    15.0
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fetch_path: default_fetch_path(),
            push_path: default_push_path(),
            csrf_token: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scene_id: 0,
            algo_id: 0,
            srid: default_srid(),
        }
    }
}

impl Default for LayersConfig {
    fn default() -> Self {
        Self {
            primary_basemap: default_primary_basemap(),
            secondary_basemap: default_secondary_basemap(),
            auxiliary: Vec::new(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_offset: default_zoom_offset(),
            initial_zoom: default_zoom(),
        }
    }
}

/// Get the path to the config file
pub fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "spmc-labeler")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration from file, or return default if file doesn't exist
pub fn load_config() -> AppConfig {
    let Some(path) = config_path() else {
        warn!("No config directory available. Using defaults.");
        return AppConfig::default();
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            warn!("Failed to parse config file: {}. Using defaults.", e);
            AppConfig::default()
        }),
        Err(e) => {
            warn!("Failed to read config file: {}. Using defaults.", e);
            AppConfig::default()
        }
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Save configuration to the default config file
pub fn save_config(config: &AppConfig) -> Result<PathBuf, String> {
    let path = config_path().ok_or_else(|| "Failed to determine config directory".to_string())?;
    save_config_to(config, &path)?;
    Ok(path)
}

/// Save configuration to `path`, creating parent directories as needed
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let toml = toml::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(path, toml).map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}
