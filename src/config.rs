use chrono::{Offset, Utc};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub image_names: Vec<String>,
    pub assets_dir: PathBuf,
    pub model_path: Option<PathBuf>,
    pub model_input_width: u32,
    pub model_input_height: u32,
    pub labels: Vec<String>,
    pub logger_timezone: chrono::FixedOffset,
    pub window_size: [f32; 2],
    pub image_display_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_names: vec![
                "image1".to_string(),
                "image2".to_string(),
                "image3".to_string(),
            ],
            assets_dir: PathBuf::from("assets"),
            model_path: None,
            model_input_width: 224,
            model_input_height: 224,
            labels: vec!["angry".to_string(), "happy".to_string(), "sad".to_string()],
            logger_timezone: Utc.fix(),
            window_size: [360.0, 420.0],
            image_display_size: 200.0,
        }
    }
}

impl Config {
    /// `CAT_MOOD_ASSETS_DIR` and `CAT_MOOD_MODEL_PATH` replace the matching fields when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(assets_dir) = std::env::var_os("CAT_MOOD_ASSETS_DIR") {
            self.assets_dir = PathBuf::from(assets_dir);
        }
        if let Some(model_path) = std::env::var_os("CAT_MOOD_MODEL_PATH") {
            self.model_path = Some(PathBuf::from(model_path));
        }
        self
    }
}
