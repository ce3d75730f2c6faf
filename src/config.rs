//! JSON configuration for the demo tooling.
use crate::detector::HandParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    /// 16-bit grayscale PNG holding millimetre depth values.
    pub input: PathBuf,
    #[serde(default)]
    pub params: HandParams,
    #[serde(default)]
    pub hand_closed: bool,
    pub output: DemoOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DemoOutputConfig {
    pub overlay_image: PathBuf,
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_default_params() {
        let json = r#"{
            "input": "depth.png",
            "output": {
                "overlay_image": "overlay.png",
                "report_json": "report.json"
            }
        }"#;
        let config: DemoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.params.min_contour_size, 40);
        assert!(!config.hand_closed);
    }

    #[test]
    fn params_can_be_overridden_per_field() {
        let json = r#"{
            "input": "depth.png",
            "params": { "max_detection_threshold": 120 },
            "output": {
                "overlay_image": "overlay.png",
                "report_json": "report.json"
            }
        }"#;
        let config: DemoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.params.max_detection_threshold, 120);
        assert_eq!(config.params.min_contour_size, 40);
    }
}
