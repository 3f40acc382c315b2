use serde::{Deserialize, Serialize};

/// Feature-name labels drawn at projected centroids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelConfig {
    pub show: bool,
    /// Labels appear once the zoom scale reaches this value
    pub min_zoom: f64,
    pub font_size: f64,
    pub color: String,
    pub font_weight: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            show: false,
            min_zoom: 1.0,
            font_size: 12.0,
            color: "#333".to_string(),
            font_weight: "normal".to_string(),
        }
    }
}

impl LabelConfig {
    pub fn visible_at(&self, scale: f64) -> bool {
        self.show && scale >= self.min_zoom
    }
}
