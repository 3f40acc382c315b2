use crate::core::geo::LngLat;
use serde::{Deserialize, Serialize};

/// Dash pattern of dashed connection lines
pub const LINE_DASH: &str = "5,3";

/// Radius of the dots drawn at projected line endpoints
pub const ENDPOINT_RADIUS: f64 = 3.0;

/// A connection between two places, straight or bowed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapLine {
    pub from: LngLat,
    pub to: LngLat,
    pub color: Option<String>,
    pub stroke_width: Option<f64>,
    /// 0 draws a straight line, larger values bow further
    pub curve: f64,
    pub dashed: bool,
    pub data: Option<serde_json::Value>,
}

impl MapLine {
    pub fn new(from: LngLat, to: LngLat) -> Self {
        Self {
            from,
            to,
            ..Self::default()
        }
    }

    pub fn with_curve(mut self, curve: f64) -> Self {
        self.curve = curve;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn dash_array(&self) -> Option<&'static str> {
        self.dashed.then_some(LINE_DASH)
    }
}
