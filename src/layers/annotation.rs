use crate::core::geo::LngLat;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ANNOTATION_DX: f64 = 30.0;
pub const DEFAULT_ANNOTATION_DY: f64 = -30.0;
pub const DEFAULT_ANNOTATION_FONT_SIZE: f64 = 14.0;
pub const SUBJECT_RADIUS: f64 = 4.0;

/// A text callout connected to a point on the map
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapAnnotation {
    pub coordinates: LngLat,
    pub text: String,
    /// Label offset from the projected point; zero or absent uses the default
    pub dx: Option<f64>,
    pub dy: Option<f64>,
    pub curve: Option<f64>,
    pub color: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<String>,
}

/// Falls back when a value is missing or zero
fn non_zero(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| *v != 0.0 && !v.is_nan()).unwrap_or(default)
}

impl MapAnnotation {
    pub fn new(coordinates: LngLat, text: impl Into<String>) -> Self {
        Self {
            coordinates,
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn offset(&self) -> (f64, f64) {
        (
            non_zero(self.dx, DEFAULT_ANNOTATION_DX),
            non_zero(self.dy, DEFAULT_ANNOTATION_DY),
        )
    }

    pub fn curve(&self) -> f64 {
        non_zero(self.curve, 0.0)
    }

    pub fn font_size(&self) -> f64 {
        non_zero(self.font_size, DEFAULT_ANNOTATION_FONT_SIZE)
    }

    /// Text anchors away from the subject point
    pub fn text_anchor(&self) -> &'static str {
        if self.offset().0 > 0.0 {
            "start"
        } else {
            "end"
        }
    }
}
