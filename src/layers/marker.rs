use crate::core::geo::LngLat;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt::Write;

/// Icon viewBox assumed for custom path data when none is given
const DEFAULT_CUSTOM_VIEW_BOX: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    #[default]
    Circle,
    Diamond,
    Pin,
    Star,
    /// Caller-supplied path data, see [`MapMarker::custom_svg`]
    Custom,
}

impl MarkerShape {
    /// Path data for the built-in outlines, centered on the marker position.
    ///
    /// `None` for shapes drawn as a circle or from custom data.
    pub fn path(self, size: f64) -> Option<String> {
        match self {
            MarkerShape::Circle | MarkerShape::Custom => None,
            MarkerShape::Diamond => Some(format!(
                "M0,{} L{},0 L0,{} L{},0 Z",
                -size,
                size * 0.7,
                size,
                -size * 0.7
            )),
            MarkerShape::Pin => {
                let h = size * 2.5;
                let w = size * 1.2;
                Some(format!(
                    "M0,{} C{},{} {},{} {},{} C{},{} 0,0 0,0 C0,0 {},{} {},{} C{},{} {},{} 0,{} Z",
                    -h,
                    -size,
                    -h,
                    -w,
                    -h * 0.6,
                    -w,
                    -h * 0.4,
                    -w,
                    -h * 0.2,
                    w,
                    -h * 0.2,
                    w,
                    -h * 0.4,
                    w,
                    -h * 0.6,
                    size,
                    -h,
                    -h
                ))
            }
            MarkerShape::Star => {
                let mut d = String::new();
                for i in 0..10 {
                    let r = if i % 2 == 0 { size } else { size * 0.4 };
                    let angle = (PI / 5.0) * i as f64 - PI / 2.0;
                    let cmd = if i == 0 { 'M' } else { 'L' };
                    let _ = write!(d, "{}{},{}", cmd, r * angle.cos(), r * angle.sin());
                }
                d.push('Z');
                Some(d)
            }
        }
    }
}

/// What to draw at a marker's position
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MarkerGlyph {
    Circle {
        radius: f64,
    },
    Path {
        d: String,
    },
    /// Custom icon data placed with its own transform
    #[serde(rename_all = "camelCase")]
    Icon {
        d: String,
        transform: String,
        stroke_width: f64,
    },
}

/// A point of interest drawn on top of the geographies
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapMarker {
    pub coordinates: LngLat,
    pub label: Option<String>,
    pub color: Option<String>,
    pub stroke: Option<String>,
    pub size: Option<f64>,
    pub shape: MarkerShape,
    /// Icon path data for [`MarkerShape::Custom`]
    pub custom_svg: Option<String>,
    /// Icon viewBox edge length, 24 when absent
    pub custom_svg_size: Option<f64>,
    pub data: Option<serde_json::Value>,
}

impl MapMarker {
    pub fn new(coordinates: LngLat) -> Self {
        Self {
            coordinates,
            ..Self::default()
        }
    }

    pub fn with_shape(mut self, shape: MarkerShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Resolves the shape at `size`.
    ///
    /// A custom shape without usable path data falls back to a circle; full
    /// SVG documents are not parsed.
    pub fn glyph(&self, size: f64) -> MarkerGlyph {
        if let Some(d) = self.shape.path(size) {
            return MarkerGlyph::Path { d };
        }
        if self.shape == MarkerShape::Custom {
            match self.custom_svg.as_deref().map(str::trim) {
                Some(markup) if markup.to_ascii_lowercase().starts_with("<svg") => {
                    log::debug!("SVG markup icons are not supported, drawing a circle");
                }
                Some(d) if !d.is_empty() => {
                    let view_box = self
                        .custom_svg_size
                        .filter(|v| *v > 0.0)
                        .unwrap_or(DEFAULT_CUSTOM_VIEW_BOX);
                    let scale = size * 2.0 / view_box;
                    let offset = -view_box / 2.0;
                    return MarkerGlyph::Icon {
                        d: d.to_string(),
                        transform: format!("scale({}) translate({}, {})", scale, offset, offset),
                        stroke_width: 1.0 / scale,
                    };
                }
                _ => {}
            }
        }
        MarkerGlyph::Circle { radius: size }
    }
}
