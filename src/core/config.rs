//! Configuration for map behaviour and styling
//!
//! Every struct here deserializes from camelCase JSON and fills missing keys
//! with the defaults collected in [`crate::core::constants`]. Interaction
//! settings can also be picked from presets through [`InteractionProfile`].

use crate::core::constants::*;
use crate::core::geo::Point;
use crate::layers::{
    annotation::MapAnnotation, graticule::GraticuleConfig, label::LabelConfig, line::MapLine,
    marker::MapMarker,
};
use crate::projection::{ProjectionFamily, ProjectionSpec};
use crate::styling::{choropleth::ChoroplethSpec, continents::Continent};
use crate::Result;
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Bounds and input switches of the zoom/pan layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoomConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub initial_zoom: f64,
    /// Initial pan offset relative to the viewport center, logical pixels
    pub center: Point,
    /// Scale change per unit of wheel delta
    pub sensitivity: f64,
    /// Factor used by `zoom_in` / `zoom_out`
    pub zoom_step: f64,
    pub enable_wheel_zoom: bool,
    pub enable_pan: bool,
    pub enable_touch: bool,
    pub animation_duration_ms: u64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            initial_zoom: DEFAULT_MIN_ZOOM,
            center: Point::default(),
            sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            zoom_step: DEFAULT_ZOOM_STEP,
            enable_wheel_zoom: true,
            enable_pan: true,
            enable_touch: true,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
        }
    }
}

impl ZoomConfig {
    /// Repairs settings that would break the scale invariant.
    ///
    /// Non-positive or non-finite bounds fall back to the defaults and
    /// swapped bounds are reordered. Each repair logs a warning.
    pub fn normalized(mut self) -> Self {
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            log::warn!(
                "min_zoom {} is not a positive number, using {}",
                self.min_zoom,
                DEFAULT_MIN_ZOOM
            );
            self.min_zoom = DEFAULT_MIN_ZOOM;
        }
        if !(self.max_zoom.is_finite() && self.max_zoom > 0.0) {
            log::warn!(
                "max_zoom {} is not a positive number, using {}",
                self.max_zoom,
                DEFAULT_MAX_ZOOM
            );
            self.max_zoom = DEFAULT_MAX_ZOOM.max(self.min_zoom);
        }
        if self.min_zoom > self.max_zoom {
            log::warn!(
                "min_zoom {} exceeds max_zoom {}, swapping",
                self.min_zoom,
                self.max_zoom
            );
            std::mem::swap(&mut self.min_zoom, &mut self.max_zoom);
        }
        if !self.sensitivity.is_finite() {
            log::warn!("zoom sensitivity is not finite, using default");
            self.sensitivity = DEFAULT_ZOOM_SENSITIVITY;
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            log::warn!("zoom step {} is not positive, using default", self.zoom_step);
            self.zoom_step = DEFAULT_ZOOM_STEP;
        }
        if !self.initial_zoom.is_finite() {
            self.initial_zoom = self.min_zoom;
        }
        self
    }

    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_zoom, self.max_zoom)
    }
}

/// Preset interaction behaviours
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionProfile {
    /// Wheel, drag and touch all enabled with the standard range
    #[default]
    Standard,
    /// Fixed view; every input is ignored
    Static,
    /// Wider zoom range, gentler wheel and quicker transitions
    TouchFriendly,
    Custom(ZoomConfig),
}

impl InteractionProfile {
    pub fn resolve(&self) -> ZoomConfig {
        match self {
            Self::Standard => ZoomConfig::default(),
            Self::Static => ZoomConfig {
                min_zoom: 1.0,
                max_zoom: 1.0,
                enable_wheel_zoom: false,
                enable_pan: false,
                enable_touch: false,
                ..ZoomConfig::default()
            },
            Self::TouchFriendly => ZoomConfig {
                max_zoom: 12.0,
                sensitivity: 0.0005,
                zoom_step: 2.0,
                animation_duration_ms: 500,
                ..ZoomConfig::default()
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

/// Base fill and stroke applied to every geography
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeographyStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    /// Fill while hovered; `None` keeps the resolved fill
    pub hover_fill: Option<String>,
}

impl Default for GeographyStyle {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL.to_string(),
            stroke: DEFAULT_STROKE.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            hover_fill: None,
        }
    }
}

/// Fallback color and size for markers and lines that set none
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlayDefaults {
    pub marker_color: String,
    pub marker_size: f64,
    pub line_color: String,
    pub line_stroke_width: f64,
}

impl Default for OverlayDefaults {
    fn default() -> Self {
        Self {
            marker_color: DEFAULT_ACCENT.to_string(),
            marker_size: DEFAULT_MARKER_SIZE,
            line_color: DEFAULT_ACCENT.to_string(),
            line_stroke_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Everything a [`crate::MapView`] needs to build its scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapOptions {
    pub width: f64,
    pub height: f64,
    pub projection: ProjectionFamily,
    pub projection_config: ProjectionSpec,
    /// Continents to keep; empty keeps every feature
    pub continents: Vec<Continent>,
    pub style: GeographyStyle,
    pub overlays: OverlayDefaults,
    pub markers: Vec<MapMarker>,
    pub lines: Vec<MapLine>,
    pub annotations: Vec<MapAnnotation>,
    pub choropleth_data: Option<FxHashMap<String, f64>>,
    pub choropleth: ChoroplethSpec,
    pub show_graticule: bool,
    pub graticule: GraticuleConfig,
    pub labels: LabelConfig,
    pub zoomable: bool,
    pub zoom: ZoomConfig,
    pub zoom_on_click: bool,
    pub zoom_on_click_level: f64,
    pub show_tooltip: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            projection: ProjectionFamily::default(),
            projection_config: ProjectionSpec::default(),
            continents: Vec::new(),
            style: GeographyStyle::default(),
            overlays: OverlayDefaults::default(),
            markers: Vec::new(),
            lines: Vec::new(),
            annotations: Vec::new(),
            choropleth_data: None,
            choropleth: ChoroplethSpec::default(),
            show_graticule: false,
            graticule: GraticuleConfig::default(),
            labels: LabelConfig::default(),
            zoomable: false,
            zoom: ZoomConfig::default(),
            zoom_on_click: false,
            zoom_on_click_level: DEFAULT_ZOOM_ON_CLICK_LEVEL,
            show_tooltip: false,
        }
    }
}

impl MapOptions {
    /// Parses options from a camelCase JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_projection(mut self, family: ProjectionFamily) -> Self {
        self.projection = family;
        self
    }

    pub fn with_interaction(mut self, profile: InteractionProfile) -> Self {
        self.zoomable = profile != InteractionProfile::Static;
        self.zoom = profile.resolve();
        self
    }
}
