use crate::{
    animation::transitions::AnimationHandle,
    core::{
        config::{MapOptions, ZoomConfig},
        constants::DEFAULT_ACCENT,
        geo::Point,
        viewport::{Viewport, ZoomTransform},
    },
    data::feature::{value_as_text, GeographyFeature},
    input::{events::MapEvent, handler::ZoomPanController},
    layers::{
        annotation::SUBJECT_RADIUS,
        curves::{annotation_path, screen_line_path},
        line::ENDPOINT_RADIUS,
        marker::MarkerGlyph,
    },
    projection::{GeoProjection, ProjectionConfigurator},
    styling::{choropleth::ChoroplethScale, continents::filter_by_continents},
};
use instant::Instant;
use serde::Serialize;

/// Text color of annotations without their own color
const ANNOTATION_TEXT_COLOR: &str = "#000";
/// Marker outline when a marker sets none
const MARKER_STROKE: &str = "#FFFFFF";
const MARKER_STROKE_WIDTH: f64 = 2.0;
/// Vertical nudge of annotation text above its anchor
const ANNOTATION_TEXT_DY: f64 = -5.0;

/// One drawable element. Coordinates are in base planar space; the scene's
/// transform maps them to the screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DrawItem {
    #[serde(rename_all = "camelCase")]
    Graticule {
        d: String,
        color: String,
        stroke_width: f64,
        opacity: f64,
    },
    #[serde(rename_all = "camelCase")]
    Geography {
        key: String,
        d: String,
        fill: String,
        stroke: String,
        stroke_width: f64,
    },
    #[serde(rename_all = "camelCase")]
    Line {
        index: usize,
        d: String,
        color: String,
        stroke_width: f64,
        dash_array: Option<String>,
    },
    LineEndpoint {
        index: usize,
        center: Point,
        radius: f64,
        color: String,
    },
    #[serde(rename_all = "camelCase")]
    Marker {
        index: usize,
        position: Point,
        glyph: MarkerGlyph,
        fill: String,
        stroke: String,
        stroke_width: f64,
        label: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Annotation {
        index: usize,
        subject: Point,
        subject_radius: f64,
        connector: String,
        color: String,
        text: String,
        text_position: Point,
        text_dy: f64,
        text_anchor: String,
        text_color: String,
        font_size: f64,
        font_weight: String,
    },
    #[serde(rename_all = "camelCase")]
    Label {
        key: String,
        position: Point,
        text: String,
        font_size: f64,
        color: String,
        font_weight: String,
    },
}

impl DrawItem {
    pub fn kind(&self) -> &'static str {
        match self {
            DrawItem::Graticule { .. } => "graticule",
            DrawItem::Geography { .. } => "geography",
            DrawItem::Line { .. } => "line",
            DrawItem::LineEndpoint { .. } => "lineEndpoint",
            DrawItem::Marker { .. } => "marker",
            DrawItem::Annotation { .. } => "annotation",
            DrawItem::Label { .. } => "label",
        }
    }
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub transform: ZoomTransform,
    pub items: Vec<DrawItem>,
}

impl Scene {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a DrawItem> + 'a {
        self.items.iter().filter(move |item| item.kind() == kind)
    }
}

/// What hovering a geography produces
#[derive(Debug, Clone, PartialEq)]
pub struct HoverInfo {
    pub event: MapEvent,
    /// Fill to show while hovered
    pub fill: String,
    /// Tooltip text when tooltips are enabled
    pub tooltip: Option<String>,
}

/// Result of clicking a geography
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    pub event: MapEvent,
    /// Started when zoom-on-click is enabled and the feature projects
    pub animation: Option<AnimationHandle>,
}

/// A map instance: options, the configured projection, the visible
/// features and the zoom/pan controller.
#[derive(Debug)]
pub struct MapView {
    options: MapOptions,
    configurator: ProjectionConfigurator,
    projection: Box<dyn GeoProjection>,
    all_features: Vec<GeographyFeature>,
    features: Vec<GeographyFeature>,
    controller: ZoomPanController,
    hovered: Option<String>,
}

impl MapView {
    #[cfg(feature = "builtin-projections")]
    pub fn new(options: MapOptions, features: Vec<GeographyFeature>) -> Self {
        Self::with_configurator(options, features, ProjectionConfigurator::default())
    }

    pub fn with_configurator(
        options: MapOptions,
        features: Vec<GeographyFeature>,
        configurator: ProjectionConfigurator,
    ) -> Self {
        let projection = Self::build_projection(&configurator, &options);
        let controller = ZoomPanController::new(
            Self::zoom_config(&options),
            Viewport::new(options.width, options.height),
        );
        let mut view = Self {
            options,
            configurator,
            projection,
            all_features: features,
            features: Vec::new(),
            controller,
            hovered: None,
        };
        view.refilter();
        view
    }

    fn build_projection(
        configurator: &ProjectionConfigurator,
        options: &MapOptions,
    ) -> Box<dyn GeoProjection> {
        configurator.build(
            options.projection,
            &options.projection_config,
            options.width,
            options.height,
        )
    }

    /// Input switches are off unless the map is zoomable
    fn zoom_config(options: &MapOptions) -> ZoomConfig {
        if options.zoomable {
            options.zoom.clone()
        } else {
            ZoomConfig {
                enable_wheel_zoom: false,
                enable_pan: false,
                enable_touch: false,
                ..options.zoom.clone()
            }
        }
    }

    fn refilter(&mut self) {
        self.features = if self.options.continents.is_empty() {
            self.all_features.clone()
        } else {
            filter_by_continents(&self.all_features, self.options.continents.clone())
        };
        if let Some(key) = self.hovered.take() {
            if self.features.iter().any(|f| f.key == key) {
                self.hovered = Some(key);
            } else {
                log::trace!("hovered feature {} filtered out", key);
            }
        }
        log::debug!(
            "{} of {} features visible",
            self.features.len(),
            self.all_features.len()
        );
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn projection(&self) -> &dyn GeoProjection {
        self.projection.as_ref()
    }

    /// Features left after the continent filter
    pub fn features(&self) -> &[GeographyFeature] {
        &self.features
    }

    pub fn feature(&self, key: &str) -> Option<&GeographyFeature> {
        self.features.iter().find(|feature| feature.key == key)
    }

    pub fn controller(&self) -> &ZoomPanController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ZoomPanController {
        &mut self.controller
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Replaces every option, rebuilding the projection and filters
    pub fn set_options(&mut self, options: MapOptions) {
        self.projection = Self::build_projection(&self.configurator, &options);
        self.controller.set_config(Self::zoom_config(&options));
        self.controller
            .set_viewport(Viewport::new(options.width, options.height));
        self.options = options;
        self.refilter();
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        let options = self.options.clone().with_size(width, height);
        self.set_options(options);
    }

    pub fn set_features(&mut self, features: Vec<GeographyFeature>) {
        self.all_features = features;
        self.hovered = None;
        self.refilter();
    }

    fn base_fill(&self, feature: &GeographyFeature) -> String {
        let choropleth = self
            .options
            .choropleth_data
            .as_ref()
            .map(|data| ChoroplethScale::new(&self.options.choropleth, data));
        choropleth
            .and_then(|scale| scale.color_for_feature(feature))
            .unwrap_or(&self.options.style.fill)
            .to_string()
    }

    /// Starts hovering `key`; `None` when no visible feature has that key
    pub fn hover(&mut self, key: &str) -> Option<HoverInfo> {
        let info = {
            let feature = self.feature(key)?;
            let fill = match &self.options.style.hover_fill {
                Some(fill) => fill.clone(),
                None => self.base_fill(feature),
            };
            let tooltip = self.options.show_tooltip.then(|| {
                feature
                    .property("name")
                    .and_then(value_as_text)
                    .unwrap_or_else(|| "Unknown".to_string())
            });
            HoverInfo {
                event: MapEvent::GeographyHover {
                    key: feature.key.clone(),
                    id: feature.id.clone(),
                    properties: feature.properties.clone(),
                },
                fill,
                tooltip,
            }
        };
        if let MapEvent::GeographyHover { key, .. } = &info.event {
            self.hovered = Some(key.clone());
        }
        Some(info)
    }

    /// Ends the hover; the fill returns to its resolved value
    pub fn leave(&mut self) -> Option<MapEvent> {
        self.hovered
            .take()
            .map(|key| MapEvent::GeographyLeave { key })
    }

    /// Clicks `key`, zooming to it first when zoom-on-click is enabled
    pub fn click(&mut self, key: &str, now: Instant) -> Option<ClickOutcome> {
        let feature = self.feature(key)?.clone();
        let animation = if self.options.zoom_on_click {
            self.controller.zoom_to_feature(
                &feature,
                self.options.zoom_on_click_level,
                self.projection.as_ref(),
                now,
            )
        } else {
            None
        };
        Some(ClickOutcome {
            event: MapEvent::GeographyClick {
                key: feature.key,
                id: feature.id,
                properties: feature.properties,
            },
            animation,
        })
    }

    /// Event for clicking the marker at `index`, if it exists
    pub fn click_marker(&self, index: usize) -> Option<MapEvent> {
        (index < self.options.markers.len()).then_some(MapEvent::MarkerClick { index })
    }

    pub fn click_line(&self, index: usize) -> Option<MapEvent> {
        (index < self.options.lines.len()).then_some(MapEvent::LineClick { index })
    }

    /// Builds the draw list in paint order: graticule, geographies, lines,
    /// markers, annotations, labels
    pub fn scene(&self) -> Scene {
        let mut items = Vec::new();
        self.push_graticule(&mut items);
        self.push_geographies(&mut items);
        self.push_lines(&mut items);
        self.push_markers(&mut items);
        self.push_annotations(&mut items);
        self.push_labels(&mut items);
        Scene {
            width: self.options.width,
            height: self.options.height,
            transform: self.transform(),
            items,
        }
    }

    pub fn transform(&self) -> ZoomTransform {
        self.controller.transform()
    }

    fn push_graticule(&self, items: &mut Vec<DrawItem>) {
        if !self.options.show_graticule {
            return;
        }
        let config = &self.options.graticule;
        items.push(DrawItem::Graticule {
            d: self.projection.path_for(&config.lines().into()),
            color: config.color.clone(),
            stroke_width: config.stroke_width,
            opacity: config.opacity,
        });
        items.push(DrawItem::Graticule {
            d: self.projection.path_for(&config.outline().into()),
            color: config.color.clone(),
            stroke_width: config.outline_stroke_width(),
            opacity: config.outline_opacity(),
        });
    }

    fn push_geographies(&self, items: &mut Vec<DrawItem>) {
        let style = &self.options.style;
        let choropleth = self
            .options
            .choropleth_data
            .as_ref()
            .map(|data| ChoroplethScale::new(&self.options.choropleth, data));

        for feature in &self.features {
            let d = self.projection.path_for(&feature.geometry);
            if d.is_empty() {
                log::trace!("geography {} has nothing visible", feature.key);
            }
            let hovered = self.hovered.as_deref() == Some(feature.key.as_str());
            let fill = match (&style.hover_fill, hovered) {
                (Some(fill), true) => fill.as_str(),
                _ => choropleth
                    .as_ref()
                    .and_then(|scale| scale.color_for_feature(feature))
                    .unwrap_or(&style.fill),
            };
            items.push(DrawItem::Geography {
                key: feature.key.clone(),
                d,
                fill: fill.to_string(),
                stroke: style.stroke.clone(),
                stroke_width: style.stroke_width,
            });
        }
    }

    fn push_lines(&self, items: &mut Vec<DrawItem>) {
        let defaults = &self.options.overlays;
        for (index, line) in self.options.lines.iter().enumerate() {
            let start = self.projection.project(line.from);
            let end = self.projection.project(line.to);
            let color = line
                .color
                .clone()
                .unwrap_or_else(|| defaults.line_color.clone());

            let (Some(start), Some(end)) = (start, end) else {
                log::debug!("line {} has an unprojectable endpoint, skipped", index);
                continue;
            };
            items.push(DrawItem::Line {
                index,
                d: screen_line_path(start, end, line.curve),
                color: color.clone(),
                stroke_width: line
                    .stroke_width
                    .filter(|w| *w != 0.0)
                    .unwrap_or(defaults.line_stroke_width),
                dash_array: line.dash_array().map(str::to_string),
            });
            for center in [start, end] {
                items.push(DrawItem::LineEndpoint {
                    index,
                    center,
                    radius: ENDPOINT_RADIUS,
                    color: color.clone(),
                });
            }
        }
    }

    fn push_markers(&self, items: &mut Vec<DrawItem>) {
        let defaults = &self.options.overlays;
        for (index, marker) in self.options.markers.iter().enumerate() {
            let Some(position) = self.projection.project(marker.coordinates) else {
                log::debug!("marker {} at {:?} does not project", index, marker.coordinates);
                continue;
            };
            let size = marker
                .size
                .filter(|s| *s != 0.0)
                .unwrap_or(defaults.marker_size);
            items.push(DrawItem::Marker {
                index,
                position,
                glyph: marker.glyph(size),
                fill: marker
                    .color
                    .clone()
                    .unwrap_or_else(|| defaults.marker_color.clone()),
                stroke: marker
                    .stroke
                    .clone()
                    .unwrap_or_else(|| MARKER_STROKE.to_string()),
                stroke_width: MARKER_STROKE_WIDTH,
                label: marker.label.clone(),
            });
        }
    }

    fn push_annotations(&self, items: &mut Vec<DrawItem>) {
        for (index, note) in self.options.annotations.iter().enumerate() {
            let Some(subject) = self.projection.project(note.coordinates) else {
                log::debug!("annotation {} at {:?} does not project", index, note.coordinates);
                continue;
            };
            let (dx, dy) = note.offset();
            let color = note
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_ACCENT.to_string());
            items.push(DrawItem::Annotation {
                index,
                subject,
                subject_radius: SUBJECT_RADIUS,
                connector: annotation_path(subject.x, subject.y, dx, dy, note.curve()),
                color,
                text: note.text.clone(),
                text_position: Point::new(subject.x + dx, subject.y + dy),
                text_dy: ANNOTATION_TEXT_DY,
                text_anchor: note.text_anchor().to_string(),
                text_color: note
                    .color
                    .clone()
                    .unwrap_or_else(|| ANNOTATION_TEXT_COLOR.to_string()),
                font_size: note.font_size(),
                font_weight: note
                    .font_weight
                    .clone()
                    .unwrap_or_else(|| "normal".to_string()),
            });
        }
    }

    fn push_labels(&self, items: &mut Vec<DrawItem>) {
        let labels = &self.options.labels;
        if !labels.visible_at(self.controller.state().scale) {
            return;
        }
        for feature in &self.features {
            let Some(text) = feature.name() else {
                continue;
            };
            let Some(position) = feature.centroid().and_then(|c| self.projection.project(c)) else {
                log::trace!("label for {} has no projectable centroid", feature.key);
                continue;
            };
            items.push(DrawItem::Label {
                key: feature.key.clone(),
                position,
                text,
                font_size: labels.font_size,
                color: labels.color.clone(),
                font_weight: labels.font_weight.clone(),
            });
        }
    }
}
