//! Prelude module for common mapframe types and traits
//!
//! Re-exports what most hosts need with `use mapframe::prelude::*;`

pub use crate::core::{
    bounds::Bounds,
    config::{GeographyStyle, InteractionProfile, MapOptions, OverlayDefaults, ZoomConfig},
    geo::{LngLat, Point},
    map::{ClickOutcome, DrawItem, HoverInfo, MapView, Scene},
    viewport::{Viewport, ZoomState, ZoomTransform},
};

pub use crate::data::{parse_features, GeographyFeature};

pub use crate::input::{
    GestureState, MapEvent, MouseButton, TouchPoint, ZoomEvent, ZoomPanController,
};

pub use crate::animation::{AnimationHandle, FrameStep};

pub use crate::layers::{
    annotation_path, line_path, GraticuleConfig, LabelConfig, MapAnnotation, MapLine, MapMarker,
    MarkerGlyph, MarkerShape,
};

pub use crate::projection::{
    GeoProjection, ProjectionConfigurator, ProjectionFamily, ProjectionProvider, ProjectionSpec,
    Rotation,
};

#[cfg(feature = "builtin-projections")]
pub use crate::projection::builtin::{BuiltinProjection, BuiltinProvider};

pub use crate::styling::{
    classify, color_for, filter_by_continents, ChoroplethScale, ChoroplethSpec, Continent,
    ContinentSet,
};

pub use crate::traits::Lerp;

pub use crate::{Error as MapError, Result};

pub use instant::{Duration, Instant};

pub use fxhash::FxHashMap as HashMap;
