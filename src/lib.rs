//! # mapframe
//!
//! Transform and styling engine for interactive 2-D world maps.
//!
//! The crate turns spherical geography into the numbers and path strings a
//! rendering layer needs: it configures a projection, composes a zoom/pan
//! affine layer on top of it, generates curved connector paths, maps data
//! values to choropleth fills and classifies countries by continent.
//! Drawing and event wiring are left to the host.

pub mod animation;
pub mod core;
pub mod data;
pub mod input;
pub mod layers;
pub mod projection;
pub mod styling;
pub mod traits;

pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use core::{
    config::{MapOptions, ZoomConfig},
    geo::{LngLat, Point},
    map::{MapView, Scene},
    viewport::{Viewport, ZoomState, ZoomTransform},
};

pub use data::feature::GeographyFeature;

pub use input::{
    events::{MapEvent, ZoomEvent},
    handler::ZoomPanController,
};

pub use projection::{
    configurator::ProjectionConfigurator, GeoProjection, ProjectionFamily, ProjectionProvider,
    ProjectionSpec,
};

#[cfg(feature = "builtin-projections")]
pub use projection::builtin::BuiltinProvider;

pub use styling::{
    choropleth::{ChoroplethScale, ChoroplethSpec},
    continents::{classify, filter_by_continents, Continent, ContinentSet},
};

pub use layers::curves::{annotation_path, line_path};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Projection error: {0}")]
    Projection(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
