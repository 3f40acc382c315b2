//! Overlays drawn on top of the base geographies
//!
//! Each overlay is plain data with serde support; [`crate::MapView`] turns
//! them into draw items through the configured projection.

pub mod annotation;
pub mod curves;
pub mod graticule;
pub mod label;
pub mod line;
pub mod marker;

pub use annotation::MapAnnotation;
pub use curves::{annotation_path, line_path};
pub use graticule::GraticuleConfig;
pub use label::LabelConfig;
pub use line::MapLine;
pub use marker::{MapMarker, MarkerGlyph, MarkerShape};
