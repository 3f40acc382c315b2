pub mod centroid;
pub mod feature;
pub mod geojson;

pub use feature::GeographyFeature;
pub use geojson::{parse_features, GeoJsonFeature, GeoJsonGeometry};
