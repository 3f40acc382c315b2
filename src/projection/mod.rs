//! Projection families, settings and the injected projection capability.
//!
//! The engine never computes spherical math itself: it configures a
//! [`GeoProjection`] obtained from a [`ProjectionProvider`] and calls it.
//! A reference provider ships behind the `builtin-projections` feature.

pub mod configurator;

#[cfg(feature = "builtin-projections")]
pub mod builtin;
#[cfg(feature = "builtin-projections")]
pub mod path;
#[cfg(feature = "builtin-projections")]
mod raw;

use crate::core::geo::{LngLat, Point};
use crate::{MapError, Result};
use geo_types::Geometry;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub use configurator::ProjectionConfigurator;

/// The fifteen supported projection families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectionFamily {
    #[default]
    EqualEarth,
    Albers,
    AlbersUsa,
    AzimuthalEqualArea,
    AzimuthalEquidistant,
    ConicConformal,
    ConicEqualArea,
    ConicEquidistant,
    Equirectangular,
    Gnomonic,
    Mercator,
    NaturalEarth1,
    Orthographic,
    Stereographic,
    TransverseMercator,
}

impl ProjectionFamily {
    pub const ALL: [ProjectionFamily; 15] = [
        ProjectionFamily::EqualEarth,
        ProjectionFamily::Albers,
        ProjectionFamily::AlbersUsa,
        ProjectionFamily::AzimuthalEqualArea,
        ProjectionFamily::AzimuthalEquidistant,
        ProjectionFamily::ConicConformal,
        ProjectionFamily::ConicEqualArea,
        ProjectionFamily::ConicEquidistant,
        ProjectionFamily::Equirectangular,
        ProjectionFamily::Gnomonic,
        ProjectionFamily::Mercator,
        ProjectionFamily::NaturalEarth1,
        ProjectionFamily::Orthographic,
        ProjectionFamily::Stereographic,
        ProjectionFamily::TransverseMercator,
    ];

    /// Conventional name, e.g. `"geoMercator"`
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectionFamily::EqualEarth => "geoEqualEarth",
            ProjectionFamily::Albers => "geoAlbers",
            ProjectionFamily::AlbersUsa => "geoAlbersUsa",
            ProjectionFamily::AzimuthalEqualArea => "geoAzimuthalEqualArea",
            ProjectionFamily::AzimuthalEquidistant => "geoAzimuthalEquidistant",
            ProjectionFamily::ConicConformal => "geoConicConformal",
            ProjectionFamily::ConicEqualArea => "geoConicEqualArea",
            ProjectionFamily::ConicEquidistant => "geoConicEquidistant",
            ProjectionFamily::Equirectangular => "geoEquirectangular",
            ProjectionFamily::Gnomonic => "geoGnomonic",
            ProjectionFamily::Mercator => "geoMercator",
            ProjectionFamily::NaturalEarth1 => "geoNaturalEarth1",
            ProjectionFamily::Orthographic => "geoOrthographic",
            ProjectionFamily::Stereographic => "geoStereographic",
            ProjectionFamily::TransverseMercator => "geoTransverseMercator",
        }
    }

    /// Exact lookup by conventional name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.as_str() == name)
    }

    /// Lookup that never fails: unknown names log a warning and yield the
    /// default family
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::warn!(
                "Unknown projection type: {}. Falling back to {}.",
                name,
                Self::default().as_str()
            );
            Self::default()
        })
    }

    /// Families that take standard parallels
    pub fn is_conic(self) -> bool {
        matches!(
            self,
            ProjectionFamily::Albers
                | ProjectionFamily::ConicConformal
                | ProjectionFamily::ConicEqualArea
                | ProjectionFamily::ConicEquidistant
        )
    }
}

impl fmt::Display for ProjectionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProjectionFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProjectionFamily {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::resolve(&name))
    }
}

/// Three-axis rotation in degrees: yaw λ, pitch φ, roll γ
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 3]")]
pub struct Rotation {
    pub lambda: f64,
    pub phi: f64,
    pub gamma: f64,
}

impl Rotation {
    pub fn new(lambda: f64, phi: f64, gamma: f64) -> Self {
        Self { lambda, phi, gamma }
    }

    pub fn is_identity(&self) -> bool {
        self.lambda == 0.0 && self.phi == 0.0 && self.gamma == 0.0
    }
}

impl TryFrom<Vec<f64>> for Rotation {
    type Error = MapError;

    /// Accepts `[λ, φ]` or `[λ, φ, γ]`
    fn try_from(angles: Vec<f64>) -> Result<Self> {
        match angles.as_slice() {
            [lambda, phi] => Ok(Self::new(*lambda, *phi, 0.0)),
            [lambda, phi, gamma] => Ok(Self::new(*lambda, *phi, *gamma)),
            _ => Err(MapError::Config(format!(
                "rotation needs 2 or 3 angles, got {}",
                angles.len()
            ))),
        }
    }
}

impl From<Rotation> for [f64; 3] {
    fn from(r: Rotation) -> Self {
        [r.lambda, r.phi, r.gamma]
    }
}

/// Optional projection settings; only present fields are applied
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectionSpec {
    pub rotate: Option<Rotation>,
    pub center: Option<LngLat>,
    pub scale: Option<f64>,
    pub parallels: Option<[f64; 2]>,
    pub translate: Option<[f64; 2]>,
    pub precision: Option<f64>,
    pub clip_angle: Option<f64>,
}

/// A configured projection: lon/lat in degrees to planar pixels.
///
/// Setters for tunables a family does not have return `false` and leave the
/// projection unchanged.
pub trait GeoProjection: fmt::Debug {
    fn family(&self) -> ProjectionFamily;

    /// Planar position of a point, `None` when it cannot be projected
    /// (clipped away, outside the family's domain or not finite)
    fn project(&self, point: LngLat) -> Option<Point>;

    /// SVG path data for a geometry; empty when nothing is visible
    fn path_for(&self, geometry: &Geometry<f64>) -> String;

    fn scale(&self) -> f64;
    fn set_scale(&mut self, scale: f64);

    fn translate(&self) -> Point;
    fn set_translate(&mut self, translate: Point);

    fn rotate(&self) -> Rotation;
    fn set_rotate(&mut self, rotation: Rotation) -> bool;

    fn center(&self) -> LngLat;
    fn set_center(&mut self, center: LngLat) -> bool;

    fn set_parallels(&mut self, parallels: [f64; 2]) -> bool;
    fn set_clip_angle(&mut self, angle: f64) -> bool;

    fn precision(&self) -> f64;
    fn set_precision(&mut self, precision: f64);

    /// Removes any rectangular clip the family applies by default
    fn clear_clip_extent(&mut self);

    /// Sets scale and translate so the sphere outline fits `width × height`
    fn fit_size(&mut self, width: f64, height: f64) -> Result<()>;
}

/// Creates unconfigured projections by family
pub trait ProjectionProvider: fmt::Debug {
    fn create(&self, family: ProjectionFamily) -> Box<dyn GeoProjection>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_names_round_trip() {
        for family in ProjectionFamily::ALL {
            assert_eq!(ProjectionFamily::from_name(family.as_str()), Some(family));
        }
        assert_eq!(ProjectionFamily::from_name("mercator"), None);
        assert_eq!(ProjectionFamily::resolve("geoBogus"), ProjectionFamily::EqualEarth);
    }

    #[test]
    fn test_spec_from_json() {
        let spec: ProjectionSpec = serde_json::from_str(
            r#"{ "rotate": [-10, 0], "center": [5, 45], "parallels": [20, 50], "clipAngle": 90 }"#,
        )
        .unwrap();
        assert_eq!(spec.rotate, Some(Rotation::new(-10.0, 0.0, 0.0)));
        assert_eq!(spec.center, Some(LngLat::new(5.0, 45.0)));
        assert_eq!(spec.parallels, Some([20.0, 50.0]));
        assert_eq!(spec.clip_angle, Some(90.0));
        assert_eq!(spec.scale, None);

        assert!(serde_json::from_str::<ProjectionSpec>(r#"{ "rotate": [1] }"#).is_err());
    }

    #[test]
    fn test_unknown_family_deserializes_to_default() {
        let family: ProjectionFamily = serde_json::from_str("\"geoWinkel3\"").unwrap();
        assert_eq!(family, ProjectionFamily::EqualEarth);
    }
}
