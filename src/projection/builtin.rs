//! Reference projection provider.
//!
//! Pure-Rust forward projections with the conventional defaults for each
//! family: three-axis rotation, a projection center, small-circle clipping
//! and fit-to-size over a sampled sphere outline.

use super::path::{render_path, PathProjector};
use super::raw::{wrap_lambda, RawProjection};
use super::{GeoProjection, ProjectionFamily, ProjectionProvider, Rotation};
use crate::core::bounds::Bounds;
use crate::core::constants::{DEFAULT_PRECISION, FALLBACK_PROJECTION_SCALE, MERCATOR_MAX_LATITUDE};
use crate::core::geo::{LngLat, Point};
use crate::{MapError, Result};
use geo_types::Geometry;

/// Graticule spacing, in degrees, of the samples used by [`BuiltinProjection::fit_size`]
const FIT_SAMPLE_STEP: f64 = 2.5;

/// Longitude edge used instead of ±180 so samples stay on one side of the seam
const FIT_EDGE_LNG: f64 = 179.999;

/// Lower-48 lon/lat box drawn by the composite US projection
const USA_LNG: (f64, f64) = (-125.0, -66.5);
const USA_LAT: (f64, f64) = (24.0, 50.0);

/// The conventional default scale for a family
fn default_scale(family: ProjectionFamily) -> f64 {
    match family {
        ProjectionFamily::EqualEarth => 177.158,
        ProjectionFamily::Albers | ProjectionFamily::AlbersUsa => 1070.0,
        ProjectionFamily::AzimuthalEqualArea => 124.75,
        ProjectionFamily::AzimuthalEquidistant => 79.4188,
        ProjectionFamily::ConicConformal => 109.5,
        ProjectionFamily::ConicEqualArea => 155.424,
        ProjectionFamily::ConicEquidistant => 131.154,
        ProjectionFamily::Equirectangular | ProjectionFamily::Mercator => 152.63,
        ProjectionFamily::Gnomonic => 144.049,
        ProjectionFamily::NaturalEarth1 => 175.295,
        ProjectionFamily::Orthographic => 249.5,
        ProjectionFamily::Stereographic => 250.0,
        ProjectionFamily::TransverseMercator => 159.155,
    }
}

/// Clip angle a family starts with, in degrees
fn default_clip_angle(family: ProjectionFamily) -> Option<f64> {
    match family {
        ProjectionFamily::Orthographic => Some(90.0 + 1e-6),
        ProjectionFamily::Stereographic => Some(142.0),
        ProjectionFamily::Gnomonic => Some(60.0),
        ProjectionFamily::AzimuthalEqualArea | ProjectionFamily::AzimuthalEquidistant => {
            Some(180.0 - 1e-3)
        }
        _ => None,
    }
}

fn raw_for(family: ProjectionFamily, parallels: [f64; 2]) -> RawProjection {
    let (phi0, phi1) = (parallels[0].to_radians(), parallels[1].to_radians());
    match family {
        ProjectionFamily::EqualEarth => RawProjection::EqualEarth,
        ProjectionFamily::Albers | ProjectionFamily::AlbersUsa | ProjectionFamily::ConicEqualArea => {
            RawProjection::conic_equal_area(phi0, phi1)
        }
        ProjectionFamily::ConicConformal => RawProjection::conic_conformal(phi0, phi1),
        ProjectionFamily::ConicEquidistant => RawProjection::conic_equidistant(phi0, phi1),
        ProjectionFamily::AzimuthalEqualArea => RawProjection::AzimuthalEqualArea,
        ProjectionFamily::AzimuthalEquidistant => RawProjection::AzimuthalEquidistant,
        ProjectionFamily::Equirectangular => RawProjection::Equirectangular,
        ProjectionFamily::Gnomonic => RawProjection::Gnomonic,
        ProjectionFamily::Mercator => RawProjection::Mercator,
        ProjectionFamily::NaturalEarth1 => RawProjection::NaturalEarth1,
        ProjectionFamily::Orthographic => RawProjection::Orthographic,
        ProjectionFamily::Stereographic => RawProjection::Stereographic,
        ProjectionFamily::TransverseMercator => RawProjection::TransverseMercator,
    }
}

/// A projection computed in-process
#[derive(Debug, Clone)]
pub struct BuiltinProjection {
    family: ProjectionFamily,
    raw: RawProjection,
    scale: f64,
    translate: Point,
    rotation: Rotation,
    center: LngLat,
    parallels: [f64; 2],
    clip_angle: Option<f64>,
    clip_extent: Option<Bounds>,
    precision: f64,
    /// Raw coordinates of `center`, subtracted before scaling
    center_offset: (f64, f64),
}

impl BuiltinProjection {
    pub fn new(family: ProjectionFamily) -> Self {
        let (parallels, rotation, center) = match family {
            ProjectionFamily::Albers | ProjectionFamily::AlbersUsa => (
                [29.5, 45.5],
                Rotation::new(96.0, 0.0, 0.0),
                LngLat::new(-0.6, 38.7),
            ),
            ProjectionFamily::ConicEqualArea => {
                ([0.0, 60.0], Rotation::default(), LngLat::new(0.0, 33.6442))
            }
            ProjectionFamily::ConicConformal => ([30.0, 30.0], Rotation::default(), LngLat::default()),
            _ => ([0.0, 60.0], Rotation::default(), LngLat::default()),
        };

        let mut projection = Self {
            family,
            raw: raw_for(family, parallels),
            scale: default_scale(family),
            translate: Point::new(480.0, 250.0),
            rotation,
            center,
            parallels,
            clip_angle: default_clip_angle(family),
            clip_extent: None,
            precision: DEFAULT_PRECISION,
            center_offset: (0.0, 0.0),
        };
        projection.recenter();
        projection
    }

    /// Restricts output to a planar rectangle; `None` removes the restriction
    pub fn set_clip_extent(&mut self, extent: Option<Bounds>) {
        self.clip_extent = extent;
    }

    pub fn clip_extent(&self) -> Option<&Bounds> {
        self.clip_extent.as_ref()
    }

    pub fn clip_angle(&self) -> Option<f64> {
        self.clip_angle
    }

    pub fn parallels(&self) -> [f64; 2] {
        self.parallels
    }

    fn recenter(&mut self) {
        self.raw = raw_for(self.family, self.parallels);
        let (lambda, phi) = self.center.to_radians();
        self.center_offset = self.raw.forward(lambda, phi);
    }

    /// Moves a point, in radians, into the rotated frame
    fn rotate_radians(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let lambda = wrap_lambda((lambda + self.rotation.lambda.to_radians()) % std::f64::consts::TAU);
        let (delta_phi, delta_gamma) = (self.rotation.phi.to_radians(), self.rotation.gamma.to_radians());
        if delta_phi == 0.0 && delta_gamma == 0.0 {
            return (lambda, phi);
        }

        let (sin_dp, cos_dp) = delta_phi.sin_cos();
        let (sin_dg, cos_dg) = delta_gamma.sin_cos();
        let cos_phi = phi.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = phi.sin();
        let k = z * cos_dp + x * sin_dp;
        (
            (y * cos_dg - k * sin_dg).atan2(x * cos_dp - z * sin_dp),
            (k * cos_dg + y * sin_dg).clamp(-1.0, 1.0).asin(),
        )
    }

    /// Clips, projects and places a point already in the rotated frame
    fn place_rotated(&self, lambda: f64, phi: f64) -> Option<Point> {
        if let Some(angle) = self.clip_angle {
            if lambda.cos() * phi.cos() <= angle.to_radians().cos() {
                return None;
            }
        }
        let phi = if self.raw == RawProjection::Mercator {
            let limit = MERCATOR_MAX_LATITUDE.to_radians();
            phi.clamp(-limit, limit)
        } else {
            phi
        };

        let (x, y) = self.raw.forward(lambda, phi);
        let screen = Point::new(
            self.translate.x + self.scale * (x - self.center_offset.0),
            self.translate.y - self.scale * (y - self.center_offset.1),
        );
        if !screen.is_finite() {
            return None;
        }
        match &self.clip_extent {
            Some(extent) if !extent.contains(&screen) => None,
            _ => Some(screen),
        }
    }

    fn project_with_lambda(&self, lng: f64, lat: f64) -> Option<(Point, f64)> {
        if !lng.is_finite() || !lat.is_finite() {
            return None;
        }
        if self.family == ProjectionFamily::AlbersUsa
            && !((USA_LNG.0..=USA_LNG.1).contains(&lng) && (USA_LAT.0..=USA_LAT.1).contains(&lat))
        {
            return None;
        }
        let (lambda, phi) = self.rotate_radians(lng.to_radians(), lat.to_radians());
        self.place_rotated(lambda, phi).map(|p| (p, lambda))
    }

    /// Planar bounds of the visible sphere at the current scale and translate
    fn sphere_bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        let steps = (180.0 / FIT_SAMPLE_STEP) as i32;

        for i in 0..=2 * steps {
            let lng = (-180.0 + i as f64 * FIT_SAMPLE_STEP).clamp(-FIT_EDGE_LNG, FIT_EDGE_LNG);
            for j in 0..=steps {
                let lat = -90.0 + j as f64 * FIT_SAMPLE_STEP;
                if let Some((p, _)) = self.project_with_lambda(lng, lat) {
                    bounds.extend(&p);
                }
            }
        }

        // Clipped families are bounded by their horizon circle
        if let Some(angle) = self.clip_angle {
            let radius = (angle - 1e-6).to_radians();
            let (sin_r, cos_r) = radius.sin_cos();
            for step in 0..360 {
                let theta = (step as f64).to_radians();
                let phi = (sin_r * theta.sin()).clamp(-1.0, 1.0).asin();
                let lambda = (sin_r * theta.cos()).atan2(cos_r);
                if let Some(p) = self.place_rotated(lambda, phi) {
                    bounds.extend(&p);
                }
            }
        }
        bounds
    }
}

impl PathProjector for BuiltinProjection {
    fn project_point(&self, lng: f64, lat: f64) -> Option<(Point, f64)> {
        self.project_with_lambda(lng, lat)
    }

    fn precision(&self) -> f64 {
        self.precision
    }
}

impl GeoProjection for BuiltinProjection {
    fn family(&self) -> ProjectionFamily {
        self.family
    }

    fn project(&self, point: LngLat) -> Option<Point> {
        self.project_with_lambda(point.lng, point.lat).map(|(p, _)| p)
    }

    fn path_for(&self, geometry: &Geometry<f64>) -> String {
        render_path(self, geometry)
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn translate(&self) -> Point {
        self.translate
    }

    fn set_translate(&mut self, translate: Point) {
        self.translate = translate;
    }

    fn rotate(&self) -> Rotation {
        self.rotation
    }

    fn set_rotate(&mut self, rotation: Rotation) -> bool {
        if self.family == ProjectionFamily::AlbersUsa {
            return false;
        }
        self.rotation = rotation;
        true
    }

    fn center(&self) -> LngLat {
        self.center
    }

    fn set_center(&mut self, center: LngLat) -> bool {
        if self.family == ProjectionFamily::AlbersUsa {
            return false;
        }
        self.center = center;
        self.recenter();
        true
    }

    fn set_parallels(&mut self, parallels: [f64; 2]) -> bool {
        if !self.family.is_conic() {
            return false;
        }
        self.parallels = parallels;
        self.recenter();
        true
    }

    fn set_clip_angle(&mut self, angle: f64) -> bool {
        if self.family == ProjectionFamily::AlbersUsa {
            return false;
        }
        // Zero turns small-circle clipping off
        self.clip_angle = if angle > 0.0 { Some(angle) } else { None };
        true
    }

    fn precision(&self) -> f64 {
        self.precision
    }

    fn set_precision(&mut self, precision: f64) {
        self.precision = precision.max(0.0);
    }

    fn clear_clip_extent(&mut self) {
        self.clip_extent = None;
    }

    fn fit_size(&mut self, width: f64, height: f64) -> Result<()> {
        let extent = self.clip_extent.take();
        self.scale = FALLBACK_PROJECTION_SCALE;
        self.translate = Point::new(0.0, 0.0);
        let bounds = self.sphere_bounds();
        self.clip_extent = extent;

        if !bounds.has_area() {
            return Err(MapError::Projection(format!(
                "{} has no visible area to fit",
                self.family
            )));
        }
        let k = (width / bounds.width()).min(height / bounds.height());
        if !k.is_finite() || k <= 0.0 {
            return Err(MapError::Projection(format!(
                "cannot fit {} into {}x{}",
                self.family, width, height
            )));
        }

        self.scale = FALLBACK_PROJECTION_SCALE * k;
        self.translate = Point::new(
            (width - k * (bounds.min.x + bounds.max.x)) / 2.0,
            (height - k * (bounds.min.y + bounds.max.y)) / 2.0,
        );
        log::debug!(
            "fitted {} to {}x{}: scale {:.3}, translate ({:.3}, {:.3})",
            self.family,
            width,
            height,
            self.scale,
            self.translate.x,
            self.translate.y
        );
        Ok(())
    }
}

/// Provider backed by [`BuiltinProjection`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl ProjectionProvider for BuiltinProvider {
    fn create(&self, family: ProjectionFamily) -> Box<dyn GeoProjection> {
        Box::new(BuiltinProjection::new(family))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{coord, line_string, polygon};

    fn near(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_mercator_fit() {
        let mut mercator = BuiltinProjection::new(ProjectionFamily::Mercator);
        mercator.fit_size(800.0, 400.0).unwrap();
        assert!(near(mercator.scale(), 400.0 / std::f64::consts::TAU, 1e-3));
        assert!(near(mercator.translate().x, 400.0, 1e-3));
        assert!(near(mercator.translate().y, 200.0, 1e-3));

        let origin = mercator.project(LngLat::new(0.0, 0.0)).unwrap();
        assert!(near(origin.x, 400.0, 1e-9) && near(origin.y, 200.0, 1e-9));
    }

    #[test]
    fn test_fit_keeps_sphere_inside() {
        for family in ProjectionFamily::ALL {
            let mut projection = BuiltinProjection::new(family);
            projection.fit_size(960.0, 500.0).unwrap();
            for (lng, lat) in [(0.0, 0.0), (-100.0, 40.0), (150.0, -30.0), (20.0, 70.0)] {
                if let Some(p) = projection.project(LngLat::new(lng, lat)) {
                    assert!(p.x > -1.0 && p.x < 961.0, "{} x {}", family, p.x);
                    assert!(p.y > -1.0 && p.y < 501.0, "{} y {}", family, p.y);
                }
            }
        }
    }

    #[test]
    fn test_fit_rejects_empty_size() {
        let mut projection = BuiltinProjection::new(ProjectionFamily::EqualEarth);
        assert!(projection.fit_size(0.0, 0.0).is_err());
    }

    #[test]
    fn test_orthographic_hides_far_side() {
        let mut globe = BuiltinProjection::new(ProjectionFamily::Orthographic);
        assert!(globe.project(LngLat::new(10.0, 10.0)).is_some());
        assert!(globe.project(LngLat::new(180.0, 0.0)).is_none());

        // Rotating brings the far side into view
        assert!(globe.set_rotate(Rotation::new(-180.0, 0.0, 0.0)));
        assert!(globe.project(LngLat::new(180.0, 0.0)).is_some());
        assert!(globe.project(LngLat::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_rotation_moves_center() {
        let mut projection = BuiltinProjection::new(ProjectionFamily::Equirectangular);
        projection.set_translate(Point::new(0.0, 0.0));
        projection.set_rotate(Rotation::new(-30.0, 0.0, 0.0));
        let p = projection.project(LngLat::new(30.0, 0.0)).unwrap();
        assert!(near(p.x, 0.0, 1e-9) && near(p.y, 0.0, 1e-9));

        projection.set_rotate(Rotation::new(0.0, -45.0, 0.0));
        let p = projection.project(LngLat::new(0.0, 45.0)).unwrap();
        assert!(near(p.x, 0.0, 1e-9) && near(p.y, 0.0, 1e-9));
    }

    #[test]
    fn test_center_is_placed_at_translate() {
        let mut projection = BuiltinProjection::new(ProjectionFamily::Mercator);
        projection.set_translate(Point::new(100.0, 50.0));
        assert!(projection.set_center(LngLat::new(10.0, 20.0)));
        let p = projection.project(LngLat::new(10.0, 20.0)).unwrap();
        assert!(near(p.x, 100.0, 1e-9) && near(p.y, 50.0, 1e-9));
    }

    #[test]
    fn test_albers_usa_is_fixed() {
        let mut usa = BuiltinProjection::new(ProjectionFamily::AlbersUsa);
        assert!(!usa.set_rotate(Rotation::new(10.0, 0.0, 0.0)));
        assert!(!usa.set_center(LngLat::new(0.0, 0.0)));
        assert!(!usa.set_parallels([10.0, 20.0]));
        assert!(!usa.set_clip_angle(90.0));
        assert!(usa.project(LngLat::new(-98.0, 39.0)).is_some());
        assert!(usa.project(LngLat::new(2.35, 48.85)).is_none());
    }

    #[test]
    fn test_parallels_only_for_conics() {
        let mut conic = BuiltinProjection::new(ProjectionFamily::ConicConformal);
        assert!(conic.set_parallels([30.0, 60.0]));
        assert_eq!(conic.parallels(), [30.0, 60.0]);
        let mut flat = BuiltinProjection::new(ProjectionFamily::NaturalEarth1);
        assert!(!flat.set_parallels([30.0, 60.0]));
    }

    #[test]
    fn test_clip_extent() {
        let mut projection = BuiltinProjection::new(ProjectionFamily::Equirectangular);
        projection.set_clip_extent(Some(Bounds::from_coords(0.0, 0.0, 480.0, 500.0)));
        assert!(projection.project(LngLat::new(-10.0, 0.0)).is_some());
        assert!(projection.project(LngLat::new(10.0, 0.0)).is_none());
        projection.clear_clip_extent();
        assert!(projection.clip_extent().is_none());
        assert!(projection.project(LngLat::new(10.0, 0.0)).is_some());
    }

    #[test]
    fn test_non_finite_input() {
        let projection = BuiltinProjection::new(ProjectionFamily::EqualEarth);
        assert!(projection.project(LngLat::new(f64::NAN, 0.0)).is_none());
        assert!(projection.path_for(&geo_types::Point::new(f64::NAN, 0.0).into()).is_empty());
    }

    #[test]
    fn test_path_for_polygon() {
        let projection = BuiltinProjection::new(ProjectionFamily::Mercator);
        let square: Geometry<f64> = polygon![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 10.0),
            (x: 0.0, y: 10.0),
            (x: 0.0, y: 0.0),
        ]
        .into();
        let path = projection.path_for(&square);
        assert!(path.starts_with("M480,250"));
        assert!(path.ends_with('Z'));
    }
}
