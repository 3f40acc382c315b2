use super::{GeoProjection, ProjectionFamily, ProjectionProvider, ProjectionSpec};
use crate::core::constants::FALLBACK_PROJECTION_SCALE;
use crate::core::geo::Point;

#[cfg(feature = "builtin-projections")]
use super::builtin::BuiltinProvider;

/// Builds configured projections from a family and optional settings.
///
/// Configuration never fails: unknown families fall back to the default
/// family, tunables a family lacks are skipped, and a failed auto-fit falls
/// back to a fixed scale. Each recovery is logged.
#[derive(Debug)]
pub struct ProjectionConfigurator {
    provider: Box<dyn ProjectionProvider>,
}

impl ProjectionConfigurator {
    pub fn new(provider: Box<dyn ProjectionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn ProjectionProvider {
        self.provider.as_ref()
    }

    /// Resolves `name` against the family table, then builds
    pub fn build_named(
        &self,
        name: &str,
        spec: &ProjectionSpec,
        width: f64,
        height: f64,
    ) -> Box<dyn GeoProjection> {
        self.build(ProjectionFamily::resolve(name), spec, width, height)
    }

    /// Creates a projection of `family` and applies the present fields of
    /// `spec` in order: rotate, center, translate, parallels, precision,
    /// clip angle, then scale or an auto-fit to `width × height`.
    pub fn build(
        &self,
        family: ProjectionFamily,
        spec: &ProjectionSpec,
        width: f64,
        height: f64,
    ) -> Box<dyn GeoProjection> {
        let mut projection = self.provider.create(family);

        if let Some(rotation) = spec.rotate {
            if !projection.set_rotate(rotation) {
                log::debug!("{} ignores rotate", family);
            }
        }
        if let Some(center) = spec.center {
            if !projection.set_center(center) {
                log::debug!("{} ignores center", family);
            }
        }

        let [tx, ty] = spec.translate.unwrap_or([width / 2.0, height / 2.0]);
        projection.set_translate(Point::new(tx, ty));

        if let Some(parallels) = spec.parallels {
            if !projection.set_parallels(parallels) {
                log::debug!("{} has no standard parallels", family);
            }
        }
        if let Some(precision) = spec.precision {
            projection.set_precision(precision);
        }
        if let Some(angle) = spec.clip_angle {
            if !projection.set_clip_angle(angle) {
                log::debug!("{} ignores clip angle", family);
            }
        }

        projection.clear_clip_extent();

        match spec.scale {
            Some(scale) => projection.set_scale(scale),
            None => {
                if let Err(err) = projection.fit_size(width, height) {
                    log::warn!(
                        "Could not fit {} to {}x{} ({}), using scale {}",
                        family,
                        width,
                        height,
                        err,
                        FALLBACK_PROJECTION_SCALE
                    );
                    projection.set_scale(FALLBACK_PROJECTION_SCALE);
                }
            }
        }

        log::debug!(
            "built {}: scale {:.3}, translate ({:.3}, {:.3})",
            family,
            projection.scale(),
            projection.translate().x,
            projection.translate().y
        );
        projection
    }
}

#[cfg(feature = "builtin-projections")]
impl Default for ProjectionConfigurator {
    fn default() -> Self {
        Self::new(Box::new(BuiltinProvider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LngLat;
    use crate::projection::Rotation;
    use crate::{MapError, Result};
    use geo_types::Geometry;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every call so tests can check order and fallbacks
    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    #[derive(Debug)]
    struct FakeProjection {
        family: ProjectionFamily,
        log: Rc<RefCell<Recorder>>,
        scale: f64,
        translate: Point,
    }

    impl FakeProjection {
        fn record(&self, call: impl Into<String>) {
            self.log.borrow_mut().calls.push(call.into());
        }
    }

    impl GeoProjection for FakeProjection {
        fn family(&self) -> ProjectionFamily {
            self.family
        }
        fn project(&self, point: LngLat) -> Option<Point> {
            Some(Point::new(point.lng, point.lat))
        }
        fn path_for(&self, _geometry: &Geometry<f64>) -> String {
            String::new()
        }
        fn scale(&self) -> f64 {
            self.scale
        }
        fn set_scale(&mut self, scale: f64) {
            self.record(format!("scale {}", scale));
            self.scale = scale;
        }
        fn translate(&self) -> Point {
            self.translate
        }
        fn set_translate(&mut self, translate: Point) {
            self.record(format!("translate {} {}", translate.x, translate.y));
            self.translate = translate;
        }
        fn rotate(&self) -> Rotation {
            Rotation::default()
        }
        fn set_rotate(&mut self, _rotation: Rotation) -> bool {
            self.record("rotate");
            true
        }
        fn center(&self) -> LngLat {
            LngLat::default()
        }
        fn set_center(&mut self, _center: LngLat) -> bool {
            self.record("center");
            true
        }
        fn set_parallels(&mut self, _parallels: [f64; 2]) -> bool {
            self.record("parallels");
            self.family.is_conic()
        }
        fn set_clip_angle(&mut self, _angle: f64) -> bool {
            self.record("clip angle");
            false
        }
        fn precision(&self) -> f64 {
            0.0
        }
        fn set_precision(&mut self, _precision: f64) {
            self.record("precision");
        }
        fn clear_clip_extent(&mut self) {
            self.record("clip extent");
        }
        fn fit_size(&mut self, _width: f64, _height: f64) -> Result<()> {
            self.record("fit");
            Err(MapError::Projection("cannot fit".into()))
        }
    }

    #[derive(Debug, Default)]
    struct FakeProvider {
        log: Rc<RefCell<Recorder>>,
    }

    impl ProjectionProvider for FakeProvider {
        fn create(&self, family: ProjectionFamily) -> Box<dyn GeoProjection> {
            self.log.borrow_mut().calls.push(format!("create {}", family));
            Box::new(FakeProjection {
                family,
                log: Rc::clone(&self.log),
                scale: 1.0,
                translate: Point::default(),
            })
        }
    }

    fn configurator() -> (ProjectionConfigurator, Rc<RefCell<Recorder>>) {
        let provider = FakeProvider::default();
        let log = Rc::clone(&provider.log);
        (ProjectionConfigurator::new(Box::new(provider)), log)
    }

    #[test]
    fn test_settings_applied_in_order() {
        let (configurator, log) = configurator();
        let spec = ProjectionSpec {
            rotate: Some(Rotation::new(10.0, 0.0, 0.0)),
            center: Some(LngLat::new(1.0, 2.0)),
            parallels: Some([20.0, 50.0]),
            precision: Some(0.1),
            clip_angle: Some(90.0),
            scale: Some(300.0),
            ..ProjectionSpec::default()
        };
        let projection = configurator.build_named("geoConicEqualArea", &spec, 800.0, 400.0);
        assert_eq!(projection.family(), ProjectionFamily::ConicEqualArea);
        assert_eq!(
            log.borrow().calls,
            vec![
                "create geoConicEqualArea",
                "rotate",
                "center",
                "translate 400 200",
                "parallels",
                "precision",
                "clip angle",
                "clip extent",
                "scale 300",
            ]
        );
    }

    #[test]
    fn test_failed_fit_falls_back_to_fixed_scale() {
        let (configurator, log) = configurator();
        let spec = ProjectionSpec {
            translate: Some([10.0, 20.0]),
            ..ProjectionSpec::default()
        };
        let projection = configurator.build(ProjectionFamily::Mercator, &spec, 800.0, 400.0);
        assert_eq!(projection.scale(), FALLBACK_PROJECTION_SCALE);
        assert_eq!(projection.translate(), Point::new(10.0, 20.0));
        assert!(log.borrow().calls.contains(&"fit".to_string()));
    }

    #[test]
    fn test_unknown_family_falls_back() {
        let (configurator, _) = configurator();
        let projection =
            configurator.build_named("geoBogus", &ProjectionSpec::default(), 100.0, 100.0);
        assert_eq!(projection.family(), ProjectionFamily::EqualEarth);
    }

    #[cfg(feature = "builtin-projections")]
    #[test]
    fn test_default_provider_fits_mercator() {
        let configurator = ProjectionConfigurator::default();
        let projection =
            configurator.build_named("geoMercator", &ProjectionSpec::default(), 800.0, 400.0);
        assert!(projection.scale() > 0.0);
        let translate = projection.translate();
        assert!((translate.x - 400.0).abs() < 1e-6);
        assert!((translate.y - 200.0).abs() < 1e-6);
    }
}
