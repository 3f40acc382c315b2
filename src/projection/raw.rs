//! Raw forward projections: radians in, unit planar coordinates out.
//!
//! The y axis points north here; screen flipping happens in the builtin
//! projection's scale/translate step.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const EPSILON: f64 = 1e-6;

// Equal Earth polynomial coefficients
const A1: f64 = 1.340264;
const A2: f64 = -0.081106;
const A3: f64 = 0.000893;
const A4: f64 = 0.003796;

/// A raw projection with its derived constants precomputed
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawProjection {
    Equirectangular,
    Mercator,
    TransverseMercator,
    EqualEarth,
    NaturalEarth1,
    Orthographic,
    Stereographic,
    Gnomonic,
    AzimuthalEqualArea,
    AzimuthalEquidistant,
    CylindricalEqualArea { cos_phi0: f64 },
    ConicEqualArea { n: f64, c: f64, r0: f64 },
    ConicConformal { n: f64, f: f64 },
    ConicEquidistant { n: f64, g: f64 },
}

fn tany(phi: f64) -> f64 {
    ((FRAC_PI_2 + phi) / 2.0).tan()
}

impl RawProjection {
    /// Conic equal-area for parallels in radians; degenerates to cylindrical
    /// equal-area when the parallels are symmetric about the equator
    pub fn conic_equal_area(phi0: f64, phi1: f64) -> Self {
        let sy0 = phi0.sin();
        let n = (sy0 + phi1.sin()) / 2.0;
        if n.abs() < EPSILON {
            return RawProjection::CylindricalEqualArea {
                cos_phi0: phi0.cos(),
            };
        }
        let c = 1.0 + sy0 * (2.0 * n - sy0);
        RawProjection::ConicEqualArea {
            n,
            c,
            r0: c.sqrt() / n,
        }
    }

    /// Conic conformal; degenerates to Mercator when the cone is flat
    pub fn conic_conformal(phi0: f64, phi1: f64) -> Self {
        let cy0 = phi0.cos();
        let n = if phi0 == phi1 {
            phi0.sin()
        } else {
            (cy0 / phi1.cos()).ln() / (tany(phi1) / tany(phi0)).ln()
        };
        if n == 0.0 || !n.is_finite() {
            return RawProjection::Mercator;
        }
        RawProjection::ConicConformal {
            n,
            f: cy0 * tany(phi0).powf(n) / n,
        }
    }

    /// Conic equidistant; degenerates to equirectangular when the cone is flat
    pub fn conic_equidistant(phi0: f64, phi1: f64) -> Self {
        let cy0 = phi0.cos();
        let n = if phi0 == phi1 {
            phi0.sin()
        } else {
            (cy0 - phi1.cos()) / (phi1 - phi0)
        };
        if n.abs() < EPSILON {
            return RawProjection::Equirectangular;
        }
        RawProjection::ConicEquidistant { n, g: cy0 / n + phi0 }
    }

    pub fn forward(&self, lambda: f64, phi: f64) -> (f64, f64) {
        match *self {
            RawProjection::Equirectangular => (lambda, phi),
            RawProjection::Mercator => (lambda, (FRAC_PI_4 + phi / 2.0).tan().ln()),
            RawProjection::TransverseMercator => {
                let b = phi.cos() * lambda.sin();
                (0.5 * ((1.0 + b) / (1.0 - b)).ln(), phi.tan().atan2(lambda.cos()))
            }
            RawProjection::EqualEarth => {
                let m = 3f64.sqrt() / 2.0;
                let l = (m * phi.sin()).asin();
                let l2 = l * l;
                let l6 = l2 * l2 * l2;
                (
                    lambda * l.cos() / (m * (A1 + 3.0 * A2 * l2 + l6 * (7.0 * A3 + 9.0 * A4 * l2))),
                    l * (A1 + A2 * l2 + l6 * (A3 + A4 * l2)),
                )
            }
            RawProjection::NaturalEarth1 => {
                let phi2 = phi * phi;
                let phi4 = phi2 * phi2;
                (
                    lambda
                        * (0.8707 - 0.131979 * phi2
                            + phi4 * (-0.013791 + phi4 * (0.003971 * phi2 - 0.001529 * phi4))),
                    phi * (1.007226
                        + phi2 * (0.015085 + phi4 * (-0.044475 + 0.028874 * phi2 - 0.005916 * phi4))),
                )
            }
            RawProjection::Orthographic => (phi.cos() * lambda.sin(), phi.sin()),
            RawProjection::Stereographic => {
                let cy = phi.cos();
                let k = 1.0 + lambda.cos() * cy;
                (cy * lambda.sin() / k, phi.sin() / k)
            }
            RawProjection::Gnomonic => {
                let cy = phi.cos();
                let k = lambda.cos() * cy;
                (cy * lambda.sin() / k, phi.sin() / k)
            }
            RawProjection::AzimuthalEqualArea => {
                let cy = phi.cos();
                let k = (2.0 / (1.0 + lambda.cos() * cy)).sqrt();
                if k.is_infinite() {
                    return (2.0, 0.0);
                }
                (k * cy * lambda.sin(), k * phi.sin())
            }
            RawProjection::AzimuthalEquidistant => {
                let cy = phi.cos();
                let c = (lambda.cos() * cy).clamp(-1.0, 1.0).acos();
                let k = if c == 0.0 { 1.0 } else { c / c.sin() };
                (k * cy * lambda.sin(), k * phi.sin())
            }
            RawProjection::CylindricalEqualArea { cos_phi0 } => {
                (lambda * cos_phi0, phi.sin() / cos_phi0)
            }
            RawProjection::ConicEqualArea { n, c, r0 } => {
                let r = (c - 2.0 * n * phi.sin()).sqrt() / n;
                let x = lambda * n;
                (r * x.sin(), r0 - r * x.cos())
            }
            RawProjection::ConicConformal { n, f } => {
                let phi = if f > 0.0 {
                    phi.max(-FRAC_PI_2 + EPSILON)
                } else {
                    phi.min(FRAC_PI_2 - EPSILON)
                };
                let r = f / tany(phi).powf(n);
                (r * (n * lambda).sin(), f - r * (n * lambda).cos())
            }
            RawProjection::ConicEquidistant { n, g } => {
                let gy = g - phi;
                let nx = n * lambda;
                (gy * nx.sin(), g - gy * nx.cos())
            }
        }
    }
}

/// Wraps a longitude in radians to [-π, π]
pub(crate) fn wrap_lambda(lambda: f64) -> f64 {
    if lambda > PI {
        lambda - 2.0 * PI
    } else if lambda < -PI {
        lambda + 2.0 * PI
    } else {
        lambda
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_origin_maps_to_origin() {
        for raw in [
            RawProjection::Equirectangular,
            RawProjection::Mercator,
            RawProjection::TransverseMercator,
            RawProjection::EqualEarth,
            RawProjection::NaturalEarth1,
            RawProjection::Orthographic,
            RawProjection::Stereographic,
            RawProjection::Gnomonic,
            RawProjection::AzimuthalEqualArea,
            RawProjection::AzimuthalEquidistant,
        ] {
            assert!(close(raw.forward(0.0, 0.0), (0.0, 0.0)), "{:?}", raw);
        }
    }

    #[test]
    fn test_known_values() {
        let q = FRAC_PI_4;
        assert!(close(RawProjection::Orthographic.forward(FRAC_PI_2, 0.0), (1.0, 0.0)));
        // Stereographic maps the horizon to radius 1
        assert!(close(RawProjection::Stereographic.forward(FRAC_PI_2, 0.0), (1.0, 0.0)));
        assert!(close(RawProjection::Gnomonic.forward(q, 0.0), (1.0, 0.0)));
        // Mercator y at 45° is ln(tan(67.5°))
        let (_, y) = RawProjection::Mercator.forward(0.0, q);
        assert!((y - (3.0 * PI / 8.0).tan().ln()).abs() < 1e-12);
        // Equidistant keeps distances from the center
        let (x, _) = RawProjection::AzimuthalEquidistant.forward(1.0, 0.0);
        assert!((x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_conics() {
        assert!(matches!(
            RawProjection::conic_equal_area(-0.5, 0.5),
            RawProjection::CylindricalEqualArea { .. }
        ));
        assert_eq!(RawProjection::conic_conformal(0.0, 0.0), RawProjection::Mercator);
        assert_eq!(
            RawProjection::conic_equidistant(0.0, 0.0),
            RawProjection::Equirectangular
        );
        assert!(matches!(
            RawProjection::conic_equal_area(0.0, PI / 3.0),
            RawProjection::ConicEqualArea { .. }
        ));
    }

    #[test]
    fn test_wrap_lambda() {
        assert!((wrap_lambda(3.5 * PI / 2.0) + PI / 4.0).abs() < 1e-12);
        assert_eq!(wrap_lambda(1.0), 1.0);
    }
}
