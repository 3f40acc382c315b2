//! Centroid on the sphere.
//!
//! Polygons are weighted by spherical area, lines by arc length and points by
//! count. The lower dimensions only count when the higher ones cancel out, so
//! a feature crossing the antimeridian gets a centroid next to it rather than
//! on the far side of the globe.

use crate::core::geo::LngLat;
use geo_types::{Coord, Geometry, LineString, Polygon};

const EPSILON: f64 = 1e-6;
const EPSILON2: f64 = 1e-12;

type Vec3 = [f64; 3];

const ZERO: Vec3 = [0.0; 3];

fn cartesian(coord: Coord<f64>) -> Vec3 {
    let (lambda, phi) = (coord.x.to_radians(), coord.y.to_radians());
    let cos_phi = phi.cos();
    [cos_phi * lambda.cos(), cos_phi * lambda.sin(), phi.sin()]
}

fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn scale(a: Vec3, k: f64) -> Vec3 {
    [a[0] * k, a[1] * k, a[2] * k]
}

fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn norm(a: Vec3) -> f64 {
    dot(a, a).sqrt()
}

#[derive(Debug, Default)]
struct Accumulator {
    points: Vec3,
    lines: Vec3,
    line_weight: f64,
    area: Vec3,
}

impl Accumulator {
    fn point(&mut self, p: Vec3) {
        self.points = add(self.points, p);
    }

    fn line(&mut self, line: &LineString<f64>) {
        let mut coords = line.coords().map(|c| cartesian(*c));
        let Some(mut previous) = coords.next() else {
            return;
        };
        self.point(previous);
        for p in coords {
            let w = norm(cross(previous, p)).atan2(dot(previous, p));
            self.line_weight += w;
            self.lines = add(self.lines, scale(add(previous, p), w));
            self.point(p);
            previous = p;
        }
    }

    /// Area moment of one ring, oriented so that it points into the ring.
    ///
    /// Edges also feed the length and point sums.
    fn ring(&mut self, ring: &LineString<f64>) -> Vec3 {
        let vertices: Vec<Vec3> = ring.coords().map(|c| cartesian(*c)).collect();
        let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) else {
            return ZERO;
        };
        let closing = (first != last).then_some([last, first]);

        let mut moment = ZERO;
        let mut mean = ZERO;
        let edges = vertices
            .windows(2)
            .map(|pair| [pair[0], pair[1]])
            .chain(closing);
        for [a, b] in edges {
            let c = cross(a, b);
            let m = norm(c);
            let w = m.min(1.0).asin();
            if m > 0.0 {
                moment = add(moment, scale(c, -w / m));
            }
            self.line_weight += w;
            self.lines = add(self.lines, scale(add(a, b), w));
            self.point(b);
            mean = add(mean, b);
        }

        // Clockwise rings already point inward; flip the others
        if dot(moment, mean) < 0.0 {
            scale(moment, -1.0)
        } else {
            moment
        }
    }

    fn polygon(&mut self, polygon: &Polygon<f64>) {
        let mut moment = self.ring(polygon.exterior());
        for hole in polygon.interiors() {
            moment = add(moment, scale(self.ring(hole), -1.0));
        }
        self.area = add(self.area, moment);
    }

    fn geometry(&mut self, geometry: &Geometry<f64>) {
        match geometry {
            Geometry::Point(p) => self.point(cartesian(p.0)),
            Geometry::MultiPoint(points) => {
                for p in points {
                    self.point(cartesian(p.0));
                }
            }
            Geometry::Line(line) => self.line(&LineString::new(vec![line.start, line.end])),
            Geometry::LineString(line) => self.line(line),
            Geometry::MultiLineString(lines) => {
                for line in lines {
                    self.line(line);
                }
            }
            Geometry::Polygon(polygon) => self.polygon(polygon),
            Geometry::MultiPolygon(polygons) => {
                for polygon in polygons {
                    self.polygon(polygon);
                }
            }
            Geometry::Rect(rect) => self.polygon(&rect.to_polygon()),
            Geometry::Triangle(triangle) => self.polygon(&triangle.to_polygon()),
            Geometry::GeometryCollection(collection) => {
                for geometry in collection {
                    self.geometry(geometry);
                }
            }
        }
    }

    fn finish(&self) -> Option<LngLat> {
        let mut v = self.area;
        if norm(v) < EPSILON2 {
            v = if self.line_weight < EPSILON {
                self.points
            } else {
                self.lines
            };
        }
        let m = norm(v);
        if !(m >= EPSILON2) {
            return None;
        }
        let centroid = LngLat::new(
            v[1].atan2(v[0]).to_degrees(),
            (v[2] / m).clamp(-1.0, 1.0).asin().to_degrees(),
        );
        centroid.is_finite().then_some(centroid)
    }
}

/// Spherical centroid of `geometry` in degrees; `None` when it is empty or
/// degenerate
pub fn spherical_centroid(geometry: &Geometry<f64>) -> Option<LngLat> {
    let mut accumulator = Accumulator::default();
    accumulator.geometry(geometry);
    accumulator.finish()
}
