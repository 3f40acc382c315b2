//! SVG path rendering for projected geometries.
//!
//! Lines break wherever a point fails to project or the rotated longitude
//! jumps across the antimeridian. Segments are subdivided along the great
//! circle until the projected curve stays within `precision` of the chord.

use crate::core::constants::{MAX_RESAMPLE_DEPTH, POINT_RADIUS};
use crate::core::geo::Point;
use geo_types::{Coord, Geometry, LineString, Polygon};
use std::f64::consts::PI;
use std::fmt::Write;

/// cos(30°): segments longer than this on the sphere are always split
const COS_MIN_DISTANCE: f64 = 0.866_025_403_784_438_6;

/// What the path renderer needs from a projection
pub trait PathProjector {
    /// Planar position and rotated longitude in radians, `None` if clipped
    fn project_point(&self, lng: f64, lat: f64) -> Option<(Point, f64)>;

    fn precision(&self) -> f64;
}

/// Rounds to three decimals, normalizing negative zero
fn fmt3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0 + 0.0
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    screen: Point,
    lambda: f64,
    /// Unit vector of the unrotated point
    vector: [f64; 3],
}

fn unit_vector(lng: f64, lat: f64) -> [f64; 3] {
    let (l, p) = (lng.to_radians(), lat.to_radians());
    [p.cos() * l.cos(), p.cos() * l.sin(), p.sin()]
}

/// Accumulates SVG path commands
struct PathWriter<'a, P: PathProjector + ?Sized> {
    projector: &'a P,
    delta2: f64,
    out: String,
}

impl<'a, P: PathProjector + ?Sized> PathWriter<'a, P> {
    fn new(projector: &'a P) -> Self {
        let precision = projector.precision();
        Self {
            projector,
            delta2: if precision.is_finite() { precision * precision } else { 0.0 },
            out: String::new(),
        }
    }

    fn sample(&self, coord: Coord<f64>) -> Option<Sample> {
        let (screen, lambda) = self.projector.project_point(coord.x, coord.y)?;
        Some(Sample {
            screen,
            lambda,
            vector: unit_vector(coord.x, coord.y),
        })
    }

    fn command(&mut self, op: char, p: Point) {
        let _ = write!(self.out, "{}{},{}", op, fmt3(p.x), fmt3(p.y));
    }

    fn point(&mut self, coord: Coord<f64>) {
        let Some(sample) = self.sample(coord) else {
            log::trace!("point {:?} not drawn", coord);
            return;
        };
        let r = POINT_RADIUS;
        self.command('M', sample.screen);
        let _ = write!(
            self.out,
            "m0,{r}a{r},{r} 0 1,1 0,{}a{r},{r} 0 1,1 0,{}z",
            -2.0 * r,
            2.0 * r,
            r = r
        );
    }

    fn line(&mut self, line: &LineString<f64>, closed: bool) {
        let mut previous: Option<Sample> = None;
        let mut drawn = 0usize;
        let mut broken = false;

        for coord in line.coords() {
            let Some(current) = self.sample(*coord) else {
                broken |= previous.is_some() || drawn > 0;
                previous = None;
                continue;
            };
            match previous {
                Some(prev) if (current.lambda - prev.lambda).abs() <= PI => {
                    self.resample(&prev, &current, MAX_RESAMPLE_DEPTH);
                    self.command('L', current.screen);
                }
                Some(_) => {
                    broken = true;
                    self.command('M', current.screen);
                }
                None => {
                    if drawn > 0 {
                        broken = true;
                    }
                    self.command('M', current.screen);
                }
            }
            drawn += 1;
            previous = Some(current);
        }

        if closed && drawn > 1 && !broken {
            self.out.push('Z');
        }
    }

    fn polygon(&mut self, polygon: &Polygon<f64>) {
        self.line(polygon.exterior(), true);
        for interior in polygon.interiors() {
            self.line(interior, true);
        }
    }

    /// Inserts intermediate points between `a` and `b` while the projected
    /// great-circle arc strays from the straight chord
    fn resample(&mut self, a: &Sample, b: &Sample, depth: u32) {
        if self.delta2 <= 0.0 || depth == 0 {
            return;
        }
        let dx = b.screen.x - a.screen.x;
        let dy = b.screen.y - a.screen.y;
        let d2 = dx * dx + dy * dy;
        if d2 <= 4.0 * self.delta2 {
            return;
        }

        let m = [
            a.vector[0] + b.vector[0],
            a.vector[1] + b.vector[1],
            a.vector[2] + b.vector[2],
        ];
        let norm = (m[0] * m[0] + m[1] * m[1] + m[2] * m[2]).sqrt();
        if norm < 1e-12 {
            return;
        }
        let lng = m[1].atan2(m[0]).to_degrees();
        let lat = (m[2] / norm).clamp(-1.0, 1.0).asin().to_degrees();
        let Some(mid) = self.sample(Coord { x: lng, y: lat }) else {
            return;
        };
        if (mid.lambda - a.lambda).abs() > PI || (b.lambda - mid.lambda).abs() > PI {
            return;
        }

        let ox = mid.screen.x - a.screen.x;
        let oy = mid.screen.y - a.screen.y;
        let deviation = ox * dy - oy * dx;
        let along = (ox * dx + oy * dy) / d2;
        let cos_arc = a.vector[0] * b.vector[0] + a.vector[1] * b.vector[1] + a.vector[2] * b.vector[2];

        if deviation * deviation / d2 > self.delta2
            || (along - 0.5).abs() > 0.3
            || cos_arc < COS_MIN_DISTANCE
        {
            self.resample(a, &mid, depth - 1);
            self.command('L', mid.screen);
            self.resample(&mid, b, depth - 1);
        }
    }

    fn geometry(&mut self, geometry: &Geometry<f64>) {
        match geometry {
            Geometry::Point(p) => self.point(p.0),
            Geometry::MultiPoint(points) => points.iter().for_each(|p| self.point(p.0)),
            Geometry::Line(line) => {
                self.line(&LineString::new(vec![line.start, line.end]), false)
            }
            Geometry::LineString(line) => self.line(line, false),
            Geometry::MultiLineString(lines) => lines.iter().for_each(|l| self.line(l, false)),
            Geometry::Polygon(polygon) => self.polygon(polygon),
            Geometry::MultiPolygon(polygons) => polygons.iter().for_each(|p| self.polygon(p)),
            Geometry::Rect(rect) => self.polygon(&rect.to_polygon()),
            Geometry::Triangle(triangle) => self.polygon(&triangle.to_polygon()),
            Geometry::GeometryCollection(collection) => {
                collection.iter().for_each(|g| self.geometry(g))
            }
        }
    }
}

/// SVG path data for `geometry`; empty when nothing projects
pub fn render_path<P: PathProjector + ?Sized>(projector: &P, geometry: &Geometry<f64>) -> String {
    let mut writer = PathWriter::new(projector);
    writer.geometry(geometry);
    writer.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{line_string, point, polygon};

    /// Plate carrée at 1px per degree, hiding the eastern hemisphere
    struct Flat {
        precision: f64,
    }

    impl PathProjector for Flat {
        fn project_point(&self, lng: f64, lat: f64) -> Option<(Point, f64)> {
            if lng > 90.0 {
                return None;
            }
            Some((Point::new(lng, -lat), lng.to_radians()))
        }

        fn precision(&self) -> f64 {
            self.precision
        }
    }

    #[test]
    fn test_polygon_ring_is_closed() {
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 0.0),
        ];
        let path = render_path(&Flat { precision: 0.0 }, &square.into());
        assert_eq!(path, "M0,0L1,0L1,-1L0,0Z");
    }

    #[test]
    fn test_line_breaks_at_clipped_points() {
        let line = line_string![
            (x: 80.0, y: 0.0),
            (x: 85.0, y: 0.0),
            (x: 100.0, y: 0.0),
            (x: 88.0, y: 1.0),
        ];
        let path = render_path(&Flat { precision: 0.0 }, &line.into());
        assert_eq!(path, "M80,0L85,0M88,-1");
    }

    #[test]
    fn test_point_draws_circle() {
        let path = render_path(&Flat { precision: 0.0 }, &point!(x: 10.0, y: 20.0).into());
        assert_eq!(path, "M10,-20m0,4.5a4.5,4.5 0 1,1 0,-9a4.5,4.5 0 1,1 0,9z");
    }

    #[test]
    fn test_resampling_follows_great_circle() {
        // A long east-west segment at 60°N bows poleward along the great circle
        let line = line_string![(x: -40.0, y: 60.0), (x: 40.0, y: 60.0)];
        let coarse = render_path(&Flat { precision: 0.0 }, &line.clone().into());
        let fine = render_path(&Flat { precision: 0.5 }, &line.into());
        assert_eq!(coarse.matches('L').count(), 1);
        assert!(fine.matches('L').count() > 1);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(fmt3(1.23456), 1.235);
        assert_eq!(fmt3(-0.0001).to_string(), "0");
    }
}
