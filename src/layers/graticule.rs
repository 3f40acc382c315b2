//! Latitude/longitude grid and the sphere outline around it.
//!
//! Major meridians every 90° span the full latitude range; minor lines stop
//! at ±80° so the poles stay uncluttered. Lines are densified every 2.5° so
//! they bend correctly under curved projections.

use geo_types::{Coord, LineString, MultiLineString, Polygon};
use serde::{Deserialize, Serialize};

const EPSILON: f64 = 1e-6;
const MAJOR_STEP: [f64; 2] = [90.0, 360.0];
const MINOR_EXTENT: f64 = 80.0;
const DENSIFY_STEP: f64 = 2.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraticuleConfig {
    /// Spacing of minor meridians and parallels, in degrees
    pub step: [f64; 2],
    pub color: String,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for GraticuleConfig {
    fn default() -> Self {
        Self {
            step: [10.0, 10.0],
            color: "#ccc".to_string(),
            stroke_width: 0.5,
            opacity: 0.5,
        }
    }
}

/// `start, start + step, ...` strictly below `stop`
fn range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let count = ((stop - start) / step).ceil().max(0.0) as usize;
    (0..count).map(|i| start + i as f64 * step).collect()
}

fn meridian(lng: f64, lat0: f64, lat1: f64) -> Vec<Coord<f64>> {
    let mut lats = range(lat0, lat1 - EPSILON, DENSIFY_STEP);
    lats.push(lat1);
    lats.into_iter().map(|lat| Coord { x: lng, y: lat }).collect()
}

fn parallel(lat: f64, lng0: f64, lng1: f64) -> Vec<Coord<f64>> {
    let mut lngs = range(lng0, lng1 - EPSILON, DENSIFY_STEP);
    lngs.push(lng1);
    lngs.into_iter().map(|lng| Coord { x: lng, y: lat }).collect()
}

impl GraticuleConfig {
    fn minor_step(&self) -> [f64; 2] {
        let [sx, sy] = self.step;
        if sx > 0.0 && sy > 0.0 && sx.is_finite() && sy.is_finite() {
            self.step
        } else {
            log::warn!("graticule step {:?} is not positive, using 10°", self.step);
            [10.0, 10.0]
        }
    }

    /// Meridians and parallels as separate lines
    pub fn lines(&self) -> MultiLineString<f64> {
        let [dx, dy] = self.minor_step();
        let [major_dx, major_dy] = MAJOR_STEP;
        let (major_y0, major_y1) = (-90.0 + EPSILON, 90.0 - EPSILON);
        let (minor_y0, minor_y1) = (-MINOR_EXTENT - EPSILON, MINOR_EXTENT + EPSILON);
        let off_major = |value: f64, major: f64| (value % major).abs() > EPSILON;

        let mut lines = Vec::new();
        for x in range((-180.0 / major_dx).ceil() * major_dx, 180.0, major_dx) {
            lines.push(meridian(x, major_y0, major_y1));
        }
        for y in range((major_y0 / major_dy).ceil() * major_dy, major_y1, major_dy) {
            lines.push(parallel(y, -180.0, 180.0));
        }
        for x in range((-180.0 / dx).ceil() * dx, 180.0, dx) {
            if off_major(x, major_dx) {
                lines.push(meridian(x, minor_y0, minor_y1));
            }
        }
        for y in range((minor_y0 / dy).ceil() * dy, minor_y1, dy) {
            if off_major(y, major_dy) {
                lines.push(parallel(y, -180.0, 180.0));
            }
        }
        MultiLineString::new(lines.into_iter().map(LineString::new).collect())
    }

    /// Closed ring around the whole graticule extent
    pub fn outline(&self) -> Polygon<f64> {
        let (y0, y1) = (-90.0 + EPSILON, 90.0 - EPSILON);
        let mut ring = meridian(-180.0, y0, y1);
        ring.extend(parallel(y1, -180.0, 180.0).into_iter().skip(1));
        ring.extend(meridian(180.0, y0, y1).into_iter().rev().skip(1));
        ring.extend(parallel(y0, -180.0, 180.0).into_iter().rev().skip(1));
        Polygon::new(LineString::new(ring), Vec::new())
    }

    pub fn outline_stroke_width(&self) -> f64 {
        self.stroke_width * 2.0
    }

    pub fn outline_opacity(&self) -> f64 {
        self.opacity * 0.3
    }
}
