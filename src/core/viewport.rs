use crate::animation::easing::ease_in_out_cubic;
use crate::core::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::core::geo::Point;
use crate::traits::Lerp;
use serde::{Deserialize, Serialize};

/// Logical size of the drawing surface in pixels.
///
/// The base projection translates to its center by default and auto-fits
/// the sphere into its box. The zoom layer pivots around the same center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Half the logical width and height
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ratio between a rendered box and this logical box, per axis.
    ///
    /// Degenerate sizes fall back to 1 so screen deltas pass through unchanged.
    pub fn device_ratio(&self, rendered_width: f64, rendered_height: f64) -> Point {
        let ratio = |rendered: f64, logical: f64| {
            let r = rendered / logical;
            if r.is_finite() && r > 0.0 {
                r
            } else {
                1.0
            }
        };
        Point::new(
            ratio(rendered_width, self.width),
            ratio(rendered_height, self.height),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Zoom/pan state of the affine layer.
///
/// `translate_*` is expressed in logical viewport units and applied after
/// scaling around the viewport center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomState {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ZoomState {
    pub fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale,
            translate_x,
            translate_y,
        }
    }

    pub fn translate(&self) -> Point {
        Point::new(self.translate_x, self.translate_y)
    }

    /// Interpolate between two states along the ease-in-out curve
    pub fn lerp_eased(&self, other: &ZoomState, t: f64) -> ZoomState {
        let eased_t = ease_in_out_cubic(t);
        ZoomState {
            scale: self.scale.lerp(&other.scale, eased_t),
            translate_x: self.translate_x.lerp(&other.translate_x, eased_t),
            translate_y: self.translate_y.lerp(&other.translate_y, eased_t),
        }
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

/// The exported affine transform:
/// `translate(cx + tx, cy + ty) · scale(s) · translate(-cx, -cy)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    /// Viewport center the zoom pivots around
    pub origin: Point,
    /// Outer translation, `origin + pan offset`
    pub translate: Point,
    /// Scale factor (1.0 = no scaling)
    pub scale: f64,
}

impl ZoomTransform {
    pub fn new(state: &ZoomState, viewport: &Viewport) -> Self {
        let origin = viewport.center();
        Self {
            origin,
            translate: origin.add(&state.translate()),
            scale: state.scale,
        }
    }

    pub fn identity(viewport: &Viewport) -> Self {
        Self::new(&ZoomState::default(), viewport)
    }

    /// Maps a base planar point to its final screen position
    pub fn apply(&self, point: &Point) -> Point {
        point
            .subtract(&self.origin)
            .multiply(self.scale)
            .add(&self.translate)
    }

    /// Maps a screen position back to base planar space
    pub fn invert(&self, point: &Point) -> Point {
        point
            .subtract(&self.translate)
            .multiply(1.0 / self.scale)
            .add(&self.origin)
    }

    /// SVG `transform` attribute value
    pub fn to_svg(&self) -> String {
        format!(
            "translate({}, {}) scale({}) translate({}, {})",
            self.translate.x, self.translate.y, self.scale, -self.origin.x, -self.origin.y
        )
    }

    /// Equivalent 2-D matrix `[a, b, c, d, e, f]`
    pub fn to_matrix(&self) -> [f64; 6] {
        let s = self.scale;
        [
            s,
            0.0,
            0.0,
            s,
            self.translate.x - s * self.origin.x,
            self.translate.y - s * self.origin.y,
        ]
    }
}
