//! Engine-wide defaults for zoom behaviour, projection fallbacks and styling.
//! Keeping them in a single place makes it easier to tweak the magic numbers.

/// Logical viewport width used when none is configured.
pub const DEFAULT_WIDTH: f64 = 800.0;

/// Logical viewport height used when none is configured.
pub const DEFAULT_HEIGHT: f64 = 400.0;

/// Lower zoom bound for the affine layer.
pub const DEFAULT_MIN_ZOOM: f64 = 1.0;

/// Upper zoom bound for the affine layer.
pub const DEFAULT_MAX_ZOOM: f64 = 8.0;

/// Scale change per unit of wheel delta.
pub const DEFAULT_ZOOM_SENSITIVITY: f64 = 0.001;

/// Multiplicative step for `zoom_in` / `zoom_out`.
pub const DEFAULT_ZOOM_STEP: f64 = 1.5;

/// Duration of the zoom-to-feature transition.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 800;

/// Scale used by zoom-on-click.
pub const DEFAULT_ZOOM_ON_CLICK_LEVEL: f64 = 4.0;

/// Projection scale applied when auto-fit is impossible.
pub const FALLBACK_PROJECTION_SCALE: f64 = 150.0;

/// Control-point offset per unit of segment length and curvature.
pub const LINE_CURVE_FACTOR: f64 = 0.3;

/// Default curve tolerance for adaptive resampling, √0.5 pixels.
pub const DEFAULT_PRECISION: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Recursion limit of adaptive resampling.
pub const MAX_RESAMPLE_DEPTH: u32 = 16;

/// Radius of the circle drawn for point geometries.
pub const POINT_RADIUS: f64 = 4.5;

/// Latitude limit of the square Mercator world.
pub const MERCATOR_MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Low-to-high blues used when a choropleth gives no colors.
pub const DEFAULT_COLOR_STOPS: [&str; 5] = ["#E3F2FD", "#90CAF9", "#42A5F5", "#1E88E5", "#1565C0"];

pub const DEFAULT_FILL: &str = "#ECECEC";
pub const DEFAULT_STROKE: &str = "#D6D6D6";
pub const DEFAULT_STROKE_WIDTH: f64 = 0.5;
pub const DEFAULT_ACCENT: &str = "#FF5533";
pub const DEFAULT_MARKER_SIZE: f64 = 6.0;
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
