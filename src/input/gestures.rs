use crate::animation::transitions::AnimationTask;
use crate::core::geo::Point;

/// Baseline captured when a single-pointer pan begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSession {
    /// Pointer position at pointer-down, device pixels
    pub start_pointer: Point,
    /// Translate at pointer-down, logical units
    pub base_translate: Point,
}

/// Baseline captured when a second touch point appears
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSession {
    pub start_distance: f64,
    pub start_midpoint: Point,
    /// Distance seen on the previous move; each move scales by current / last
    pub last_distance: f64,
}

impl PinchSession {
    pub fn new(a: Point, b: Point) -> Self {
        let distance = touch_distance(a, b);
        Self {
            start_distance: distance,
            start_midpoint: touch_midpoint(a, b),
            last_distance: distance,
        }
    }
}

/// Gesture state machine of the zoom/pan layer.
///
/// Exactly one variant is live at a time, so a pan can never run while an
/// animation is in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Panning(PanSession),
    Pinching(PinchSession),
    Animating(AnimationTask),
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            GestureState::Idle => "idle",
            GestureState::Panning(_) => "panning",
            GestureState::Pinching(_) => "pinching",
            GestureState::Animating(_) => "animating",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// Pointer or touch interaction in progress
    pub fn is_gesture(&self) -> bool {
        matches!(self, GestureState::Panning(_) | GestureState::Pinching(_))
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, GestureState::Animating(_))
    }
}

/// Euclidean distance between two touch points
pub fn touch_distance(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}

pub fn touch_midpoint(a: Point, b: Point) -> Point {
    a.midpoint(&b)
}
