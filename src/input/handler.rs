use crate::{
    animation::transitions::{AnimationHandle, AnimationTask, FrameStep},
    core::{
        config::ZoomConfig,
        geo::Point,
        viewport::{Viewport, ZoomState, ZoomTransform},
    },
    data::feature::GeographyFeature,
    input::{
        events::{MouseButton, TouchPoint, ZoomEvent},
        gestures::{GestureState, PanSession, PinchSession},
    },
    projection::GeoProjection,
};
use instant::{Duration, Instant};
use std::collections::VecDeque;

/// Owns the zoom/pan state and drives it from pointer, wheel, touch and
/// programmatic input.
///
/// Pointer positions are device pixels relative to the rendered box's top-left
/// corner. They are divided by the device ratio before touching the state,
/// which is kept in logical viewport units.
#[derive(Debug, Clone)]
pub struct ZoomPanController {
    config: ZoomConfig,
    viewport: Viewport,
    device_ratio: Point,
    state: ZoomState,
    gesture: GestureState,
    next_generation: u64,
    events: VecDeque<ZoomEvent>,
}

impl ZoomPanController {
    pub fn new(config: ZoomConfig, viewport: Viewport) -> Self {
        let config = config.normalized();
        let state = Self::initial_state(&config);
        Self {
            config,
            viewport,
            device_ratio: Point::new(1.0, 1.0),
            state,
            gesture: GestureState::Idle,
            next_generation: 0,
            events: VecDeque::new(),
        }
    }

    fn initial_state(config: &ZoomConfig) -> ZoomState {
        ZoomState::new(
            config.clamp_scale(config.initial_zoom),
            config.center.x,
            config.center.y,
        )
    }

    pub fn state(&self) -> ZoomState {
        self.state
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replaces the configuration and re-clamps the current scale
    pub fn set_config(&mut self, config: ZoomConfig) {
        self.config = config.normalized();
        let clamped = self.config.clamp_scale(self.state.scale);
        if clamped != self.state.scale {
            self.state.scale = clamped;
            self.emit_change();
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Device pixels per logical unit on each axis
    pub fn set_device_ratio(&mut self, ratio: Point) {
        self.device_ratio = Point::new(
            if ratio.x.is_finite() && ratio.x > 0.0 { ratio.x } else { 1.0 },
            if ratio.y.is_finite() && ratio.y > 0.0 { ratio.y } else { 1.0 },
        );
    }

    /// Derives the device ratio from the box the host actually rendered
    pub fn set_rendered_size(&mut self, width: f64, height: f64) {
        self.device_ratio = self.viewport.device_ratio(width, height);
    }

    /// The exported affine transform for the current state
    pub fn transform(&self) -> ZoomTransform {
        ZoomTransform::new(&self.state, &self.viewport)
    }

    pub fn is_animating(&self) -> bool {
        self.gesture.is_animating()
    }

    /// Takes every queued notification, oldest first
    pub fn drain_events(&mut self) -> Vec<ZoomEvent> {
        self.events.drain(..).collect()
    }

    fn emit_change(&mut self) {
        self.events.push_back(ZoomEvent::Change(self.state));
    }

    fn to_logical(&self, delta: Point) -> Point {
        Point::new(delta.x / self.device_ratio.x, delta.y / self.device_ratio.y)
    }

    /// Moves into a gesture. `Start` fires only when no gesture was running.
    fn enter_gesture(&mut self, next: GestureState) {
        if self.gesture.is_animating() {
            log::debug!("gesture interrupts running animation");
        }
        let was_gesture = self.gesture.is_gesture();
        log::trace!("gesture {} -> {}", self.gesture.name(), next.name());
        self.gesture = next;
        if !was_gesture {
            self.events.push_back(ZoomEvent::Start(self.state));
        }
    }

    /// Returns to idle, emitting `End` if a gesture was running
    fn end_gesture(&mut self) {
        if self.gesture.is_gesture() {
            log::trace!("gesture {} -> idle", self.gesture.name());
            self.gesture = GestureState::Idle;
            self.events.push_back(ZoomEvent::End(self.state));
        }
    }

    /// Drops an in-flight animation so a direct mutation is not overwritten
    /// by the next frame
    fn interrupt_animation(&mut self) {
        if self.gesture.is_animating() {
            log::debug!("direct zoom mutation supersedes running animation");
            self.gesture = GestureState::Idle;
        }
    }

    /// Wheel zoom anchored at the pointer.
    ///
    /// Returns whether the state changed.
    pub fn wheel_zoom(&mut self, delta_y: f64, pointer: Point) -> bool {
        if !self.config.enable_wheel_zoom || !delta_y.is_finite() {
            return false;
        }
        let current = self.state.scale;
        let factor = 1.0 + (-delta_y * self.config.sensitivity);
        let scale = self.config.clamp_scale(current * factor);
        if scale == current {
            return false;
        }
        self.interrupt_animation();

        // Pointer relative to the viewport center, logical units
        let anchor = self.to_logical(pointer).subtract(&self.viewport.center());
        let ratio = scale / current;
        self.state.translate_x -= (anchor.x - self.state.translate_x) * (ratio - 1.0);
        self.state.translate_y -= (anchor.y - self.state.translate_y) * (ratio - 1.0);
        self.state.scale = scale;
        self.emit_change();
        true
    }

    /// Primary-button press starts a pan
    pub fn pointer_down(&mut self, pointer: Point, button: MouseButton) -> bool {
        if !self.config.enable_pan || button != MouseButton::Primary {
            return false;
        }
        if matches!(self.gesture, GestureState::Pinching(_)) {
            return false;
        }
        let session = PanSession {
            start_pointer: pointer,
            base_translate: self.state.translate(),
        };
        self.enter_gesture(GestureState::Panning(session));
        true
    }

    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        self.drag_pan(pointer)
    }

    pub fn pointer_up(&mut self) -> bool {
        if matches!(self.gesture, GestureState::Panning(_)) {
            self.end_gesture();
            return true;
        }
        false
    }

    /// Pans relative to the session baseline; ignored unless panning
    pub fn drag_pan(&mut self, pointer: Point) -> bool {
        let GestureState::Panning(session) = self.gesture else {
            return false;
        };
        let delta = self.to_logical(pointer.subtract(&session.start_pointer));
        let translate = session.base_translate.add(&delta);
        if !translate.is_finite() {
            log::debug!("ignoring non-finite pan position {:?}", pointer);
            return false;
        }
        self.state.translate_x = translate.x;
        self.state.translate_y = translate.y;
        self.emit_change();
        true
    }

    /// One touch starts a pan, two or more start a pinch
    pub fn touch_start(&mut self, touches: &[TouchPoint]) -> bool {
        if !self.config.enable_touch {
            return false;
        }
        match touches {
            [] => false,
            [single] => {
                if matches!(self.gesture, GestureState::Pinching(_)) {
                    return false;
                }
                let session = PanSession {
                    start_pointer: single.position,
                    base_translate: self.state.translate(),
                };
                self.enter_gesture(GestureState::Panning(session));
                true
            }
            [first, second, ..] => {
                let session = PinchSession::new(first.position, second.position);
                self.enter_gesture(GestureState::Pinching(session));
                true
            }
        }
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> bool {
        if !self.config.enable_touch {
            return false;
        }
        match touches {
            [single] => self.drag_pan(single.position),
            [first, second, ..] => self.pinch_zoom(first.position, second.position),
            [] => false,
        }
    }

    /// `remaining` holds the touches still on the surface
    pub fn touch_end(&mut self, remaining: &[TouchPoint]) -> bool {
        match self.gesture {
            GestureState::Pinching(_) if remaining.len() < 2 => {
                self.end_gesture();
                true
            }
            GestureState::Panning(_) if remaining.is_empty() => {
                self.end_gesture();
                true
            }
            _ => false,
        }
    }

    pub fn touch_cancel(&mut self) -> bool {
        self.touch_end(&[])
    }

    /// Scales by the change in distance since the previous pinch move
    pub fn pinch_zoom(&mut self, first: Point, second: Point) -> bool {
        let GestureState::Pinching(mut session) = self.gesture else {
            return false;
        };
        let distance = first.distance_to(&second);
        let previous = session.last_distance;
        session.last_distance = distance;
        self.gesture = GestureState::Pinching(session);

        if !(previous > 0.0 && previous.is_finite() && distance.is_finite()) {
            log::trace!("pinch baseline reset to {}", distance);
            return false;
        }
        let scale = self.config.clamp_scale(self.state.scale * (distance / previous));
        if scale == self.state.scale {
            return false;
        }
        self.state.scale = scale;
        self.emit_change();
        true
    }

    /// Starts an animated transition centering the feature's centroid at
    /// `level`.
    ///
    /// Returns `None` when the feature has no centroid or it does not
    /// project; the state machine is left untouched in that case.
    pub fn zoom_to_feature(
        &mut self,
        feature: &GeographyFeature,
        level: f64,
        projection: &dyn GeoProjection,
        now: Instant,
    ) -> Option<AnimationHandle> {
        let Some(centroid) = feature.centroid() else {
            log::debug!("feature {} has no centroid, zoom skipped", feature.key);
            return None;
        };
        let Some(projected) = projection.project(centroid) else {
            log::debug!(
                "centroid {:?} of feature {} does not project, zoom skipped",
                centroid,
                feature.key
            );
            return None;
        };
        self.zoom_to_point(projected, level, now)
    }

    /// Animates so that `projected` (base planar space) lands on the viewport
    /// center at `level`.
    ///
    /// `None` for a non-finite point or level.
    pub fn zoom_to_point(
        &mut self,
        projected: Point,
        level: f64,
        now: Instant,
    ) -> Option<AnimationHandle> {
        if !level.is_finite() || !projected.is_finite() {
            log::warn!("ignoring zoom to {:?} at non-finite level {}", projected, level);
            return None;
        }
        let scale = self.config.clamp_scale(level);
        let offset = projected.subtract(&self.viewport.center());
        let target = ZoomState::new(scale, -offset.x * scale, -offset.y * scale);
        self.animate_to(target, now)
    }

    /// Installs a new transition, superseding any running one.
    ///
    /// The target scale is clamped to the zoom limits. Non-finite targets are
    /// rejected and leave the state machine untouched.
    pub fn animate_to(&mut self, target: ZoomState, now: Instant) -> Option<AnimationHandle> {
        if !(target.scale.is_finite()
            && target.translate_x.is_finite()
            && target.translate_y.is_finite())
        {
            log::warn!("ignoring non-finite animation target {:?}", target);
            return None;
        }
        let target = ZoomState {
            scale: self.config.clamp_scale(target.scale),
            ..target
        };
        self.end_gesture();
        if self.gesture.is_animating() {
            log::debug!("new transition supersedes running animation");
        }
        self.next_generation += 1;
        let task = AnimationTask::new(
            self.state,
            target,
            now,
            Duration::from_millis(self.config.animation_duration_ms),
            self.next_generation,
        );
        let handle = task.handle();
        self.gesture = GestureState::Animating(task);
        Some(handle)
    }

    /// Advances the animation owned by `handle` to `now`
    pub fn step_animation(&mut self, handle: AnimationHandle, now: Instant) -> FrameStep {
        let (state, done) = match &self.gesture {
            GestureState::Animating(task) if task.generation == handle.generation => {
                task.sample(now)
            }
            _ => {
                log::trace!("dropping frame for superseded animation {}", handle.generation);
                return FrameStep::Superseded;
            }
        };
        self.state = state;
        self.emit_change();
        if done {
            self.gesture = GestureState::Idle;
            FrameStep::Finished
        } else {
            FrameStep::Continue
        }
    }

    /// Stops a running animation where it is
    pub fn cancel_animation(&mut self) -> bool {
        let animating = self.gesture.is_animating();
        self.interrupt_animation();
        animating
    }

    /// Sets the scale (clamped) and optionally the translate
    pub fn set_zoom(&mut self, scale: f64, translate_x: Option<f64>, translate_y: Option<f64>) {
        if !scale.is_finite() {
            log::warn!("ignoring non-finite zoom scale {}", scale);
            return;
        }
        self.interrupt_animation();
        self.state.scale = self.config.clamp_scale(scale);
        if let Some(tx) = translate_x.filter(|v| v.is_finite()) {
            self.state.translate_x = tx;
        }
        if let Some(ty) = translate_y.filter(|v| v.is_finite()) {
            self.state.translate_y = ty;
        }
        self.emit_change();
    }

    /// Multiplies the scale by the configured step
    pub fn zoom_in(&mut self) {
        self.zoom_in_by(self.config.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_out_by(self.config.zoom_step);
    }

    pub fn zoom_in_by(&mut self, step: f64) {
        self.set_zoom(self.state.scale * step, None, None);
    }

    pub fn zoom_out_by(&mut self, step: f64) {
        self.set_zoom(self.state.scale / step, None, None);
    }

    /// Back to the initial zoom and center
    pub fn reset(&mut self) {
        self.interrupt_animation();
        self.state = Self::initial_state(&self.config);
        self.emit_change();
    }
}
