use crate::core::viewport::ZoomState;
use instant::{Duration, Instant};

/// Identifies one zoom-to-feature transition.
///
/// The host keeps the handle and passes it back on every frame. Once a newer
/// transition has been installed, frames carrying an older handle are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle {
    pub generation: u64,
}

/// Outcome of a single animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// Progress below 1; schedule another frame
    Continue,
    /// Target reached exactly; stop scheduling
    Finished,
    /// The handle no longer owns the animation; nothing was changed
    Superseded,
}

impl FrameStep {
    pub fn needs_another_frame(self) -> bool {
        matches!(self, FrameStep::Continue)
    }
}

/// A running interpolation between two zoom states
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTask {
    pub from: ZoomState,
    pub to: ZoomState,
    pub start_time: Instant,
    pub duration: Duration,
    pub generation: u64,
}

impl AnimationTask {
    pub fn new(
        from: ZoomState,
        to: ZoomState,
        start_time: Instant,
        duration: Duration,
        generation: u64,
    ) -> Self {
        Self {
            from,
            to,
            start_time,
            duration,
            generation,
        }
    }

    pub fn handle(&self) -> AnimationHandle {
        AnimationHandle {
            generation: self.generation,
        }
    }

    /// Linear progress in [0, 1]; a zero duration completes immediately
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// State at `now` and whether the transition is complete.
    ///
    /// On completion the exact target is returned, not an interpolated value.
    pub fn sample(&self, now: Instant) -> (ZoomState, bool) {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return (self.to, true);
        }
        (self.from.lerp_eased(&self.to, progress), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(duration_ms: u64) -> (AnimationTask, Instant) {
        let start = Instant::now();
        let task = AnimationTask::new(
            ZoomState::new(1.0, 0.0, 0.0),
            ZoomState::new(4.0, -120.3, 77.7),
            start,
            Duration::from_millis(duration_ms),
            1,
        );
        (task, start)
    }

    #[test]
    fn test_midway_sample_is_eased() {
        let (task, start) = task(800);
        let (state, done) = task.sample(start + Duration::from_millis(400));
        assert!(!done);
        // Ease-in-out passes through the midpoint at t = 0.5
        assert!((state.scale - 2.5).abs() < 1e-9);

        let (early, _) = task.sample(start + Duration::from_millis(200));
        // 4 * 0.25^3 = 0.0625 of the way
        assert!((early.scale - (1.0 + 3.0 * 0.0625)).abs() < 1e-9);
    }

    #[test]
    fn test_completion_settles_exactly_on_target() {
        let (task, start) = task(800);
        let (state, done) = task.sample(start + Duration::from_millis(5000));
        assert!(done);
        assert_eq!(state, task.to);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let (task, start) = task(0);
        assert_eq!(task.progress(start), 1.0);
        assert_eq!(task.sample(start), (task.to, true));
    }

    #[test]
    fn test_clock_before_start_is_zero_progress() {
        let (task, start) = task(800);
        let later = AnimationTask {
            start_time: start + Duration::from_millis(100),
            ..task
        };
        assert_eq!(later.progress(start), 0.0);
    }
}
