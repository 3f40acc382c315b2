pub mod easing;
pub mod transitions;

// Re-export commonly used types and functions for convenience
pub use easing::ease_in_out_cubic;
pub use transitions::{AnimationHandle, AnimationTask, FrameStep};
