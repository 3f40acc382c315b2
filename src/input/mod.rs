pub mod events;
pub mod gestures;
pub mod handler;

// Re-export the essential types
pub use events::{MapEvent, MouseButton, TouchPoint, ZoomEvent};
pub use gestures::{GestureState, PanSession, PinchSession};
pub use handler::ZoomPanController;
