use crate::core::{geo::Point, viewport::ZoomState};
use serde::{Deserialize, Serialize};

/// Mouse buttons; only the primary button starts a pan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

impl MouseButton {
    /// DOM `MouseEvent.button` numbering
    pub fn from_dom(button: u16) -> Self {
        match button {
            0 => MouseButton::Primary,
            1 => MouseButton::Middle,
            2 => MouseButton::Secondary,
            other => MouseButton::Other(other),
        }
    }
}

/// Individual touch point, in device pixels relative to the rendered box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: u64,
    pub position: Point,
}

impl TouchPoint {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Point::new(x, y),
        }
    }
}

/// Zoom/pan notifications carrying the state after the mutation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "state", rename_all = "camelCase")]
pub enum ZoomEvent {
    /// A pointer or touch gesture began
    Start(ZoomState),
    /// Scale or translate changed
    Change(ZoomState),
    /// A gesture finished
    End(ZoomState),
}

impl ZoomEvent {
    pub fn state(&self) -> &ZoomState {
        match self {
            ZoomEvent::Start(state) | ZoomEvent::Change(state) | ZoomEvent::End(state) => state,
        }
    }
}

/// Interaction events attributed to drawn items
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MapEvent {
    GeographyHover {
        key: String,
        id: Option<serde_json::Value>,
        properties: serde_json::Map<String, serde_json::Value>,
    },
    GeographyLeave {
        key: String,
    },
    GeographyClick {
        key: String,
        id: Option<serde_json::Value>,
        properties: serde_json::Map<String, serde_json::Value>,
    },
    MarkerClick {
        index: usize,
    },
    LineClick {
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_button_mapping() {
        assert_eq!(MouseButton::from_dom(0), MouseButton::Primary);
        assert_eq!(MouseButton::from_dom(2), MouseButton::Secondary);
        assert_eq!(MouseButton::from_dom(4), MouseButton::Other(4));
    }

    #[test]
    fn test_zoom_event_serialization() {
        let event = ZoomEvent::Change(ZoomState::new(2.0, 10.0, -5.0));
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["type"], "change");
        assert_eq!(json["state"]["translateX"], 10.0);
        assert_eq!(event.state().scale, 2.0);
    }
}
