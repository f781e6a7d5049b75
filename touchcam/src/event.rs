use cgmath::{Point2, Vector2};

/// Stable identifier the platform assigns to one touch for its lifetime.
pub type TouchId = u64;

/// Typed gesture input consumed by [`crate::controller::CameraController`].
///
/// Positions are absolute in logical pixels. `delta` is the relative motion
/// reported together with the same event; it is not derived from the stored
/// contact state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    TouchStarted {
        id: TouchId,
        position: Point2<f64>,
    },
    TouchMoved {
        id: TouchId,
        position: Point2<f64>,
        delta: Vector2<f64>,
    },
    TouchEnded {
        id: TouchId,
    },
    MousePressed {
        position: Point2<f64>,
    },
    MouseMoved {
        position: Point2<f64>,
        delta: Vector2<f64>,
    },
    MouseReleased,
    WheelUp,
    WheelDown,
}
