//! Camera state with zoom-bound and scroll-limit clamping.

use cgmath::{AbsDiffEq, EuclideanSpace, Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::viewport::ViewportSize;

/// Default scroll limit magnitude, far enough out to act as unbounded.
const DEFAULT_LIMIT: f64 = 10_000_000.0;

/// How the camera position relates to the visible rectangle when scroll
/// limits are applied.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorMode {
    /// The position marks the center of the visible rectangle.
    #[serde(rename = "center")]
    Center,
    /// The position marks the top-left corner of the visible rectangle.
    #[serde(rename = "top_left")]
    TopLeft,
}

impl Default for AnchorMode {
    fn default() -> Self {
        AnchorMode::Center
    }
}

/// World-space rectangle the visible viewport must stay within.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ScrollLimits {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ScrollLimits {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }
}

impl Default for ScrollLimits {
    fn default() -> Self {
        ScrollLimits {
            left: -DEFAULT_LIMIT,
            top: -DEFAULT_LIMIT,
            right: DEFAULT_LIMIT,
            bottom: DEFAULT_LIMIT,
        }
    }
}

/// An already clamped update computed by the gesture resolver. A `None`
/// field leaves that part of the camera untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraCommand {
    pub position: Option<Point2<f64>>,
    pub zoom: Option<f64>,
}

/// 2D camera rig: a world-space position and an inverse-magnification zoom
/// scalar, together with the anchor mode and scroll limits that shape the
/// position clamp.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Point2<f64>,
    zoom: f64,
    anchor_mode: AnchorMode,
    limits: ScrollLimits,
    reference: Option<(Point2<f64>, f64)>,
}

impl Camera {
    pub fn new<P: Into<Point2<f64>>>(
        position: P,
        zoom: f64,
        anchor_mode: AnchorMode,
        limits: ScrollLimits,
    ) -> Self {
        warn_if_inverted(&limits);

        Self {
            position: position.into(),
            zoom,
            anchor_mode,
            limits,
            reference: None,
        }
    }

    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    pub fn position_vector(&self) -> Vector2<f64> {
        self.position.to_vec()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The uniform zoom vector form, for sinks that scale each axis.
    pub fn zoom_vector(&self) -> Vector2<f64> {
        Vector2::new(self.zoom, self.zoom)
    }

    pub fn anchor_mode(&self) -> AnchorMode {
        self.anchor_mode
    }

    pub fn set_anchor_mode(&mut self, anchor_mode: AnchorMode) {
        self.anchor_mode = anchor_mode;
    }

    pub fn limits(&self) -> ScrollLimits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: ScrollLimits) {
        warn_if_inverted(&limits);
        self.limits = limits;
    }

    pub fn move_relative(&mut self, delta: Vector2<f64>) {
        self.position += delta;
    }

    pub fn move_to(&mut self, new_position: Point2<f64>) {
        self.position = new_position;
    }

    pub fn update_zoom(&mut self, new_zoom: f64) {
        self.zoom = new_zoom;
        log::info!("zoom: {new_zoom}");
    }

    /// Applies an already clamped command. Zoom is written first so that a
    /// position carried by the same command lands under the zoom it was
    /// clamped for.
    pub fn apply(&mut self, command: &CameraCommand) {
        if let Some(zoom) = command.zoom {
            self.update_zoom(zoom);
        }

        if let Some(position) = command.position {
            self.move_to(position);
        }
    }

    /// Clamps `candidate` so that the viewport, scaled by `zoom`, stays
    /// inside the scroll limits. An axis whose usable range is inverted,
    /// because the viewport outgrows the limit rectangle at this zoom, pins
    /// to the midpoint of that range.
    pub fn clamp_position(
        &self,
        candidate: Point2<f64>,
        zoom: f64,
        viewport: ViewportSize,
    ) -> Point2<f64> {
        let extent = viewport.extent() * zoom;

        let ((left, right), (top, bottom)) = match self.anchor_mode {
            AnchorMode::Center => (
                (
                    self.limits.left + extent.x / 2.0,
                    self.limits.right - extent.x / 2.0,
                ),
                (
                    self.limits.top + extent.y / 2.0,
                    self.limits.bottom - extent.y / 2.0,
                ),
            ),
            AnchorMode::TopLeft => (
                (self.limits.left, self.limits.right - extent.x),
                (self.limits.top, self.limits.bottom - extent.y),
            ),
        };

        Point2::new(
            clamp_axis(candidate.x, left, right),
            clamp_axis(candidate.y, top, bottom),
        )
    }

    /// Whether position or zoom drifted further than `epsilon` from the
    /// reference snapshot. Hosts use this to gate redraws.
    pub fn did_change(&self, epsilon: f64) -> bool {
        match &self.reference {
            Some((position, zoom)) => {
                self.position.abs_diff_ne(position, epsilon)
                    || self.zoom.abs_diff_ne(zoom, epsilon)
            }
            None => true,
        }
    }

    pub fn update_reference(&mut self) {
        self.reference = Some((self.position, self.zoom));
    }
}

fn clamp_axis(value: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        (lo + hi) / 2.0
    } else {
        value.min(hi).max(lo)
    }
}

fn warn_if_inverted(limits: &ScrollLimits) {
    if !limits.is_well_formed() {
        log::warn!(
            "scroll limits are inverted: left {} right {} top {} bottom {}",
            limits.left,
            limits.right,
            limits.top,
            limits.bottom
        );
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{Point2, Vector2};

    use super::*;
    use crate::viewport::ViewportSize;

    fn viewport(width: f64, height: f64) -> ViewportSize {
        ViewportSize::new(width, height).unwrap()
    }

    #[test]
    fn center_anchor_shrinks_limits_on_all_sides() {
        let camera = Camera::new(
            (0.0, 0.0),
            1.0,
            AnchorMode::Center,
            ScrollLimits::new(0.0, 0.0, 1000.0, 800.0),
        );
        let vp = viewport(200.0, 100.0);

        // usable ranges at zoom 2: x in [200, 800], y in [100, 700]
        assert_eq!(
            camera.clamp_position(Point2::new(-500.0, -500.0), 2.0, vp),
            Point2::new(200.0, 100.0)
        );
        assert_eq!(
            camera.clamp_position(Point2::new(2000.0, 2000.0), 2.0, vp),
            Point2::new(800.0, 700.0)
        );
        assert_eq!(
            camera.clamp_position(Point2::new(500.0, 400.0), 2.0, vp),
            Point2::new(500.0, 400.0)
        );
    }

    #[test]
    fn top_left_anchor_shifts_only_far_edges() {
        let camera = Camera::new(
            (0.0, 0.0),
            1.0,
            AnchorMode::TopLeft,
            ScrollLimits::new(0.0, 0.0, 1000.0, 800.0),
        );
        let vp = viewport(200.0, 100.0);

        assert_eq!(
            camera.clamp_position(Point2::new(-50.0, -50.0), 1.0, vp),
            Point2::new(0.0, 0.0)
        );
        assert_eq!(
            camera.clamp_position(Point2::new(900.0, 780.0), 1.0, vp),
            Point2::new(800.0, 700.0)
        );
    }

    #[test]
    fn degenerate_range_pins_to_midpoint() {
        let camera = Camera::new(
            (0.0, 0.0),
            1.0,
            AnchorMode::Center,
            ScrollLimits::new(0.0, 0.0, 100.0, 100.0),
        );

        // both axes invert at zoom 1 with a 200px viewport
        assert_eq!(
            camera.clamp_position(Point2::new(-400.0, 400.0), 1.0, viewport(200.0, 200.0)),
            Point2::new(50.0, 50.0)
        );
    }

    #[test]
    fn apply_writes_only_present_fields() {
        let mut camera = Camera::new((1.0, 2.0), 1.0, AnchorMode::Center, ScrollLimits::default());

        camera.apply(&CameraCommand {
            position: None,
            zoom: Some(1.5),
        });
        assert_eq!(camera.position(), Point2::new(1.0, 2.0));
        assert_eq!(camera.zoom(), 1.5);

        camera.apply(&CameraCommand {
            position: Some(Point2::new(7.0, 8.0)),
            zoom: None,
        });
        assert_eq!(camera.position(), Point2::new(7.0, 8.0));
        assert_eq!(camera.zoom(), 1.5);
    }

    #[test]
    fn change_tracking_compares_against_reference() {
        let mut camera = Camera::new((0.0, 0.0), 1.0, AnchorMode::Center, ScrollLimits::default());
        assert!(camera.did_change(0.05));

        camera.update_reference();
        assert!(!camera.did_change(0.05));

        camera.move_relative(Vector2::new(0.01, 0.0));
        assert!(!camera.did_change(0.05));

        camera.move_relative(Vector2::new(10.0, 0.0));
        assert!(camera.did_change(0.05));

        camera.update_reference();
        camera.update_zoom(1.2);
        assert!(camera.did_change(0.05));
    }

    #[test]
    fn zoom_vector_has_equal_components() {
        let camera = Camera::new((0.0, 0.0), 1.25, AnchorMode::Center, ScrollLimits::default());
        assert_eq!(camera.zoom_vector(), Vector2::new(1.25, 1.25));
        assert_eq!(camera.position_vector(), Vector2::new(0.0, 0.0));
    }

    #[test]
    fn anchor_and_limits_round_trip_as_json() {
        // the wire names are part of the settings-file format
        assert_eq!(
            serde_json::to_string(&AnchorMode::TopLeft).unwrap(),
            "\"top_left\""
        );
        assert_eq!(
            serde_json::from_str::<AnchorMode>("\"center\"").unwrap(),
            AnchorMode::Center
        );

        let limits = ScrollLimits::new(-10.0, -20.0, 30.0, 40.0);
        let decoded: ScrollLimits =
            serde_json::from_str(&serde_json::to_string(&limits).unwrap()).unwrap();
        assert_eq!(decoded, limits);
    }
}
