//! Gesture recognition driving a clamped 2D camera.

use cgmath::{MetricSpace, Point2, Vector2};

use crate::{
    camera::{Camera, CameraCommand},
    contact::{ContactId, ContactTracker},
    event::InputEvent,
    settings::{GestureSettings, SettingsError},
    viewport::ViewportSize,
};

/// Recognizes pan and pinch gestures in an input event stream and turns
/// them into clamped camera updates.
///
/// One controller owns the contact and pinch state for one camera. Events
/// are handled strictly in delivery order; each event is fully resolved
/// before the next one is looked at. Which gesture applies follows from the
/// number of active contacts alone: one pans, two pinch, any more are
/// tracked but move nothing.
pub struct CameraController {
    settings: GestureSettings,
    tracker: ContactTracker,
    last_pinch_distance: f64,
    viewport: ViewportSize,
}

impl CameraController {
    /// Creates a controller, rejecting unusable settings up front so that
    /// event processing never has to.
    pub fn new(settings: GestureSettings, viewport: ViewportSize) -> Result<Self, SettingsError> {
        settings.validate()?;

        Ok(Self {
            settings,
            tracker: ContactTracker::default(),
            last_pinch_distance: 0.0,
            viewport,
        })
    }

    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    pub fn viewport_size(&self) -> ViewportSize {
        self.viewport
    }

    /// Refreshes the cached viewport extent used by scroll-limit clamping.
    pub fn set_viewport_size(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }

    pub fn active_contacts(&self) -> usize {
        self.tracker.active_count()
    }

    /// Drops all contact state, ending any gesture in progress. Hosts call
    /// this when releases stop arriving, e.g. on focus loss.
    pub fn cancel_gestures(&mut self) {
        self.tracker.clear();
        self.last_pinch_distance = 0.0;
    }

    /// Resolves an event against the current contact state and applies the
    /// resulting command to `camera`.
    pub fn process_event(
        &mut self,
        event: &InputEvent,
        camera: &mut Camera,
    ) -> Option<CameraCommand> {
        let command = self.resolve_event(event, camera)?;
        camera.apply(&command);

        Some(command)
    }

    /// Resolves an event into a camera command without touching the camera.
    /// Position and zoom in the returned command are already clamped.
    pub fn resolve_event(&mut self, event: &InputEvent, camera: &Camera) -> Option<CameraCommand> {
        match *event {
            InputEvent::TouchStarted { id, position } => {
                self.press(ContactId::Touch(id), position);
                None
            }
            InputEvent::TouchEnded { id } => {
                self.release(ContactId::Touch(id));
                None
            }
            InputEvent::TouchMoved {
                id,
                position,
                delta,
            } => self.motion(ContactId::Touch(id), position, delta, camera),
            InputEvent::MousePressed { position } => {
                if self.settings.handle_mouse_events {
                    self.press(ContactId::Mouse, position);
                }
                None
            }
            InputEvent::MouseReleased => {
                if self.settings.handle_mouse_events {
                    self.release(ContactId::Mouse);
                }
                None
            }
            InputEvent::MouseMoved { position, delta } => {
                if !self.settings.handle_mouse_events {
                    return None;
                }

                self.motion(ContactId::Mouse, position, delta, camera)
            }
            InputEvent::WheelUp => self.wheel(-self.settings.mouse_zoom_increment, camera),
            InputEvent::WheelDown => self.wheel(self.settings.mouse_zoom_increment, camera),
        }
    }

    fn press(&mut self, id: ContactId, position: Point2<f64>) {
        self.tracker.on_press(id, position);
        self.release_paired_mouse();
        self.reseed_pinch();
    }

    fn release(&mut self, id: ContactId) {
        self.tracker.on_release(id);
        self.release_paired_mouse();
        self.reseed_pinch();
    }

    // A mouse button cannot pinch. Unless panning may continue during a
    // pinch, the mouse contact is released the moment a press or a release
    // leaves it paired with a second contact, freeing that contact to pan.
    fn release_paired_mouse(&mut self) {
        if !self.settings.move_while_zooming
            && self.tracker.active_count() == 2
            && self.tracker.get(ContactId::Mouse).is_some()
        {
            self.tracker.on_release(ContactId::Mouse);
        }
    }

    // Entering the two-contact state restarts the distance tracker from the
    // measured pair distance. A stale value from an earlier pinch would
    // register as a full zoom step on the first accepted move.
    fn reseed_pinch(&mut self) {
        let pair = self
            .tracker
            .pinch_pair()
            .map(|(primary, secondary)| (primary.last_position(), secondary.last_position()));

        if let Some((p1, p2)) = pair {
            self.last_pinch_distance = p1.distance(p2);
        }
    }

    fn motion(
        &mut self,
        id: ContactId,
        position: Point2<f64>,
        delta: Vector2<f64>,
        camera: &Camera,
    ) -> Option<CameraCommand> {
        if !self
            .tracker
            .on_move(id, position, self.settings.zoom_sensitivity)
        {
            return None;
        }

        match self.tracker.active_count() {
            1 => Some(self.pan(delta, camera)),
            2 => self.pinch(delta, camera),
            _ => None,
        }
    }

    fn pan(&self, delta: Vector2<f64>, camera: &Camera) -> CameraCommand {
        let zoom = camera.zoom();
        let candidate = camera.position() - delta * zoom;

        CameraCommand {
            position: Some(camera.clamp_position(candidate, zoom, self.viewport)),
            zoom: None,
        }
    }

    fn pinch(&mut self, delta: Vector2<f64>, camera: &Camera) -> Option<CameraCommand> {
        let (p1, p2) = self
            .tracker
            .pinch_pair()
            .map(|(primary, secondary)| (primary.last_position(), secondary.last_position()))?;
        let pinch_distance = p1.distance(p2);

        let zoom = camera.zoom();
        let mut new_zoom = None;

        if (pinch_distance - self.last_pinch_distance).abs() > self.settings.zoom_sensitivity {
            // Contacts closing in shrink the view. For an inverse
            // magnification scalar that means zooming out.
            let step = if pinch_distance < self.last_pinch_distance {
                self.settings.zoom_increment
            } else {
                -self.settings.zoom_increment
            };

            new_zoom = Some(self.settings.clamp_zoom(zoom + step));
            self.last_pinch_distance = pinch_distance;
        }

        if self.settings.move_while_zooming {
            // Both contacts report the shared drag, so half of the event's
            // relative motion pans the camera.
            let candidate = camera.position() - delta / 2.0 * zoom;

            Some(CameraCommand {
                position: Some(camera.clamp_position(
                    candidate,
                    new_zoom.unwrap_or(zoom),
                    self.viewport,
                )),
                zoom: new_zoom,
            })
        } else {
            let new_zoom = new_zoom?;

            // The zoom step may shrink the usable position range, so the
            // current position is clamped again under the new zoom.
            Some(CameraCommand {
                position: Some(camera.clamp_position(camera.position(), new_zoom, self.viewport)),
                zoom: Some(new_zoom),
            })
        }
    }

    fn wheel(&self, step: f64, camera: &Camera) -> Option<CameraCommand> {
        if !self.settings.handle_mouse_events || self.tracker.active_count() >= 2 {
            return None;
        }

        let new_zoom = self.settings.clamp_zoom(camera.zoom() + step);

        Some(CameraCommand {
            position: Some(camera.clamp_position(camera.position(), new_zoom, self.viewport)),
            zoom: Some(new_zoom),
        })
    }
}
