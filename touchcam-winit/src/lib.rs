//! Feeds winit window events into a touchcam [`CameraController`].

#![deny(unused_imports)]

use std::collections::HashMap;

use cgmath::Point2;
use touchcam::{
    camera::Camera,
    controller::CameraController,
    event::{InputEvent, TouchId},
    viewport::ViewportSize,
};
use winit::{
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent},
    keyboard::Key,
    window::Window,
};

/// Translates [`WindowEvent`]s into typed gesture input and drives a
/// [`CameraController`] with it.
///
/// The driver keeps the raw per-pointer positions needed to derive the
/// relative motion winit does not deliver for touches, and converts
/// physical window coordinates into the logical pixels the gesture math
/// runs in.
#[derive(Default)]
pub struct WinitInputDriver {
    touch_positions: HashMap<TouchId, Point2<f64>>,
    cursor_position: Option<Point2<f64>>,
    mouse_pressed: bool,
}

impl WinitInputDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes the given winit `[winit::event::WindowEvent]`.
    /// Returns true if the event has been processed and false otherwise.
    pub fn window_input(
        &mut self,
        event: &WindowEvent,
        scale_factor: f64,
        controller: &mut CameraController,
        camera: &mut Camera,
    ) -> bool {
        if let WindowEvent::Focused(false) = event {
            // Releases stop arriving once the window loses focus, so any
            // gesture in progress is cut short instead of leaking contacts.
            log::debug!("window unfocused, cancelling gestures");
            self.touch_positions.clear();
            self.mouse_pressed = false;
            controller.cancel_gestures();
            return true;
        }

        match self.translate(event, scale_factor) {
            Some(event) => {
                controller.process_event(&event, camera);
                true
            }
            None => false,
        }
    }

    /// Translates a window event into gesture input without applying it
    /// anywhere. Events that are no gesture input map to `None`.
    pub fn translate(&mut self, event: &WindowEvent, scale_factor: f64) -> Option<InputEvent> {
        match event {
            WindowEvent::Touch(touch) => {
                let position: (f64, f64) = touch.location.to_owned().into();
                let position = Point2::from(position) / scale_factor;

                match touch.phase {
                    TouchPhase::Started => {
                        self.touch_positions.insert(touch.id, position);
                        Some(InputEvent::TouchStarted {
                            id: touch.id,
                            position,
                        })
                    }
                    TouchPhase::Moved => {
                        let previous = self.touch_positions.insert(touch.id, position)?;
                        Some(InputEvent::TouchMoved {
                            id: touch.id,
                            position,
                            delta: position - previous,
                        })
                    }
                    // Cancelled still ends the contact. Swallowing it would
                    // leave the controller pinching against a ghost finger.
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        self.touch_positions.remove(&touch.id);
                        Some(InputEvent::TouchEnded { id: touch.id })
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position: (f64, f64) = position.to_owned().into();
                let position = Point2::from(position) / scale_factor;
                let previous = self.cursor_position.replace(position);

                if self.mouse_pressed {
                    let previous = previous?;
                    Some(InputEvent::MouseMoved {
                        position,
                        delta: position - previous,
                    })
                } else {
                    None
                }
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => match state {
                ElementState::Pressed => {
                    // No press without a known cursor position.
                    let position = self.cursor_position?;
                    self.mouse_pressed = true;
                    Some(InputEvent::MousePressed { position })
                }
                ElementState::Released => {
                    self.mouse_pressed = false;
                    Some(InputEvent::MouseReleased)
                }
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let vertical = match delta {
                    MouseScrollDelta::LineDelta(_horizontal, vertical) => *vertical as f64,
                    MouseScrollDelta::PixelDelta(winit::dpi::PhysicalPosition {
                        y: scroll, ..
                    }) => *scroll,
                };

                if vertical > 0.0 {
                    Some(InputEvent::WheelUp)
                } else if vertical < 0.0 {
                    Some(InputEvent::WheelDown)
                } else {
                    None
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        logical_key,
                        ..
                    },
                ..
            } => match logical_key.as_ref() {
                Key::Character("i") | Key::Character("+") => Some(InputEvent::WheelUp),
                Key::Character("k") | Key::Character("-") => Some(InputEvent::WheelDown),
                _ => None,
            },
            _ => None,
        }
    }

    /// Queries the window for its current logical size, for hosts without
    /// their own resize notification path.
    pub fn sync_viewport(&self, window: &Window, controller: &mut CameraController) {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();

        if let Some(viewport) = ViewportSize::new(
            size.width as f64 / scale_factor,
            size.height as f64 / scale_factor,
        ) {
            controller.set_viewport_size(viewport);
        }
    }
}
