//! Gesture configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration problems reported when a controller is set up. Events are
/// never validated at run time.
#[derive(Error, Debug, Clone, Copy)]
pub enum SettingsError {
    /// Bounds must be finite, positive and ordered
    #[error("zoom bounds are invalid: min {min}, max {max}")]
    InvalidZoomBounds { min: f64, max: f64 },
    #[error("zoom increment must be finite and positive, got {0}")]
    InvalidZoomIncrement(f64),
    #[error("mouse zoom increment must be finite and positive, got {0}")]
    InvalidMouseZoomIncrement(f64),
    #[error("zoom sensitivity must be finite and non-negative, got {0}")]
    InvalidZoomSensitivity(f64),
}

/// Tuning knobs for gesture recognition, immutable once a controller has
/// been built from them.
///
/// The zoom scalar is inverse magnification: larger values show more of the
/// world. "Zoom in" therefore means decreasing it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GestureSettings {
    /// Hard lower bound on the zoom scalar.
    pub min_zoom: f64,
    /// Hard upper bound on the zoom scalar.
    pub max_zoom: f64,
    /// Minimum travel, in logical pixels, before contact motion or a change
    /// in pinch distance is accepted rather than discarded as jitter.
    pub zoom_sensitivity: f64,
    /// Zoom step per recognized pinch distance change.
    pub zoom_increment: f64,
    /// Zoom step per wheel event.
    pub mouse_zoom_increment: f64,
    /// Whether a two-contact gesture may pan the camera while it zooms.
    pub move_while_zooming: bool,
    /// Whether mouse button, mouse motion and wheel events count as gesture
    /// input at all.
    pub handle_mouse_events: bool,
}

impl Default for GestureSettings {
    fn default() -> Self {
        GestureSettings {
            min_zoom: 0.5,
            max_zoom: 2.0,
            zoom_sensitivity: 10.0,
            zoom_increment: 0.1,
            mouse_zoom_increment: 0.1,
            move_while_zooming: true,
            handle_mouse_events: true,
        }
    }
}

impl GestureSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.min_zoom.is_finite()
            || !self.max_zoom.is_finite()
            || self.min_zoom <= 0.0
            || self.min_zoom > self.max_zoom
        {
            return Err(SettingsError::InvalidZoomBounds {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }

        if !self.zoom_increment.is_finite() || self.zoom_increment <= 0.0 {
            return Err(SettingsError::InvalidZoomIncrement(self.zoom_increment));
        }

        if !self.mouse_zoom_increment.is_finite() || self.mouse_zoom_increment <= 0.0 {
            return Err(SettingsError::InvalidMouseZoomIncrement(
                self.mouse_zoom_increment,
            ));
        }

        if !self.zoom_sensitivity.is_finite() || self.zoom_sensitivity < 0.0 {
            return Err(SettingsError::InvalidZoomSensitivity(self.zoom_sensitivity));
        }

        Ok(())
    }

    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.min(self.max_zoom).max(self.min_zoom)
    }
}
