use cgmath::Vector2;

/// Logical-pixel extent of the host viewport. Parameterizes scroll-limit
/// clamping, so a zero or non-finite size is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    width: f64,
    height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Option<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return None;
        }

        Some(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn extent(&self) -> Vector2<f64> {
        Vector2::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Vector2;

    use super::*;

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(ViewportSize::new(0.0, 100.0).is_none());
        assert!(ViewportSize::new(100.0, 0.0).is_none());
        assert!(ViewportSize::new(-1.0, 100.0).is_none());
        assert!(ViewportSize::new(f64::NAN, 100.0).is_none());
        assert!(ViewportSize::new(100.0, f64::INFINITY).is_none());
        assert!(ViewportSize::new(800.0, 600.0).is_some());
    }

    #[test]
    fn extent_matches_dimensions() {
        let size = ViewportSize::new(800.0, 600.0).unwrap();
        assert_eq!(size.width(), 800.0);
        assert_eq!(size.height(), 600.0);
        assert_eq!(size.extent(), Vector2::new(800.0, 600.0));
    }
}
