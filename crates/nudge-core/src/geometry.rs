#![forbid(unsafe_code)]

//! Geometric primitives for pointer input.
//!
//! Coordinates are CSS-style pixels with the origin at the top-left; `y`
//! grows downward, so a negative `dy` is an upward movement.

/// A position reported by the platform, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to `self`.
    #[inline]
    #[must_use]
    pub fn offset_from(self, origin: Self) -> Offset {
        Offset::new(self.x - origin.x, self.y - origin.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// The axis a displacement is mostly along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A 2D displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    /// The zero displacement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Create a new offset.
    #[inline]
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length of the displacement.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f32 {
        self.dx.hypot(self.dy)
    }

    /// Axis with the larger absolute component. Horizontal wins ties.
    #[inline]
    #[must_use]
    pub fn dominant_axis(self) -> Axis {
        if self.dx.abs() >= self.dy.abs() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Absolute displacement along the dominant axis.
    #[inline]
    #[must_use]
    pub fn dominant_extent(self) -> f32 {
        self.dx.abs().max(self.dy.abs())
    }

    /// Whether there is no movement at all.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Scale displacement beyond `max` by `factor`, so the visual offset grows
/// sub-linearly past the cap. The sign of `raw` is preserved.
///
/// ```
/// use nudge_core::geometry::apply_resistance;
///
/// assert!((apply_resistance(200.0, 120.0, 0.3) - 144.0).abs() < 1e-3);
/// assert_eq!(apply_resistance(-60.0, 120.0, 0.3), -60.0);
/// ```
#[must_use]
pub fn apply_resistance(raw: f32, max: f32, factor: f32) -> f32 {
    let magnitude = raw.abs();
    if magnitude <= max {
        return raw;
    }
    let damped = max + (magnitude - max) * factor;
    damped.copysign(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_from_origin() {
        let offset = Point::new(100.0, 40.0).offset_from(Point::new(100.0, 100.0));
        assert_eq!(offset, Offset::new(0.0, -60.0));
    }

    #[test]
    fn magnitude_is_euclidean() {
        assert_eq!(Offset::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Offset::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn horizontal_wins_ties() {
        assert_eq!(Offset::new(30.0, -30.0).dominant_axis(), Axis::Horizontal);
        assert_eq!(Offset::new(0.0, 0.0).dominant_axis(), Axis::Horizontal);
        assert_eq!(Offset::new(-5.0, 6.0).dominant_axis(), Axis::Vertical);
    }

    #[test]
    fn dominant_extent_uses_absolute_values() {
        assert_eq!(Offset::new(-70.0, 20.0).dominant_extent(), 70.0);
        assert_eq!(Offset::new(10.0, -90.0).dominant_extent(), 90.0);
    }

    #[test]
    fn resistance_below_cap_is_identity() {
        assert_eq!(apply_resistance(120.0, 120.0, 0.3), 120.0);
        assert_eq!(apply_resistance(-119.0, 120.0, 0.3), -119.0);
    }

    #[test]
    fn resistance_past_cap_is_damped() {
        let offset = apply_resistance(200.0, 120.0, 0.3);
        assert!((offset - 144.0).abs() < 1e-4);
        let offset = apply_resistance(-200.0, 120.0, 0.3);
        assert!((offset + 144.0).abs() < 1e-4);
    }

    #[test]
    fn zero_factor_pins_at_cap() {
        assert_eq!(apply_resistance(500.0, 120.0, 0.0), 120.0);
    }
}
