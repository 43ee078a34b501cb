//! Unit-safe scalar wrappers.
//!
//! A bare `f32` holding an angle is ambiguous: is it degrees or radians?
//! The same goes for distances ("elevation" can be an altitude or an angle).
//! These newtypes carry the unit in the type so an API documents itself and
//! a caller cannot pass the wrong representation by accident.
//!
//! Conversions are explicit, via `From` impls or the named methods, and are
//! total: every finite input maps to a finite output and NaN/Inf propagate
//! per IEEE-754 with no special casing.
//!
//! # Usage
//!
//! ```rust
//! use m3d_math::{Degrees, Feet, Metres, Radians};
//!
//! let rad: Radians = Degrees(90.0).into();
//! assert!((rad.0 - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
//!
//! let ft: Feet = Metres(10.0).to_feet();
//! assert!((ft.0 - 32.8084).abs() < 1e-3);
//! ```

/// Degrees to radians factor (pi / 180).
pub const DEG_TO_RAD: f32 = 0.01745329251;

/// Radians to degrees factor (180 / pi).
pub const RAD_TO_DEG: f32 = 57.2957795131;

/// Metres to international feet factor.
pub const METRES_TO_FEET: f32 = 3.2808398950131;

/// International feet to metres factor.
pub const FEET_TO_METRES: f32 = 0.3048;

/// An angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Degrees(pub f32);

/// An angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Radians(pub f32);

/// A distance in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Metres(pub f32);

/// A distance in international feet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Feet(pub f32);

impl Degrees {
    /// Converts to radians.
    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(self.0 * DEG_TO_RAD)
    }
}

impl Radians {
    /// Converts to degrees.
    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 * RAD_TO_DEG)
    }
}

impl Metres {
    /// Converts to international feet.
    #[inline]
    pub fn to_feet(self) -> Feet {
        Feet(self.0 * METRES_TO_FEET)
    }
}

impl Feet {
    /// Converts to metres.
    #[inline]
    pub fn to_metres(self) -> Metres {
        Metres(self.0 * FEET_TO_METRES)
    }
}

impl From<Degrees> for Radians {
    #[inline]
    fn from(d: Degrees) -> Radians {
        d.to_radians()
    }
}

impl From<Radians> for Degrees {
    #[inline]
    fn from(r: Radians) -> Degrees {
        r.to_degrees()
    }
}

impl From<Metres> for Feet {
    #[inline]
    fn from(m: Metres) -> Feet {
        m.to_feet()
    }
}

impl From<Feet> for Metres {
    #[inline]
    fn from(f: Feet) -> Metres {
        f.to_metres()
    }
}

/// A 3D set of per-axis rotations.
///
/// Composed by [`Mat4::from_rotation`](crate::Mat4::from_rotation) in the
/// fixed order `Rx * Ry * Rz`. The order is part of the contract: changing it
/// changes the net transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    /// Rotation about the x axis.
    pub x: Degrees,
    /// Rotation about the y axis.
    pub y: Degrees,
    /// Rotation about the z axis.
    pub z: Degrees,
}

impl Rotation {
    /// Creates a rotation triple from per-axis angles in degrees.
    #[inline]
    pub const fn new(x: Degrees, y: Degrees, z: Degrees) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degrees_radians_roundtrip() {
        let deg = Degrees(15.0);
        let back: Degrees = Radians::from(deg).into();
        assert_relative_eq!(back.0, 15.0, max_relative = 1e-5);
    }

    #[test]
    fn test_metres_feet_roundtrip() {
        let m = Metres(10.0);
        let back: Metres = Feet::from(m).into();
        assert_relative_eq!(back.0, 10.0, max_relative = 1e-5);
    }

    #[test]
    fn test_known_conversions() {
        assert_relative_eq!(
            Degrees(180.0).to_radians().0,
            std::f32::consts::PI,
            max_relative = 1e-5
        );
        assert_relative_eq!(Feet(1.0).to_metres().0, 0.3048, max_relative = 1e-6);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(Degrees(f32::NAN).to_radians().0.is_nan());
        assert!(Metres(f32::INFINITY).to_feet().0.is_infinite());
    }
}
