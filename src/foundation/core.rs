use std::ops::{Add, AddAssign, Neg, Sub};

pub use kurbo::{BezPath, Point, Size, Vec2};

/// Rotational quantity, stored in degrees.
///
/// Angles follow the canvas convention: `0°` points along +x and positive angles turn clockwise
/// on screen (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// Zero rotation.
    pub const ZERO: Self = Self::from_degrees(0.0);
    /// A full turn.
    pub const FULL_TURN: Self = Self::from_degrees(360.0);
    /// Twelve o'clock; the start of every glyph.
    pub const TWELVE_O_CLOCK: Self = Self::from_degrees(-90.0);

    /// Construct from degrees.
    pub const fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    /// Construct from radians.
    pub fn from_radians(radians: f64) -> Self {
        Self {
            degrees: radians_to_degrees(radians),
        }
    }

    /// Degree view.
    pub fn degrees(self) -> f64 {
        self.degrees
    }

    /// Radian view.
    pub fn radians(self) -> f64 {
        degrees_to_radians(self.degrees)
    }

    /// Absolute sweep of this angle.
    pub fn abs(self) -> Self {
        Self::from_degrees(self.degrees.abs())
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_degrees(self.degrees + rhs.degrees)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.degrees += rhs.degrees;
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_degrees(self.degrees - rhs.degrees)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_degrees(-self.degrees)
    }
}

/// Convert degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Convert radians to degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    (radians * 180.0) / std::f64::consts::PI
}

/// Point at `angle` on the circle of `radius` around `center`.
pub fn point_on_circle(center: Point, angle: Angle, radius: f64) -> Point {
    center + Vec2::from_angle(angle.radians()) * radius
}

/// Length of an arc of `radius` spanning `sweep`.
///
/// Negative sweeps yield negative lengths; callers wanting a weight take the absolute value.
pub fn arc_length(radius: f64, sweep: Angle) -> f64 {
    radius * sweep.radians()
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiply the color channels by alpha.
    pub fn premultiplied(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
