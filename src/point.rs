use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::NativeFloat;

/// A point in the drawing plane.
/// Points are plain values without identity, every operation returns a new Point2.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2 {
    pub x: NativeFloat,
    pub y: NativeFloat,
}

impl Point2 {
    pub const fn new(x: NativeFloat, y: NativeFloat) -> Self {
        Point2 { x, y }
    }

    /// Returns the point halfway between self and other
    pub fn midpoint(self, other: Point2) -> Point2 {
        Point2 {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Returns a copy of the point moved by (tx, ty)
    pub fn translate(self, tx: NativeFloat, ty: NativeFloat) -> Point2 {
        Point2 {
            x: self.x + tx,
            y: self.y + ty,
        }
    }

    /// Converts the polar coordinates (radius, phi) around `center` to a cartesian point.
    /// phi is given in radians, counted from the positive x axis.
    pub fn from_polar(center: Point2, radius: NativeFloat, phi: NativeFloat) -> Point2 {
        let (sin, cos) = Float::sin_cos(phi);
        Point2 {
            x: center.x + radius * cos,
            y: center.y + radius * sin,
        }
    }

    /// Interprets the Point2 as a vector and returns its squared norm
    pub fn squared_length(&self) -> NativeFloat {
        self.x * self.x + self.y * self.y
    }

    /// Returns the euclidean distance between self and other
    pub fn distance(&self, other: Point2) -> NativeFloat {
        Float::sqrt((*self - other).squared_length())
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, other: Point2) -> Point2 {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<NativeFloat> for Point2 {
    type Output = Point2;

    fn mul(self, rhs: NativeFloat) -> Point2 {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl From<(NativeFloat, NativeFloat)> for Point2 {
    fn from((x, y): (NativeFloat, NativeFloat)) -> Self {
        Point2 { x, y }
    }
}

impl From<Point2> for (NativeFloat, NativeFloat) {
    fn from(p: Point2) -> Self {
        (p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn midpoint_is_equidistant() {
        let a = Point2::new(0.0, 1.77);
        let b = Point2::new(4.3, 3.0);
        let mid = a.midpoint(b);
        assert!((mid.distance(a) - mid.distance(b)).abs() < EPSILON);
        assert!((mid - Point2::new(2.15, 2.385)).squared_length() < EPSILON);
    }

    #[test]
    fn translate_leaves_original() {
        let a = Point2::new(100.0, 100.0);
        let b = a.translate(100.0, 0.0);
        assert_eq!(a, Point2::new(100.0, 100.0));
        assert_eq!(b, Point2::new(200.0, 100.0));
    }

    #[test]
    fn polar_quadrants() {
        let center = Point2::new(300.0, 250.0);
        let east = Point2::from_polar(center, 100.0, 0.0);
        let north = Point2::from_polar(center, 100.0, FRAC_PI_2);
        let west = Point2::from_polar(center, 100.0, PI);
        assert!((east - Point2::new(400.0, 250.0)).squared_length() < EPSILON);
        assert!((north - Point2::new(300.0, 350.0)).squared_length() < EPSILON);
        assert!((west - Point2::new(200.0, 250.0)).squared_length() < EPSILON);
    }

    /// Check whether classic pythagorean equality holds for sides 3, 4 with hypothenuse 5
    #[test]
    fn pythagorean_distance() {
        let p = Point2::new(0.0, 4.0);
        let q = Point2::new(3.0, 0.0);
        assert!((p.distance(q) - 5.0).abs() < EPSILON);
        assert_eq!(((q - p) * 2.0).squared_length(), 100.0);
    }
}
