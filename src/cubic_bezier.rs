use super::NativeFloat;
use super::point::Point2;
use super::line::LineSegment;

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier {
    pub(crate) start: Point2,
    pub(crate) ctrl1: Point2,
    pub(crate) ctrl2: Point2,
    pub(crate) end: Point2,
}

impl CubicBezier {
    pub fn new(start: Point2, ctrl1: Point2, ctrl2: Point2, end: Point2) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn control_points(&self) -> [Point2; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Evaluate the curve at t by direct evaluation of the polynomial, one axis at a time
    pub fn eval(&self, t: NativeFloat) -> Point2 {
        Point2::new(self.axis(t, 0), self.axis(t, 1))
    }

    /// Evaluate a CubicBezier curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: NativeFloat) -> Point2 {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }

    /// Sample the coordinate at 'axis' (0 -> x, 1 -> y) of the curve at t
    pub fn axis(&self, t: NativeFloat, axis: usize) -> NativeFloat {
        let component = |p: Point2| if axis == 0 { p.x } else { p.y };
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        one_t3 * component(self.start)
            + 3.0 * one_t2 * t * component(self.ctrl1)
            + 3.0 * one_t * t2 * component(self.ctrl2)
            + t3 * component(self.end)
    }

    pub fn baseline(&self) -> LineSegment {
        LineSegment::new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn endpoints_are_interpolated() {
        let bezier = CubicBezier::new(
            Point2::new(100.0, 100.0),
            Point2::new(150.0, 400.0),
            Point2::new(500.0, 350.0),
            Point2::new(450.0, 125.0),
        );
        assert_eq!(bezier.eval(0.0), bezier.baseline().start());
        assert_eq!(bezier.eval(1.0), bezier.baseline().end());
    }

    #[test]
    fn symmetric_arch_midpoint() {
        let bezier = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
        );
        assert_eq!(bezier.eval(0.5), Point2::new(5.0, 7.5));
    }

    #[test]
    fn circle_approximation_error() {
        // define closure for unit circle
        let circle = |p: Point2| -> f64 { p.squared_length().sqrt() - 1f64 };

        // control points are chosen for minimum radial distance error
        // according to: http://spencermortensen.com/articles/bezier-circle/
        let c = 0.551915024494;
        let max_drift_perc = 0.019608; // radial drift percent
        let max_error = max_drift_perc * 0.01; // absolute max radial error

        let bezier_quadrant_1 = CubicBezier::new(
            Point2::new(0f64, 1f64),
            Point2::new(c, 1f64),
            Point2::new(1f64, c),
            Point2::new(1f64, 0f64),
        );
        let nsteps = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let contour = circle(bezier_quadrant_1.eval(t));
            assert!(contour.abs() <= max_error);
        }
    }

    #[test]
    fn eval_equivalence_casteljau() {
        // all eval methods should be approximately equivalent for well defined test cases
        let bezier = CubicBezier::new(
            Point2::new(0f64, 1.77f64),
            Point2::new(1.1f64, -1f64),
            Point2::new(4.3f64, 3f64),
            Point2::new(3.2f64, -4f64),
        );

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let p1 = bezier.eval(t);
            let p2 = bezier.eval_casteljau(t);
            let err = p2 - p1;
            assert!(err.squared_length() < EPSILON);
        }
    }
}
