use super::NativeFloat;
use super::point::Point2;

/// LineSegment defined by a start and an endpoint, evaluatable
/// anywhere inbetween using interpolation parameter t: [0,1] in eval().
/// This is the unit every tessellation is made of and what a LineDrawer strokes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineSegment {
    pub(crate) start: Point2,
    pub(crate) end: Point2,
}

impl LineSegment {
    pub fn new(start: Point2, end: Point2) -> Self {
        LineSegment { start, end }
    }

    pub fn start(&self) -> Point2 {
        self.start
    }

    pub fn end(&self) -> Point2 {
        self.end
    }

    pub fn eval(&self, t: NativeFloat) -> Point2 {
        self.start + (self.end - self.start) * t
    }

    pub fn length(&self) -> NativeFloat {
        self.start.distance(self.end)
    }
}
