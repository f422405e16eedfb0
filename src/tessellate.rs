//! Conversion of shapes into straight line segments.
//!
//! Every function here is pure: the same input always yields a bit-identical
//! [`Tessellation`]. Curves take a [`Resolution`], which cannot be zero, so no
//! validation is needed once one has been constructed.

use core::slice;

use log::trace;
use num_traits::FloatConst;
use tinyvec::TinyVec;

use super::NativeFloat;
use super::bounding_box::BoundingBox;
use super::cubic_bezier::CubicBezier;
use super::line::LineSegment;
use super::point::Point2;
use super::resolution::Resolution;

/// Ordered line segments approximating a shape, plus the points the shape was sampled at.
///
/// `points` are the vertices a renderer marks when vertex display is on. Plain lines and
/// paths carry no points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tessellation {
    segments: TinyVec<[LineSegment; 4]>,
    points: TinyVec<[Point2; 4]>,
}

impl Tessellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn iter(&self) -> slice::Iter<'_, LineSegment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn push_segment(&mut self, start: Point2, end: Point2) {
        self.segments.push(LineSegment::new(start, end));
    }
}

impl<'a> IntoIterator for &'a Tessellation {
    type Item = &'a LineSegment;
    type IntoIter = slice::Iter<'a, LineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Closed outline left_bottom -> left_top -> right_top -> right_bottom -> left_bottom.
/// The four corners are returned as points in the same order.
pub fn rectangle(left_bottom: Point2, right_top: Point2) -> Tessellation {
    let bbox = BoundingBox::new(left_bottom, right_top);
    let corners = [
        left_bottom,
        bbox.left_top(),
        right_top,
        bbox.right_bottom(),
    ];
    let mut tessellation = closed_polygon(&corners);
    tessellation.points.extend(corners);
    trace!("tessellated rectangle {:?} -> {:?}", left_bottom, right_top);
    tessellation
}

/// Approximates the circle by `n` chords between samples at phi = i * 2π/n.
/// The last chord ends on the first sample, so the polygon is closed exactly.
pub fn circle(center: Point2, radius: NativeFloat, n: Resolution) -> Tessellation {
    let step = NativeFloat::TAU() / n.as_float();
    let samples: TinyVec<[Point2; 4]> = (0..n.get())
        .map(|i| Point2::from_polar(center, radius, i as NativeFloat * step))
        .collect();

    let mut tessellation = closed_polygon(&samples);
    tessellation.points = samples;
    trace!(
        "tessellated circle at {:?} r={} into {} segments",
        center,
        radius,
        n.get()
    );
    tessellation
}

/// Approximates the curve by `n` chords between B(i/n) and B((i+1)/n).
/// Points are the four control points followed by the interior samples B(i/n), 0 < i < n.
pub fn bezier(curve: &CubicBezier, n: Resolution) -> Tessellation {
    let steps = n.get();
    let mut tessellation = Tessellation::new();
    tessellation.points.extend(curve.control_points());

    let mut a = curve.eval(0.0);
    for i in 0..steps {
        let t = (i + 1) as NativeFloat / n.as_float();
        let b = curve.eval(t);
        tessellation.push_segment(a, b);
        if i != 0 {
            tessellation.points.push(a);
        }
        a = b;
    }
    trace!("tessellated cubic bezier into {} segments", steps);
    tessellation
}

/// A single segment between two points
pub fn line(start: Point2, end: Point2) -> Tessellation {
    let mut tessellation = Tessellation::new();
    tessellation.push_segment(start, end);
    tessellation
}

/// Open polyline through `points`. Fewer than two points produce nothing.
pub fn path(points: &[Point2]) -> Tessellation {
    let mut tessellation = Tessellation::new();
    for pair in points.windows(2) {
        tessellation.push_segment(pair[0], pair[1]);
    }
    tessellation
}

/// Square outline of side `width` centred on `center`, used to highlight a vertex
pub fn vertex_marker(center: Point2, width: NativeFloat) -> Tessellation {
    let half = width / 2.0;
    closed_polygon(&[
        center.translate(-half, -half),
        center.translate(-half, half),
        center.translate(half, half),
        center.translate(half, -half),
    ])
}

fn closed_polygon(vertices: &[Point2]) -> Tessellation {
    let mut tessellation = Tessellation::new();
    for (i, &start) in vertices.iter().enumerate() {
        tessellation.push_segment(start, vertices[(i + 1) % vertices.len()]);
    }
    tessellation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    fn res(n: i64) -> Resolution {
        Resolution::new(n).unwrap()
    }

    fn assert_close(a: Point2, b: Point2) {
        assert!((a - b).squared_length() < EPSILON, "{:?} != {:?}", a, b);
    }

    #[test]
    fn rectangle_corner_order() {
        let rect = rectangle(Point2::new(0.0, 0.0), Point2::new(4.0, 2.0));
        let corners = [
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(4.0, 2.0),
            Point2::new(4.0, 0.0),
        ];
        assert_eq!(rect.points(), &corners);
        assert_eq!(rect.len(), 4);
        for (i, segment) in rect.iter().enumerate() {
            assert_eq!(segment.start(), corners[i]);
            assert_eq!(segment.end(), corners[(i + 1) % 4]);
        }
    }

    #[test]
    fn circle_four_samples() {
        let circle = circle(Point2::new(0.0, 0.0), 10.0, res(4));
        let expected = [
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(-10.0, 0.0),
            Point2::new(0.0, -10.0),
        ];
        assert_eq!(circle.len(), 4);
        assert_eq!(circle.points().len(), 4);
        for (i, segment) in circle.iter().enumerate() {
            assert_close(segment.start(), expected[i]);
            assert_close(segment.end(), expected[(i + 1) % 4]);
        }
        // closing chord reuses the first sample
        assert_eq!(circle.segments()[3].end(), circle.points()[0]);
    }

    #[test]
    fn circle_samples_on_radius() {
        let center = Point2::new(300.0, 250.0);
        for n in 3..40 {
            let circle = circle(center, 100.0, res(n));
            let step = NativeFloat::TAU() / n as NativeFloat;
            for (i, p) in circle.points().iter().enumerate() {
                assert!((p.distance(center) - 100.0).abs() < 1e-9);
                let d = *p - center;
                let phi = d.y.atan2(d.x).rem_euclid(NativeFloat::TAU());
                let expected = (i as NativeFloat * step).rem_euclid(NativeFloat::TAU());
                let diff = (phi - expected).abs();
                assert!(diff < 1e-9 || (diff - NativeFloat::TAU()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn single_segment_circle_degenerates() {
        let circle = circle(Point2::new(1.0, 1.0), 2.0, res(1));
        assert_eq!(circle.len(), 1);
        assert_eq!(circle.segments()[0].start(), circle.segments()[0].end());
    }

    #[test]
    fn bezier_midpoint_sample() {
        let curve = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
        );
        let bezier = bezier(&curve, res(2));
        assert_eq!(bezier.len(), 2);
        assert_eq!(bezier.segments()[0].end(), Point2::new(5.0, 7.5));
        // control points first, then the single interior sample
        assert_eq!(bezier.points().len(), 5);
        assert_eq!(&bezier.points()[..4], &curve.control_points());
        assert_eq!(bezier.points()[4], Point2::new(5.0, 7.5));
    }

    #[test]
    fn bezier_is_continuous_and_hits_endpoints() {
        let curve = CubicBezier::new(
            Point2::new(100.0, 100.0),
            Point2::new(150.0, 400.0),
            Point2::new(500.0, 350.0),
            Point2::new(450.0, 125.0),
        );
        for n in 1..50 {
            let bezier = bezier(&curve, res(n));
            let segments = bezier.segments();
            assert_eq!(segments.len(), n as usize);
            assert_eq!(bezier.points().len(), 4 + n as usize - 1);
            assert_close(segments[0].start(), curve.start);
            assert_close(segments[segments.len() - 1].end(), curve.end);
            for pair in segments.windows(2) {
                assert_eq!(pair[0].end(), pair[1].start());
            }
        }
    }

    #[test]
    fn tessellation_is_deterministic() {
        let curve = CubicBezier::new(
            Point2::new(0.0, 1.77),
            Point2::new(1.1, -1.0),
            Point2::new(4.3, 3.0),
            Point2::new(3.2, -4.0),
        );
        assert_eq!(bezier(&curve, res(17)), bezier(&curve, res(17)));
        let center = Point2::new(3.0, -2.0);
        assert_eq!(circle(center, 7.5, res(33)), circle(center, 7.5, res(33)));
    }

    #[test]
    fn path_and_line() {
        assert!(path(&[]).is_empty());
        assert!(path(&[Point2::new(1.0, 1.0)]).is_empty());

        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 1.0),
        ];
        let polyline = path(&points);
        assert_eq!(polyline.len(), 2);
        assert!(polyline.points().is_empty());
        assert_eq!(polyline.segments()[1], LineSegment::new(points[1], points[2]));

        let single = line(points[0], points[2]);
        assert_eq!(single.segments(), &[LineSegment::new(points[0], points[2])]);
    }

    #[test]
    fn vertex_marker_square() {
        let marker = vertex_marker(Point2::new(10.0, 10.0), 5.0);
        assert_eq!(marker.len(), 4);
        assert_eq!(marker.segments()[0].start(), Point2::new(7.5, 7.5));
        assert_eq!(marker.segments()[1].start(), Point2::new(7.5, 12.5));
        assert_eq!(marker.segments()[2].start(), Point2::new(12.5, 12.5));
        assert_eq!(marker.segments()[3].start(), Point2::new(12.5, 7.5));
        assert_eq!(marker.segments()[3].end(), Point2::new(7.5, 7.5));
        for segment in &marker {
            assert!((segment.length() - 5.0).abs() < EPSILON);
        }
    }
}
