use super::NativeFloat;
use super::point::Point2;

/// Axis aligned frame a shape or glyph is laid out in.
///
/// `left_bottom` is expected to be component-wise less or equal to `right_top`.
/// This is not checked; a flipped box simply yields mirrored geometry.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoundingBox {
    pub left_bottom: Point2,
    pub right_top: Point2,
}

impl BoundingBox {
    pub fn new(left_bottom: Point2, right_top: Point2) -> Self {
        BoundingBox {
            left_bottom,
            right_top,
        }
    }

    /// Box spanning `width` x `height` from `left_bottom`
    pub fn from_size(left_bottom: Point2, width: NativeFloat, height: NativeFloat) -> Self {
        BoundingBox {
            left_bottom,
            right_top: left_bottom.translate(width, height),
        }
    }

    pub fn left_top(&self) -> Point2 {
        Point2::new(self.left_bottom.x, self.right_top.y)
    }

    pub fn right_bottom(&self) -> Point2 {
        Point2::new(self.right_top.x, self.left_bottom.y)
    }

    pub fn center(&self) -> Point2 {
        self.left_bottom.midpoint(self.right_top)
    }

    pub fn width(&self) -> NativeFloat {
        self.right_top.x - self.left_bottom.x
    }

    pub fn height(&self) -> NativeFloat {
        self.right_top.y - self.left_bottom.y
    }

    /// Moves both corners by (tx, ty) in place
    pub fn translate(&mut self, tx: NativeFloat, ty: NativeFloat) {
        self.left_bottom = self.left_bottom.translate(tx, ty);
        self.right_top = self.right_top.translate(tx, ty);
    }
}
