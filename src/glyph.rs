//! Hand-built letter glyphs.
//!
//! Each glyph is a fixed template of lines and curves placed relative to the
//! center of its bounding box. There is no font machinery: only the letters
//! needed for the word slide exist.

use log::trace;
use tinyvec::TinyVec;

use super::NativeFloat;
use super::bounding_box::BoundingBox;
use super::cubic_bezier::CubicBezier;
use super::error::TessellationError;
use super::point::Point2;
use super::resolution::Resolution;
use super::tessellate::{self, Tessellation};

/// Radius of the dot on the `i`
const DOT_RADIUS: NativeFloat = 5.0;

/// Strokes making up one glyph, in drawing order
pub type Strokes = TinyVec<[Tessellation; 4]>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Glyph {
    M,
    I,
    K,
    E,
}

impl Glyph {
    /// Maps 'M', 'i', 'k' and 'e' to their glyph; case matters since the templates are for those exact shapes.
    pub fn from_char(c: char) -> Result<Glyph, TessellationError> {
        match c {
            'M' => Ok(Glyph::M),
            'i' => Ok(Glyph::I),
            'k' => Ok(Glyph::K),
            'e' => Ok(Glyph::E),
            other => Err(TessellationError::UnsupportedGlyph(other)),
        }
    }

    /// Builds the glyph's strokes inside `bbox`. `n` is the resolution of its curves.
    pub fn compose(&self, bbox: &BoundingBox, n: Resolution) -> Strokes {
        let lb = bbox.left_bottom;
        let rt = bbox.right_top;
        let center = bbox.center();
        // halfway between the baseline and the center
        let low = (lb.y + center.y) / 2.0;

        let mut strokes = Strokes::default();
        match self {
            Glyph::M => {
                strokes.push(tessellate::path(&[
                    lb,
                    Point2::new(lb.x, rt.y),
                    center,
                    rt,
                    Point2::new(rt.x, lb.y),
                ]));
            }
            Glyph::I => {
                strokes.push(tessellate::line(Point2::new(center.x, lb.y), center));
                let dot = center.midpoint(Point2::new(center.x, rt.y));
                strokes.push(tessellate::circle(dot, DOT_RADIUS, n));
            }
            Glyph::K => {
                let joint = Point2::new(lb.x, low);
                strokes.push(tessellate::line(lb, Point2::new(lb.x, rt.y)));
                strokes.push(tessellate::line(Point2::new(rt.x, lb.y), joint));
                strokes.push(tessellate::line(Point2::new(rt.x, center.y), joint));
            }
            Glyph::E => {
                let bar_left = Point2::new(lb.x, low);
                let bar_right = Point2::new(rt.x, low);
                let bottom = Point2::new(center.x, lb.y);
                let below_bar = (lb.y + low) / 2.0;

                strokes.push(tessellate::line(bar_left, bar_right));
                // bowl above the crossbar
                strokes.push(tessellate::bezier(
                    &CubicBezier::new(
                        bar_left,
                        Point2::new(lb.x, center.y),
                        Point2::new(rt.x, center.y),
                        bar_right,
                    ),
                    n,
                ));
                strokes.push(tessellate::bezier(
                    &CubicBezier::new(bar_left, Point2::new(lb.x, below_bar), lb, bottom),
                    n,
                ));
                strokes.push(tessellate::bezier(
                    &CubicBezier::new(
                        bottom,
                        Point2::new(rt.x, lb.y),
                        Point2::new(rt.x, lb.y),
                        Point2::new(rt.x, below_bar),
                    ),
                    n,
                ));
            }
        }
        trace!("composed {:?} in {:?}", self, bbox);
        strokes
    }
}

/// Hands out consecutive glyph boxes left to right, each advanced by the box width.
/// No kerning and no vertical offset.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphLayout {
    current: BoundingBox,
}

impl GlyphLayout {
    pub fn new(first: BoundingBox) -> Self {
        GlyphLayout { current: first }
    }

    pub fn advance(&self) -> NativeFloat {
        self.current.width()
    }
}

impl Iterator for GlyphLayout {
    type Item = BoundingBox;

    fn next(&mut self) -> Option<BoundingBox> {
        let bbox = self.current;
        self.current.translate(self.advance(), 0.0);
        Some(bbox)
    }
}

/// Composes `text` glyph by glyph starting in `first`.
/// Every character is validated before any geometry is built.
pub fn layout_word(
    text: &str,
    first: BoundingBox,
    n: Resolution,
) -> Result<Vec<Strokes>, TessellationError> {
    let glyphs = text
        .chars()
        .map(Glyph::from_char)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(glyphs
        .iter()
        .zip(GlyphLayout::new(first))
        .map(|(glyph, bbox)| glyph.compose(&bbox, n))
        .collect())
}
