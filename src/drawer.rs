//! The drawing surface capability the renderer strokes segments onto.

use core::convert::Infallible;

use super::color::Color;
use super::line::LineSegment;
use super::point::Point2;

/// A surface that can stroke a straight line and erase itself.
///
/// Implement this for your canvas, image buffer or plotting backend.
/// Surfaces that cannot fail use [`Infallible`] as their error type.
pub trait LineDrawer {
    type Error: std::error::Error + 'static;

    /// Stroke a straight segment from `start` to `end`.
    fn draw_segment(&mut self, start: Point2, end: Point2, color: Color) -> Result<(), Self::Error>;

    /// Erase the whole surface.
    fn clear(&mut self) -> Result<(), Self::Error>;
}

impl<D: LineDrawer + ?Sized> LineDrawer for &mut D {
    type Error = D::Error;

    fn draw_segment(&mut self, start: Point2, end: Point2, color: Color) -> Result<(), Self::Error> {
        (**self).draw_segment(start, end, color)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        (**self).clear()
    }
}

/// One call received by a [`SegmentRecorder`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear,
    Segment { segment: LineSegment, color: Color },
}

/// In-memory drawer that records every call in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentRecorder {
    commands: Vec<DrawCommand>,
}

impl SegmentRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Segments drawn since the last clear
    pub fn visible(&self) -> impl Iterator<Item = (LineSegment, Color)> + '_ {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map_or(0, |i| i + 1);
        self.commands[start..].iter().filter_map(|c| match c {
            DrawCommand::Segment { segment, color } => Some((*segment, *color)),
            DrawCommand::Clear => None,
        })
    }

    /// Number of times the surface was cleared
    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| **c == DrawCommand::Clear)
            .count()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl LineDrawer for SegmentRecorder {
    type Error = Infallible;

    fn draw_segment(&mut self, start: Point2, end: Point2, color: Color) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Segment {
            segment: LineSegment::new(start, end),
            color,
        });
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }
}
