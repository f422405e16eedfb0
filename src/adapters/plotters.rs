//! Plotters adapter.
//!
//! Enable this adapter with the `plotters` feature to render onto any
//! `plotters::drawing::DrawingArea`, e.g. an SVG or bitmap backend.
//!
//! # Example
//! ```rust,no_run
//! use plotters::prelude::*;
//! use strokeslide::{PlottersDrawer, RenderConfig, Renderer};
//!
//! let root = SVGBackend::new("slide.svg", (800, 600)).into_drawing_area();
//! let mut renderer = Renderer::new(PlottersDrawer::new(root), RenderConfig::default());
//! renderer.select_slide(3).unwrap();
//! renderer.drawer_mut().present().unwrap();
//! ```
//!
//! Points map straight to pixel coordinates, rounded to the nearest pixel.

use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::element::PathElement;
use plotters::prelude::DrawingBackend;
use plotters::style::{Color as _, RGBAColor, WHITE};

use crate::color::Color;
use crate::drawer::LineDrawer;
use crate::point::Point2;

/// A [`LineDrawer`] stroking 1 px lines onto a plotters drawing area.
pub struct PlottersDrawer<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
}

impl<DB: DrawingBackend> PlottersDrawer<DB> {
    pub fn new(area: DrawingArea<DB, Shift>) -> Self {
        PlottersDrawer { area }
    }

    pub fn area(&self) -> &DrawingArea<DB, Shift> {
        &self.area
    }

    /// Flushes everything drawn so far to the backend
    pub fn present(&self) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        self.area.present()
    }
}

fn pixel(p: Point2) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

impl From<Color> for RGBAColor {
    fn from(c: Color) -> Self {
        RGBAColor(c.r, c.g, c.b, c.alpha())
    }
}

impl<DB> LineDrawer for PlottersDrawer<DB>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    type Error = DrawingAreaErrorKind<DB::ErrorType>;

    fn draw_segment(&mut self, start: Point2, end: Point2, color: Color) -> Result<(), Self::Error> {
        let style = RGBAColor::from(color).stroke_width(1);
        self.area
            .draw(&PathElement::new(vec![pixel(start), pixel(end)], style))
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.area.fill(&WHITE)
    }
}
