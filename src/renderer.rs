//! Slide dispatch and the configuration the UI forwards into it.
//!
//! A [`Renderer`] owns its [`LineDrawer`] and a [`RenderConfig`]. Every setter
//! validates its input first, then stores it and redraws the current slide from
//! scratch. Rejected input changes nothing and draws nothing.

use log::{debug, warn};

use super::NativeFloat;
use super::bounding_box::BoundingBox;
use super::color::Color;
use super::cubic_bezier::CubicBezier;
use super::drawer::LineDrawer;
use super::error::RenderError;
use super::glyph::layout_word;
use super::point::Point2;
use super::resolution::Resolution;
use super::slide::Slide;
use super::tessellate::{self, Tessellation};

/// Rendering settings shared by every shape of a pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    /// Segments per circle or Bezier curve
    pub resolution: Resolution,
    /// Mark every vertex with a small square
    pub show_points: bool,
    /// Side length of a vertex marker
    pub vertex_width: NativeFloat,
    pub vertex_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            resolution: Resolution::DEFAULT,
            show_points: false,
            vertex_width: 5.0,
            vertex_color: Color::BLACK,
        }
    }
}

/// Draws slides onto a [`LineDrawer`].
#[derive(Debug)]
pub struct Renderer<D: LineDrawer> {
    drawer: D,
    config: RenderConfig,
    slide: Slide,
}

type Result<T, D> = core::result::Result<T, RenderError<<D as LineDrawer>::Error>>;

impl<D: LineDrawer> Renderer<D> {
    /// Creates a renderer showing the first slide. Nothing is drawn until a setter or
    /// [`redraw`](Renderer::redraw) is called.
    pub fn new(drawer: D, config: RenderConfig) -> Self {
        Renderer {
            drawer,
            config,
            slide: Slide::default(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn slide(&self) -> Slide {
        self.slide
    }

    pub fn drawer(&self) -> &D {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut D {
        &mut self.drawer
    }

    pub fn into_drawer(self) -> D {
        self.drawer
    }

    /// Changes the number of segments per curve and redraws.
    pub fn set_curve_resolution(&mut self, n: i64) -> Result<(), D> {
        let resolution = match Resolution::new(n) {
            Ok(resolution) => resolution,
            Err(err) => {
                warn!("rejected curve resolution {}", n);
                return Err(err.into());
            }
        };
        debug!("curve resolution {} -> {}", self.config.resolution.get(), n);
        self.config.resolution = resolution;
        self.redraw()
    }

    /// Toggles vertex markers and redraws.
    pub fn set_show_points(&mut self, flag: bool) -> Result<(), D> {
        debug!("show points: {}", flag);
        self.config.show_points = flag;
        self.redraw()
    }

    /// Switches to the slide at `index` and draws it.
    pub fn select_slide(&mut self, index: i64) -> Result<(), D> {
        let Some(slide) = Slide::from_index(index) else {
            warn!("rejected slide index {}", index);
            return Err(RenderError::InvalidSlideIndex(index));
        };
        self.slide = slide;
        self.redraw()
    }

    /// Clears the surface and draws the current slide again.
    pub fn redraw(&mut self) -> Result<(), D> {
        debug!(
            "drawing slide {} ({:?}) at resolution {}",
            self.slide.index(),
            self.slide,
            self.config.resolution.get()
        );
        self.drawer.clear().map_err(RenderError::Surface)?;

        match self.slide {
            Slide::Rectangle => self.draw_rectangle(
                Point2::new(500.0, 200.0),
                Point2::new(670.0, 500.0),
                Color::RED,
            ),
            Slide::Circle => self.draw_circle(Point2::new(300.0, 250.0), 100.0, Color::RED),
            Slide::Bezier => self.draw_bezier(
                &CubicBezier::new(
                    Point2::new(100.0, 100.0),
                    Point2::new(150.0, 400.0),
                    Point2::new(500.0, 350.0),
                    Point2::new(450.0, 125.0),
                ),
                Color::GREEN,
            ),
            Slide::Word => self.draw_word(
                "Mike",
                BoundingBox::from_size(Point2::new(100.0, 100.0), 100.0, 200.0),
                Color::BLUE,
            ),
        }
    }

    pub fn draw_rectangle(&mut self, left_bottom: Point2, right_top: Point2, color: Color) -> Result<(), D> {
        self.emit(&tessellate::rectangle(left_bottom, right_top), color)
    }

    pub fn draw_circle(&mut self, center: Point2, radius: NativeFloat, color: Color) -> Result<(), D> {
        let circle = tessellate::circle(center, radius, self.config.resolution);
        self.emit(&circle, color)
    }

    pub fn draw_bezier(&mut self, curve: &CubicBezier, color: Color) -> Result<(), D> {
        let bezier = tessellate::bezier(curve, self.config.resolution);
        self.emit(&bezier, color)
    }

    /// Draws `text` one glyph box after another, starting in `first`.
    /// Fails without drawing if any character has no glyph.
    pub fn draw_word(&mut self, text: &str, first: BoundingBox, color: Color) -> Result<(), D> {
        let word = layout_word(text, first, self.config.resolution)?;
        for stroke in word.iter().flat_map(|strokes| strokes.iter()) {
            self.emit(stroke, color)?;
        }
        Ok(())
    }

    /// Strokes every segment, then marks the sampled points if enabled
    fn emit(&mut self, tessellation: &Tessellation, color: Color) -> Result<(), D> {
        for segment in tessellation {
            self.drawer
                .draw_segment(segment.start(), segment.end(), color)
                .map_err(RenderError::Surface)?;
        }
        if self.config.show_points {
            for &point in tessellation.points() {
                let marker = tessellate::vertex_marker(point, self.config.vertex_width);
                for segment in &marker {
                    self.drawer
                        .draw_segment(segment.start(), segment.end(), self.config.vertex_color)
                        .map_err(RenderError::Surface)?;
                }
            }
        }
        Ok(())
    }
}
