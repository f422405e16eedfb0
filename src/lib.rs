//! Tessellation of a small fixed set of 2D shapes into straight line segments.
//!
//! Rectangles, circles, cubic Bezier curves and a handful of hand-built letter
//! glyphs are turned into [`Tessellation`]s (ordered segments plus the sample
//! points used) at a configurable [`Resolution`]. A [`Renderer`] feeds those
//! segments into any [`LineDrawer`] and switches between four fixed [`Slide`]s.
//!
//! ```rust
//! use strokeslide::{Point2, Resolution, SegmentRecorder, tessellate};
//!
//! let n = Resolution::new(4).unwrap();
//! let circle = tessellate::circle(Point2::new(0.0, 0.0), 10.0, n);
//! assert_eq!(circle.segments().len(), 4);
//!
//! let recorder = SegmentRecorder::new();
//! let mut renderer = strokeslide::Renderer::new(recorder, Default::default());
//! renderer.select_slide(1).unwrap();
//! ```

extern crate num_traits;
extern crate tinyvec;

pub mod adapters;
pub mod bounding_box;
pub mod color;
pub mod cubic_bezier;
pub mod drawer;
pub mod error;
pub mod glyph;
pub mod line;
pub mod point;
pub mod renderer;
pub mod resolution;
pub mod slide;
pub mod tessellate;

pub use bounding_box::BoundingBox;
pub use color::Color;
pub use cubic_bezier::CubicBezier;
pub use drawer::{DrawCommand, LineDrawer, SegmentRecorder};
pub use error::{RenderError, TessellationError};
pub use glyph::{layout_word, Glyph, GlyphLayout};
pub use line::LineSegment;
pub use point::Point2;
pub use renderer::{RenderConfig, Renderer};
pub use resolution::Resolution;
pub use slide::Slide;
pub use tessellate::Tessellation;

#[cfg(feature = "plotters")]
pub use adapters::plotters::PlottersDrawer;

/// Scalar type used for all coordinates
pub type NativeFloat = f64;

/// Absolute tolerance used when comparing computed coordinates
pub const EPSILON: NativeFloat = 1e-9;
