//! Optional adapters for external drawing surfaces.
//!
//! Enable feature flags (e.g. `plotters`) to add `LineDrawer` impls for
//! external canvas types.

#[cfg(feature = "plotters")]
pub mod plotters;
