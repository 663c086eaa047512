//! Dimension lines for technical drawings.
//!
//! A dimension line is a measurement indicator: a shaft between two points,
//! split around a centered label, with an arrowhead at each end.
//!
//! ```
//! use dimline::{DimensionLine, DimensionLineSpec, HeadStyle, LineRequest, SvgSurface};
//! use glam::dvec2;
//!
//! let dim = DimensionLine::new(DimensionLineSpec::new(std::f64::consts::FRAC_PI_8, 10.0, HeadStyle::OPEN));
//! let mut svg = SvgSurface::new();
//! dim.draw(&mut svg, &LineRequest::new(dvec2(35.0, 75.0), dvec2(25.0, 249.0), "12\"15/16"));
//! let doc = svg.finish(60.0, 300.0)?;
//! assert!(doc.contains("<text"));
//! # Ok::<(), miette::Report>(())
//! ```
//!
//! Drawing goes through the [`DrawingSurface`] trait. [`SvgSurface`] builds an
//! SVG document and [`RecordingSurface`] keeps a log of calls for inspection.

pub mod coerce;
pub mod defaults;
pub mod dimension;
pub mod errors;
pub mod head;
pub mod log;
pub mod surface;
pub mod svg;
pub mod types;

pub use dimension::{DimensionGeometry, DimensionLine, DimensionLineSpec, LineRequest, Palette, Segment};
pub use errors::{CoordError, DimensionError};
pub use head::{ArrowheadTriangle, HeadShape, HeadStyle, render_head};
pub use surface::{DrawOp, DrawingSurface, Paint, PaintedPath, PathCommand, RecordingSurface};
pub use svg::SvgSurface;
pub use types::{Color, CoordArg, TextAlign};
