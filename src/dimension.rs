//! Dimension line layout and rendering.
//!
//! A dimension line is a shaft between two endpoints with a gap at its
//! midpoint for the label and an arrowhead at each end:
//!
//! ```text
//! <--------  12"15/16  -------->
//! ```

use std::f64::consts::PI;

use glam::{DVec2, dvec2};

use crate::coerce;
use crate::defaults;
use crate::errors::DimensionError;
use crate::head::{ArrowheadTriangle, HeadStyle, render_head};
use crate::log::{debug, warn};
use crate::surface::DrawingSurface;
use crate::types::{Color, CoordArg, TextAlign};

/// Colors used for the parts of a dimension line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub line: Color,
    pub head: Color,
    pub label: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            line: defaults::LINE_COLOR,
            head: defaults::HEAD_COLOR,
            label: defaults::LABEL_COLOR,
        }
    }
}

/// Arrowhead configuration of a dimension line.
///
/// The edge length is derived from the head angle and length; every builder
/// that touches either recomputes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionLineSpec {
    head_angle: f64,
    head_length: f64,
    head_style: HeadStyle,
    edge_length: f64,
    palette: Palette,
}

impl DimensionLineSpec {
    /// * `head_angle` - angle in radians between the shaft and each head edge
    /// * `head_length` - distance from the tip back along the shaft to the back of the head
    pub fn new(head_angle: f64, head_length: f64, head_style: HeadStyle) -> Self {
        Self {
            head_angle,
            head_length,
            head_style,
            edge_length: edge_length(head_angle, head_length),
            palette: Palette::default(),
        }
    }

    pub fn with_head_style(self, head_style: HeadStyle) -> Self {
        Self::new(self.head_angle, self.head_length, head_style).with_palette(self.palette)
    }

    pub fn with_head_angle(self, head_angle: f64) -> Self {
        Self::new(head_angle, self.head_length, self.head_style).with_palette(self.palette)
    }

    pub fn with_head_length(self, head_length: f64) -> Self {
        Self::new(self.head_angle, head_length, self.head_style).with_palette(self.palette)
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn head_angle(&self) -> f64 {
        self.head_angle
    }

    pub fn head_length(&self) -> f64 {
        self.head_length
    }

    pub fn head_style(&self) -> HeadStyle {
        self.head_style
    }

    /// Length of each slanted head edge: `|head_length / cos(head_angle)|`
    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }
}

fn edge_length(head_angle: f64, head_length: f64) -> f64 {
    (head_length / head_angle.cos()).abs()
}

impl Default for DimensionLineSpec {
    fn default() -> Self {
        Self::new(defaults::HEAD_ANGLE, defaults::HEAD_LENGTH, HeadStyle::default())
    }
}

/// One dimension line to draw
#[derive(Debug, Clone, PartialEq)]
pub struct LineRequest {
    pub start: DVec2,
    pub end: DVec2,
    pub label: String,
}

impl LineRequest {
    pub fn new(start: DVec2, end: DVec2, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Build a request from loosely typed coordinates.
    ///
    /// Text coordinates are read as leading integers; unreadable ones become
    /// NaN and produce invisible geometry rather than an error.
    pub fn coerce<'a>(
        x1: impl Into<CoordArg<'a>>,
        y1: impl Into<CoordArg<'a>>,
        x2: impl Into<CoordArg<'a>>,
        y2: impl Into<CoordArg<'a>>,
        label: impl Into<String>,
    ) -> Self {
        Self::new(
            dvec2(x1.into().coerce(), y1.into().coerce()),
            dvec2(x2.into().coerce(), y2.into().coerce()),
            label,
        )
    }

    /// Build a request from loosely typed coordinates, rejecting anything that
    /// is not a finite number with [`DimensionError::Coord`].
    pub fn parse<'a>(
        x1: impl Into<CoordArg<'a>>,
        y1: impl Into<CoordArg<'a>>,
        x2: impl Into<CoordArg<'a>>,
        y2: impl Into<CoordArg<'a>>,
        label: impl Into<String>,
    ) -> Result<Self, DimensionError> {
        Ok(Self::new(
            dvec2(x1.into().parse("x1")?, y1.into().parse("y1")?),
            dvec2(x2.into().parse("x2")?, y2.into().parse("y2")?),
            label,
        ))
    }

    /// Strictly parse four textual coordinates.
    pub fn from_text(coords: [&str; 4], label: impl Into<String>) -> Result<Self, DimensionError> {
        let [x1, y1, x2, y2] = coords;
        Ok(Self::new(
            dvec2(coerce::parse_coord("x1", x1)?, coerce::parse_coord("y1", y1)?),
            dvec2(coerce::parse_coord("x2", x2)?, coerce::parse_coord("y2", y2)?),
            label,
        ))
    }
}

/// A straight piece of the shaft
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }
}

/// Everything needed to draw one dimension line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionGeometry {
    /// Direction from start to end, in radians
    pub angle: f64,
    pub midpoint: DVec2,
    pub label_anchor: DVec2,
    /// Distance between the endpoints
    pub length: f64,
    /// Interpolation parameter of the label gap, measured from the midpoint
    pub gap_ratio: f64,
    /// Shaft pieces: start side, then end side
    pub shaft: [Segment; 2],
    /// Head at the start point
    pub near: ArrowheadTriangle,
    /// Head at the end point
    pub far: ArrowheadTriangle,
}

impl DimensionGeometry {
    pub fn is_finite(&self) -> bool {
        self.shaft.iter().all(|s| s.from.is_finite() && s.to.is_finite())
            && self.label_anchor.is_finite()
            && self.near.is_finite()
            && self.far.is_finite()
    }
}

/// `(1 - t) * a + t * b`
fn lerp(a: DVec2, b: DVec2, t: f64) -> DVec2 {
    a * (1.0 - t) + b * t
}

/// Renders dimension lines with a fixed arrowhead configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DimensionLine {
    spec: DimensionLineSpec,
}

impl DimensionLine {
    pub fn new(spec: DimensionLineSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &DimensionLineSpec {
        &self.spec
    }

    /// Compute the geometry of a line from `start` to `end`.
    ///
    /// The gap ratio is `LABEL_GAP / length` with no clamping: lines shorter
    /// than twice the gap get a ratio above 0.5, and below the gap itself the
    /// ratio exceeds 1 so each shaft piece runs back past its own endpoint.
    pub fn layout(&self, start: DVec2, end: DVec2) -> DimensionGeometry {
        let delta = end - start;
        let angle = delta.y.atan2(delta.x);
        let midpoint = (start + end) / 2.0;
        let length = delta.length();
        let gap_ratio = defaults::LABEL_GAP / length;

        let shaft = [
            Segment {
                from: start,
                to: lerp(midpoint, start, gap_ratio),
            },
            Segment {
                from: lerp(midpoint, end, gap_ratio),
                to: end,
            },
        ];

        let head_angle = self.spec.head_angle;
        let edge = self.spec.edge_length;
        let near = ArrowheadTriangle::at(start, angle, head_angle, edge);
        let far = ArrowheadTriangle::at(end, angle + PI, head_angle, edge);

        debug!(angle, length, gap_ratio, "laid out dimension line");

        DimensionGeometry {
            angle,
            midpoint,
            label_anchor: midpoint + dvec2(0.0, defaults::LABEL_BASELINE_NUDGE),
            length,
            gap_ratio,
            shaft,
            near,
            far,
        }
    }

    /// Draw `request` onto `surface` and return the geometry that was drawn.
    ///
    /// Order: label, shaft, far head, near head.
    pub fn draw(&self, surface: &mut dyn DrawingSurface, request: &LineRequest) -> DimensionGeometry {
        let geom = self.layout(request.start, request.end);
        if !geom.is_finite() {
            warn!(
                start = ?request.start,
                end = ?request.end,
                "dimension line has non-finite geometry and will not be visible"
            );
        }

        let palette = self.spec.palette;
        surface.fill_text(&request.label, geom.label_anchor, TextAlign::Center, palette.label);

        surface.begin_path();
        for segment in &geom.shaft {
            surface.move_to(segment.from);
            surface.line_to(segment.to);
        }
        surface.stroke(palette.line);

        render_head(surface, &geom.far, self.spec.head_style, palette.head);
        render_head(surface, &geom.near, self.spec.head_style, palette.head);

        geom
    }

    /// Coerce loosely typed coordinates and draw.
    pub fn draw_coerced<'a>(
        &self,
        surface: &mut dyn DrawingSurface,
        x1: impl Into<CoordArg<'a>>,
        y1: impl Into<CoordArg<'a>>,
        x2: impl Into<CoordArg<'a>>,
        y2: impl Into<CoordArg<'a>>,
        label: &str,
    ) -> DimensionGeometry {
        self.draw(surface, &LineRequest::coerce(x1, y1, x2, y2, label))
    }
}
