//! Arrowhead construction.
//!
//! Every head starts from the same open outline `top → tip → bottom`. The
//! style decides how the back of the head is closed and whether the result is
//! filled, stroked, or both.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use crate::defaults;
use crate::errors::DimensionError;
use crate::surface::{DrawingSurface, PathCommand};
use crate::types::{Color, CoordArg};

/// The three corners of one arrowhead
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowheadTriangle {
    /// Back corner on the `+head_angle` side
    pub top: DVec2,
    pub tip: DVec2,
    /// Back corner on the `-head_angle` side
    pub bottom: DVec2,
}

impl ArrowheadTriangle {
    pub fn new(top: DVec2, tip: DVec2, bottom: DVec2) -> Self {
        Self { top, tip, bottom }
    }

    /// Build the head whose tip sits at `tip`, with its back corners reached
    /// by walking `edge_length` along `heading ± head_angle`.
    ///
    /// `heading` points from the tip back into the shaft.
    pub fn at(tip: DVec2, heading: f64, head_angle: f64, edge_length: f64) -> Self {
        let corner = |angle: f64| tip + DVec2::from_angle(angle) * edge_length;
        Self {
            top: corner(heading + head_angle),
            tip,
            bottom: corner(heading - head_angle),
        }
    }

    /// Build a head from loosely typed coordinates, in
    /// `top.x, top.y, tip.x, tip.y, bottom.x, bottom.y` order.
    ///
    /// Text is coerced leniently; unreadable text becomes NaN.
    pub fn coerce(args: [CoordArg<'_>; 6]) -> Self {
        let [x0, y0, x1, y1, x2, y2] = args.map(CoordArg::coerce);
        Self::new(dvec2(x0, y0), dvec2(x1, y1), dvec2(x2, y2))
    }

    /// Distance between the two back corners
    pub fn back_width(&self) -> f64 {
        self.top.distance(self.bottom)
    }

    pub fn centroid(&self) -> DVec2 {
        (self.top + self.tip + self.bottom) / 3.0
    }

    /// Lengths of the slanted edges `tip–top` and `tip–bottom`
    pub fn leg_lengths(&self) -> (f64, f64) {
        (self.tip.distance(self.top), self.tip.distance(self.bottom))
    }

    pub fn is_finite(&self) -> bool {
        self.top.is_finite() && self.tip.is_finite() && self.bottom.is_finite()
    }

    /// The outline shared by every style
    fn outline(&self) -> [PathCommand; 3] {
        [
            PathCommand::MoveTo(self.top),
            PathCommand::LineTo(self.tip),
            PathCommand::LineTo(self.bottom),
        ]
    }
}

/// How a head is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadPaint {
    pub fill: bool,
    pub stroke: bool,
}

impl HeadPaint {
    const SOLID: HeadPaint = HeadPaint { fill: true, stroke: true };
    const OUTLINE: HeadPaint = HeadPaint { fill: false, stroke: true };
}

/// Behavior shared by all arrowhead shapes
#[enum_dispatch]
pub trait HeadShape {
    /// The command appended after `top → tip → bottom`, if any
    fn closing(&self, head: &ArrowheadTriangle) -> Option<PathCommand>;

    fn paint(&self) -> HeadPaint {
        HeadPaint::SOLID
    }
}

/// Filled head whose back is a circular arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurvedHead;

/// Filled triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StraightHead;

/// Two stroked edges, no back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenHead;

/// Filled head whose back is a quadratic curve pulled toward the centroid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuadraticHead;

/// Filled head whose back is a cubic curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BezierHead;

impl HeadShape for CurvedHead {
    fn closing(&self, head: &ArrowheadTriangle) -> Option<PathCommand> {
        Some(PathCommand::ArcTo {
            corner: head.tip,
            to: head.top,
            radius: defaults::CURVED_BACK_RADIUS * head.back_width(),
        })
    }
}

impl HeadShape for StraightHead {
    fn closing(&self, head: &ArrowheadTriangle) -> Option<PathCommand> {
        Some(PathCommand::LineTo(head.top))
    }
}

impl HeadShape for OpenHead {
    fn closing(&self, _head: &ArrowheadTriangle) -> Option<PathCommand> {
        None
    }

    fn paint(&self) -> HeadPaint {
        HeadPaint::OUTLINE
    }
}

impl HeadShape for QuadraticHead {
    fn closing(&self, head: &ArrowheadTriangle) -> Option<PathCommand> {
        Some(PathCommand::QuadTo {
            ctrl: head.centroid(),
            to: head.top,
        })
    }
}

impl HeadShape for BezierHead {
    fn closing(&self, head: &ArrowheadTriangle) -> Option<PathCommand> {
        let (ctrl1, ctrl2) = bezier_controls(head);
        Some(PathCommand::CubicTo {
            ctrl1,
            ctrl2,
            to: head.top,
        })
    }
}

/// Control points for the bezier back.
///
/// Both points sit halfway between the tip and the middle of the back, spread
/// along the back chord by `back_width / (2 * BEZIER_SHIFT)`. A vertical back
/// has no finite slope, so it spreads vertically around the tip instead.
fn bezier_controls(head: &ArrowheadTriangle) -> (DVec2, DVec2) {
    let ArrowheadTriangle { top, tip, bottom } = *head;
    let shift = defaults::BEZIER_SHIFT;

    if bottom.x == top.x {
        let back = bottom.y - top.y;
        let x = (tip.x + top.x) / 2.0;
        return (dvec2(x, tip.y + back / shift), dvec2(x, tip.y - back / shift));
    }

    let back_mid = (top + bottom) / 2.0;
    let mid = (back_mid + tip) / 2.0;
    let slope = (bottom.y - top.y) / (bottom.x - top.x);
    let offset = dvec2(1.0, slope).normalize() * (head.back_width() / (2.0 * shift));
    (mid - offset, mid + offset)
}

/// The five arrowhead variants
#[enum_dispatch(HeadShape)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadStyle {
    Curved(CurvedHead),
    Straight(StraightHead),
    Open(OpenHead),
    Quadratic(QuadraticHead),
    Bezier(BezierHead),
}

impl HeadStyle {
    pub const CURVED: HeadStyle = HeadStyle::Curved(CurvedHead);
    pub const STRAIGHT: HeadStyle = HeadStyle::Straight(StraightHead);
    pub const OPEN: HeadStyle = HeadStyle::Open(OpenHead);
    pub const QUADRATIC: HeadStyle = HeadStyle::Quadratic(QuadraticHead);
    pub const BEZIER: HeadStyle = HeadStyle::Bezier(BezierHead);

    pub const ALL: [HeadStyle; 5] = [
        Self::CURVED,
        Self::STRAIGHT,
        Self::OPEN,
        Self::QUADRATIC,
        Self::BEZIER,
    ];

    /// Legacy numeric code (0–4)
    pub fn code(self) -> u8 {
        match self {
            HeadStyle::Curved(_) => 0,
            HeadStyle::Straight(_) => 1,
            HeadStyle::Open(_) => 2,
            HeadStyle::Quadratic(_) => 3,
            HeadStyle::Bezier(_) => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HeadStyle::Curved(_) => "curved",
            HeadStyle::Straight(_) => "straight",
            HeadStyle::Open(_) => "open",
            HeadStyle::Quadratic(_) => "quadratic",
            HeadStyle::Bezier(_) => "bezier",
        }
    }

    /// The full path of `head` in this style
    pub fn path(self, head: &ArrowheadTriangle) -> Vec<PathCommand> {
        let mut path = head.outline().to_vec();
        path.extend(self.closing(head));
        path
    }
}

impl Default for HeadStyle {
    fn default() -> Self {
        Self::QUADRATIC
    }
}

impl TryFrom<u8> for HeadStyle {
    type Error = DimensionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(DimensionError::UnknownHeadStyle { code })
    }
}

/// Draw one arrowhead.
///
/// Drawing is wrapped in `save`/`restore` and starts a fresh path, so nothing
/// leaks into the shaft or label around it.
pub fn render_head(surface: &mut dyn DrawingSurface, head: &ArrowheadTriangle, style: HeadStyle, color: Color) {
    surface.save();
    surface.begin_path();
    for cmd in style.path(head) {
        surface.apply(cmd);
    }
    let paint = style.paint();
    if paint.fill {
        surface.fill(color);
    }
    if paint.stroke {
        surface.stroke(color);
    }
    surface.restore();
}
