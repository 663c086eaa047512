//! Default sizes, colors and curve factors (surface units, radians)

use std::f64::consts::FRAC_PI_8;

use crate::types::Color;

/// Angle between the shaft and each slanted edge of an arrowhead
pub const HEAD_ANGLE: f64 = FRAC_PI_8;
/// Distance from the arrow tip back along the shaft to the back of the head
pub const HEAD_LENGTH: f64 = 10.0;

/// Length of the shaft gap left around the midpoint for the label
pub const LABEL_GAP: f64 = 55.0;
/// Downward baseline nudge so the label sits visually centered on the line
pub const LABEL_BASELINE_NUDGE: f64 = 4.0;

/// Radius of the curved head's back, as a fraction of the back width
pub const CURVED_BACK_RADIUS: f64 = 0.55;
/// Divisor for the bezier head's control point spread
pub const BEZIER_SHIFT: f64 = 5.0;

pub const LINE_COLOR: Color = Color::rgb(0x00, 0x00, 0xff);
pub const HEAD_COLOR: Color = Color::rgb(0x00, 0x00, 0xff);
pub const LABEL_COLOR: Color = Color::BLACK;

/// Font size used by `SvgSurface` for labels
pub const FONT_SIZE: f64 = 10.0;
