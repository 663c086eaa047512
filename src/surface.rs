//! The drawing-surface contract and a recording implementation.
//!
//! A surface is a stateful path sink in the style of a 2D canvas context: a
//! current path is built with `move_to`/`line_to`/curves, then painted with
//! `stroke` or `fill`. Paint colors are passed per call, so the only state a
//! surface carries between calls is the current path and its save stack.

use glam::DVec2;

use crate::types::{Color, TextAlign};

/// One path-building primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    /// Canvas `arcTo`: a circular arc of `radius` tangent to the lines
    /// current→`corner` and `corner`→`to`.
    ArcTo { corner: DVec2, to: DVec2, radius: f64 },
    QuadTo { ctrl: DVec2, to: DVec2 },
    CubicTo { ctrl1: DVec2, ctrl2: DVec2, to: DVec2 },
}

impl PathCommand {
    /// Whether every coordinate of the command is finite
    pub fn is_finite(&self) -> bool {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p.is_finite(),
            PathCommand::ArcTo { corner, to, radius } => {
                corner.is_finite() && to.is_finite() && radius.is_finite()
            }
            PathCommand::QuadTo { ctrl, to } => ctrl.is_finite() && to.is_finite(),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                ctrl1.is_finite() && ctrl2.is_finite() && to.is_finite()
            }
        }
    }
}

/// A 2D drawing target.
pub trait DrawingSurface {
    /// Push the drawing state; paired with [`DrawingSurface::restore`].
    fn save(&mut self);
    fn restore(&mut self);

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn line_to(&mut self, p: DVec2);
    fn arc_to(&mut self, corner: DVec2, to: DVec2, radius: f64);
    fn quadratic_curve_to(&mut self, ctrl: DVec2, to: DVec2);
    fn bezier_curve_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2);

    /// Outline the current path. The path stays current.
    fn stroke(&mut self, color: Color);
    /// Fill the current path (implicitly closed). The path stays current.
    fn fill(&mut self, color: Color);

    fn fill_text(&mut self, text: &str, at: DVec2, align: TextAlign, color: Color);

    /// Append a [`PathCommand`] to the current path.
    fn apply(&mut self, cmd: PathCommand) {
        match cmd {
            PathCommand::MoveTo(p) => self.move_to(p),
            PathCommand::LineTo(p) => self.line_to(p),
            PathCommand::ArcTo { corner, to, radius } => self.arc_to(corner, to, radius),
            PathCommand::QuadTo { ctrl, to } => self.quadratic_curve_to(ctrl, to),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => self.bezier_curve_to(ctrl1, ctrl2, to),
        }
    }
}

/// Paint applied to a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Stroke(Color),
    Fill(Color),
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    BeginPath,
    Path(PathCommand),
    Paint(Paint),
    Text { text: String, at: DVec2, align: TextAlign, color: Color },
}

/// A path as it was when it got painted
#[derive(Debug, Clone, PartialEq)]
pub struct PaintedPath {
    pub commands: Vec<PathCommand>,
    pub paint: Paint,
    /// Save-stack depth at paint time
    pub depth: usize,
}

/// Surface that records every call, for inspection and replay.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Replay the recording onto another surface.
    pub fn replay(&self, target: &mut dyn DrawingSurface) {
        for op in &self.ops {
            match op {
                DrawOp::Save => target.save(),
                DrawOp::Restore => target.restore(),
                DrawOp::BeginPath => target.begin_path(),
                DrawOp::Path(cmd) => target.apply(*cmd),
                DrawOp::Paint(Paint::Stroke(color)) => target.stroke(*color),
                DrawOp::Paint(Paint::Fill(color)) => target.fill(*color),
                DrawOp::Text { text, at, align, color } => target.fill_text(text, *at, *align, *color),
            }
        }
    }

    /// Every paint call together with the path it painted.
    pub fn painted(&self) -> Vec<PaintedPath> {
        let mut out = Vec::new();
        let mut current = Vec::new();
        let mut depth = 0usize;
        for op in &self.ops {
            match op {
                DrawOp::Save => depth += 1,
                DrawOp::Restore => depth = depth.saturating_sub(1),
                DrawOp::BeginPath => current.clear(),
                DrawOp::Path(cmd) => current.push(*cmd),
                DrawOp::Paint(paint) => out.push(PaintedPath {
                    commands: current.clone(),
                    paint: *paint,
                    depth,
                }),
                DrawOp::Text { .. } => {}
            }
        }
        out
    }

    /// Text runs in draw order as `(text, anchor)`.
    pub fn texts(&self) -> Vec<(&str, DVec2)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, at, .. } => Some((text.as_str(), *at)),
                _ => None,
            })
            .collect()
    }

    /// Whether every `save` is matched by a later `restore`.
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0isize;
        for op in &self.ops {
            match op {
                DrawOp::Save => depth += 1,
                DrawOp::Restore => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, p: DVec2) {
        self.ops.push(DrawOp::Path(PathCommand::MoveTo(p)));
    }

    fn line_to(&mut self, p: DVec2) {
        self.ops.push(DrawOp::Path(PathCommand::LineTo(p)));
    }

    fn arc_to(&mut self, corner: DVec2, to: DVec2, radius: f64) {
        self.ops.push(DrawOp::Path(PathCommand::ArcTo { corner, to, radius }));
    }

    fn quadratic_curve_to(&mut self, ctrl: DVec2, to: DVec2) {
        self.ops.push(DrawOp::Path(PathCommand::QuadTo { ctrl, to }));
    }

    fn bezier_curve_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2) {
        self.ops.push(DrawOp::Path(PathCommand::CubicTo { ctrl1, ctrl2, to }));
    }

    fn stroke(&mut self, color: Color) {
        self.ops.push(DrawOp::Paint(Paint::Stroke(color)));
    }

    fn fill(&mut self, color: Color) {
        self.ops.push(DrawOp::Paint(Paint::Fill(color)));
    }

    fn fill_text(&mut self, text: &str, at: DVec2, align: TextAlign, color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            align,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn painted_tracks_current_path() {
        let mut s = RecordingSurface::new();
        s.begin_path();
        s.move_to(dvec2(0.0, 0.0));
        s.line_to(dvec2(1.0, 0.0));
        s.stroke(Color::BLACK);
        s.save();
        s.begin_path();
        s.move_to(dvec2(5.0, 5.0));
        s.fill(Color(0xff0000));
        s.restore();

        let painted = s.painted();
        assert_eq!(painted.len(), 2);
        assert_eq!(painted[0].commands.len(), 2);
        assert_eq!(painted[0].paint, Paint::Stroke(Color::BLACK));
        assert_eq!(painted[0].depth, 0);
        assert_eq!(painted[1].commands, vec![PathCommand::MoveTo(dvec2(5.0, 5.0))]);
        assert_eq!(painted[1].depth, 1);
        assert!(s.is_balanced());
    }

    #[test]
    fn unbalanced_restore_is_detected() {
        let mut s = RecordingSurface::new();
        s.restore();
        s.save();
        assert!(!s.is_balanced());
    }

    #[test]
    fn replay_reproduces_ops() {
        let mut s = RecordingSurface::new();
        s.fill_text("12", dvec2(3.0, 4.0), TextAlign::Center, Color::BLACK);
        s.begin_path();
        s.apply(PathCommand::QuadTo {
            ctrl: dvec2(1.0, 1.0),
            to: dvec2(2.0, 0.0),
        });
        s.stroke(Color::BLACK);

        let mut copy = RecordingSurface::new();
        s.replay(&mut copy);
        assert_eq!(copy.ops(), s.ops());
        assert_eq!(copy.texts(), vec![("12", dvec2(3.0, 4.0))]);
    }

    #[test]
    fn command_finiteness() {
        assert!(PathCommand::LineTo(dvec2(1.0, 2.0)).is_finite());
        assert!(!PathCommand::LineTo(dvec2(f64::NAN, 2.0)).is_finite());
        let arc = PathCommand::ArcTo {
            corner: dvec2(0.0, 0.0),
            to: dvec2(1.0, 1.0),
            radius: f64::NAN,
        };
        assert!(!arc.is_finite());
        let cubic = PathCommand::CubicTo {
            ctrl1: dvec2(0.0, 0.0),
            ctrl2: dvec2(f64::INFINITY, 0.0),
            to: dvec2(1.0, 1.0),
        };
        assert!(!cubic.is_finite());
    }
}
