//! SVG output surface.
//!
//! Collects drawing calls into a `facet-svg` document. `save`/`restore`
//! become `<g>` groups, each paint call becomes one `<path>` element, and
//! canvas `arcTo` is converted into an SVG elliptical arc between its tangent
//! points.

use facet_svg::facet_xml::SerializeOptions;
use facet_svg::{Group, Path, PathData, Svg, SvgNode, Text, facet_xml};
use glam::DVec2;

use crate::defaults;
use crate::surface::DrawingSurface;
use crate::types::{Color, TextAlign};

/// Below this, a cross product counts as collinear for `arc_to`.
const COLLINEAR_EPSILON: f64 = 1e-9;

/// Surface that builds an SVG document from drawing calls.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    /// Children of every open group, outermost (the document root) first
    groups: Vec<Vec<SvgNode>>,
    /// Path data of the current path
    path: Option<PathData>,
    /// Current pen position, needed to resolve `arc_to`
    pen: Option<DVec2>,
    font_size: f64,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgSurface {
    pub fn new() -> Self {
        Self {
            groups: vec![Vec::new()],
            path: None,
            pen: None,
            font_size: defaults::FONT_SIZE,
        }
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Close any groups left open and serialize the document.
    pub fn finish(self, width: f64, height: f64) -> Result<String, miette::Report> {
        let svg = self.into_document(width, height);

        fn format_float(value: f64, writer: &mut dyn std::io::Write) -> Result<(), std::io::Error> {
            write!(writer, "{}", fmt_num(value))
        }

        let options = SerializeOptions {
            float_formatter: Some(format_float),
            ..Default::default()
        };
        facet_xml::to_string_with_options(&svg, &options)
            .map_err(|e| miette::miette!("XML serialization error: {}", e))
    }

    fn into_document(mut self, width: f64, height: f64) -> Svg {
        while self.groups.len() > 1 {
            self.restore();
        }
        Svg {
            width: Some(fmt_num(width)),
            height: Some(fmt_num(height)),
            view_box: Some(format!("0 0 {} {}", fmt_num(width), fmt_num(height))),
            children: self.groups.pop().unwrap_or_default(),
            ..Default::default()
        }
    }

    fn push_node(&mut self, node: SvgNode) {
        if let Some(children) = self.groups.last_mut() {
            children.push(node);
        }
    }

    fn extend_path(&mut self, step: impl FnOnce(PathData) -> PathData, pen: DVec2) {
        let data = self.path.take().unwrap_or_else(PathData::new);
        self.path = Some(step(data));
        self.pen = Some(pen);
    }

    fn emit_path(&mut self, fill: String, stroke: Option<String>) {
        let Some(data) = self.path.clone() else {
            return;
        };
        self.push_node(SvgNode::Path(Path {
            d: Some(data),
            fill: Some(fill),
            stroke,
            ..Default::default()
        }));
    }
}

impl DrawingSurface for SvgSurface {
    fn save(&mut self) {
        self.groups.push(Vec::new());
    }

    fn restore(&mut self) {
        if self.groups.len() < 2 {
            return;
        }
        if let Some(children) = self.groups.pop() {
            self.push_node(SvgNode::G(Group {
                children,
                ..Default::default()
            }));
        }
    }

    fn begin_path(&mut self) {
        self.path = None;
        self.pen = None;
    }

    fn move_to(&mut self, p: DVec2) {
        let at = snap(p);
        self.extend_path(|d| d.m(at.x, at.y), p);
    }

    fn line_to(&mut self, p: DVec2) {
        let at = snap(p);
        self.extend_path(|d| d.l(at.x, at.y), p);
    }

    fn arc_to(&mut self, corner: DVec2, to: DVec2, radius: f64) {
        let Some(from) = self.pen else {
            // Canvas treats arcTo on an empty path as a moveTo to the corner.
            self.move_to(corner);
            return;
        };
        match arc_tangents(from, corner, to, radius) {
            Some(arc) => {
                self.line_to(arc.start);
                let r = snap_num(radius);
                let end = snap(arc.end);
                self.extend_path(|d| d.a(r, r, 0.0, false, arc.clockwise, end.x, end.y), arc.end);
            }
            None => self.line_to(corner),
        }
    }

    fn quadratic_curve_to(&mut self, ctrl: DVec2, to: DVec2) {
        let (c, p) = (snap(ctrl), snap(to));
        self.extend_path(|d| d.q(c.x, c.y, p.x, p.y), to);
    }

    fn bezier_curve_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2) {
        let (c1, c2, p) = (snap(ctrl1), snap(ctrl2), snap(to));
        self.extend_path(|d| d.c(c1.x, c1.y, c2.x, c2.y, p.x, p.y), to);
    }

    fn stroke(&mut self, color: Color) {
        self.emit_path("none".to_string(), Some(color.to_string()));
    }

    fn fill(&mut self, color: Color) {
        self.emit_path(color.to_string(), None);
    }

    fn fill_text(&mut self, text: &str, at: DVec2, align: TextAlign, color: Color) {
        let text_element = Text {
            x: Some(at.x),
            y: Some(at.y),
            fill: Some(color.to_string()),
            font_size: Some(fmt_num(self.font_size)),
            text_anchor: Some(align.svg_anchor().to_string()),
            content: Some(text.to_string()),
            ..Default::default()
        };
        self.push_node(SvgNode::Text(text_element));
    }
}

/// Tangent points of a canvas-style `arcTo`
#[derive(Debug, Clone, Copy, PartialEq)]
struct ArcTangents {
    start: DVec2,
    end: DVec2,
    clockwise: bool,
}

/// Resolve `arcTo(corner, to, radius)` from `from`.
///
/// Returns `None` when the arc degenerates into a straight line to `corner`
/// (coincident points, collinear legs, or a zero radius).
fn arc_tangents(from: DVec2, corner: DVec2, to: DVec2, radius: f64) -> Option<ArcTangents> {
    let leg_in = from - corner;
    let leg_out = to - corner;
    let cross = (corner - from).perp_dot(to - corner);
    if radius <= 0.0
        || !radius.is_finite()
        || leg_in.length_squared() == 0.0
        || leg_out.length_squared() == 0.0
        || cross.abs() < COLLINEAR_EPSILON
    {
        return None;
    }

    let u_in = leg_in.normalize();
    let u_out = leg_out.normalize();
    let half_angle = u_in.dot(u_out).clamp(-1.0, 1.0).acos() / 2.0;
    let reach = radius / half_angle.tan();

    Some(ArcTangents {
        start: corner + u_in * reach,
        end: corner + u_out * reach,
        // y grows downward, so a positive turn is clockwise on screen
        clockwise: cross > 0.0,
    })
}

/// Round a path coordinate to the precision the document is written with.
fn snap_num(value: f64) -> f64 {
    fmt_num(value).parse().unwrap_or(value)
}

fn snap(p: DVec2) -> DVec2 {
    DVec2::new(snap_num(p.x), snap_num(p.y))
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return "NaN".to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(5 - magnitude);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        return "0".to_string();
    }

    let decimals = (5 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
