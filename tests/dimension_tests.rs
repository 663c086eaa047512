//! End-to-end drawing tests against the recording and SVG surfaces.
//!
//! Run with: cargo test --test dimension_tests

use std::f64::consts::{FRAC_PI_4, FRAC_PI_8};

use dimline::{
    DimensionLine, DimensionLineSpec, HeadStyle, LineRequest, Paint, PathCommand, RecordingSurface, SvgSurface,
    defaults,
};
use glam::{DVec2, dvec2};

/// Tolerance for floating-point comparisons
const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{what}: expected {expected}, got {actual}"
    );
}

/// Angle in radians between two directions
fn angle_between(a: DVec2, b: DVec2) -> f64 {
    a.normalize().dot(b.normalize()).clamp(-1.0, 1.0).acos()
}

#[test]
fn reference_drawing_with_open_heads() {
    let dim = DimensionLine::new(DimensionLineSpec::new(FRAC_PI_8, 10.0, HeadStyle::try_from(2u8).unwrap()));
    let mut surface = RecordingSurface::new();
    let geom = dim.draw_coerced(&mut surface, 35, 75, 25, 249, "12\"15/16");

    let start = dvec2(35.0, 75.0);
    let end = dvec2(25.0, 249.0);
    let d = start.distance(end);
    assert_close(d, 174.287_119_432_274_75, "line length");

    assert_eq!(geom.midpoint, dvec2(30.0, 162.0));
    assert_eq!(surface.texts(), vec![("12\"15/16", dvec2(30.0, 166.0))]);

    let [a, b] = geom.shaft;
    assert_eq!(a.from, start);
    assert_eq!(b.to, end);
    assert_close(a.length(), d / 2.0 - defaults::LABEL_GAP / 2.0, "start-side shaft");
    assert_close(b.length(), d / 2.0 - defaults::LABEL_GAP / 2.0, "end-side shaft");
    assert_close(a.to.distance(b.from), defaults::LABEL_GAP, "label gap");

    let painted = surface.painted();
    assert_eq!(painted.len(), 3, "shaft plus one stroke per open head");
    assert!(painted.iter().all(|p| matches!(p.paint, Paint::Stroke(_))));

    let edge = dim.spec().edge_length();
    assert_close(edge, 10.823_922_002_923_94, "edge length");

    let dir = end - start;
    for (head, into_shaft) in [(geom.near, dir), (geom.far, -dir)] {
        let (top_leg, bottom_leg) = head.leg_lengths();
        assert_close(top_leg, edge, "top leg");
        assert_close(bottom_leg, edge, "bottom leg");
        assert_close(angle_between(head.top - head.tip, into_shaft), FRAC_PI_8, "top angle");
        assert_close(angle_between(head.bottom - head.tip, into_shaft), FRAC_PI_8, "bottom angle");
    }

    // heads are drawn far end first, each as an open three-point outline
    assert_eq!(
        painted[1].commands,
        vec![
            PathCommand::MoveTo(geom.far.top),
            PathCommand::LineTo(end),
            PathCommand::LineTo(geom.far.bottom),
        ]
    );
    assert_eq!(painted[2].commands[1], PathCommand::LineTo(start));
}

#[test]
fn back_corners_keep_edge_length_for_every_style() {
    let endpoints = [
        (dvec2(0.0, 0.0), dvec2(300.0, 0.0)),
        (dvec2(12.0, -40.0), dvec2(-80.0, 150.0)),
        (dvec2(5.0, 5.0), dvec2(5.0, 500.0)),
        (dvec2(0.0, 0.0), dvec2(30.0, 20.0)),
    ];
    for style in HeadStyle::ALL {
        for angle in [FRAC_PI_8, FRAC_PI_4, 0.3] {
            let dim = DimensionLine::new(DimensionLineSpec::new(angle, 12.0, style));
            let edge = dim.spec().edge_length();
            for (start, end) in endpoints {
                let geom = dim.layout(start, end);
                for head in [geom.near, geom.far] {
                    let (t, b) = head.leg_lengths();
                    assert!((t - edge).abs() < EPS, "{} at {angle}", style.name());
                    assert!((b - edge).abs() < EPS, "{} at {angle}", style.name());
                }
            }
        }
    }
}

#[test]
fn horizontal_line_with_bezier_heads_stays_finite() {
    // a horizontal shaft puts the back corners of each head on one vertical line
    let dim = DimensionLine::new(DimensionLineSpec::new(FRAC_PI_8, 10.0, HeadStyle::BEZIER));
    let mut surface = RecordingSurface::new();
    let geom = dim.draw(&mut surface, &LineRequest::new(dvec2(0.0, 0.0), dvec2(200.0, 0.0), "h"));
    assert!(geom.is_finite());

    for painted in surface.painted() {
        assert!(painted.commands.iter().all(PathCommand::is_finite));
    }
}

#[test]
fn straight_heads_close_back_to_top() {
    let dim = DimensionLine::new(DimensionLineSpec::new(FRAC_PI_8, 10.0, HeadStyle::STRAIGHT));
    let mut surface = RecordingSurface::new();
    let geom = dim.draw(&mut surface, &LineRequest::new(dvec2(10.0, 10.0), dvec2(190.0, 90.0), "x"));

    let painted = surface.painted();
    let near_fill = &painted[3];
    assert_eq!(near_fill.paint, Paint::Fill(defaults::HEAD_COLOR));
    assert_eq!(
        near_fill.commands,
        vec![
            PathCommand::MoveTo(geom.near.top),
            PathCommand::LineTo(geom.near.tip),
            PathCommand::LineTo(geom.near.bottom),
            PathCommand::LineTo(geom.near.top),
        ]
    );
}

#[test]
fn drawing_twice_is_identical() {
    let request = LineRequest::new(dvec2(35.0, 75.0), dvec2(25.0, 249.0), "12\"15/16");
    for style in HeadStyle::ALL {
        let dim = DimensionLine::new(DimensionLineSpec::new(FRAC_PI_8, 10.0, style));

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        let g1 = dim.draw(&mut first, &request);
        let g2 = dim.draw(&mut second, &request);
        assert_eq!(g1, g2);
        assert_eq!(first.ops(), second.ops());

        // and a single surface just sees the same sequence twice
        let mut both = RecordingSurface::new();
        dim.draw(&mut both, &request);
        dim.draw(&mut both, &request);
        assert_eq!(both.ops().len(), 2 * first.ops().len());
        assert_eq!(&both.ops()[first.ops().len()..], first.ops());
    }
}

#[test]
fn recording_replays_into_svg() {
    let dim = DimensionLine::default();
    let mut recording = RecordingSurface::new();
    dim.draw(&mut recording, &LineRequest::new(dvec2(20.0, 20.0), dvec2(280.0, 20.0), "260"));

    let mut direct = SvgSurface::new();
    dim.draw(&mut direct, &LineRequest::new(dvec2(20.0, 20.0), dvec2(280.0, 20.0), "260"));

    let mut replayed = SvgSurface::new();
    recording.replay(&mut replayed);
    assert_eq!(replayed.finish(300.0, 40.0).unwrap(), direct.finish(300.0, 40.0).unwrap());
}

#[test]
fn every_style_renders_to_svg() {
    for style in HeadStyle::ALL {
        let dim = DimensionLine::new(DimensionLineSpec::new(FRAC_PI_8, 10.0, style));
        let mut svg = SvgSurface::new();
        dim.draw(&mut svg, &LineRequest::new(dvec2(35.0, 75.0), dvec2(25.0, 249.0), "12\"15/16"));
        let doc = svg.finish(60.0, 300.0).unwrap();

        assert!(doc.contains("15/16</text>"), "{doc}");
        assert_eq!(doc.matches("<g>").count(), 2, "{}", style.name());
        let expected_paths = if style == HeadStyle::OPEN { 3 } else { 5 };
        assert_eq!(doc.matches("<path").count(), expected_paths, "{}", style.name());
        assert!(!doc.contains("NaN"));
    }
}

#[test]
fn open_heads_svg() {
    let dim = DimensionLine::new(DimensionLineSpec::new(FRAC_PI_4, 10.0, HeadStyle::OPEN));
    let mut surface = SvgSurface::new();
    dim.draw(&mut surface, &LineRequest::new(dvec2(0.0, 50.0), dvec2(200.0, 50.0), "200"));
    let svg = surface.finish(200.0, 100.0).unwrap();
    insta::assert_snapshot!(svg.trim_end());
}

#[test]
fn curved_heads_with_markup_label() {
    let dim = DimensionLine::new(DimensionLineSpec::default().with_head_style(HeadStyle::CURVED));
    let mut svg = SvgSurface::new();
    dim.draw(&mut svg, &LineRequest::new(dvec2(10.0, 50.0), dvec2(200.0, 50.0), "a<b"));
    let doc = svg.finish(220.0, 100.0).unwrap();

    assert!(doc.contains("a&lt;b"), "{doc}");
    assert!(!doc.contains("a<b"), "{doc}");
    // each head is filled, then stroked
    assert_eq!(doc.matches("<path").count(), 5, "{doc}");
    assert!(!doc.contains("NaN"));
}
