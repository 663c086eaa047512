//! Render the reference dimension line in every head style as one SVG.
//!
//! Run with: RUST_LOG=debug cargo run --example render_svg --features tracing > styles.svg

use std::f64::consts::FRAC_PI_8;

use dimline::{DimensionLine, DimensionLineSpec, HeadStyle, LineRequest, SvgSurface};
use glam::dvec2;
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut svg = SvgSurface::new().with_font_size(12.0);
    for (column, style) in HeadStyle::ALL.into_iter().enumerate() {
        let x = 40.0 + 60.0 * column as f64;
        let dim = DimensionLine::new(DimensionLineSpec::new(FRAC_PI_8, 10.0, style));
        let request = LineRequest::new(dvec2(x + 10.0, 75.0), dvec2(x, 249.0), "12\"15/16");
        let geom = dim.draw(&mut svg, &request);
        tracing::info!(style = style.name(), length = geom.length, "drew dimension line");
    }

    print!("{}", svg.finish(340.0, 300.0)?);
    Ok(())
}
