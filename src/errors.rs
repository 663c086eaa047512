//! Error types with rich diagnostics using miette
//!
//! Only the strict entry points produce these; the lenient coercion path lets
//! bad input degrade into NaN geometry instead.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A coordinate that failed strict parsing
#[derive(Error, Diagnostic, Debug)]
pub enum CoordError {
    #[error("invalid coordinate {name}: {input:?}")]
    #[diagnostic(
        code(dimline::coord::invalid_number),
        help("coordinates must be finite decimal numbers, e.g. `35` or `-12.5`")
    )]
    InvalidNumber {
        name: &'static str,
        input: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a number")]
        span: SourceSpan,
    },
}

impl CoordError {
    pub(crate) fn invalid_number(name: &'static str, input: &str) -> Self {
        let trimmed = input.trim();
        let offset = input.len() - input.trim_start().len();
        CoordError::InvalidNumber {
            name,
            input: input.to_string(),
            src: NamedSource::new(name, input.to_string()),
            span: (offset, trimmed.len()).into(),
        }
    }
}

/// Errors raised while configuring a dimension line or building a request
#[derive(Error, Diagnostic, Debug)]
pub enum DimensionError {
    #[error("unknown head style code: {code}")]
    #[diagnostic(
        code(dimline::head::unknown_style),
        help("valid codes are 0 (curved), 1 (straight), 2 (open), 3 (quadratic) and 4 (bezier)")
    )]
    UnknownHeadStyle { code: u8 },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Coord(#[from] CoordError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_number_spans_trimmed_input() {
        let err = CoordError::invalid_number("x1", "  abc ");
        let CoordError::InvalidNumber { span, input, .. } = &err;
        assert_eq!(span.offset(), 2);
        assert_eq!(span.len(), 3);
        assert_eq!(input, "  abc ");
        assert!(err.to_string().contains("x1"));
    }

    #[test]
    fn coord_error_converts_into_dimension_error() {
        let err: DimensionError = CoordError::invalid_number("y2", "?").into();
        assert!(matches!(err, DimensionError::Coord(_)));
    }
}
