//! Error type shared by grid construction, fire spread and the cut optimizer
//!
//! Every precondition is checked before a grid is mutated, so an `Err` always
//! leaves the caller's grid exactly as it was.

/// Errors surfaced by the forest fire core
#[derive(Debug, Clone, PartialEq)]
pub enum FireSimError {
    /// Grid constructed with a non-positive width or height, or with a cell
    /// buffer whose length does not match the dimensions
    InvalidDimension { width: i64, height: i64 },
    /// Cell query outside `[0, width) × [0, height)`
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    /// Fire ignited outside the grid
    InvalidOrigin {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    /// Generator fraction that is not a finite value in `[0, 1]`
    InvalidProbability { name: &'static str, value: f64 },
    /// Unknown symbol in a text grid
    Parse {
        line: usize,
        column: usize,
        symbol: char,
    },
    /// Text grid row whose length differs from the first row
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl FireSimError {
    pub(crate) fn out_of_bounds(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    pub(crate) fn invalid_origin(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::InvalidOrigin {
            x,
            y,
            width,
            height,
        }
    }
}

impl std::fmt::Display for FireSimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FireSimError::InvalidDimension { width, height } => {
                write!(f, "Invalid grid dimensions {width}x{height}")
            }
            FireSimError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "Cell ({x}, {y}) is outside the {width}x{height} grid"),
            FireSimError::InvalidOrigin {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Fire origin ({x}, {y}) is outside the {width}x{height} grid"
            ),
            FireSimError::InvalidProbability { name, value } => {
                write!(f, "{name} must be a finite value in [0, 1], got {value}")
            }
            FireSimError::Parse {
                line,
                column,
                symbol,
            } => write!(f, "Unexpected '{symbol}' at line {line}, column {column}"),
            FireSimError::RaggedRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "Row at line {line} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for FireSimError {}
