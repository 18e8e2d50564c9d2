// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use miette::Diagnostic;
use thiserror::Error;

use crate::shape::{Axis, Position, Shape};

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Initialization data disagrees with the declared shape
    #[error("Shape mismatch along {axis} axis: expected {expected}, found {found}")]
    #[diagnostic(
        code(planar::shape_mismatch),
        help("every row of the data must have exactly `width` elements, and there must be `height` rows")
    )]
    ShapeMismatch {
        axis: Axis,
        expected: usize,
        found: usize,
    },

    /// A cell access, or a pasted region, does not fit inside the matrix.
    /// Single-cell access reports a 1x1 region.
    #[error("Region {region} at {at} is out of bounds for matrix of shape {shape}")]
    #[diagnostic(code(planar::out_of_bounds))]
    OutOfBounds {
        at: Position,
        region: Shape,
        shape: Shape,
    },

    /// A slice range is reversed or does not lie inside the parent
    #[error("Invalid {axis} range {start}..={end} on an axis of length {limit}")]
    #[diagnostic(
        code(planar::invalid_range),
        help("ranges are inclusive on both ends and must satisfy 0 <= start <= end + 1 <= length")
    )]
    InvalidRange {
        axis: Axis,
        start: isize,
        end: isize,
        limit: usize,
    },
}

pub type MatrixResult<T = ()> = Result<T, MatrixError>;
