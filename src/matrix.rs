// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::cell::RefCell;
use std::fmt::{Debug, Display, Formatter};
use std::ops::RangeInclusive;
use std::rc::Rc;

use funty::Numeric;
use tracing::{debug, trace};

use crate::error::MatrixError::*;
use crate::error::{MatrixError, MatrixResult};
use crate::shape::{Axis, Position, Shape};


/// One step of matrix initialization. Steps are applied in order, so later steps win
#[derive(Clone, Debug, PartialEq)]
pub enum InitPolicy<T> {
    /// Set every cell to the given value. Zero is a no-op, leaving earlier steps in place
    Constant(T),

    /// Copy the given rows into the matrix. There must be exactly `height` rows
    /// of exactly `width` elements each
    Data(Vec<Vec<T>>),
}

/// A dense 2D grid of numbers with bounds-checked access.
///
/// Storage is shared between a matrix and every view produced by [`Matrix2D::slice`]:
/// writing through a view is visible in the parent and vice versa. Storage is
/// reference counted without locking, so matrices are neither `Send` nor `Sync`.
/// Because of this, `&Matrix2D` does not mean read-only: [`Matrix2D::slice`] takes
/// `&self` and returns a view that can be written to.
///
/// Cells are addressed with [`Position`] as `(row, column)`, with row 0 at the top.
pub struct Matrix2D<T: Numeric> {
    buffer: Rc<RefCell<Vec<T>>>,
    /// Distance between the starts of consecutive rows in `buffer`
    stride: usize,
    /// Index of this matrix's (0, 0) cell in `buffer`
    origin: usize,
    shape: Shape,
}

impl<T: Numeric> Matrix2D<T> {
    /// Create a matrix of the given shape, zeroed and then initialized by each policy in turn.
    /// Returns an error if any [`InitPolicy::Data`] does not match `shape`
    pub fn new<I>(shape: Shape, policies: I) -> MatrixResult<Self>
    where
        I: IntoIterator<Item = InitPolicy<T>>,
    {
        let mut matrix = Self::zeros(shape);
        for policy in policies {
            matrix.apply(policy).map_err(|err| {
                debug!(%shape, %err, "rejected initialization");
                err
            })?;
        }
        trace!(%shape, "built matrix");
        Ok(matrix)
    }

    /// Create a matrix of the given shape filled with zero
    pub fn zeros(shape: Shape) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(vec![T::default(); shape.len()])),
            stride: shape.width,
            origin: 0,
            shape,
        }
    }

    /// Create a matrix from a list of rows, inferring its shape.
    /// Returns an error if `rows` is empty or ragged
    pub fn from_rows(rows: Vec<Vec<T>>) -> MatrixResult<Self> {
        let shape = Shape::new(rows.first().map_or(0, Vec::len), rows.len());
        Self::new(shape, [InitPolicy::Data(rows)])
    }

    fn apply(&mut self, policy: InitPolicy<T>) -> MatrixResult {
        match policy {
            // the buffer starts zeroed, so a zero constant leaves it untouched
            InitPolicy::Constant(k) if k == T::default() => {}
            InitPolicy::Constant(k) => self.fill(k),
            InitPolicy::Data(rows) => {
                self.check_data(&rows)?;
                let mut buffer = self.buffer.borrow_mut();
                for (r, row) in rows.iter().enumerate() {
                    let start = self.origin + r * self.stride;
                    buffer[start..start + self.shape.width].copy_from_slice(row);
                }
            }
        }
        Ok(())
    }

    /// Make sure every row of `rows` is present and has the right length
    fn check_data(&self, rows: &[Vec<T>]) -> MatrixResult {
        if rows.is_empty() || rows.len() != self.shape.height {
            return Err(ShapeMismatch {
                axis: Axis::Row,
                expected: self.shape.height,
                found: rows.len(),
            });
        }
        match rows.iter().find(|row| row.len() != self.shape.width) {
            Some(row) => Err(ShapeMismatch {
                axis: Axis::Column,
                expected: self.shape.width,
                found: row.len(),
            }),
            None => Ok(()),
        }
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: T) {
        let mut buffer = self.buffer.borrow_mut();
        for r in 0..self.shape.height {
            let start = self.origin + r * self.stride;
            buffer[start..start + self.shape.width].fill(value);
        }
    }

    /// Index into `buffer` for `position`, if it lies inside the matrix
    fn index_of(&self, position: Position) -> Option<usize> {
        self.shape
            .contains(position)
            .then(|| self.origin + position.row as usize * self.stride + position.column as usize)
    }

    fn out_of_bounds(&self, at: Position, region: Shape) -> MatrixError {
        let err = OutOfBounds {
            at,
            region,
            shape: self.shape,
        };
        debug!(%err, "rejected access");
        err
    }

    /// Get the value at `position`
    pub fn at(&self, position: Position) -> MatrixResult<T> {
        let index = self
            .index_of(position)
            .ok_or_else(|| self.out_of_bounds(position, Shape::new(1, 1)))?;
        Ok(self.buffer.borrow()[index])
    }

    /// Overwrite the value at `position`
    pub fn set(&mut self, position: Position, value: T) -> MatrixResult {
        let index = self
            .index_of(position)
            .ok_or_else(|| self.out_of_bounds(position, Shape::new(1, 1)))?;
        self.buffer.borrow_mut()[index] = value;
        Ok(())
    }

    /// Get a view of the cells in the given inclusive column and row ranges.
    ///
    /// No elements are copied: the view shares storage with `self`, so writes through
    /// either one are visible through the other. `start..=start - 1` selects nothing.
    ///
    /// ```
    /// # use planar::matrix::Matrix2D;
    /// let m = Matrix2D::from_rows(vec![
    ///     vec![1, 0, 0, 0],
    ///     vec![0, 1, 0, 0],
    ///     vec![0, 0, 1, 0],
    ///     vec![0, 0, 0, 1],
    /// ])?;
    /// let s = m.slice(1..=3, 0..=1)?;
    /// assert_eq!(s.values(), vec![vec![0, 0, 0], vec![1, 0, 0]]);
    /// # Ok::<(), planar::error::MatrixError>(())
    /// ```
    pub fn slice(
        &self,
        columns: RangeInclusive<isize>,
        rows: RangeInclusive<isize>,
    ) -> MatrixResult<Self> {
        let (column, width) = Self::checked_range(Axis::Column, &columns, self.shape.width)?;
        let (row, height) = Self::checked_range(Axis::Row, &rows, self.shape.height)?;
        let shape = Shape::new(width, height);
        trace!(%shape, ?columns, ?rows, "sliced matrix");

        Ok(Self {
            buffer: Rc::clone(&self.buffer),
            stride: self.stride,
            origin: self.origin + row * self.stride + column,
            shape,
        })
    }

    /// Validate an inclusive range against an axis of length `limit`, returning its start and extent
    fn checked_range(
        axis: Axis,
        range: &RangeInclusive<isize>,
        limit: usize,
    ) -> MatrixResult<(usize, usize)> {
        let (start, end) = (*range.start(), *range.end());
        let invalid = || {
            let err = InvalidRange {
                axis,
                start,
                end,
                limit,
            };
            debug!(%err, "rejected slice");
            err
        };

        let extent = end
            .checked_sub(start)
            .and_then(|d| d.checked_add(1))
            .ok_or_else(invalid)?;
        let (start, extent) = (
            usize::try_from(start).map_err(|_| invalid())?,
            usize::try_from(extent).map_err(|_| invalid())?,
        );
        if extent > limit || start + extent > limit {
            return Err(invalid());
        }
        Ok((start, extent))
    }

    /// Paste `source` into this matrix with its top-left cell at `at`.
    ///
    /// The whole of `source` must fit: it may touch the far edges but not cross them.
    /// `source` is copied out before anything is written, so it may be a view
    /// overlapping this matrix.
    pub fn update(&mut self, at: Position, source: &Matrix2D<T>) -> MatrixResult {
        let region = source.shape;
        let fits = self.shape.contains(at)
            && at.column as usize + region.width <= self.shape.width
            && at.row as usize + region.height <= self.shape.height;
        if !fits {
            return Err(self.out_of_bounds(at, region));
        }

        let snapshot = source.values();
        let mut buffer = self.buffer.borrow_mut();
        for (r, row) in snapshot.iter().enumerate() {
            let start = self.origin + (at.row as usize + r) * self.stride + at.column as usize;
            buffer[start..start + region.width].copy_from_slice(row);
        }
        trace!(%at, %region, shape = %self.shape, "updated matrix");
        Ok(())
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Iterate over copies of each row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Vec<T>> + '_ {
        (0..self.shape.height).map(|r| {
            let start = self.origin + r * self.stride;
            self.buffer.borrow()[start..start + self.shape.width].to_vec()
        })
    }

    /// The full contents of the matrix, row-major
    pub fn values(&self) -> Vec<Vec<T>> {
        self.rows().collect()
    }

    /// Iterate over every valid position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        self.shape.positions()
    }

    /// Returns if another live matrix shares storage with this one.
    /// This holds for a parent with live slices as well as for the slices themselves
    pub fn is_shared(&self) -> bool {
        Rc::strong_count(&self.buffer) > 1
    }

    /// Copy the contents into new storage that is not shared with any other matrix
    pub fn detach(&self) -> Self {
        let buffer: Vec<T> = self.rows().flatten().collect();
        Self {
            buffer: Rc::new(RefCell::new(buffer)),
            stride: self.shape.width,
            origin: 0,
            shape: self.shape,
        }
    }
}

/// Cloning copies the contents. Use [`Matrix2D::slice`] to share storage
impl<T: Numeric> Clone for Matrix2D<T> {
    fn clone(&self) -> Self {
        self.detach()
    }
}

impl<T: Numeric> PartialEq for Matrix2D<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.rows().eq(other.rows())
    }
}

impl<T: Numeric> Debug for Matrix2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matrix2D")
            .field("shape", &self.shape)
            .field("values", &self.values())
            .finish()
    }
}

/// Human-readable dump for debugging. This is not a parseable format
impl<T: Numeric> Display for Matrix2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        for row in self.rows() {
            for value in row {
                write!(f, " {value:04} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "shape: {}", self.shape)
    }
}
