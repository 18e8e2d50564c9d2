// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Display, Formatter};

use itertools::iproduct;

/// One of the two axes of a grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

/// The extent of a grid: `width` columns by `height` rows
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    pub width: usize,
    pub height: usize,
}

impl Shape {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of cells in the grid
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the grid along `axis`.
    /// Rows are counted by `height` and columns by `width`
    pub fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        }
    }

    /// Returns if `position` addresses a cell inside this shape
    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.column >= 0
            && (position.row as usize) < self.height
            && (position.column as usize) < self.width
    }

    /// Iterate over every position in the shape in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.height, 0..self.width)
            .map(|(r, c)| Position::new(r as isize, c as isize))
    }
}

impl From<[usize; 2]> for Shape {
    fn from([width, height]: [usize; 2]) -> Self {
        Shape { width, height }
    }
}

impl From<Shape> for [usize; 2] {
    fn from(value: Shape) -> Self {
        [value.width, value.height]
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(h:{},w:{})", self.height, self.width)
    }
}

/// A single cell coordinate. Rows and columns are signed so that requests
/// left of or above the grid can be represented and rejected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: isize,
    pub column: isize,
}

impl Position {
    pub const fn new(row: isize, column: isize) -> Self {
        Self { row, column }
    }

    /// Move the position by the given number of rows and columns
    pub const fn offset(self, rows: isize, columns: isize) -> Self {
        Self {
            row: self.row + rows,
            column: self.column + columns,
        }
    }
}

impl From<(isize, isize)> for Position {
    fn from((row, column): (isize, isize)) -> Self {
        Position { row, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row:{},column:{})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn contains_is_half_open() {
        let shape = Shape::new(3, 2);

        assert!(shape.contains(Position::new(0, 0)));
        assert!(shape.contains(Position::new(1, 2)));
        assert!(!shape.contains(Position::new(2, 0)), "row == height is outside");
        assert!(!shape.contains(Position::new(0, 3)), "column == width is outside");
        assert!(!shape.contains(Position::new(-1, 0)));
        assert!(!shape.contains(Position::new(0, -1)));
    }

    #[test]
    fn positions_are_row_major() {
        let positions = Shape::new(2, 2).positions().collect_vec();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
        assert_eq!(Shape::new(0, 4).positions().count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Shape::new(4, 3).to_string(), "(h:3,w:4)");
        assert_eq!(Position::new(2, -1).to_string(), "(row:2,column:-1)");
        assert_eq!(Axis::Column.to_string(), "column");
    }

    #[test]
    fn conversions() {
        assert_eq!(Shape::from([4, 3]), Shape::new(4, 3));
        assert_eq!(<[usize; 2]>::from(Shape::new(4, 3)), [4, 3]);
        assert_eq!(Position::from((1, 2)).offset(2, -3), Position::new(3, -1));
        assert_eq!(Shape::new(4, 3).extent(Axis::Row), 3);
        assert!(Shape::new(0, 3).is_empty());
    }
}
