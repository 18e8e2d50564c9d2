// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use anyhow::Result;

use planar::error::MatrixError;
use planar::matrix::{InitPolicy, Matrix2D};
use planar::rect::Rect2D;
use planar::shape::{Position, Shape};
use planar::vector::Vector2D;

/// Paste every cell a rectangle covers, using the rectangle to compute the paste offset
#[test]
fn paste_rect_footprint() -> Result<()> {
    let area = Rect2D::new(Vector2D::new(1, 2), Vector2D::new(3, 2));
    let mut grid = Matrix2D::<u16>::zeros(Shape::new(6, 5));

    let size = area.size();
    let block = Matrix2D::new(
        Shape::new(size.x as usize, size.y as usize),
        [InitPolicy::Constant(1)],
    )?;
    let origin = area.position();
    grid.update(Position::new(origin.y, origin.x), &block)?;

    for p in grid.positions() {
        let covered = area.has_point(Vector2D::new(p.column, p.row));
        assert_eq!(grid.at(p)?, covered as u16, "mismatch at {p}");
    }
    Ok(())
}

/// Patch a sub-region by slicing it out and writing through the view
#[test]
fn patch_through_slice() -> Result<()> {
    let grid = Matrix2D::new(Shape::new(4, 4), [InitPolicy::Constant(0.25f32)])?;
    let mut corner = grid.slice(2..=3, 2..=3)?;

    for p in corner.positions().collect::<Vec<_>>() {
        corner.set(p, 1.0)?;
    }
    drop(corner);

    assert!(!grid.is_shared(), "dropping the last view releases shared storage");
    assert_eq!(
        grid.values(),
        vec![
            vec![0.25, 0.25, 0.25, 0.25],
            vec![0.25, 0.25, 0.25, 0.25],
            vec![0.25, 0.25, 1.0, 1.0],
            vec![0.25, 0.25, 1.0, 1.0],
        ]
    );
    Ok(())
}

#[test]
fn errors_render() {
    let err = Matrix2D::<i32>::zeros(Shape::new(2, 2))
        .at(Position::new(2, 0))
        .unwrap_err();
    assert!(matches!(err, MatrixError::OutOfBounds { .. }));
    assert_eq!(
        err.to_string(),
        "Region (h:1,w:1) at (row:2,column:0) is out of bounds for matrix of shape (h:2,w:2)"
    );

    let err = Matrix2D::<i32>::zeros(Shape::new(2, 2))
        .slice(0..=2, 0..=1)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid column range 0..=2 on an axis of length 2"
    );
}
