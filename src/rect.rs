// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use num_traits::{Float, Num};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::vector::Vector2D;

/// An axis-aligned rectangle, defined by its top-left `position` and its `size`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect2D<T> {
    position: Vector2D<T>,
    size: Vector2D<T>,
}

impl<T: Copy> Rect2D<T> {
    pub const fn new(position: Vector2D<T>, size: Vector2D<T>) -> Self {
        Self { position, size }
    }

    pub fn position(&self) -> Vector2D<T> {
        self.position
    }

    /// Width and height as `x` and `y`
    pub fn size(&self) -> Vector2D<T> {
        self.size
    }
}

impl<T: Num + PartialOrd + Copy> Rect2D<T> {
    /// The corner opposite `position`
    pub fn end(&self) -> Vector2D<T> {
        self.position + self.size
    }

    /// Returns if the rectangle contains `point`.
    /// Points on the right and bottom edges are not included,
    /// and a rectangle with a negative size contains nothing
    pub fn has_point(&self, point: Vector2D<T>) -> bool {
        if self.size.x < T::zero() || self.size.y < T::zero() {
            return false;
        }
        let end = self.end();
        point.x >= self.position.x && point.y >= self.position.y && point.x < end.x && point.y < end.y
    }

    /// `position + size / 2`. Integer rectangles round towards `position`
    pub fn center(&self) -> Vector2D<T> {
        self.position + self.size / (T::one() + T::one())
    }

    pub fn area(&self) -> T {
        self.size.x * self.size.y
    }

    /// An equivalent rectangle with a non-negative size, anchored at its top-left corner.
    /// `(25, 25, -100, -50)` becomes `(-75, -25, 100, 50)`
    pub fn abs(&self) -> Self {
        let min_zero = |v: T| if v < T::zero() { v } else { T::zero() };
        Self {
            position: Vector2D::new(
                self.position.x + min_zero(self.size.x),
                self.position.y + min_zero(self.size.y),
            ),
            size: self.size.abs(),
        }
    }
}

impl<T: Float> Rect2D<T>
where
    Standard: Distribution<T>,
{
    /// Uniformly sample a point inside the rectangle.
    /// The rectangle is normalized with [`Rect2D::abs`] first
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector2D<T> {
        let rect = self.abs();
        let (u, v): (T, T) = (rng.gen(), rng.gen());
        Vector2D::new(
            rect.position.x + rect.size.x * u,
            rect.position.y + rect.size.y * v,
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn integer_rect() {
        let r = Rect2D::new(Vector2D::new(1, 1), Vector2D::new(2, 3));

        assert_eq!(r.area(), 6);
        assert!(r.has_point(Vector2D::new(2, 2)));
        assert!(!r.has_point(Vector2D::new(6, 2)));
        assert_eq!(r.center(), Vector2D::new(2, 2));
        assert_eq!(r.end(), Vector2D::new(3, 4));
    }

    #[test]
    fn has_point_excludes_far_edges() {
        let r = Rect2D::new(Vector2D::new(0, 0), Vector2D::new(4, 4));

        assert!(r.has_point(Vector2D::new(0, 0)), "top-left corner is inside");
        assert!(r.has_point(Vector2D::new(3, 3)));
        assert!(!r.has_point(Vector2D::new(4, 0)), "right edge is outside");
        assert!(!r.has_point(Vector2D::new(0, 4)), "bottom edge is outside");
        assert!(!r.has_point(Vector2D::new(-1, 0)));

        let negative = Rect2D::new(Vector2D::new(0, 0), Vector2D::new(-4, 4));
        assert!(!negative.has_point(Vector2D::new(-1, 1)));
    }

    #[test]
    fn abs() {
        let r = Rect2D::new(Vector2D::new(25, 25), Vector2D::new(-100, -50));
        assert_eq!(
            r.abs(),
            Rect2D::new(Vector2D::new(-75, -25), Vector2D::new(100, 50))
        );

        let positive = Rect2D::new(Vector2D::new(1, 2), Vector2D::new(3, 4));
        assert_eq!(positive.abs(), positive);
    }

    #[test]
    fn random_points_stay_inside() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let r = Rect2D::new(Vector2D::new(10.0, -5.0), Vector2D::new(-4.0, 2.5));
        let normalized = r.abs();

        for _ in 0..1000 {
            let p = r.random_point(&mut rng);
            assert!(normalized.has_point(p), "{p} is outside {normalized:?}");
        }
    }
}
