// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use num_traits::{Float, Num, Signed};

/// Distances below this are treated as zero by [`Vector2D::move_toward`]
const CMP_EPSILON: f64 = 1e-5;

/// A 2-component value used for points, directions and sizes.
///
/// `y` grows downward, so [`Vector2D::up`] points towards negative `y`.
/// This type carries geometry only; matrix cells are addressed with
/// [`Position`](crate::shape::Position).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2D<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2D<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Num + Copy> Vector2D<T> {
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }
    pub fn one() -> Self {
        Self::new(T::one(), T::one())
    }
    pub fn right() -> Self {
        Self::new(T::one(), T::zero())
    }
    pub fn down() -> Self {
        Self::new(T::zero(), T::one())
    }

    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product of both vectors embedded in the XY plane.
    /// This is the signed area of the parallelogram they span; positive if `other` is
    /// clockwise from `self`
    pub fn cross(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    pub fn distance_squared_to(&self, other: Self) -> T {
        (other - *self).length_squared()
    }
}

impl<T: Signed + Copy> Vector2D<T> {
    pub fn left() -> Self {
        Self::new(-T::one(), T::zero())
    }
    pub fn up() -> Self {
        Self::new(T::zero(), -T::one())
    }
}

impl<T: Num + PartialOrd + Copy> Vector2D<T> {
    /// Component-wise absolute value
    pub fn abs(&self) -> Self {
        let abs = |v: T| if v < T::zero() { T::zero() - v } else { v };
        Self::new(abs(self.x), abs(self.y))
    }
}

impl<T: Float> Vector2D<T> {
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    pub fn distance_to(&self, other: Self) -> T {
        self.distance_squared_to(other).sqrt()
    }

    /// Unit vector in the same direction. A zero-length vector is returned unchanged
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len.is_zero() {
            *self
        } else {
            *self / len
        }
    }

    /// Linear interpolation towards `to` by `weight` in `0..=1`
    pub fn lerp(&self, to: Self, weight: T) -> Self {
        *self + (to - *self) * weight
    }

    /// Move towards `to` by at most `delta`, landing exactly on `to` once it is within reach
    pub fn move_toward(&self, to: Self, delta: T) -> Self {
        let vd = to - *self;
        let len = vd.length();
        let epsilon = T::from(CMP_EPSILON).unwrap_or_else(T::epsilon);
        if len <= delta || len < epsilon {
            to
        } else {
            *self + vd / len * delta
        }
    }

    /// Normalized direction from `self` to `to`
    pub fn direction_to(&self, to: Self) -> Self {
        (to - *self).normalized()
    }
}

impl<T> From<(T, T)> for Vector2D<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Display> Display for Vector2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Num> Add for Vector2D<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Num + Copy> AddAssign for Vector2D<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Num> Sub for Vector2D<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Num + Copy> SubAssign for Vector2D<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Num + Copy> Mul<T> for Vector2D<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T: Num + Copy> Div<T> for Vector2D<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vector2D<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
