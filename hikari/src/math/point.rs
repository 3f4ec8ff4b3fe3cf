use approx::{AbsDiffEq, RelativeEq};
use num::traits::Float;
use std::ops::{Add, AddAssign, Index, Sub, SubAssign};

use super::vector::Vec3;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

/// Generic three-dimensional point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T>
where
    T: Float,
{
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Shorthand constructor for [Point3].
#[inline]
pub fn point3<T>(x: T, y: T, z: T) -> Point3<T>
where
    T: Float,
{
    Point3::new(x, y, z)
}

impl<T> Point3<T>
where
    T: Float,
{
    /// Constructs a new point.
    ///
    /// Has a debug assert that checks for NaNs.
    pub fn new(x: T, y: T, z: T) -> Self {
        let p = Self { x, y, z };
        debug_assert!(!p.has_nans());
        p
    }

    /// Constructs a new point of zeros.
    pub fn zeros() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Returns `true` if any component is NaN.
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns the distance to the other point.
    pub fn dist(&self, other: Point3<T>) -> T {
        (*self - other).len()
    }

    /// Returns the component-wise minimum of the two points.
    pub fn min(&self, other: Point3<T>) -> Point3<T> {
        Point3 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Returns the component-wise maximum of the two points.
    pub fn max(&self, other: Point3<T>) -> Point3<T> {
        Point3 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }
}

impl<T> Index<usize> for Point3<T>
where
    T: Float,
{
    type Output = T;

    fn index(&self, component: usize) -> &Self::Output {
        match component {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => {
                panic!("Out of bounds Point3 access with component {}", component);
            }
        }
    }
}

impl<T> Add<Vec3<T>> for Point3<T>
where
    T: Float,
{
    type Output = Self;

    fn add(self, other: Vec3<T>) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T> AddAssign<Vec3<T>> for Point3<T>
where
    T: Float,
{
    fn add_assign(&mut self, other: Vec3<T>) {
        *self = *self + other;
    }
}

impl<T> Sub for Point3<T>
where
    T: Float,
{
    type Output = Vec3<T>;

    fn sub(self, other: Self) -> Vec3<T> {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T> Sub<Vec3<T>> for Point3<T>
where
    T: Float,
{
    type Output = Self;

    fn sub(self, other: Vec3<T>) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T> SubAssign<Vec3<T>> for Point3<T>
where
    T: Float,
{
    fn sub_assign(&mut self, other: Vec3<T>) {
        *self = *self - other;
    }
}

impl AbsDiffEq for Point3<f32> {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Point3<f32> {
    fn default_max_relative() -> Self::Epsilon {
        f32::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
