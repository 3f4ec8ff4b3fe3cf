use approx::{AbsDiffEq, RelativeEq};
use num::traits::Float;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// Generic three-component vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3<T>
where
    T: Float,
{
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Shorthand constructor for [Vec3].
#[inline]
pub fn vec3<T>(x: T, y: T, z: T) -> Vec3<T>
where
    T: Float,
{
    Vec3::new(x, y, z)
}

impl<T> Vec3<T>
where
    T: Float,
{
    /// Constructs a new vector.
    ///
    /// Has a debug assert that checks for NaNs.
    pub fn new(x: T, y: T, z: T) -> Self {
        let v = Self { x, y, z };
        debug_assert!(!v.has_nans());
        v
    }

    /// Constructs a new vector of zeros.
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

    /// Returns the dot product of the two vectors.
    pub fn dot(&self, other: Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of the two vectors.
    pub fn cross(&self, other: Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the vector's squared length.
    pub fn len_sqr(&self) -> T {
        self.dot(*self)
    }

    /// Returns the vector's length.
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }

    /// Returns the normalized vector.
    pub fn normalized(&self) -> Vec3<T> {
        *self / self.len()
    }

    /// Returns the component-wise minimum of the two vectors.
    pub fn min(&self, other: Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Returns the component-wise maximum of the two vectors.
    pub fn max(&self, other: Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }
}

impl<T> Index<usize> for Vec3<T>
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
                panic!("Out of bounds Vec3 access with component {}", component);
            }
        }
    }
}

impl<T> Add for Vec3<T>
where
    T: Float,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T> AddAssign for Vec3<T>
where
    T: Float,
{
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T> Sub for Vec3<T>
where
    T: Float,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T> SubAssign for Vec3<T>
where
    T: Float,
{
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T> Neg for Vec3<T>
where
    T: Float,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T> Mul<T> for Vec3<T>
where
    T: Float,
{
    type Output = Self;

    fn mul(self, other: T) -> Self {
        Self::new(self.x * other, self.y * other, self.z * other)
    }
}

impl<T> MulAssign<T> for Vec3<T>
where
    T: Float,
{
    fn mul_assign(&mut self, other: T) {
        *self = *self * other;
    }
}

impl<T> Div<T> for Vec3<T>
where
    T: Float,
{
    type Output = Self;

    fn div(self, other: T) -> Self {
        Self::new(self.x / other, self.y / other, self.z / other)
    }
}

impl<T> DivAssign<T> for Vec3<T>
where
    T: Float,
{
    fn div_assign(&mut self, other: T) {
        *self = *self / other;
    }
}

impl AbsDiffEq for Vec3<f32> {
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

impl RelativeEq for Vec3<f32> {
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
