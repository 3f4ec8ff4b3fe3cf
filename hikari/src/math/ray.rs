use num::traits::Float;

use super::point::Point3;
use super::vector::Vec3;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays.html

/// A ray with a valid parametric interval `[t_min, t_max]`.
///
/// The component-wise reciprocal of the direction is computed once at
/// construction for the bounding box slab test. A zero direction component
/// yields an infinite reciprocal, which the slab test relies on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<T>
where
    T: Float,
{
    pub o: Point3<T>,
    pub d: Vec3<T>,
    pub inv_dir: Vec3<T>,
    pub t_min: T,
    pub t_max: T,
}

impl<T> Ray<T>
where
    T: Float,
{
    /// Creates a new `Ray`.
    pub fn new(o: Point3<T>, d: Vec3<T>, t_min: T, t_max: T) -> Self {
        let inv_dir = Vec3::new(T::one() / d.x, T::one() / d.y, T::one() / d.z);
        let ret = Self {
            o,
            d,
            inv_dir,
            t_min,
            t_max,
        };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Checks if any of the members in this `Ray` contain NaNs.
    ///
    /// `inv_dir` is excluded since it is infinite for axis-parallel rays.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans() || self.t_min.is_nan() || self.t_max.is_nan()
    }

    /// Finds the [Point3] on this `Ray` at distance `t`.
    pub fn point(&self, t: T) -> Point3<T> {
        self.o + self.d * t
    }
}

impl<T> Default for Ray<T>
where
    T: Float,
{
    /// Creates a new infinite `Ray` from origin toward positive Y.
    fn default() -> Self {
        Self::new(
            Point3::zeros(),
            Vec3::new(T::zero(), T::one(), T::zero()),
            T::zero(),
            T::infinity(),
        )
    }
}
