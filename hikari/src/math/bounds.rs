use num::traits::Float;

use super::point::Point3;
use super::ray::Ray;
use super::vector::Vec3;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Bounding_Boxes.html

/// Three-dimensional axis-aligned bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3<T>
where
    T: Float,
{
    /// The minimum extent of the bounds.
    pub p_min: Point3<T>,
    /// The maximum extent of the bounds.
    pub p_max: Point3<T>,
}

impl<T> Bounds3<T>
where
    T: Float,
{
    /// Creates a new `Bounds3` spanning the two corner points.
    pub fn new(p0: Point3<T>, p1: Point3<T>) -> Self {
        Self {
            p_min: p0.min(p1),
            p_max: p0.max(p1),
        }
    }

    /// Returns the union of this `Bounds3` and a point.
    pub fn union_p(&self, p: Point3<T>) -> Self {
        Self {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }

    /// Returns the union of the two `Bounds3`.
    pub fn union_b(&self, other: Self) -> Self {
        Self {
            p_min: self.p_min.min(other.p_min),
            p_max: self.p_max.max(other.p_max),
        }
    }

    /// Returns the vector from the minimum extent to the maximum extent.
    pub fn diagonal(&self) -> Vec3<T> {
        self.p_max - self.p_min
    }

    /// Checks if `ray`'s parametric interval overlaps this `Bounds3`.
    ///
    /// Slab test using the ray's precomputed inverse direction. An axis the
    /// ray is parallel to produces infinite slab distances, which impose no
    /// constraint on the running interval. A NaN from the origin lying
    /// exactly on a slab plane drops out the same way since `Float::min`
    /// and `Float::max` return the non-NaN operand.
    pub fn intersect(&self, ray: Ray<T>) -> bool {
        let tx1 = (self.p_min.x - ray.o.x) * ray.inv_dir.x;
        let tx2 = (self.p_max.x - ray.o.x) * ray.inv_dir.x;

        let mut t_min = tx1.min(tx2);
        let mut t_max = tx1.max(tx2);

        let ty1 = (self.p_min.y - ray.o.y) * ray.inv_dir.y;
        let ty2 = (self.p_max.y - ray.o.y) * ray.inv_dir.y;

        t_min = t_min.max(ty1.min(ty2));
        t_max = t_max.min(ty1.max(ty2));

        let tz1 = (self.p_min.z - ray.o.z) * ray.inv_dir.z;
        let tz2 = (self.p_max.z - ray.o.z) * ray.inv_dir.z;

        t_min = t_min.max(tz1.min(tz2));
        t_max = t_max.min(tz1.max(tz2));

        t_max > T::zero() && t_max >= t_min
    }
}

impl<T> Default for Bounds3<T>
where
    T: Float,
{
    /// Creates a new `Bounds3` with inverted extents, i.e. an empty one.
    fn default() -> Self {
        Self {
            p_min: Point3::new(T::max_value(), T::max_value(), T::max_value()),
            p_max: Point3::new(T::min_value(), T::min_value(), T::min_value()),
        }
    }
}
