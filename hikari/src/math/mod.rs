mod bounds;
mod point;
mod ray;
mod vector;

pub use bounds::Bounds3;
pub use point::{point3, Point3};
pub use ray::Ray;
pub use vector::{vec3, Vec3};
