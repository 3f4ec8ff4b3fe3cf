use crate::math::{Point3, Vec3};

/// Best-hit accumulator for one intersection query.
///
/// Starts out at infinite distance and is only overwritten by strictly
/// closer hits, so folding a sequence of shapes through the same record
/// yields the globally closest intersection regardless of test order. The
/// record is never reset between shapes within a query.
pub struct HitRecord {
    /// Distance to the closest hit found so far.
    pub t: f32,
    /// World position of the hit.
    pub p: Point3<f32>,
    /// Surface normal at the hit.
    ///
    /// Not guaranteed unit length for planes and triangles, which return
    /// their stored normal as-is.
    pub n: Vec3<f32>,
    /// Material of the hit shape.
    pub material_index: u32,
    /// Whether any shape has committed a hit to this record.
    pub did_hit: bool,
}

impl HitRecord {
    /// Creates a new empty `HitRecord`.
    pub fn new() -> Self {
        Self {
            t: f32::INFINITY,
            p: Point3::zeros(),
            n: Vec3::zeros(),
            material_index: 0,
            did_hit: false,
        }
    }

    /// Commits a hit if it is strictly closer than the current one.
    pub fn record(&mut self, t: f32, p: Point3<f32>, n: Vec3<f32>, material_index: u32) {
        if t < self.t {
            self.t = t;
            self.p = p;
            self.n = n;
            self.material_index = material_index;
            self.did_hit = true;
        }
    }
}

impl Default for HitRecord {
    fn default() -> Self {
        Self::new()
    }
}
