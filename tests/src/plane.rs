#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use hikari::hit::HitRecord;
    use hikari::math::{point3, vec3, Point3, Ray};
    use hikari::shapes::{Plane, Shape, Sphere};

    #[test]
    fn head_on_hit() {
        let p = Plane::new(Point3::zeros(), vec3(0.0, 0.0, -1.0), 2);
        let r = Ray::new(point3(0.0, 0.0, -5.0), vec3(0.0, 0.0, 1.0), 0.0, f32::INFINITY);

        let mut hit = HitRecord::new();
        assert!(p.intersect(r, &mut hit));
        assert!(hit.did_hit);
        assert_eq!(hit.t, 5.0);
        assert_abs_diff_eq!(hit.p, point3(0.0, 0.0, 0.0), epsilon = 1e-6);
        // The stored plane normal is returned as-is
        assert_eq!(hit.n, vec3(0.0, 0.0, -1.0));
        assert_eq!(hit.material_index, 2);
        assert!(p.intersect_any(r));
    }

    #[test]
    fn oblique_hit() {
        let p = Plane::new(point3(0.0, 1.0, 0.0), vec3(0.0, 1.0, 0.0), 0);
        let r = Ray::new(
            point3(0.0, 3.0, 0.0),
            vec3(1.0, -1.0, 0.0),
            0.0,
            f32::INFINITY,
        );

        let mut hit = HitRecord::new();
        assert!(p.intersect(r, &mut hit));
        assert_eq!(hit.t, 2.0);
        assert_abs_diff_eq!(hit.p, point3(2.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn parallel_misses() {
        let p = Plane::new(point3(0.0, 1.0, 0.0), vec3(0.0, 1.0, 0.0), 0);
        // Offset from the plane, so t is infinite
        let r = Ray::new(Point3::zeros(), vec3(1.0, 0.0, 0.0), 0.0, f32::INFINITY);
        assert!(!p.intersect_any(r));

        let mut hit = HitRecord::new();
        assert!(!p.intersect(r, &mut hit));
        assert!(!hit.did_hit);
    }

    #[test]
    fn coplanar_misses() {
        let p = Plane::new(Point3::zeros(), vec3(0.0, 1.0, 0.0), 0);
        // Within the plane, so t is NaN
        let r = Ray::new(Point3::zeros(), vec3(1.0, 0.0, 0.0), 0.0, f32::INFINITY);
        assert!(!p.intersect_any(r));

        let mut hit = HitRecord::new();
        assert!(!p.intersect(r, &mut hit));
        assert!(!hit.did_hit);
        assert!(!hit.p.has_nans());
    }

    #[test]
    fn behind_origin_misses() {
        let p = Plane::new(point3(0.0, 0.0, -1.0), vec3(0.0, 0.0, 1.0), 0);
        let r = Ray::new(Point3::zeros(), vec3(0.0, 0.0, 1.0), 0.0, f32::INFINITY);
        assert!(!p.intersect_any(r));
    }

    #[test]
    fn keeps_closer_hit_from_other_shape() {
        let s = Sphere::new(point3(0.0, 0.0, 2.0), 1.0, 1);
        let p = Plane::new(point3(0.0, 0.0, 5.0), vec3(0.0, 0.0, -1.0), 2);
        let r = Ray::new(Point3::zeros(), vec3(0.0, 0.0, 1.0), 0.0, f32::INFINITY);

        let mut hit = HitRecord::new();
        assert!(s.intersect(r, &mut hit));
        assert!(p.intersect(r, &mut hit));
        assert_eq!(hit.t, 1.0);
        assert_eq!(hit.material_index, 1);
    }
}
