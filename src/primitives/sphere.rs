use crate::material::Material;
use crate::primitives::{Intersect, PrimitiveKind, AABB};
use crate::ray::{Hit, Ray};
use glam::Vec3;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Intersect for Sphere {
    fn intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - a * c;

        if discriminant > 0.0 {
            let t_1 = (-b - discriminant.sqrt()) / a;
            let t_2 = (-b + discriminant.sqrt()) / a;

            for &t in &[t_1, t_2] {
                if t_min < t && t < t_max {
                    let point = ray.point_at_parameter(t);

                    return Some(Hit {
                        t,
                        point,
                        normal: (point - self.center) / self.radius,
                        material: Some(Arc::clone(&self.material)),
                    });
                }
            }
        }

        None
    }

    fn has_intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> bool {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - a * c;

        if discriminant <= 0.0 {
            return false;
        }

        let t_1 = (-b - discriminant.sqrt()) / a;
        let t_2 = (-b + discriminant.sqrt()) / a;

        (t_min < t_1 && t_1 < t_max) || (t_min < t_2 && t_2 < t_max)
    }

    fn bounds(&self, _t0: f32, _t1: f32) -> Option<AABB> {
        Some(AABB::new(
            self.center - Vec3::splat(self.radius),
            self.center + Vec3::splat(self.radius),
        ))
    }

    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Sphere
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::NullMaterial;
    use glam::vec3;

    fn unit_sphere() -> Sphere {
        Sphere::new(vec3(0.0, 0.0, -5.0), 1.0, Arc::new(NullMaterial))
    }

    #[test]
    fn head_on_hit_reports_near_surface() {
        let sphere = unit_sphere();
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0));

        let hit = sphere.intersection(ray, 0.0001, 1_000_000.0).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-5);
        assert!((hit.normal - vec3(0.0, 0.0, 1.0)).length() < 1e-5);
        assert!(sphere.has_intersection(ray, 0.0001, 1_000_000.0));
    }

    #[test]
    fn interval_is_open() {
        let sphere = unit_sphere();
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0));

        // Entry point sits at exactly t == 4; both bounds exclude it, the
        // exit point at t == 6 is still inside the interval
        let hit = sphere.intersection(ray, 4.0, 1_000_000.0).unwrap();
        assert!((hit.t - 6.0).abs() < 1e-5);
        assert!(sphere.intersection(ray, 4.0, 6.0).is_none());
        assert!(!sphere.has_intersection(ray, 4.0, 6.0));
    }

    #[test]
    fn bounds_is_center_plus_minus_radius() {
        let bounds = unit_sphere().bounds(0.0, 1.0).unwrap();
        assert_eq!(bounds.min, vec3(-1.0, -1.0, -6.0));
        assert_eq!(bounds.max, vec3(1.0, 1.0, -4.0));
    }
}
