use crate::ray::Ray;
use glam::Vec3;

/// An axis-aligned bounding box. `min` is componentwise below `max`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    // Create a union AABB of two AABBs that surrounds both of them
    pub fn union(self, other: AABB) -> Self {
        AABB::new(self.min.min(other.min), self.max.max(other.max))
    }

    pub fn point_union(self, other: Vec3) -> Self {
        AABB::new(self.min.min(other), self.max.max(other))
    }

    // Slab test, taken from tavianator.com
    pub fn has_intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> bool {
        let t1 = (self.min - ray.origin) * ray.inv_direction;
        let t2 = (self.max - ray.origin) * ray.inv_direction;

        // X
        let tmin = f32::min(t1.x(), t2.x());
        let tmax = f32::max(t1.x(), t2.x());

        // Y
        let tmin = f32::max(tmin, f32::min(t1.y(), t2.y()));
        let tmax = f32::min(tmax, f32::max(t1.y(), t2.y()));

        // Z
        let tmin = f32::max(tmin, f32::min(t1.z(), t2.z()));
        let tmax = f32::min(tmax, f32::max(t1.z(), t2.z()));

        tmax >= f32::max(tmin, t_min) && tmin <= t_max
    }
}
