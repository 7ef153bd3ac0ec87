use crate::material::Material;
use crate::primitives::{Intersect, PrimitiveKind, AABB};
use crate::ray::{Hit, Ray};
use anyhow::{ensure, Result};
use glam::Vec3;
use std::sync::Arc;

/// Determinant tolerance for the parallel-ray rejection. Not configurable;
/// boundary behavior depends on this exact value.
const EPSILON: f32 = 1e-7;

/// A triangle with a flat, precomputed face normal.
///
/// The normal is `(b - a).cross(c - a).normalize()`, computed once at
/// construction and reported for every hit. There are no per-vertex
/// normals, so shading on top of this primitive is faceted.
#[derive(Clone, Debug)]
pub struct Triangle {
    a: Vec3,
    b: Vec3,
    c: Vec3,
    normal: Vec3,
    material: Arc<dyn Material>,
}

impl Triangle {
    /// Creates a triangle from three vertices.
    ///
    /// Degenerate (zero-area) input is accepted as is: the stored normal is
    /// then non-finite and the intersection test reports misses rather than
    /// panicking. Use [`Triangle::try_new`] to reject such input instead.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, material: Arc<dyn Material>) -> Self {
        let normal = (b - a).cross(c - a).normalize();

        Self {
            a,
            b,
            c,
            normal,
            material,
        }
    }

    /// Creates a triangle, rejecting collinear or coincident vertices.
    pub fn try_new(a: Vec3, b: Vec3, c: Vec3, material: Arc<dyn Material>) -> Result<Self> {
        let triangle = Self::new(a, b, c, material);
        ensure!(
            !triangle.is_degenerate(),
            "degenerate triangle: {:?}, {:?}, {:?}",
            a,
            b,
            c
        );

        Ok(triangle)
    }

    /// Whether the vertices span zero area
    pub fn is_degenerate(&self) -> bool {
        (self.b - self.a)
            .cross(self.c - self.a)
            .length_squared()
            <= EPSILON * EPSILON
    }

    /// The precomputed unit face normal
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Intersect for Triangle {
    // Möller-Trumbore: solve for the barycentric coordinates (u, v) and the
    // ray parameter t in one go, rejecting as early as possible
    fn intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;

        let h = ray.direction.cross(edge2);
        let a = edge1.dot(h);

        // Ray parallel to the triangle's plane, or degenerate triangle
        if a.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin - self.a;
        let u = f * s.dot(h);

        if u < 0.0 || u > 1.0 {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction.dot(q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);

        // Open on both ends: boundary-equal t is a miss
        if t_min < t && t < t_max {
            Some(Hit {
                t,
                point: ray.point_at_parameter(t),
                normal: self.normal,
                material: Some(Arc::clone(&self.material)),
            })
        } else {
            None
        }
    }

    fn has_intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> bool {
        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;

        let h = ray.direction.cross(edge2);
        let a = edge1.dot(h);

        if a.abs() < EPSILON {
            return false;
        }

        let f = 1.0 / a;
        let s = ray.origin - self.a;
        let u = f * s.dot(h);

        if u < 0.0 || u > 1.0 {
            return false;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction.dot(q);

        if v < 0.0 || u + v > 1.0 {
            return false;
        }

        let t = f * edge2.dot(q);
        t_min < t && t < t_max
    }

    fn bounds(&self, _t0: f32, _t1: f32) -> Option<AABB> {
        Some(AABB::new(
            self.a.min(self.b).min(self.c),
            self.a.max(self.b).max(self.c),
        ))
    }

    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Triangle
    }
}
