//! This module is full of primitives that all impl Intersect

mod aabb;
mod sphere;
mod triangle;

pub use aabb::*;
pub use sphere::*;
pub use triangle::*;

use crate::ray::{Hit, Ray};
use enum_dispatch::enum_dispatch;

/// Computes whether a ray intersects a primitive
#[enum_dispatch]
pub trait Intersect: Send + Sync {
    /// Computes the intersection between the ray and the primitive.
    /// The parametric interval `(t_min, t_max)` is open on both ends.
    fn intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit>;

    /// Computes whether there is an intersection between the ray and the primitive.
    /// Could be cheaper than "intersection".
    fn has_intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> bool;

    /// Generate a bounds for the primitive over the time interval `[t0, t1]`.
    /// Static primitives ignore the interval; it exists so moving primitives
    /// can share the signature.
    fn bounds(&self, t0: f32, t1: f32) -> Option<AABB>;

    /// The discriminant identifying what kind of primitive this is
    fn kind(&self) -> PrimitiveKind;
}

/// The closed set of primitive kinds.
///
/// Lets callers branch on a specific kind without matching on the full
/// [`Primitives`] enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Sphere,
    Triangle,
}

/// The primitives a scene can hold, dispatched without virtual calls
#[enum_dispatch(Intersect)]
#[derive(Clone, Debug)]
pub enum Primitives {
    Sphere,
    Triangle,
}
