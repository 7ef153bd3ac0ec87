//! Geometric primitives for the pathtracer.
//!
//! Everything a scene needs to ask "does this ray hit this shape, and
//! where": the [`Ray`] and [`Hit`] types, an axis-aligned bounding box, and
//! the primitives themselves behind the [`Intersect`] trait. Primitives are
//! immutable after construction and hold no interior mutability, so a
//! single instance can be intersected from any number of threads at once.

pub mod material;
pub mod primitives;
pub mod ray;

pub use crate::material::*;
pub use crate::primitives::*;
pub use crate::ray::*;
