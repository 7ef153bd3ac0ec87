use std::fmt::Debug;

/// Surface description attached to a primitive.
///
/// The geometry layer treats materials as opaque: it stores a handle,
/// clones it into hit records and releases it when the primitive is
/// dropped. Shading lives in the renderer. Handles are shared through
/// `Arc`, so one material can back any number of primitives and the
/// underlying resource is freed once the last holder is gone.
pub trait Material: Debug + Send + Sync {}

/// Material for primitives that have no surface description of their own.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullMaterial;

impl Material for NullMaterial {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Intersect, Triangle};
    use crate::ray::Ray;
    use glam::vec3;
    use std::sync::Arc;

    #[test]
    fn materials_are_shared_not_duplicated() {
        let material: Arc<dyn Material> = Arc::new(NullMaterial);

        let first = Triangle::new(
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
            Arc::clone(&material),
        );
        let second = Triangle::new(
            vec3(0.0, 0.0, 1.0),
            vec3(1.0, 0.0, 1.0),
            vec3(0.0, 1.0, 1.0),
            Arc::clone(&material),
        );
        assert_eq!(Arc::strong_count(&material), 3);

        // A hit record holds its own share and points at the same material
        let ray = Ray::new(vec3(0.25, 0.25, 5.0), vec3(0.0, 0.0, -1.0));
        let hit = first.intersection(ray, 0.0, 100.0).unwrap();
        assert!(Arc::ptr_eq(hit.material.as_ref().unwrap(), &material));
        assert_eq!(Arc::strong_count(&material), 4);
        drop(hit);

        // Dropping a primitive releases only its share
        drop(first);
        assert_eq!(Arc::strong_count(&material), 2);
        drop(second);
        assert_eq!(Arc::strong_count(&material), 1);
    }
}
