// Detector geometry seam
//
// The generator only needs the half-dimensions of the detector's bounding
// box. They are queried on every vertex so a geometry that changes between
// runs is always seen in its current state.

use crate::bounding_box::BoundingBox;
use std::sync::{Arc, RwLock};

/// Anything that can report the half-size of a detector along an axis.
pub trait DetectorGeometry {
    /// Half-dimension along `axis` (0 = x, 1 = y, 2 = z).
    fn half_dimension(&self, axis: usize) -> f64;
}

impl DetectorGeometry for BoundingBox {
    fn half_dimension(&self, axis: usize) -> f64 {
        self.half_width(axis)
    }
}

impl DetectorGeometry for [f64; 3] {
    fn half_dimension(&self, axis: usize) -> f64 {
        self[axis]
    }
}

impl<G: DetectorGeometry + ?Sized> DetectorGeometry for &G {
    fn half_dimension(&self, axis: usize) -> f64 {
        (**self).half_dimension(axis)
    }
}

impl<G: DetectorGeometry + ?Sized> DetectorGeometry for Arc<G> {
    fn half_dimension(&self, axis: usize) -> f64 {
        (**self).half_dimension(axis)
    }
}

/// Geometry owned by someone else and resized while the generator is alive.
impl<G: DetectorGeometry> DetectorGeometry for RwLock<G> {
    fn half_dimension(&self, axis: usize) -> f64 {
        let guard = self
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.half_dimension(axis)
    }
}
