//! src/capability.rs
//! The capability set every vector form answers to.
//!
//! - [`Euclidean`]: component read-out, magnitude, dot product
//! - [`Polar`]: angle of the xy projection, in degrees
//! - [`Cross`]: right-handed cross product, always 3-D
//!
//! Operands are taken as `&dyn Euclidean` so a plain vector, a polar view and
//! a decorated vector can all be mixed freely.

use crate::vector::Vector;
use log::trace;

/// Component read-out, magnitude and dot product.
pub trait Euclidean {
    /// Cartesian components in order (x, y[, z]).
    ///
    /// The slice length is the dimension and is always 2 or 3.
    fn components(&self) -> &[f64];

    /// Number of components (2 or 3).
    #[inline]
    fn dimension(&self) -> usize {
        self.components().len()
    }

    /// Euclidean norm: √(Σ cᵢ²).
    #[inline]
    fn abs(&self) -> f64 {
        self.components().iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Scalar product, dispatched on the dimension of `other`.
    ///
    /// A 2-D argument drops this vector's z. A 3-D argument uses this
    /// vector's z, or 0 if this vector is 2-D. The product is therefore not
    /// symmetric when the dimensions differ.
    #[inline]
    fn dot(&self, other: &dyn Euclidean) -> f64 {
        dot_components(self.components(), other.components())
    }
}

/// Polar read-out of the xy projection.
pub trait Polar: Euclidean {
    /// `atan2(y, x)` in degrees, in (-180, 180]. Any z is ignored.
    #[inline]
    fn angle(&self) -> f64 {
        let c = self.components();
        c[1].atan2(c[0]).to_degrees()
    }
}

/// Cross product for 3-D capable vectors.
pub trait Cross: Euclidean {
    /// Right-handed cross product `self × other`.
    ///
    /// A 2-D `other` is lifted to z = 0 first. The result is always 3-D.
    #[inline]
    fn cross(&self, other: &dyn Euclidean) -> Vector {
        let [x, y, z] = cross_components(lift(self.components()), lift(other.components()));
        Vector::spatial(x, y, z)
    }
}

/// Treat a 2-D component slice as 3-D with z = 0.
#[inline]
pub fn lift(c: &[f64]) -> [f64; 3] {
    match c.get(2) {
        Some(&z) => [c[0], c[1], z],
        None => {
            trace!("lifting [{}, {}] to 3-D with z = 0", c[0], c[1]);
            [c[0], c[1], 0.0]
        }
    }
}

#[inline(always)]
pub(crate) fn dot_components(lhs: &[f64], rhs: &[f64]) -> f64 {
    let planar = lhs[0] * rhs[0] + lhs[1] * rhs[1];
    match rhs.get(2) {
        None => planar,
        Some(rz) => planar + lhs.get(2).copied().unwrap_or(0.0) * rz,
    }
}

#[inline(always)]
pub(crate) fn cross_components(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}
