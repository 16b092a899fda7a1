//! src/polar.rs
//! Polar read-out of a planar vector: magnitude and angle in degrees.

use crate::capability::{Euclidean, Polar};
use crate::error::{Result, VectorError};
use crate::vector::Vector;
use log::debug;
use std::fmt;

/// A read-only polar view over a 2-D vector.
///
/// The view keeps a copy of its source and never changes it; components,
/// magnitude and dot product all pass straight through.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolarView {
    source: Vector,
}

impl PolarView {
    /// Adapt an existing planar vector.
    ///
    /// A 3-D vector is rejected; use [`PolarView::of_projection`] to look at
    /// its xy projection instead.
    pub fn adapt(source: Vector) -> Result<Self> {
        if !source.is_planar() {
            return Err(VectorError::NotPlanar { found: source.dimension() });
        }
        debug!("adapting {} as a polar view", source);
        Ok(Self { source })
    }

    /// A polar-capable planar vector built straight from coordinates.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { source: Vector::planar(x, y) }
    }

    /// View of the xy projection of any carrier. Its z, if any, plays no part.
    pub fn of_projection(carrier: &dyn Euclidean) -> Self {
        let c = carrier.components();
        Self::new(c[0], c[1])
    }

    /// The adapted vector.
    #[inline]
    pub fn source(&self) -> &Vector {
        &self.source
    }
}

impl Euclidean for PolarView {
    #[inline]
    fn components(&self) -> &[f64] {
        self.source.components()
    }

    #[inline]
    fn abs(&self) -> f64 {
        self.source.abs()
    }

    #[inline]
    fn dot(&self, other: &dyn Euclidean) -> f64 {
        self.source.dot(other)
    }
}

impl Polar for PolarView {}

impl fmt::Display for PolarView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
