//! src/decorator.rs
//! 3-D vectors built by decorating another carrier with an extra z.

use crate::capability::{Cross, Euclidean};
use crate::vector::Bracketed;
use log::debug;
use std::fmt;

/// A carrier wrapped with its own z.
///
/// Only the first two components of `inner` are read, so decorating a 3-D
/// vector replaces its z rather than adding a fourth component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Decorator<C> {
    inner: C,
    components: [f64; 3],
}

impl<C: Euclidean> Decorator<C> {
    /// Wrap `inner` and give it the z component `z`.
    pub fn new(inner: C, z: f64) -> Self {
        let c = inner.components();
        if let Some(old_z) = c.get(2) {
            debug!("decorating a 3-D carrier: z {} replaced by {}", old_z, z);
        }
        let components = [c[0], c[1], z];
        Self { inner, components }
    }

    /// The wrapped carrier, unchanged.
    #[inline]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.components[2]
    }
}

impl<C: Euclidean> Euclidean for Decorator<C> {
    #[inline]
    fn components(&self) -> &[f64] {
        &self.components
    }
}

impl<C: Euclidean> Cross for Decorator<C> {}

impl<C> fmt::Display for Decorator<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Bracketed(&self.components))
    }
}
