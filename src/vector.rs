use crate::capability::{Cross, Euclidean};
use crate::error::{Result, VectorError};
use std::fmt;
use std::ops::Neg;

/// A 2-D or 3-D Euclidean vector.
///
/// The dimension is part of the value: `Planar` carries (x, y), `Spatial`
/// carries (x, y, z). `Spatial` is the 3-D-by-extension form: it answers to
/// everything a planar vector does and adds [`Cross`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Vector {
    /// (x, y)
    Planar([f64; 2]),
    /// (x, y, z)
    Spatial([f64; 3]),
}

impl Vector {
    /// Create a 2-D vector.
    #[inline(always)]
    pub fn planar(x: f64, y: f64) -> Self {
        Vector::Planar([x, y])
    }

    /// Create a 3-D vector by extending (x, y) with `z`.
    #[inline(always)]
    pub fn spatial(x: f64, y: f64, z: f64) -> Self {
        Vector::Spatial([x, y, z])
    }

    /// Rebuild a vector from its components.
    ///
    /// Anything other than 2 or 3 components is rejected.
    pub fn from_components(c: &[f64]) -> Result<Self> {
        match *c {
            [x, y] => Ok(Self::planar(x, y)),
            [x, y, z] => Ok(Self::spatial(x, y, z)),
            _ => Err(VectorError::Dimension { found: c.len() }),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.components()[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.components()[1]
    }

    /// The z component, if this vector has one.
    #[inline]
    pub fn z(&self) -> Option<f64> {
        match self {
            Vector::Planar(_) => None,
            Vector::Spatial(c) => Some(c[2]),
        }
    }

    #[inline]
    pub fn is_planar(&self) -> bool {
        matches!(self, Vector::Planar(_))
    }

    /// The 2-D base (x, y) this vector was built on.
    #[inline]
    pub fn xy(&self) -> Vector {
        Self::planar(self.x(), self.y())
    }

    /// This vector as 3-D; a planar vector gets z = 0.
    #[inline]
    pub fn lift(&self) -> Vector {
        let [x, y, z] = crate::capability::lift(self.components());
        Self::spatial(x, y, z)
    }
}

impl Euclidean for Vector {
    #[inline]
    fn components(&self) -> &[f64] {
        match self {
            Vector::Planar(c) => c,
            Vector::Spatial(c) => c,
        }
    }
}

/// A planar receiver is lifted to z = 0 before crossing.
impl Cross for Vector {}

impl From<[f64; 2]> for Vector {
    fn from(arr: [f64; 2]) -> Vector {
        Vector::Planar(arr)
    }
}

impl From<[f64; 3]> for Vector {
    fn from(arr: [f64; 3]) -> Vector {
        Vector::Spatial(arr)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(c: &[f64]) -> Result<Vector> {
        Vector::from_components(c)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        match self {
            Vector::Planar([x, y]) => Vector::planar(-x, -y),
            Vector::Spatial([x, y, z]) => Vector::spatial(-x, -y, -z),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Bracketed(self.components()))
    }
}

/// Prints components as `[a, b, c]`.
///
/// Floats use the shortest round-trip form and keep a trailing `.0` on whole
/// numbers (`2.0`, `-8.0`, `3.605551275463989`), independent of locale.
pub struct Bracketed<'a>(pub &'a [f64]);

impl<'a> fmt::Display for Bracketed<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", c)?;
        }
        f.write_str("]")
    }
}
