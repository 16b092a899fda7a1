//! # vector_patterns
//!
//! 2-D and 3-D Euclidean vectors with dot and cross products and a polar
//! read-out, composed three ways: by adaptation ([`PolarView`]), by extension
//! ([`Vector::spatial`]) and by decoration ([`Decorator`]).
//!
//! ```rust
//! use vector_patterns::prelude::*;
//!
//! let v1 = PolarView::adapt(Vector::planar(2.0, 3.0)).unwrap();
//! let v2 = Vector::spatial(2.0, 1.0, 3.0);
//! let v3 = Decorator::new(Vector::planar(1.0, 2.0), 4.0);
//!
//! // a planar receiver drops the argument's z
//! assert_eq!(v1.dot(&v2), 7.0);
//! assert_eq!(v2.dot(&v3), 16.0);
//! assert_eq!(v2.cross(&v3), Vector::spatial(-2.0, -5.0, 3.0));
//!
//! // decorating replaces z, it does not append
//! let flat = Decorator::new(v2, 0.0);
//! assert_eq!(flat.components(), &[2.0, 1.0, 0.0]);
//! ```

pub mod capability;
pub mod decorator;
pub mod demo;
pub mod error;
pub mod polar;
pub mod prelude;
pub mod vector;

// --- Public API exports ---

pub use capability::{lift, Cross, Euclidean, Polar};
pub use decorator::Decorator;
pub use error::{Result, VectorError};
pub use polar::PolarView;
pub use vector::{Bracketed, Vector};
