// src/prelude.rs
//! The "everything" import for vector_patterns.
//!
//! ```rust
//! use vector_patterns::prelude::*;
//! ```

// core data types
pub use crate::decorator::Decorator;
pub use crate::polar::PolarView;
pub use crate::vector::{Bracketed, Vector};

// capabilities
pub use crate::capability::{Cross, Euclidean, Polar};

pub use crate::error::{Result, VectorError};
