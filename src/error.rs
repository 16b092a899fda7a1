//! src/error.rs
//! Error type shared by the vector constructors and the demo report.

use std::io;

/// Everything that can go wrong in this crate.
///
/// The arithmetic itself is total: NaN and infinities propagate per IEEE-754
/// and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum VectorError {
    #[error("a vector has 2 or 3 components, got {found}")]
    Dimension { found: usize },

    #[error("polar view needs a 2-component vector, got {found}")]
    NotPlanar { found: usize },

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;
