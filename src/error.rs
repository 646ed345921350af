// Copyright 2025 Lars Brubaker
// License: MIT
//
// Error taxonomy for arrangement construction.

use thiserror::Error;

/// Errors raised while building an arrangement.
///
/// Every variant aborts the build that produced it. Queries on a finished
/// arrangement never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrangementError {
    /// The input cannot define an arrangement: fewer than two lines, all lines
    /// parallel, a line with coincident defining points, or an empty box.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation was called in the wrong state, e.g. a second bounding box.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// The line overlaps a line already in the arrangement.
    #[error("unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    /// The line never reaches the bounding box.
    #[error("line {0} does not cross the bounding box")]
    LineMissesBox(String),

    /// A structural invariant of the half-edge mesh does not hold.
    #[error("inconsistent mesh: {0}")]
    InconsistentMesh(String),
}

pub type Result<T> = std::result::Result<T, ArrangementError>;
