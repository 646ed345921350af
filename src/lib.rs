// line-arrangement: arrangements of lines in the plane as a half-edge mesh
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod arrangement;
pub mod error;
pub mod geom;
pub mod mesh;

pub use arrangement::{extreme_points, Arrangement, ArrangementOption};
pub use error::{ArrangementError, Result};
pub use geom::{int, ratio, BoundingBox, Line, Point, Real};
pub use mesh::{EdgeIdx, LineIdx, Mesh, VertIdx};
