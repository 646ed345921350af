// Copyright 2025 Lars Brubaker
// License: MIT
//
// The arrangement builder: public API and construction entry points.
//
// Construction runs in three steps. A bounding box is derived from the
// pairwise intersections of the input (or supplied by the caller), the box is
// turned into a 4-vertex / 8-half-edge mesh, and every line is inserted in
// order, cutting each bounded face it crosses with one chord. The walk itself
// lives in `insert.rs`; read-only queries live in `queries.rs`.

mod insert;
mod queries;

pub use queries::extreme_points;

use tracing::debug;

use crate::error::{ArrangementError, Result};
use crate::geom::{BoundingBox, Line};
use crate::mesh::{EdgeIdx, LineIdx, Mesh, VertIdx, INVALID};

// ─────────────────────────────── Public types ──────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ArrangementOption {
    /// Run the full structural check after every inserted line.
    ValidateMesh,
}

// ─────────────────────────── Arrangement ──────────────────────────────────────

/// The planar subdivision induced by a set of lines inside a bounding box.
#[derive(Clone, Debug)]
pub struct Arrangement {
    /// Input set, used by `extreme_points` and `construct`.
    lines: Vec<Line>,
    /// Lines actually in the mesh; index = the tag on their half-edges.
    inserted: Vec<Line>,
    mesh: Mesh,
    bbox: Option<BoundingBox>,
    /// Top-left corner; its exterior half-edge starts the perimeter walk.
    top_left: VertIdx,
    validate_mesh: bool,
}

impl Arrangement {
    /// An empty arrangement over `lines`. Nothing is built until
    /// [`Arrangement::construct`] or [`Arrangement::bounding_box`] runs.
    pub fn new(lines: Vec<Line>) -> Self {
        Arrangement {
            lines,
            inserted: Vec::new(),
            mesh: Mesh::new(),
            bbox: None,
            top_left: INVALID,
            validate_mesh: false,
        }
    }

    /// Build the arrangement of `lines` inside the box given by
    /// [`extreme_points`].
    pub fn build(lines: Vec<Line>) -> Result<Self> {
        let mut arrangement = Arrangement::new(lines);
        arrangement.construct()?;
        Ok(arrangement)
    }

    /// Build the arrangement of `lines` inside a caller-supplied box.
    pub fn build_in_box(lines: Vec<Line>, bbox: BoundingBox) -> Result<Self> {
        let mut arrangement = Arrangement::new(lines);
        arrangement.construct_in(bbox)?;
        Ok(arrangement)
    }

    pub fn set_option(&mut self, option: ArrangementOption, value: bool) {
        match option {
            ArrangementOption::ValidateMesh => self.validate_mesh = value,
        }
    }

    /// Derive the box from the input lines and insert every line.
    pub fn construct(&mut self) -> Result<()> {
        let bbox = self.extreme_points()?;
        self.construct_in(bbox)
    }

    fn construct_in(&mut self, bbox: BoundingBox) -> Result<()> {
        if self.lines.len() < 2 {
            return Err(ArrangementError::InvalidInput(format!(
                "an arrangement needs at least two lines, got {}",
                self.lines.len()
            )));
        }
        for (i, a) in self.lines.iter().enumerate() {
            if let Some(b) = self.lines[i + 1..].iter().find(|b| a.is_collinear_with(b)) {
                return Err(ArrangementError::UnsupportedGeometry(format!(
                    "input lines {} and {} coincide",
                    a, b
                )));
            }
        }

        self.bounding_box(bbox)?;
        let lines = self.lines.clone();
        for line in &lines {
            if let Err(err) = self.add_line(line) {
                self.reset();
                return Err(err);
            }
        }
        debug!(
            lines = lines.len(),
            vertices = self.mesh.vertex_count(),
            half_edges = self.mesh.edge_count(),
            "arrangement constructed"
        );
        Ok(())
    }

    /// Initialize the mesh with the box. Fails if a box already exists.
    pub fn bounding_box(&mut self, bbox: BoundingBox) -> Result<()> {
        let outside = self.mesh.make_box(&bbox)?;
        self.top_left = self.mesh.org(outside);
        debug!(%bbox, "bounding box initialized");
        self.bbox = Some(bbox);
        Ok(())
    }

    /// Insert one line into the existing mesh and return its tag.
    ///
    /// Input errors are reported before the mesh is touched. With
    /// [`ArrangementOption::ValidateMesh`] set, a failed structural check is
    /// reported after the line went in.
    pub fn add_line(&mut self, line: &Line) -> Result<LineIdx> {
        let bbox = self.bbox.as_ref().ok_or_else(|| {
            ArrangementError::PreconditionViolation(format!(
                "line {} added before the bounding box was initialized",
                line
            ))
        })?;
        if let Some(present) = self.inserted.iter().find(|l| l.is_collinear_with(line)) {
            return Err(ArrangementError::UnsupportedGeometry(format!(
                "line {} overlaps line {} already in the arrangement",
                line, present
            )));
        }

        let tag = self.inserted.len() as LineIdx;
        if bbox.has_side_on(line) {
            // The side already splits the plane along this line.
            debug!(%line, "line runs along the bounding box, no chords added");
        } else {
            let chords = self.insert(line, tag)?;
            debug!(%line, tag, chords, "line inserted");
        }
        self.inserted.push(line.clone());

        if self.validate_mesh {
            self.mesh.validate()?;
        }
        Ok(tag)
    }

    fn reset(&mut self) {
        self.inserted.clear();
        self.mesh = Mesh::new();
        self.bbox = None;
        self.top_left = INVALID;
    }

    // ───────────────────────────── Accessors ──────────────────────────────────

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lines in the mesh, indexed by the tag carried on their half-edges.
    pub fn inserted_lines(&self) -> &[Line] {
        &self.inserted
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }

    /// The exterior half-edge leaving the top-left corner; the entry point for
    /// walking the outer boundary clockwise.
    pub fn outer_edge(&self) -> Option<EdgeIdx> {
        if self.top_left == INVALID {
            return None;
        }
        self.mesh.vertex_ring(self.top_left).find(|&e| !self.mesh.is_bounded(e))
    }

    pub fn degree(&self, v: VertIdx) -> u32 {
        self.mesh.degree(v)
    }
}
