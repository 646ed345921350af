// Copyright 2025 Lars Brubaker
// License: MIT
//
// Incremental insertion of one line into the arrangement.
//
// The line is traversed forward (lexicographically increasing points). It
// enters the box at its leftmost boundary crossing, then walks face by face:
// inside each bounded face it finds the boundary edge where it leaves, makes
// a vertex there (reusing one if the line passes through it exactly), and
// closes the face with a chord. The walk stops when the face ahead is the
// exterior.
//
// Faces of a line arrangement clipped to a box are convex, so the line leaves
// each face at exactly one point.

use tracing::trace;

use super::Arrangement;
use crate::error::{ArrangementError, Result};
use crate::geom::{in_ccw_wedge, Line, Point, Real};
use crate::mesh::{EdgeIdx, LineIdx, VertIdx};

/// Where the line meets the outer boundary.
pub(super) struct BoundaryCrossing {
    /// Leftmost crossing (lowest on ties) and the exterior edge holding it.
    pub(super) entry: Point,
    pub(super) entry_edge: EdgeIdx,
    /// Rightmost crossing (highest on ties).
    pub(super) exit: Point,
}

impl Arrangement {
    /// Insert `line` with tag `tag`; returns the number of chords added.
    pub(super) fn insert(&mut self, line: &Line, tag: LineIdx) -> Result<usize> {
        let crossing = self
            .boundary_crossing(line)
            .ok_or_else(|| ArrangementError::LineMissesBox(line.to_string()))?;

        let mut v = self.vertex_at(crossing.entry_edge, &crossing.entry);
        if crossing.entry == crossing.exit {
            trace!(%line, "line touches the box at a single point");
            return Ok(0);
        }

        let (dx, dy) = line.forward();
        let mut e = self.outgoing_toward(v, &dx, &dy)?;
        let mut chords = 0;

        while self.mesh.is_bounded(e) {
            let (h, p) = self.exit_edge(e, line)?;
            let (w, fresh) = if p == *self.mesh.dst_coords(h) {
                let w = self.mesh.dst(h);
                self.mesh.bump_degree(w);
                (w, false)
            } else {
                (self.mesh.split_edge(h, p), true)
            };

            self.mesh.connect(e, h, tag);
            chords += 1;

            // A fresh vertex sits inside h, so the line carries straight on
            // into the face across h. At an old vertex any of its faces may be next.
            e = if fresh {
                self.mesh.twin(h)
            } else {
                self.outgoing_toward(w, &dx, &dy)?
            };
            v = w;
        }

        trace!(%line, last = %self.mesh.coords(v), "line left the box");
        Ok(chords)
    }

    /// Scan the outer boundary for the line's entry and exit points.
    ///
    /// Entry is the crossing with the smallest x; among equal x (a vertical
    /// line, or a corner shared by two sides) the lowest point wins.
    pub(super) fn boundary_crossing(&self, line: &Line) -> Option<BoundaryCrossing> {
        let start = self.outer_edge()?;
        let mut entry: Option<(Point, EdgeIdx)> = None;
        let mut exit: Option<Point> = None;

        for h in self.mesh.face_edges(start) {
            let Some(p) = line.segment_crossing(self.mesh.org_coords(h), self.mesh.dst_coords(h)) else {
                continue;
            };
            if exit.as_ref().map_or(true, |q| p > *q) {
                exit = Some(p.clone());
            }
            if entry.as_ref().map_or(true, |(q, _)| p < *q) {
                entry = Some((p, h));
            }
        }

        let (entry, entry_edge) = entry?;
        Some(BoundaryCrossing { entry, entry_edge, exit: exit? })
    }

    /// The vertex at `p` on edge `h`: an endpoint if `p` is one (its degree
    /// grows by one), otherwise a new vertex splitting `h`.
    pub(super) fn vertex_at(&mut self, h: EdgeIdx, p: &Point) -> VertIdx {
        for v in [self.mesh.org(h), self.mesh.dst(h)] {
            if self.mesh.coords(v) == p {
                self.mesh.bump_degree(v);
                return v;
            }
        }
        self.mesh.split_edge(h, p.clone())
    }

    /// Rotate around `v` (twin, then next) until reaching the outgoing
    /// half-edge whose left face contains the ray from `v` along `(dx, dy)`.
    pub(super) fn outgoing_toward(&self, v: VertIdx, dx: &Real, dy: &Real) -> Result<EdgeIdx> {
        let apex = self.mesh.coords(v);
        let probe = apex.offset(dx, dy);
        for g in self.mesh.vertex_ring(v) {
            let from = self.mesh.dst_coords(g);
            let to = self.mesh.org_coords(self.mesh.prev(g));
            if in_ccw_wedge(apex, from, to, &probe) {
                return Ok(g);
            }
        }
        Err(ArrangementError::InconsistentMesh(format!(
            "no face around {} contains direction ({}, {})",
            apex, dx, dy
        )))
    }

    /// Walk the face left of `e` (which leaves the line's current vertex) to
    /// the edge where the line leaves the face.
    ///
    /// Returns the edge and the exit point; the point is either interior to
    /// the edge or equal to its destination.
    pub(super) fn exit_edge(&self, e: EdgeIdx, line: &Line) -> Result<(EdgeIdx, Point)> {
        let here = self.mesh.org_coords(e);
        for h in self.mesh.face_edges(self.mesh.next(e)) {
            if h == e {
                break;
            }
            let Some(p) = line.segment_crossing(self.mesh.org_coords(h), self.mesh.dst_coords(h)) else {
                continue;
            };
            if p == *here {
                continue;
            }
            if p == *self.mesh.org_coords(h) {
                return Ok((self.mesh.prev(h), p));
            }
            return Ok((h, p));
        }
        Err(ArrangementError::InconsistentMesh(format!(
            "line {} does not leave the face entered at {}",
            line, here
        )))
    }
}
