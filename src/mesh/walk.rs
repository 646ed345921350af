// Copyright 2025 Lars Brubaker
// License: MIT
//
// Cyclic walks over the mesh: around a face via `next`, and around a vertex
// via alternating `twin` / `next`.

use super::{EdgeIdx, Mesh, VertIdx, INVALID};
use crate::geom::Point;

/// Half-edges of one face, starting at a given half-edge and following `next`.
pub struct FaceEdges<'a> {
    mesh: &'a Mesh,
    start: EdgeIdx,
    cur: EdgeIdx,
}

impl Iterator for FaceEdges<'_> {
    type Item = EdgeIdx;

    fn next(&mut self) -> Option<EdgeIdx> {
        if self.cur == INVALID {
            return None;
        }
        let e = self.cur;
        let n = self.mesh.next(e);
        self.cur = if n == self.start { INVALID } else { n };
        Some(e)
    }
}

/// Outgoing half-edges of one vertex, rotating counter-clockwise: twin, then next.
pub struct VertexRing<'a> {
    mesh: &'a Mesh,
    start: EdgeIdx,
    cur: EdgeIdx,
}

impl Iterator for VertexRing<'_> {
    type Item = EdgeIdx;

    fn next(&mut self) -> Option<EdgeIdx> {
        if self.cur == INVALID {
            return None;
        }
        let e = self.cur;
        let n = self.mesh.next(self.mesh.twin(e));
        self.cur = if n == self.start { INVALID } else { n };
        Some(e)
    }
}

impl Mesh {
    /// Walk the face to the left of `e`, starting with `e`.
    pub fn face_edges(&self, e: EdgeIdx) -> FaceEdges<'_> {
        FaceEdges { mesh: self, start: e, cur: e }
    }

    /// Number of half-edges on the face to the left of `e`.
    pub fn face_len(&self, e: EdgeIdx) -> usize {
        self.face_edges(e).count()
    }

    /// Origins of the half-edges around the face left of `e`, starting at org(e).
    pub fn face_points(&self, e: EdgeIdx) -> Vec<Point> {
        self.face_edges(e).map(|h| self.org_coords(h).clone()).collect()
    }

    /// All half-edges leaving `v`.
    pub fn vertex_ring(&self, v: VertIdx) -> VertexRing<'_> {
        self.ring_from(self.verts[v as usize].an_edge)
    }

    /// All half-edges leaving org(e), starting with `e`.
    pub fn ring_from(&self, e: EdgeIdx) -> VertexRing<'_> {
        VertexRing { mesh: self, start: e, cur: e }
    }
}
