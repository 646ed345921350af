// Copyright 2025 Lars Brubaker
// License: MIT
//
// The half-edge mesh (DCEL) underlying the arrangement.
//
// All references are u32 indices into Vec arenas owned by the Mesh.
//
// Design:
//   - INVALID: u32::MAX  (null reference)
//   - Half-edges are allocated in pairs: edges[i] and edges[i^1] are twins.
//     twin(e) = e ^ 1, so twin(twin(e)) = e holds by construction and the
//     destination of e is simply the origin of e ^ 1.
//   - Faces are not stored. Each half-edge carries a flag telling whether the
//     face on its left is bounded (inside the box) or the single exterior.
//   - Nothing is ever removed; the arenas only grow.

mod validate;
mod walk;

pub use walk::{FaceEdges, VertexRing};

use tracing::trace;

use crate::error::{ArrangementError, Result};
use crate::geom::{BoundingBox, Point};

pub const INVALID: u32 = u32::MAX;

/// Index into Mesh::verts
pub type VertIdx = u32;
/// Index into Mesh::edges
pub type EdgeIdx = u32;
/// Index of an inserted line, in insertion order.
pub type LineIdx = u32;

/// Twin half-edge index (always the other half of the pair).
#[inline(always)]
pub fn sym(e: EdgeIdx) -> EdgeIdx {
    e ^ 1
}

#[derive(Clone, Debug)]
pub struct Vertex {
    pub coords: Point,
    /// Some half-edge leaving this vertex.
    pub an_edge: EdgeIdx,
    /// Number of lines meeting here; box sides count as lines.
    pub degree: u32,
}

#[derive(Clone, Debug)]
pub struct HalfEdge {
    /// Origin vertex index.
    pub org: VertIdx,
    /// Next half-edge CCW around the left face.
    pub next: EdgeIdx,
    /// Previous half-edge around the left face.
    pub prev: EdgeIdx,
    /// Whether the left face lies inside the box.
    pub bounded: bool,
    /// Inserted line this edge lies on (INVALID for box sides).
    pub line: LineIdx,
}

impl Default for HalfEdge {
    fn default() -> Self {
        Self {
            org: INVALID,
            next: INVALID,
            prev: INVALID,
            bounded: false,
            line: INVALID,
        }
    }
}

/// The half-edge mesh.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub(crate) verts: Vec<Vertex>,
    pub(crate) edges: Vec<HalfEdge>,
}

impl Mesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Mesh { verts: Vec::new(), edges: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty() && self.edges.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, v: VertIdx) -> &Vertex {
        &self.verts[v as usize]
    }

    pub fn half_edge(&self, e: EdgeIdx) -> &HalfEdge {
        &self.edges[e as usize]
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertIdx> {
        0..self.verts.len() as VertIdx
    }

    pub fn half_edges(&self) -> impl Iterator<Item = EdgeIdx> {
        0..self.edges.len() as EdgeIdx
    }

    // ─────────────────────────────── Navigation ────────────────────────────────

    #[inline]
    pub fn org(&self, e: EdgeIdx) -> VertIdx {
        self.edges[e as usize].org
    }

    /// Destination vertex of e (= org of its twin).
    #[inline]
    pub fn dst(&self, e: EdgeIdx) -> VertIdx {
        self.edges[(e ^ 1) as usize].org
    }

    #[inline(always)]
    pub fn twin(&self, e: EdgeIdx) -> EdgeIdx {
        sym(e)
    }

    #[inline]
    pub fn next(&self, e: EdgeIdx) -> EdgeIdx {
        self.edges[e as usize].next
    }

    #[inline]
    pub fn prev(&self, e: EdgeIdx) -> EdgeIdx {
        self.edges[e as usize].prev
    }

    #[inline]
    pub fn is_bounded(&self, e: EdgeIdx) -> bool {
        self.edges[e as usize].bounded
    }

    /// The inserted line e lies on, or None for a box side.
    #[inline]
    pub fn line_of(&self, e: EdgeIdx) -> Option<LineIdx> {
        match self.edges[e as usize].line {
            INVALID => None,
            l => Some(l),
        }
    }

    #[inline]
    pub fn coords(&self, v: VertIdx) -> &Point {
        &self.verts[v as usize].coords
    }

    #[inline]
    pub fn degree(&self, v: VertIdx) -> u32 {
        self.verts[v as usize].degree
    }

    /// Coordinates of the origin of e.
    #[inline]
    pub fn org_coords(&self, e: EdgeIdx) -> &Point {
        self.coords(self.org(e))
    }

    /// Coordinates of the destination of e.
    #[inline]
    pub fn dst_coords(&self, e: EdgeIdx) -> &Point {
        self.coords(self.dst(e))
    }

    // ──────────────────────── Private allocation helpers ─────────────────────

    fn make_vertex(&mut self, coords: Point, degree: u32) -> VertIdx {
        let v = self.verts.len() as VertIdx;
        self.verts.push(Vertex { coords, an_edge: INVALID, degree });
        v
    }

    /// Allocate a twinned pair `a -> b` / `b -> a`. Returns the `a -> b` half (even).
    /// next/prev are left INVALID for the caller to link.
    fn make_edge_pair(&mut self, a: VertIdx, b: VertIdx, bounded: bool, bounded_sym: bool, line: LineIdx) -> EdgeIdx {
        let e = self.edges.len() as EdgeIdx;
        self.edges.push(HalfEdge { org: a, bounded, line, ..HalfEdge::default() });
        self.edges.push(HalfEdge { org: b, bounded: bounded_sym, line, ..HalfEdge::default() });
        e
    }

    /// Make `b` follow `a` on their shared face.
    #[inline]
    fn link(&mut self, a: EdgeIdx, b: EdgeIdx) {
        self.edges[a as usize].next = b;
        self.edges[b as usize].prev = a;
    }

    // ─────────────────────────────── Mutators ──────────────────────────────────

    /// Build the initial box: four corners and two twinned 4-cycles.
    ///
    /// The bounded cycle runs counter-clockwise top-left -> bottom-left ->
    /// bottom-right -> top-right; the exterior cycle runs clockwise. Returns the
    /// exterior half-edge leaving the top-left corner.
    pub(crate) fn make_box(&mut self, bbox: &BoundingBox) -> Result<EdgeIdx> {
        if !self.is_empty() {
            return Err(ArrangementError::PreconditionViolation(format!(
                "bounding box requested on a mesh with {} vertices",
                self.verts.len()
            )));
        }
        if !bbox.is_proper() {
            return Err(ArrangementError::InvalidInput(format!("degenerate bounding box: {}", bbox)));
        }

        let [tl, tr, br, bl] = bbox.corners();
        let v_tl = self.make_vertex(tl, 2);
        let v_tr = self.make_vertex(tr, 2);
        let v_br = self.make_vertex(br, 2);
        let v_bl = self.make_vertex(bl, 2);

        // Even halves face inward, odd halves outward.
        let left = self.make_edge_pair(v_tl, v_bl, true, false, INVALID);
        let bottom = self.make_edge_pair(v_bl, v_br, true, false, INVALID);
        let right = self.make_edge_pair(v_br, v_tr, true, false, INVALID);
        let top = self.make_edge_pair(v_tr, v_tl, true, false, INVALID);

        self.link(left, bottom);
        self.link(bottom, right);
        self.link(right, top);
        self.link(top, left);

        self.link(top ^ 1, right ^ 1);
        self.link(right ^ 1, bottom ^ 1);
        self.link(bottom ^ 1, left ^ 1);
        self.link(left ^ 1, top ^ 1);

        self.verts[v_tl as usize].an_edge = left;
        self.verts[v_bl as usize].an_edge = bottom;
        self.verts[v_br as usize].an_edge = right;
        self.verts[v_tr as usize].an_edge = top;

        Ok(top ^ 1)
    }

    /// Record one more line passing through `v`.
    pub(crate) fn bump_degree(&mut self, v: VertIdx) {
        self.verts[v as usize].degree += 1;
        trace!(vertex = v, degree = self.verts[v as usize].degree, "reused vertex {}", self.coords(v));
    }

    /// Split `e` (and its twin) at `p`, which must lie strictly inside the edge.
    ///
    /// Afterwards `e` ends at the new vertex and a new half-edge continues from
    /// it to the old destination; the twin side is mirrored. Origins of `e` and
    /// of every other existing half-edge except `e ^ 1` are unchanged.
    pub(crate) fn split_edge(&mut self, e: EdgeIdx, p: Point) -> VertIdx {
        let es = e ^ 1;
        let old_dst = self.dst(e);
        let w = self.make_vertex(p, 2);

        let bounded = self.edges[e as usize].bounded;
        let bounded_sym = self.edges[es as usize].bounded;
        let line = self.edges[e as usize].line;
        let n = self.make_edge_pair(w, old_dst, bounded, bounded_sym, line);

        let e_next = self.next(e);
        let es_prev = self.prev(es);

        // e -> n -> e_next on the left face of e.
        self.link(n, e_next);
        self.link(e, n);
        // es_prev -> n^1 -> es on the other side.
        self.link(es_prev, n ^ 1);
        self.link(n ^ 1, es);

        self.edges[es as usize].org = w;
        if self.verts[old_dst as usize].an_edge == es {
            self.verts[old_dst as usize].an_edge = n ^ 1;
        }
        self.verts[w as usize].an_edge = n;

        trace!(edge = e, vertex = w, "split edge at {}", self.coords(w));
        w
    }

    /// Insert a chord from org(e) to dst(h), where e and h lie on the same face.
    ///
    /// The face is cut in two: the new half-edge `c` (org(e) -> dst(h)) closes
    /// the part after h, and its twin closes the part that starts with e. Both
    /// sides are bounded. Returns `c`.
    pub(crate) fn connect(&mut self, e: EdgeIdx, h: EdgeIdx, line: LineIdx) -> EdgeIdx {
        let v = self.org(e);
        let w = self.dst(h);
        let e_prev = self.prev(e);
        let h_next = self.next(h);

        let c = self.make_edge_pair(v, w, true, true, line);

        self.link(e_prev, c);
        self.link(c, h_next);
        self.link(h, c ^ 1);
        self.link(c ^ 1, e);

        trace!(chord = c, line, "chord {} -> {}", self.coords(v), self.coords(w));
        c
    }
}
