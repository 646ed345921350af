// Copyright 2025 Lars Brubaker
// License: MIT
//
// Structural self-check for the half-edge mesh.

use super::{EdgeIdx, Mesh, VertIdx, INVALID};
use crate::error::{ArrangementError, Result};

impl Mesh {
    /// Check every structural invariant of the mesh.
    ///
    /// - next/prev are mutual inverses and set on every half-edge
    /// - each half-edge ends where its successor starts
    /// - no half-edge is a loop
    /// - every face cycle carries a single bounded flag
    /// - every vertex's `an_edge` leaves that vertex
    pub fn validate(&self) -> Result<()> {
        let n = self.edges.len();
        if n % 2 != 0 {
            return Err(broken(format!("odd number of half-edges ({})", n)));
        }

        for e in 0..n as EdgeIdx {
            let org = self.edges[e as usize].org;
            if org == INVALID || org as usize >= self.verts.len() {
                return Err(broken(format!("half-edge {} has no origin", e)));
            }
        }

        for e in 0..n as EdgeIdx {
            let he = &self.edges[e as usize];
            if he.next as usize >= n || he.prev as usize >= n {
                return Err(broken(format!("half-edge {} is not linked into a face", e)));
            }
            if self.prev(he.next) != e {
                return Err(broken(format!("prev(next({})) != {}", e, e)));
            }
            if self.next(he.prev) != e {
                return Err(broken(format!("next(prev({})) != {}", e, e)));
            }
            if self.org(he.next) != self.dst(e) {
                return Err(broken(format!(
                    "half-edge {} ends at {} but its successor starts at {}",
                    e,
                    self.dst_coords(e),
                    self.org_coords(he.next)
                )));
            }
            if he.org == self.dst(e) {
                return Err(broken(format!("half-edge {} is a loop", e)));
            }
        }

        // With next/prev consistent, `next` is a permutation, so each walk
        // below closes within n steps.
        let mut seen = vec![false; n];
        for e in 0..n as EdgeIdx {
            if seen[e as usize] {
                continue;
            }
            let bounded = self.is_bounded(e);
            for h in self.face_edges(e) {
                seen[h as usize] = true;
                if self.is_bounded(h) != bounded {
                    return Err(broken(format!(
                        "face through half-edge {} mixes bounded and unbounded sides",
                        e
                    )));
                }
            }
        }

        for v in 0..self.verts.len() as VertIdx {
            let an = self.verts[v as usize].an_edge;
            if an == INVALID || an as usize >= n || self.org(an) != v {
                return Err(broken(format!("vertex {} has a stale incident edge", self.coords(v))));
            }
        }

        Ok(())
    }
}

fn broken(msg: String) -> ArrangementError {
    ArrangementError::InconsistentMesh(msg)
}
