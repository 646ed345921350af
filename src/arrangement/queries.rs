// Copyright 2025 Lars Brubaker
// License: MIT
//
// Read-only queries over a built arrangement.

use super::Arrangement;
use crate::error::{ArrangementError, Result};
use crate::geom::{BoundingBox, Line, Point, Real};
use crate::mesh::{EdgeIdx, LineIdx, VertIdx};

/// The smallest box holding every pairwise intersection of `lines`.
///
/// Independent of the order of `lines`. Parallel pairs are skipped; if no pair
/// intersects, or there are fewer than two lines, the box is undefined.
pub fn extreme_points(lines: &[Line]) -> Result<BoundingBox> {
    if lines.len() < 2 {
        return Err(ArrangementError::InvalidInput(format!(
            "extreme points need at least two lines, got {}",
            lines.len()
        )));
    }

    let mut bounds: Option<[Real; 4]> = None;
    for (i, a) in lines.iter().enumerate() {
        for b in &lines[i + 1..] {
            let Some(p) = a.intersect(b) else { continue };
            match bounds.as_mut() {
                None => bounds = Some([p.x.clone(), p.x, p.y.clone(), p.y]),
                Some([left, right, top, bottom]) => {
                    if p.x < *left {
                        *left = p.x.clone();
                    }
                    if p.x > *right {
                        *right = p.x;
                    }
                    if p.y > *top {
                        *top = p.y.clone();
                    }
                    if p.y < *bottom {
                        *bottom = p.y;
                    }
                }
            }
        }
    }

    let [left, right, top, bottom] = bounds.ok_or_else(|| {
        ArrangementError::InvalidInput("all lines are mutually parallel".to_string())
    })?;
    Ok(BoundingBox::new(left, right, top, bottom))
}

impl Arrangement {
    /// (left, right, top, bottom) of all pairwise intersections of the input.
    pub fn extreme_points(&self) -> Result<BoundingBox> {
        extreme_points(&self.lines)
    }

    /// Highest vertex degree: the most lines meeting at one point.
    pub fn max_degree(&self) -> u32 {
        self.mesh.vertices().map(|v| self.mesh.degree(v)).max().unwrap_or(0)
    }

    /// First vertex (in creation order) carrying the highest degree.
    pub fn max_degree_vertex(&self) -> Option<VertIdx> {
        let max = self.max_degree();
        self.mesh.vertices().find(|&v| self.mesh.degree(v) == max)
    }

    /// Vertices on the outer boundary, clockwise from the top-left corner.
    pub fn outer_boundary(&self) -> Vec<Point> {
        self.outer_edge()
            .map(|e| self.mesh.face_points(e))
            .unwrap_or_default()
    }

    /// Vertices of the face left of `e`, starting at its origin.
    pub fn face_vertices(&self, e: EdgeIdx) -> Vec<Point> {
        self.mesh.face_points(e)
    }

    /// One half-edge per face, exterior included, in index order.
    pub fn faces(&self) -> Vec<EdgeIdx> {
        let mut seen = vec![false; self.mesh.edge_count()];
        let mut reps = Vec::new();
        for e in self.mesh.half_edges() {
            if seen[e as usize] {
                continue;
            }
            for h in self.mesh.face_edges(e) {
                seen[h as usize] = true;
            }
            reps.push(e);
        }
        reps
    }

    /// One half-edge per bounded face.
    pub fn bounded_faces(&self) -> Vec<EdgeIdx> {
        self.faces().into_iter().filter(|&e| self.mesh.is_bounded(e)).collect()
    }

    /// Points where the inserted line `line` meets other lines or the box,
    /// in forward order from where it enters to where it leaves.
    ///
    /// Empty for a line that produced no chords (one lying on a box side).
    pub fn line_path(&self, line: LineIdx) -> Vec<Point> {
        let mesh = &self.mesh;
        let first = mesh
            .half_edges()
            .filter(|&e| mesh.line_of(e) == Some(line) && mesh.org_coords(e) < mesh.dst_coords(e))
            .min_by(|&a, &b| mesh.org_coords(a).cmp(mesh.org_coords(b)));
        let Some(mut e) = first else {
            return Vec::new();
        };

        let mut path = vec![mesh.org_coords(e).clone()];
        loop {
            path.push(mesh.dst_coords(e).clone());
            // Rotate around dst(e) for the other half-edge on the same line.
            let back = mesh.twin(e);
            match mesh.ring_from(back).skip(1).find(|&g| mesh.line_of(g) == Some(line)) {
                Some(g) => e = g,
                None => break,
            }
        }
        path
    }

    /// Vertex at exactly `p`, if any.
    pub fn find_vertex(&self, p: &Point) -> Option<VertIdx> {
        self.mesh.vertices().find(|&v| self.mesh.coords(v) == p)
    }

    /// Half-edge running from `a` to `b`, if the two are adjacent.
    pub fn find_edge(&self, a: &Point, b: &Point) -> Option<EdgeIdx> {
        let v = self.find_vertex(a)?;
        self.mesh.vertex_ring(v).find(|&e| self.mesh.dst_coords(e) == b)
    }
}
