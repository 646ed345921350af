// Copyright 2025 Lars Brubaker
// Shared test utilities for line-arrangement tests.

#![allow(dead_code)]

use line_arrangement::{
    ratio, Arrangement, ArrangementOption, BoundingBox, Line, Mesh, Point,
};

/// Point with integer coordinates.
pub fn pt(x: i64, y: i64) -> Point {
    Point::from_ints(x, y)
}

/// Point with rational coordinates, each given as (numerator, denominator).
pub fn ptq(x: (i64, i64), y: (i64, i64)) -> Point {
    Point::new(ratio(x.0, x.1), ratio(y.0, y.1))
}

/// Line through two integer points.
pub fn line(a: (i64, i64), b: (i64, i64)) -> Line {
    Line::through(a, b).unwrap()
}

/// The 10x10 box used by most tests: left 0, right 10, top 10, bottom 0.
pub fn ten_box() -> BoundingBox {
    BoundingBox::from_ints(0, 10, 10, 0)
}

/// Insert `lines` one by one into a fresh box, checking the mesh after each.
pub fn arrange_in(bbox: BoundingBox, lines: &[Line]) -> Arrangement {
    let mut arr = Arrangement::new(lines.to_vec());
    arr.set_option(ArrangementOption::ValidateMesh, true);
    arr.bounding_box(bbox).unwrap();
    for l in lines {
        arr.add_line(l).unwrap();
    }
    verify_mesh(arr.mesh());
    arr
}

/// Check the half-edge invariants independently of `Mesh::validate`, then run
/// it too. Returns the number of faces, exterior included.
pub fn verify_mesh(mesh: &Mesh) -> usize {
    mesh.validate().unwrap();

    for e in mesh.half_edges() {
        assert_eq!(mesh.twin(mesh.twin(e)), e, "twin is not an involution at {}", e);
        assert_ne!(mesh.twin(e), e);
        assert_eq!(mesh.next(mesh.prev(e)), e, "next(prev) broken at {}", e);
        assert_eq!(mesh.prev(mesh.next(e)), e, "prev(next) broken at {}", e);
        assert_eq!(mesh.dst(e), mesh.org(mesh.twin(e)));
        assert_eq!(mesh.org(mesh.next(e)), mesh.dst(e));
        assert!(mesh.face_len(e) >= 3, "face of {} has fewer than 3 edges", e);
    }

    let mut seen = vec![false; mesh.edge_count()];
    let mut faces = 0;
    for e in mesh.half_edges() {
        if seen[e as usize] {
            continue;
        }
        for h in mesh.face_edges(e) {
            assert!(!seen[h as usize], "half-edge {} on two faces", h);
            seen[h as usize] = true;
        }
        faces += 1;
    }

    let v = mesh.vertex_count() as i64;
    let e = (mesh.edge_count() / 2) as i64;
    assert_eq!(v - e + faces as i64, 2, "Euler characteristic: V={} E={} F={}", v, e, faces);
    faces
}

/// Rotate a closed cycle of points so it starts at `first`.
pub fn starting_at(points: &[Point], first: &Point) -> Vec<Point> {
    let i = points
        .iter()
        .position(|p| p == first)
        .unwrap_or_else(|| panic!("{} not on cycle", first));
    points[i..].iter().chain(&points[..i]).cloned().collect()
}

/// Deterministic line generator: lines through integer points in
/// [-span, span]², skipping coincident points and repeated lines.
pub struct LineGen {
    state: u64,
}

impl LineGen {
    pub fn new(seed: u64) -> Self {
        LineGen { state: seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407) }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) as u32
    }

    fn coord(&mut self, span: i64) -> i64 {
        (self.next_u32() as i64 % (2 * span + 1)) - span
    }

    pub fn lines(&mut self, n: usize, span: i64) -> Vec<Line> {
        let mut out: Vec<Line> = Vec::new();
        while out.len() < n {
            let a = (self.coord(span), self.coord(span));
            let b = (self.coord(span), self.coord(span));
            if a == b {
                continue;
            }
            let l = line(a, b);
            if out.iter().any(|o| o.is_collinear_with(&l)) {
                continue;
            }
            out.push(l);
        }
        out
    }
}
