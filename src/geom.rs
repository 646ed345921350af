// Copyright 2025 Lars Brubaker
// License: MIT
//
// Exact geometric primitives: points, lines, the bounding box and the
// orientation predicates used by the arrangement builder.
//
// Every quantity is a BigRational. Intersection points computed for one line
// become edge endpoints for the next, so rounding would compound across
// insertions and end up disagreeing with the mesh topology.

use std::cmp::Ordering;
use std::fmt;

use num::{BigInt, BigRational, Signed, Zero};

use crate::error::{ArrangementError, Result};

pub type Real = BigRational;

/// Exact integer coordinate.
#[inline]
pub fn int(n: i64) -> Real {
    BigRational::from_integer(BigInt::from(n))
}

/// Exact fractional coordinate `n / d`. Panics if `d == 0`.
#[inline]
pub fn ratio(n: i64, d: i64) -> Real {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/// A point in the plane.
///
/// The derived ordering is lexicographic (x first, then y), which is also the
/// order in which a line visits its points when traversed forward.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    pub fn new(x: Real, y: Real) -> Self {
        Point { x, y }
    }

    pub fn from_ints(x: i64, y: i64) -> Self {
        Point::new(int(x), int(y))
    }

    /// The point displaced by `(dx, dy)`.
    pub fn offset(&self, dx: &Real, dy: &Real) -> Point {
        Point::new(&self.x + dx, &self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Sign of the cross product (a - o) x (b - o).
/// `Greater` when o, a, b turn counter-clockwise.
pub fn orient(o: &Point, a: &Point, b: &Point) -> Ordering {
    let lhs = (&a.x - &o.x) * (&b.y - &o.y);
    let rhs = (&a.y - &o.y) * (&b.x - &o.x);
    lhs.cmp(&rhs)
}

/// Returns true if the ray from `apex` through `probe` lies strictly inside the
/// wedge swept counter-clockwise from ray `apex -> from` to ray `apex -> to`.
///
/// This is the angular span of the face to the left of an outgoing half-edge
/// `apex -> from` whose predecessor on the face arrives from `to`.
pub fn in_ccw_wedge(apex: &Point, from: &Point, to: &Point, probe: &Point) -> bool {
    match orient(apex, from, to) {
        Ordering::Greater => {
            orient(apex, from, probe) == Ordering::Greater
                && orient(apex, probe, to) == Ordering::Greater
        }
        Ordering::Less => {
            // Reflex wedge: the complement of the closed convex wedge to -> from.
            !(orient(apex, to, probe) != Ordering::Less
                && orient(apex, probe, from) != Ordering::Less)
        }
        Ordering::Equal => {
            let dot = (&from.x - &apex.x) * (&to.x - &apex.x)
                + (&from.y - &apex.y) * (&to.y - &apex.y);
            if dot.is_negative() {
                // Straight angle: the open half-plane left of apex -> from.
                orient(apex, from, probe) == Ordering::Greater
            } else {
                // A lone spoke spans the full turn.
                true
            }
        }
    }
}

// ─────────────────────────────────── Line ─────────────────────────────────────

/// An infinite line through two distinct points.
///
/// Slope and intercepts are derived once at construction. Vertical lines keep
/// only their x-intercept; horizontal lines have no x-intercept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    p1: Point,
    p2: Point,
    slope: Option<Real>,
    y_int: Option<Real>,
    x_int: Option<Real>,
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Result<Self> {
        if p1 == p2 {
            return Err(ArrangementError::InvalidInput(format!(
                "line needs two distinct points, got {} twice",
                p1
            )));
        }

        if p1.x == p2.x {
            let x_int = Some(p1.x.clone());
            return Ok(Line { p1, p2, slope: None, y_int: None, x_int });
        }

        let slope = (&p2.y - &p1.y) / (&p2.x - &p1.x);
        let y_int = &p1.y - &slope * &p1.x;
        let x_int = if slope.is_zero() {
            None
        } else {
            Some(-&y_int / &slope)
        };
        Ok(Line { p1, p2, slope: Some(slope), y_int: Some(y_int), x_int })
    }

    /// Line through two integer points.
    pub fn through(a: (i64, i64), b: (i64, i64)) -> Result<Self> {
        Line::new(Point::from_ints(a.0, a.1), Point::from_ints(b.0, b.1))
    }

    pub fn p1(&self) -> &Point {
        &self.p1
    }

    pub fn p2(&self) -> &Point {
        &self.p2
    }

    pub fn slope(&self) -> Option<&Real> {
        self.slope.as_ref()
    }

    pub fn y_int(&self) -> Option<&Real> {
        self.y_int.as_ref()
    }

    pub fn x_int(&self) -> Option<&Real> {
        self.x_int.as_ref()
    }

    pub fn is_vertical(&self) -> bool {
        self.slope.is_none()
    }

    pub fn is_horizontal(&self) -> bool {
        self.slope.as_ref().map_or(false, Zero::is_zero)
    }

    /// Intersection point with `other`, or `None` when the slopes agree.
    ///
    /// Coincident lines also report `None`; callers that must tell the two
    /// apart use [`Line::is_collinear_with`].
    pub fn intersect(&self, other: &Line) -> Option<Point> {
        match (&self.slope, &other.slope) {
            (None, None) => None,
            (None, Some(m)) => {
                let x = self.x_int.clone()?;
                let y = m * &x + other.y_int.as_ref()?;
                Some(Point::new(x, y))
            }
            (Some(m), None) => {
                let x = other.x_int.clone()?;
                let y = m * &x + self.y_int.as_ref()?;
                Some(Point::new(x, y))
            }
            (Some(m1), Some(m2)) => {
                if m1 == m2 {
                    return None;
                }
                let b1 = self.y_int.as_ref()?;
                let b2 = other.y_int.as_ref()?;
                let x = (b2 - b1) / (m1 - m2);
                let y = m1 * &x + b1;
                Some(Point::new(x, y))
            }
        }
    }

    /// True if both lines describe the same set of points.
    pub fn is_collinear_with(&self, other: &Line) -> bool {
        match (&self.slope, &other.slope) {
            (None, None) => self.x_int == other.x_int,
            (Some(m1), Some(m2)) => m1 == m2 && self.y_int == other.y_int,
            _ => false,
        }
    }

    /// True if `p` lies on the line.
    pub fn contains(&self, p: &Point) -> bool {
        orient(&self.p1, &self.p2, p) == Ordering::Equal
    }

    /// Where the line meets the closed segment `a b`, if it does.
    ///
    /// A segment parallel to (or lying on) the line yields `None`.
    pub fn segment_crossing(&self, a: &Point, b: &Point) -> Option<Point> {
        let edge = Line::new(a.clone(), b.clone()).ok()?;
        let p = self.intersect(&edge)?;
        let (lo_x, hi_x) = if a.x <= b.x { (&a.x, &b.x) } else { (&b.x, &a.x) };
        let (lo_y, hi_y) = if a.y <= b.y { (&a.y, &b.y) } else { (&b.y, &a.y) };
        if p.x >= *lo_x && p.x <= *hi_x && p.y >= *lo_y && p.y <= *hi_y {
            Some(p)
        } else {
            None
        }
    }

    /// Direction vector pointing toward lexicographically increasing points.
    pub fn forward(&self) -> (Real, Real) {
        let dx = &self.p2.x - &self.p1.x;
        let dy = &self.p2.y - &self.p1.y;
        if dx.is_negative() || (dx.is_zero() && dy.is_negative()) {
            (-dx, -dy)
        } else {
            (dx, dy)
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.slope, &self.y_int, &self.x_int) {
            (None, _, Some(x)) => write!(f, "x = {}", x),
            (Some(m), Some(b), _) if m.is_zero() => write!(f, "y = {}", b),
            (Some(m), Some(b), _) => write!(f, "y = {}*x + {}", m, b),
            _ => write!(f, "line through {} and {}", self.p1, self.p2),
        }
    }
}

// ─────────────────────────────── Bounding box ─────────────────────────────────

/// Axis-aligned box enclosing the arrangement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub left: Real,
    pub right: Real,
    pub top: Real,
    pub bottom: Real,
}

impl BoundingBox {
    pub fn new(left: Real, right: Real, top: Real, bottom: Real) -> Self {
        BoundingBox { left, right, top, bottom }
    }

    pub fn from_ints(left: i64, right: i64, top: i64, bottom: i64) -> Self {
        BoundingBox::new(int(left), int(right), int(top), int(bottom))
    }

    /// Corners in the order top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left.clone(), self.top.clone()),
            Point::new(self.right.clone(), self.top.clone()),
            Point::new(self.right.clone(), self.bottom.clone()),
            Point::new(self.left.clone(), self.bottom.clone()),
        ]
    }

    /// True if the box has positive width and height.
    pub fn is_proper(&self) -> bool {
        self.left < self.right && self.bottom < self.top
    }

    /// True if `line` lies along one of the four sides.
    pub fn has_side_on(&self, line: &Line) -> bool {
        if line.is_vertical() {
            line.x_int().map_or(false, |x| *x == self.left || *x == self.right)
        } else if line.is_horizontal() {
            line.y_int().map_or(false, |y| *y == self.top || *y == self.bottom)
        } else {
            false
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={}, right={}, top={}, bottom={}",
            self.left, self.right, self.top, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<Line> {
        vec![
            Line::through((0, 0), (1, 1)).unwrap(),
            Line::through((0, -5), (1, 5)).unwrap(),
            Line::new(Point::new(ratio(39, 4), int(0)), Point::from_ints(0, 13)).unwrap(),
            Line::through((10, 5), (20, 5)).unwrap(),
            Line::through((13, 0), (13, 100)).unwrap(),
        ]
    }

    #[test]
    fn derived_slopes_and_intercepts() {
        let slopes = [Some(int(1)), Some(int(10)), Some(ratio(-4, 3)), Some(int(0)), None];
        let y_ints = [Some(int(0)), Some(int(-5)), Some(int(13)), Some(int(5)), None];
        let x_ints = [Some(int(0)), Some(ratio(1, 2)), Some(ratio(39, 4)), None, Some(int(13))];
        for (i, line) in lines().iter().enumerate() {
            assert_eq!(line.slope(), slopes[i].as_ref(), "slope of line {}", i + 1);
            assert_eq!(line.y_int(), y_ints[i].as_ref(), "y-intercept of line {}", i + 1);
            assert_eq!(line.x_int(), x_ints[i].as_ref(), "x-intercept of line {}", i + 1);
        }
    }

    #[test]
    fn horizontal_and_vertical_flags() {
        let horizontal = [false, false, false, true, false];
        let vertical = [false, false, false, false, true];
        for (i, line) in lines().iter().enumerate() {
            assert_eq!(line.is_horizontal(), horizontal[i], "line {}", i + 1);
            assert_eq!(line.is_vertical(), vertical[i], "line {}", i + 1);
        }
    }

    #[test]
    fn coincident_points_rejected() {
        let err = Line::through((3, 3), (3, 3)).unwrap_err();
        assert!(matches!(err, ArrangementError::InvalidInput(_)));
    }

    #[test]
    fn intersect_general_vertical_horizontal() {
        let ls = lines();
        assert_eq!(ls[0].intersect(&ls[1]), Some(Point::new(ratio(5, 9), ratio(5, 9))));
        assert_eq!(ls[3].intersect(&ls[4]), Some(Point::from_ints(13, 5)));
        assert_eq!(ls[4].intersect(&ls[1]), Some(Point::from_ints(13, 125)));
        assert_eq!(ls[2].intersect(&ls[4]), Some(Point::new(int(13), ratio(-13, 3))));
    }

    #[test]
    fn parallel_and_coincident_lines_do_not_intersect() {
        let a = Line::through((0, 0), (1, 2)).unwrap();
        let b = Line::through((0, 1), (1, 3)).unwrap();
        let same = Line::through((2, 4), (5, 10)).unwrap();
        assert_eq!(a.intersect(&b), None);
        assert_eq!(a.intersect(&same), None);
        assert!(a.is_collinear_with(&same));
        assert!(!a.is_collinear_with(&b));

        let v1 = Line::through((4, 0), (4, 1)).unwrap();
        let v2 = Line::through((4, 7), (4, -2)).unwrap();
        assert_eq!(v1.intersect(&v2), None);
        assert!(v1.is_collinear_with(&v2));
    }

    #[test]
    fn segment_crossing_respects_bounds() {
        let a = Point::new(ratio(-1, 3), int(0));
        let b = Point::from_ints(3, 10);
        let ls = lines();
        assert_eq!(ls[0].segment_crossing(&a, &b), None);
        assert_eq!(ls[1].segment_crossing(&a, &b), Some(Point::new(ratio(6, 7), ratio(25, 7))));
        assert_eq!(ls[2].segment_crossing(&a, &b), Some(Point::new(ratio(36, 13), ratio(121, 13))));
        assert_eq!(ls[3].segment_crossing(&a, &b), Some(Point::new(ratio(4, 3), int(5))));
        assert_eq!(ls[4].segment_crossing(&a, &b), None);
    }

    #[test]
    fn forward_points_lexicographically_up() {
        let l = Line::through((4, 9), (0, 1)).unwrap();
        assert_eq!(l.forward(), (int(4), int(8)));
        let v = Line::through((2, 5), (2, 1)).unwrap();
        assert_eq!(v.forward(), (int(0), int(4)));
    }

    #[test]
    fn wedge_convex_reflex_and_straight() {
        let o = Point::from_ints(0, 0);
        let east = Point::from_ints(1, 0);
        let north = Point::from_ints(0, 1);
        let ne = Point::from_ints(1, 1);
        let sw = Point::from_ints(-1, -1);
        let west = Point::from_ints(-1, 0);

        assert!(in_ccw_wedge(&o, &east, &north, &ne));
        assert!(!in_ccw_wedge(&o, &east, &north, &sw));
        assert!(in_ccw_wedge(&o, &north, &east, &sw));
        assert!(!in_ccw_wedge(&o, &north, &east, &ne));
        assert!(in_ccw_wedge(&o, &east, &west, &ne));
        assert!(!in_ccw_wedge(&o, &east, &west, &sw));
    }

    #[test]
    fn display_forms() {
        let ls = lines();
        assert_eq!(ls[0].to_string(), "y = 1*x + 0");
        assert_eq!(ls[3].to_string(), "y = 5");
        assert_eq!(ls[4].to_string(), "x = 13");
    }

    #[test]
    fn box_sides_detected() {
        let bbox = BoundingBox::from_ints(0, 10, 10, 0);
        assert!(bbox.is_proper());
        assert!(bbox.has_side_on(&Line::through((0, 3), (0, 4)).unwrap()));
        assert!(bbox.has_side_on(&Line::through((2, 10), (5, 10)).unwrap()));
        assert!(!bbox.has_side_on(&Line::through((2, 5), (5, 5)).unwrap()));
        assert!(!BoundingBox::from_ints(3, 3, 10, 0).is_proper());
    }
}
