//! Geometric predicates with explicit tolerance.

use crate::error::{DelaunayError, Result};
use crate::primitives::Point2;
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// Returns the orientation of the triangle formed by points `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if `c` is on the line (within `eps` tolerance)
///
/// The test is based on the signed area of the triangle. If the absolute
/// value of twice the signed area is less than `eps`, the points are
/// considered collinear.
///
/// # Arguments
///
/// * `a`, `b`, `c` - The three points to test
/// * `eps` - Tolerance for collinearity. This is compared against the absolute
///   value of the cross product (twice the signed area).
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    // Cross product of (b - a) and (c - a)
    // This equals twice the signed area of triangle ABC
    let ab = b - a;
    let ac = c - a;
    let cross = ab.cross(ac);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Tests if a point lies strictly inside the triangle `a`, `b`, `c`.
///
/// Works for either winding of the triangle; a point on an edge (within
/// `eps` of collinear with it) counts as outside.
pub fn point_in_triangle<F: Float>(
    p: Point2<F>,
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    eps: F,
) -> bool {
    let oab = orient2d(a, b, p, eps);
    let obc = orient2d(b, c, p, eps);
    let oca = orient2d(c, a, p, eps);
    oab == obc && obc == oca && oab != Orientation::Collinear
}

/// Tests if a point lies strictly inside the circumcircle of a triangle.
///
/// The triangle may be given in either winding: the sign of its doubled
/// area decides how the determinant is read, so the answer is independent
/// of vertex order. A point exactly on the circumcircle is outside (strict
/// inequality).
///
/// The determinant has rows `(vx - px, vy - py, (vx-px)² + (vy-py)²)` for
/// each triangle vertex `v`; for a counter-clockwise triangle it is positive
/// iff the point is inside.
///
/// # Arguments
///
/// * `p` - The point to test
/// * `a`, `b`, `c` - The triangle vertices, any winding
/// * `eps` - Tolerance below which the triangle's doubled area counts as zero
///
/// # Errors
///
/// Returns [`DelaunayError::DegenerateTriangle`] if the triangle's doubled
/// area is within `eps` of zero; the test is meaningless for a triangle
/// with no circumcircle.
///
/// # Example
///
/// ```
/// use delaunum::{in_circumcircle, Point2};
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.5, 0.866); // Roughly equilateral
///
/// // Center of the triangle is inside its circumcircle
/// let center = Point2::new(0.5, 0.29);
/// assert!(in_circumcircle(center, a, b, c, 1e-12).unwrap());
///
/// // A far point is outside
/// let far = Point2::new(10.0, 10.0);
/// assert!(!in_circumcircle(far, a, b, c, 1e-12).unwrap());
/// ```
pub fn in_circumcircle<F: Float>(
    p: Point2<F>,
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    eps: F,
) -> Result<bool> {
    // Doubled signed area fixes the winding. Branch on its sign rather
    // than dividing the determinant by it: the quotient blows up as the
    // triangle degenerates.
    let area2 = (b - a).cross(c - a);
    if area2.abs() <= eps {
        return Err(DelaunayError::DegenerateTriangle);
    }

    let ax = a.x - p.x;
    let ay = a.y - p.y;
    let bx = b.x - p.x;
    let by = b.y - p.y;
    let cx = c.x - p.x;
    let cy = c.y - p.y;

    let aa = ax * ax + ay * ay;
    let bb = bx * bx + by * by;
    let cc = cx * cx + cy * cy;

    let det = ax * (by * cc - cy * bb) - ay * (bx * cc - cx * bb) + aa * (bx * cy - cx * by);

    Ok(if area2 > F::zero() {
        det > F::zero()
    } else {
        det < F::zero()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    // orient2d tests

    #[test]
    fn test_orient2d_ccw() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 1.0);
        assert_eq!(orient2d(a, b, c, EPS), Orientation::CounterClockwise);
    }

    #[test]
    fn test_orient2d_cw() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, -1.0);
        assert_eq!(orient2d(a, b, c, EPS), Orientation::Clockwise);
    }

    #[test]
    fn test_orient2d_collinear() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(2.0, 0.0);
        assert_eq!(orient2d(a, b, c, EPS), Orientation::Collinear);
    }

    #[test]
    fn test_orient2d_nearly_collinear() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 1e-14); // Very slightly above the line
        assert_eq!(orient2d(a, b, c, EPS), Orientation::Collinear);
    }

    // point_in_triangle tests

    #[test]
    fn test_point_in_triangle_inside() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(0.0, 4.0);
        assert!(point_in_triangle(Point2::new(1.0, 1.0), a, b, c, EPS));
    }

    #[test]
    fn test_point_in_triangle_outside() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(0.0, 4.0);
        assert!(!point_in_triangle(Point2::new(3.0, 3.0), a, b, c, EPS));
        assert!(!point_in_triangle(Point2::new(-1.0, 1.0), a, b, c, EPS));
    }

    #[test]
    fn test_point_in_triangle_on_edge_is_outside() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(0.0, 4.0);
        assert!(!point_in_triangle(Point2::new(2.0, 0.0), a, b, c, EPS));
        assert!(!point_in_triangle(a, a, b, c, EPS));
    }

    #[test]
    fn test_point_in_triangle_either_winding() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(0.0, 4.0);
        let p = Point2::new(1.0, 1.0);
        assert!(point_in_triangle(p, a, b, c, EPS));
        assert!(point_in_triangle(p, a, c, b, EPS));
    }

    // in_circumcircle tests

    #[test]
    fn test_in_circumcircle_inside() {
        // Equilateral-ish triangle
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 0.866);

        // Centroid is inside the circumcircle
        let centroid = Point2::new(0.5, 0.288);
        assert!(in_circumcircle(centroid, a, b, c, EPS).unwrap());
    }

    #[test]
    fn test_in_circumcircle_outside() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 0.866);

        let far = Point2::new(10.0, 10.0);
        assert!(!in_circumcircle(far, a, b, c, EPS).unwrap());
    }

    #[test]
    fn test_in_circumcircle_winding_independent() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 0.866);
        let inside = Point2::new(0.5, 0.3);
        let outside = Point2::new(2.0, 2.0);

        // Clockwise listing must agree with counter-clockwise
        assert!(in_circumcircle(inside, a, c, b, EPS).unwrap());
        assert!(in_circumcircle(inside, a, b, c, EPS).unwrap());
        assert!(!in_circumcircle(outside, a, c, b, EPS).unwrap());
        assert!(!in_circumcircle(outside, a, b, c, EPS).unwrap());
    }

    #[test]
    fn test_in_circumcircle_on_circle_is_outside() {
        // Right triangle: the circumcircle has its diameter on the hypotenuse,
        // so the opposite corner of the unit square lies exactly on it.
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);

        let on_circle = Point2::new(1.0, 1.0);
        assert!(!in_circumcircle(on_circle, a, b, c, EPS).unwrap());
    }

    #[test]
    fn test_in_circumcircle_degenerate_triangle() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(2.0, 0.0);

        let result = in_circumcircle(Point2::new(0.5, 0.5), a, b, c, EPS);
        assert!(matches!(result, Err(DelaunayError::DegenerateTriangle)));
    }
}
