use std::f64::consts::PI;

use crate::error::ProfileError;

/// Real roots of a cubic, tagged by multiplicity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CubicRoots {
    /// One real root; the other two are a complex-conjugate pair.
    Single(f64),

    /// Three real roots with a repeated pair (`roots[1] == roots[2]`).
    Repeated([f64; 3]),

    /// Three distinct real roots.
    Distinct([f64; 3]),
}

impl CubicRoots {
    /// Classification: 1 (single real), 2 (repeated pair) or 3 (distinct).
    pub fn count(&self) -> usize {
        match self {
            CubicRoots::Single(_) => 1,
            CubicRoots::Repeated(_) => 2,
            CubicRoots::Distinct(_) => 3,
        }
    }

    /// First root returned by the solver. Always real.
    pub fn first(&self) -> f64 {
        match self {
            CubicRoots::Single(x) => *x,
            CubicRoots::Repeated(r) | CubicRoots::Distinct(r) => r[0],
        }
    }

    /// Root slots; `None` marks a slot holding a complex root.
    pub fn slots(&self) -> [Option<f64>; 3] {
        match self {
            CubicRoots::Single(x) => [Some(*x), None, None],
            CubicRoots::Repeated(r) | CubicRoots::Distinct(r) => r.map(Some),
        }
    }

    /// Smallest non-negative real root, or 0 if none is.
    pub fn min_non_negative(&self) -> f64 {
        match self {
            CubicRoots::Single(x) => min_root(*x, -1.0),
            CubicRoots::Repeated(r) | CubicRoots::Distinct(r) => min_root3(r[0], r[1], r[2]),
        }
    }
}

/// Discriminant band treated as exactly zero.
const DISC_ZERO_BAND: f64 = 1e-10;

/// Solves `a·x³ + b·x² + c·x + d = 0` with Cardano's method.
///
/// # Errors
/// `DegenerateEquation` when `a == 0` (not a cubic) or `d == 0` (zero is a
/// root; divide through by `x` and solve the quadratic instead).
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Result<CubicRoots, ProfileError> {
    if a == 0.0 {
        return Err(ProfileError::DegenerateEquation(
            "leading coefficient is zero, use a quadratic solver",
        ));
    }
    if d == 0.0 {
        return Err(ProfileError::DegenerateEquation(
            "constant term is zero, one root is 0; reduce to a quadratic",
        ));
    }

    // Normalize to x³ + b·x² + c·x + d
    let b = b / a;
    let c = c / a;
    let d = d / a;

    let q = (3.0 * c - b * b) / 9.0;
    let r = (-(27.0 * d) + b * (9.0 * c - 2.0 * b * b)) / 54.0;
    let disc = q * q * q + r * r;
    let shift = b / 3.0;

    if disc > DISC_ZERO_BAND {
        let s = (r + disc.sqrt()).cbrt();
        let t = (r - disc.sqrt()).cbrt();
        return Ok(CubicRoots::Single(-shift + s + t));
    }

    if disc >= 0.0 {
        let r13 = r.cbrt();
        let x1 = -shift + 2.0 * r13;
        let x2 = -(r13 + shift);
        return Ok(CubicRoots::Repeated([x1, x2, x2]));
    }

    // disc < 0 implies q < 0
    let q = -q;
    let theta = (r / (q * q * q).sqrt()).clamp(-1.0, 1.0).acos();
    let r13 = 2.0 * q.sqrt();
    Ok(CubicRoots::Distinct([
        -shift + r13 * (theta / 3.0).cos(),
        -shift + r13 * ((theta + 2.0 * PI) / 3.0).cos(),
        -shift + r13 * ((theta + 4.0 * PI) / 3.0).cos(),
    ]))
}

/// Smallest non-negative of two candidates; 0 when both are negative.
pub fn min_root(r1: f64, r2: f64) -> f64 {
    min_non_negative([r1, r2])
}

/// Smallest non-negative of three candidates; 0 when all are negative.
pub fn min_root3(r1: f64, r2: f64, r3: f64) -> f64 {
    min_non_negative([r1, r2, r3])
}

fn min_non_negative<const N: usize>(roots: [f64; N]) -> f64 {
    roots
        .into_iter()
        .filter(|r| *r >= 0.0)
        .reduce(f64::min)
        .unwrap_or(0.0)
}
