use super::*;

/// Barycentric weights of a query point with respect to a triangle.
///
/// `l3` is always `1.0 - l1 - l2`, including the degenerate case where one or both of the
/// leading weights collapsed to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarycentricWeights {
    pub l1: f64,
    pub l2: f64,
    pub l3: f64,
}

/// Signed-area proxies of the two edge systems solved for `l1` and `l2`, each an exact integer
/// rounded once to f64 (see [`edge`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Denominators {
    pub d1: f64,
    pub d2: f64,
}

impl Denominators {
    pub fn of(a: IVec2, b: IVec2, c: IVec2) -> Self {
        Self { d1: edge(c, b, a), d2: edge(a, c, b) }
    }

    pub fn is_degenerate(&self) -> bool {
        self.d1 == 0.0 || self.d2 == 0.0
    }
}

impl BarycentricWeights {
    /// Solves for the weights of `d` in triangle `(a, b, c)`.
    ///
    /// A zero denominator yields a weight of exactly `0.0` for that term instead of a division fault.
    pub fn solve(a: IVec2, b: IVec2, c: IVec2, d: IVec2) -> Self {
        let denoms = Denominators::of(a, b, c);
        let l1 = if denoms.d1 == 0.0 { 0.0 } else { edge(c, b, d) / denoms.d1 };
        let l2 = if denoms.d2 == 0.0 { 0.0 } else { edge(a, c, d) / denoms.d2 };
        Self { l1, l2, l3: 1.0 - l1 - l2 }
    }

    /// `l1 * z1 + l2 * z2 + l3 * z3`, accumulated left to right.
    pub fn interpolate(&self, z: [f64; 3]) -> f64 {
        self.l1 * z[0] + self.l2 * z[1] + self.l3 * z[2]
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.l1, self.l2, self.l3]
    }

    pub fn sum(&self) -> f64 {
        self.l1 + self.l2 + self.l3
    }
}
