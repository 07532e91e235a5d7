use crate::math::*;

/// Integer 2-D point. Sampled vertex coordinates live here so that edge functions stay exact until
/// the final division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IVec2 {
    pub x: i64,
    pub y: i64,
}

impl IVec2 {
    pub const ORIGIN: IVec2 = IVec2 { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Edge function of `p` against the edge `origin -> to`, i.e. `(p - origin) ⨯ (to - origin)` with the
/// y-first sign convention used by the barycentric denominators.
///
/// Exact in i128 and rounded once to f64 whenever the determinant fits, which covers every
/// coordinate within ±2^62. Wider inputs fall back to f64 arithmetic rather than overflowing.
pub fn edge(origin: IVec2, to: IVec2, p: IVec2) -> f64 {
    let (ox, oy) = (origin.x as i128, origin.y as i128);
    let (ex, ey) = (to.x as i128 - ox, to.y as i128 - oy);
    let (vx, vy) = (p.x as i128 - ox, p.y as i128 - oy);
    match Mat22([vy, vx, ey, ex]).checked_det() {
        Some(det) => det as f64,
        None => vy as f64 * ex as f64 - vx as f64 * ey as f64,
    }
}

impl From<(i64, i64)> for IVec2 {
    fn from((x, y): (i64, i64)) -> Self {
        IVec2 { x, y }
    }
}
