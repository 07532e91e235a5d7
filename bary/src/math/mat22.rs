/// Row-major 2x2 integer matrix, wide enough for products of i64 differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mat22(pub [i128; 4]);

impl Mat22 {
    /// `None` when the determinant does not fit i128.
    pub fn checked_det(&self) -> Option<i128> {
        let m = &self.0;
        m[0].checked_mul(m[3])?.checked_sub(m[1].checked_mul(m[2])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_det() {
        assert_eq!(Mat22([2, 3, 1, 4]).checked_det(), Some(5));
        assert_eq!(Mat22([1, 2, 2, 4]).checked_det(), Some(0));
        assert_eq!(Mat22([0, 1, 1, 0]).checked_det(), Some(-1));
    }

    #[test]
    fn test_det_overflow_is_reported() {
        assert_eq!(Mat22([i128::MAX, 0, 0, 2]).checked_det(), None);
        assert_eq!(Mat22([i128::MAX, 1, 1, 1]).checked_det(), Some(i128::MAX - 1));
    }
}
