use std::fmt;
use std::str::FromStr;

/// Default number of fractional bits, i.e. signed 24.8 inside a 32-bit word.
pub const DEFAULT_FRAC_BITS: u32 = 8;

/// A 32-bit two's-complement fixed-point word.
///
/// Encoding never saturates: anything outside the signed 32-bit range wraps through the mask,
/// the consuming harness compares the raw hex text bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FixedPointWord(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWordError(pub String);

impl fmt::Display for ParseWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected 8 hex digits, got {:?}", self.0)
    }
}

impl std::error::Error for ParseWordError {}

impl FixedPointWord {
    pub const HEX_DIGITS: usize = 8;
    const MODULUS: f64 = 4_294_967_296.0;

    /// Scales by `2^frac_bits`, rounds half to even and keeps the low 32 bits.
    pub fn encode(value: f64, frac_bits: u32) -> Self {
        let scaled = (value * 2f64.powi(frac_bits as i32)).round_ties_even();
        if scaled.is_nan() {
            return FixedPointWord(0);
        }
        if scaled.is_infinite() {
            // A finite input that overflowed is far past 2^53, hence a multiple of 2^32.
            return if value.is_finite() || scaled < 0.0 { FixedPointWord(0) } else { FixedPointWord(u32::MAX) };
        }
        // `scaled` is an integer, so the reduction is exact at any magnitude.
        FixedPointWord(scaled.rem_euclid(Self::MODULUS) as u32)
    }

    pub fn encode_24x8(value: f64) -> Self {
        Self::encode(value, DEFAULT_FRAC_BITS)
    }

    /// Raw word reinterpreted as a signed integer.
    pub fn as_i32(self) -> i32 {
        self.0 as i32
    }

    /// Inverse of [`FixedPointWord::encode`] for values that did not wrap.
    pub fn to_f64(self, frac_bits: u32) -> f64 {
        self.as_i32() as f64 / 2f64.powi(frac_bits as i32)
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FixedPointWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl FromStr for FixedPointWord {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::HEX_DIGITS || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseWordError(s.to_string()));
        }
        u32::from_str_radix(s, 16).map(FixedPointWord).map_err(|_| ParseWordError(s.to_string()))
    }
}
