use crate::encode::DEFAULT_FRAC_BITS;
use crate::math::IVec2;
use crate::{Error, Result};
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Knobs of a generation run. `Default` holds the compiled-in values the harness expects.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub num_cases: u32,

    /// Inclusive sampling ranges for vertex coordinates and depths.
    pub x_range: RangeInclusive<i64>,
    pub y_range: RangeInclusive<i64>,
    pub z_range: RangeInclusive<i64>,

    pub query_point: IVec2,
    pub frac_bits: u32,

    /// Fixed seed for reproducible runs, OS entropy if absent.
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    pub const DEFAULT_NUM_CASES: u32 = 5;
    pub const MAX_FRAC_BITS: u32 = 31;

    pub fn with_num_cases(mut self, num_cases: u32) -> Self {
        self.num_cases = num_cases;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, range) in [("x", &self.x_range), ("y", &self.y_range), ("z", &self.z_range)] {
            if range.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "{} range {}..={} is empty",
                    name,
                    range.start(),
                    range.end()
                )));
            }
        }
        if self.frac_bits > Self::MAX_FRAC_BITS {
            return Err(Error::InvalidConfig(format!(
                "frac_bits {} exceeds {}",
                self.frac_bits,
                Self::MAX_FRAC_BITS
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_cases: Self::DEFAULT_NUM_CASES,
            x_range: 0..=400,
            y_range: 0..=127,
            z_range: -32768..=32767,
            query_point: IVec2::ORIGIN,
            frac_bits: DEFAULT_FRAC_BITS,
            seed: None,
            output_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_cases, 5);
        assert_eq!(config.frac_bits, 8);
        assert_eq!(config.query_point, IVec2::ORIGIN);
    }

    #[test]
    fn rejects_inverted_range() {
        let config = GeneratorConfig { y_range: 10..=0, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_too_many_frac_bits() {
        let config = GeneratorConfig { frac_bits: 32, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn builders_override_fields() {
        let config = GeneratorConfig::default().with_num_cases(12).with_seed(99).with_output_dir("/tmp/x");
        assert_eq!(config.num_cases, 12);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/x"));
    }
}
