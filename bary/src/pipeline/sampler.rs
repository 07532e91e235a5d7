use super::*;
use crate::math::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Source of uniformly distributed integers. The pipeline only ever asks for "next integer in [lo, hi]".
pub trait IntSource {
    fn next_in(&mut self, lo: i64, hi: i64) -> i64;

    fn next_in_range(&mut self, range: &RangeInclusive<i64>) -> i64 {
        self.next_in(*range.start(), *range.end())
    }
}

/// [`IntSource`] over any `rand` generator.
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn from_seed_or_os(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl<R: Rng> IntSource for RngSource<R> {
    fn next_in(&mut self, lo: i64, hi: i64) -> i64 {
        self.rng.random_range(lo..=hi)
    }
}

/// Draws triangles and depths within the configured ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometrySampler {
    pub x_range: RangeInclusive<i64>,
    pub y_range: RangeInclusive<i64>,
    pub z_range: RangeInclusive<i64>,
    pub query: IVec2,
}

impl GeometrySampler {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            x_range: config.x_range.clone(),
            y_range: config.y_range.clone(),
            z_range: config.z_range.clone(),
            query: config.query_point,
        }
    }

    /// Draw order is x1, y1, x2, y2, x3, y3, z1, z2, z3.
    pub fn sample<S: IntSource + ?Sized>(&self, id: u32, source: &mut S) -> TestCase {
        let mut vertex = || IVec2::new(source.next_in_range(&self.x_range), source.next_in_range(&self.y_range));
        let vertices = [vertex(), vertex(), vertex()];
        let mut depth = || source.next_in_range(&self.z_range);
        let depths = [depth(), depth(), depth()];
        TestCase { id, vertices, depths, query: self.query }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Replay(VecDeque<i64>);

    fn default_sampler() -> GeometrySampler {
        GeometrySampler::from_config(&GeneratorConfig::default())
    }

    impl IntSource for Replay {
        fn next_in(&mut self, lo: i64, hi: i64) -> i64 {
            let v = self.0.pop_front().unwrap();
            assert!((lo..=hi).contains(&v), "{} not in {}..={}", v, lo, hi);
            v
        }
    }

    #[test]
    fn draws_in_vertex_then_depth_order() {
        let mut source = Replay((1..=9).collect());
        let case = default_sampler().sample(4, &mut source);
        assert_eq!(case.id, 4);
        assert_eq!(case.vertices, [IVec2::new(1, 2), IVec2::new(3, 4), IVec2::new(5, 6)]);
        assert_eq!(case.depths, [7, 8, 9]);
        assert_eq!(case.query, IVec2::ORIGIN);
        assert!(source.0.is_empty());
    }

    #[test]
    fn stays_within_default_ranges() {
        let sampler = default_sampler();
        let mut source = RngSource::seeded(1);
        for id in 0..2000 {
            let case = sampler.sample(id, &mut source);
            for v in case.vertices {
                assert!((0..=400).contains(&v.x));
                assert!((0..=127).contains(&v.y));
            }
            for z in case.depths {
                assert!((-32768..=32767).contains(&z));
            }
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let sampler = default_sampler();
        let mut s1 = RngSource::seeded(42);
        let mut s2 = RngSource::seeded(42);
        for id in 0..16 {
            assert_eq!(sampler.sample(id, &mut s1), sampler.sample(id, &mut s2));
        }
    }

    #[test]
    fn depths_outside_i32_are_kept() {
        let wide = (1i64 << 33) + 5;
        let config = GeneratorConfig { z_range: wide..=wide, ..GeneratorConfig::default() };
        let case = GeometrySampler::from_config(&config).sample(0, &mut RngSource::seeded(9));
        assert_eq!(case.depths, [wide; 3]);
    }

    #[test]
    fn single_value_range_is_constant() {
        let mut source = RngSource::seeded(3);
        assert_eq!(source.next_in(5, 5), 5);
        assert_eq!(source.next_in(-1, -1), -1);
    }
}
