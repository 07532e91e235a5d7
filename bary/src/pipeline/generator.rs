use super::*;
use crate::Result;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub cases: usize,
    pub degenerate: usize,
    pub files: Vec<PathBuf>,
}

/// Drives sampling, solving, encoding and file output for a whole run.
///
/// Sampling is sequential so that a seeded source always yields the same cases in the same order.
/// Evaluation is pure and runs on the rayon pool; `collect` keeps case-index order, so line `i`
/// of every output file belongs to case `i`.
pub struct Generator {
    config: GeneratorConfig,
    sampler: GeometrySampler,
}

impl Generator {
    /// Largest id that fits the 16-bit tID field before wrapping.
    pub const MAX_DISTINCT_IDS: u32 = 1 << 16;

    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        if config.num_cases > Self::MAX_DISTINCT_IDS {
            warn!(num_cases = config.num_cases, "case ids wrap in the 16-bit tID field");
        }
        let sampler = GeometrySampler::from_config(&config);
        Ok(Self { config, sampler })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn sample<S: IntSource + ?Sized>(&self, source: &mut S) -> Vec<TestCase> {
        (0..self.config.num_cases).map(|id| self.sampler.sample(id, source)).collect()
    }

    pub fn evaluate(&self, cases: &[TestCase]) -> Vec<Evaluation> {
        let frac_bits = self.config.frac_bits;
        cases.par_iter().map(|case| Evaluation::of(case, frac_bits)).collect()
    }

    /// Splits evaluations into the five output columns.
    pub fn file_set(evaluations: &[Evaluation]) -> MemFileSet {
        MemFileSet {
            vectors: evaluations.iter().map(|e| e.record).collect(),
            l1: evaluations.iter().map(|e| e.words.l1).collect(),
            l2: evaluations.iter().map(|e| e.words.l2).collect(),
            l3: evaluations.iter().map(|e| e.words.l3).collect(),
            z: evaluations.iter().map(|e| e.words.z).collect(),
        }
    }

    /// Writes all five files. The first I/O failure aborts the run.
    pub fn write(&self, evaluations: &[Evaluation]) -> Result<GenerationSummary> {
        let files = Self::file_set(evaluations).write(&self.config.output_dir)?;
        for file in &files {
            info!(path = %file.display(), lines = evaluations.len(), "wrote");
        }
        Ok(GenerationSummary {
            cases: evaluations.len(),
            degenerate: evaluations.iter().filter(|e| e.is_degenerate()).count(),
            files,
        })
    }

    /// Full run against an explicit source; `on_case` sees every evaluation in case order before
    /// anything is written.
    #[instrument(skip_all, fields(num_cases = self.config.num_cases, frac_bits = self.config.frac_bits))]
    pub fn run_with<S, F>(&self, source: &mut S, mut on_case: F) -> Result<GenerationSummary>
    where
        S: IntSource + ?Sized,
        F: FnMut(&Evaluation),
    {
        let cases = self.sample(source);
        let evaluations = self.evaluate(&cases);
        for eval in &evaluations {
            if eval.is_degenerate() {
                warn!(id = eval.case.id, "degenerate triangle, forced zero weight");
            }
            debug!("{}", CaseReport(eval));
            on_case(eval);
        }
        let summary = self.write(&evaluations)?;
        info!(cases = summary.cases, degenerate = summary.degenerate, "generation finished");
        Ok(summary)
    }

    /// Full run using the configured seed, or OS entropy when none is set.
    pub fn run<F: FnMut(&Evaluation)>(&self, on_case: F) -> Result<GenerationSummary> {
        let mut source = RngSource::from_seed_or_os(self.config.seed);
        self.run_with(&mut source, on_case)
    }
}
