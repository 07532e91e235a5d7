use crate::encode::*;
use crate::math::*;

/// One sampled triangle with per-vertex depths and the point its weights are solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    pub id: u32,
    pub vertices: [IVec2; 3],
    pub depths: [i64; 3],

    /// Not part of the packed record, the consuming hardware assumes it.
    pub query: IVec2,
}

impl TestCase {
    pub fn a(&self) -> IVec2 {
        self.vertices[0]
    }

    pub fn b(&self) -> IVec2 {
        self.vertices[1]
    }

    pub fn c(&self) -> IVec2 {
        self.vertices[2]
    }

    pub fn weights(&self) -> BarycentricWeights {
        BarycentricWeights::solve(self.a(), self.b(), self.c(), self.query)
    }

    pub fn is_degenerate(&self) -> bool {
        Denominators::of(self.a(), self.b(), self.c()).is_degenerate()
    }

    pub fn record_fields(&self) -> RecordFields {
        RecordFields {
            id: self.id as i64,
            x: self.vertices.map(|v| v.x),
            y: self.vertices.map(|v| v.y),
            z: self.depths,
        }
    }
}

/// Expected outputs of one case in their wire encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedWords {
    pub l1: FixedPointWord,
    pub l2: FixedPointWord,
    pub l3: FixedPointWord,
    pub z: FixedPointWord,
}

/// A test case together with everything derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub case: TestCase,
    pub weights: BarycentricWeights,
    pub z: f64,
    pub record: PackedRecord,
    pub words: ExpectedWords,
}

impl Evaluation {
    pub fn of(case: &TestCase, frac_bits: u32) -> Self {
        let weights = case.weights();
        let z = weights.interpolate(case.depths.map(|z| z as f64));
        let record = PackedRecord::pack(&case.record_fields());
        let words = ExpectedWords {
            l1: FixedPointWord::encode(weights.l1, frac_bits),
            l2: FixedPointWord::encode(weights.l2, frac_bits),
            l3: FixedPointWord::encode(weights.l3, frac_bits),
            z: FixedPointWord::encode(z, frac_bits),
        };
        Self { case: *case, weights, z, record, words }
    }

    pub fn is_degenerate(&self) -> bool {
        self.case.is_degenerate()
    }
}
