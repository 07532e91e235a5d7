use super::*;
use std::fmt;

/// Human-readable per-case progress block. Diagnostic only, nothing parses it.
pub struct CaseReport<'a>(pub &'a Evaluation);

impl fmt::Display for CaseReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eval = self.0;
        let case = &eval.case;
        let [a, b, c] = case.vertices;
        let [z1, z2, z3] = case.depths;
        let w = &eval.weights;
        writeln!(
            f,
            "Case {}: A=({},{},{}) B=({},{},{}) C=({},{},{}) D=({},{},0)",
            case.id, a.x, a.y, z1, b.x, b.y, z2, c.x, c.y, z3, case.query.x, case.query.y
        )?;
        writeln!(f, "  z1={} z2={} z3={}", z1, z2, z3)?;
        writeln!(f, "  Float Lambdas:  λ1={:.6} λ2={:.6} λ3={:.6}", w.l1, w.l2, w.l3)?;
        writeln!(f, "  Expected z: {:.6}", eval.z)?;
        write!(
            f,
            "  Fixed-Point Hex: λ1=0x{} λ2=0x{} λ3=0x{} z=0x{}",
            eval.words.l1, eval.words.l2, eval.words.l3, eval.words.z
        )?;
        if eval.is_degenerate() {
            write!(f, " (degenerate)")?;
        }
        Ok(())
    }
}
