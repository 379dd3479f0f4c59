#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::ledger::Subject;

/// Error cases of [`calculate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Calculation was attempted before any subject was recorded.
    #[error("add at least one subject before calculating a CGPA")]
    EmptyLedger,

    /// Every recorded subject has zero credits, so the weighted average is
    /// undefined.
    #[error("total credits are zero; record at least one subject with credits")]
    ZeroTotalCredits,
}

/// Computes the credit-weighted grade-point average over `subjects`.
///
/// Pure function of its input: the result does not depend on record order and
/// nothing is mutated. Fails on an empty input or when the credits sum to
/// zero; grades are already validated by construction, so no lookup can fail
/// here.
pub fn calculate(subjects: &[Subject]) -> Result<f64, CalcError> {
    if subjects.is_empty() {
        return Err(CalcError::EmptyLedger);
    }

    // Widened to u64 so large credit values cannot overflow the sums.
    let total_credits: u64 = subjects.iter().map(|s| u64::from(s.credits)).sum();
    if total_credits == 0 {
        return Err(CalcError::ZeroTotalCredits);
    }

    let weighted_points: u64 = subjects
        .iter()
        .map(|s| u64::from(s.grade.points()) * u64::from(s.credits))
        .sum();

    Ok(weighted_points as f64 / total_credits as f64)
}
