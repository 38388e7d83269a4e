//!
//! Selection of the function baseline.
//!

use crate::model::record::measurement::MeasurementRecord;

///
/// The function baseline of a contract.
///
/// It is the default pipeline build of the candidate toolchain, and all
/// function gas differences are computed against it.
///
#[derive(Debug, Clone, Copy)]
pub struct Baseline<'a> {
    /// The selected measurement record.
    pub record: &'a MeasurementRecord,
    /// Number of records eligible to be the baseline.
    pub eligible: usize,
}

impl Baseline<'_> {
    ///
    /// Whether more than one record was eligible, and the first one was picked.
    ///
    pub fn is_ambiguous(&self) -> bool {
        self.eligible > 1
    }
}

///
/// Selects the function baseline among the measurements of a contract.
///
/// Returns `None` if the contract has no eligible record.
///
pub fn select<'a>(measurements: &[&'a MeasurementRecord]) -> Option<Baseline<'a>> {
    let mut eligible = measurements
        .iter()
        .copied()
        .filter(|record| record.compiler.is_function_baseline_candidate());
    let record = eligible.next()?;
    Some(Baseline {
        record,
        eligible: 1 + eligible.count(),
    })
}
