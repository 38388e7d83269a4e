//!
//! Comparison of reference and candidate toolchain measurements.
//!

pub mod aggregation;
pub mod baseline;
pub mod difference;
pub mod error;
pub mod grouping;
pub mod ranking;
pub mod report;


use crate::model::compiler::toolchain::Toolchain;
use crate::model::record::Record;

use self::error::Error;
use self::report::ContractComparison;

///
/// Comparison options.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Drop contracts with more than one record eligible to be the function baseline,
    /// instead of picking the first one.
    pub strict_baseline: bool,
}

///
/// Compares the reference toolchain records with the candidate toolchain records.
///
/// Returns one report per contract, in order of first appearance, with the
/// reference records visited first. Contracts without a function baseline are
/// dropped.
///
pub fn compare(
    reference: &[Record],
    candidate: &[Record],
    options: &Options,
) -> Result<Vec<ContractComparison>, Error> {
    if reference.is_empty() {
        return Err(Error::EmptyInput {
            toolchain: Toolchain::Solc,
        });
    }
    if candidate.is_empty() {
        return Err(Error::EmptyInput {
            toolchain: Toolchain::Solx,
        });
    }

    let groups = grouping::group(reference.iter().chain(candidate.iter()));
    let comparisons = groups
        .iter()
        .filter_map(|group| {
            let Some(baseline) = baseline::select(group.measurements.as_slice()) else {
                tracing::warn!(
                    contract = group.contract,
                    "Dropping contract without a default pipeline solx measurement"
                );
                return None;
            };
            if baseline.is_ambiguous() {
                if options.strict_baseline {
                    tracing::warn!(
                        contract = group.contract,
                        eligible = baseline.eligible,
                        "Dropping contract with ambiguous function baseline"
                    );
                    return None;
                }
                tracing::warn!(
                    contract = group.contract,
                    eligible = baseline.eligible,
                    selected = %baseline.record.compiler,
                    "Ambiguous function baseline, using the first one"
                );
            }
            Some(ContractComparison::build(group, baseline))
        })
        .collect();

    Ok(comparisons)
}
