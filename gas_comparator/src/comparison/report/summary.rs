//!
//! Summary of a comparison over all contracts.
//!

use crate::comparison::difference::Percentage;
use crate::comparison::report::row::MethodRow;
use crate::comparison::report::selection::VersionPair;
use crate::comparison::report::statistics::PairStatistics;
use crate::comparison::report::ContractComparison;

///
/// Difference of a single function for a selected version pair.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FunctionDelta<'a> {
    /// Contract identifier.
    pub contract: &'a str,
    /// Function signature.
    pub function: &'a str,
    /// Difference of the candidate against the reference, in percent.
    pub difference: Percentage,
}

///
/// Summary of a comparison over all contracts.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Summary<'a> {
    /// Statistics over all functions of all contracts.
    pub statistics: PairStatistics,
    /// Improved functions, the most improved first.
    pub improvements: Vec<FunctionDelta<'a>>,
    /// Regressed functions, the most regressed first.
    pub regressions: Vec<FunctionDelta<'a>>,
}

impl<'a> Summary<'a> {
    ///
    /// Summarizes `comparisons`, selecting the version pair of each contract with `selector`.
    ///
    pub fn new<S>(comparisons: &'a [ContractComparison], selector: S) -> Self
    where
        S: Fn(&ContractComparison) -> VersionPair,
    {
        let mut total = 0;
        let mut contracts: Vec<&'a str> = Vec::new();
        let mut rows: Vec<MethodRow<'a>> = Vec::new();
        for comparison in comparisons.iter() {
            let pair = selector(comparison);
            total += comparison.method_count;
            for row in comparison.method_rows(&pair).into_iter() {
                contracts.push(comparison.contract_name.as_str());
                rows.push(row);
            }
        }

        let statistics = PairStatistics::from_rows(total, rows.as_slice());

        let deltas = |predicate: fn(&MethodRow<'a>) -> bool| {
            contracts
                .iter()
                .zip(rows.iter())
                .filter(|(_, row)| predicate(row))
                .filter_map(|(contract, row)| {
                    Some(FunctionDelta {
                        contract: *contract,
                        function: row.name,
                        difference: row.difference?,
                    })
                })
                .collect::<Vec<FunctionDelta<'a>>>()
        };

        let mut improvements = deltas(MethodRow::is_improved);
        improvements.sort_by(|a, b| a.difference.value().total_cmp(&b.difference.value()));
        let mut regressions = deltas(MethodRow::is_regressed);
        regressions.sort_by(|a, b| b.difference.value().total_cmp(&a.difference.value()));

        Self {
            statistics,
            improvements,
            regressions,
        }
    }
}
