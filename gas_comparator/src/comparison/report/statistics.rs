//!
//! Statistics of a contract for a selected version pair.
//!

use crate::comparison::difference::Percentage;
use crate::comparison::report::row::MethodRow;

///
/// Statistics of a contract for a selected version pair.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairStatistics {
    /// Number of functions with a function baseline.
    pub total: usize,
    /// Number of functions measured with both selected versions.
    pub compared: usize,
    /// Number of functions where the candidate is cheaper.
    pub improved: usize,
    /// Number of functions where the candidate is more expensive.
    pub regressed: usize,
    /// Mean difference of the compared functions, in percent.
    pub average_difference: Option<Percentage>,
}

impl PairStatistics {
    ///
    /// Computes the statistics of method rows.
    ///
    pub fn from_rows(total: usize, rows: &[MethodRow<'_>]) -> Self {
        let compared = rows
            .iter()
            .filter(|row| row.candidate_gas.is_some() && row.reference_gas.is_some())
            .count();
        let improved = rows.iter().filter(|row| row.is_improved()).count();
        let regressed = rows.iter().filter(|row| row.is_regressed()).count();
        let differences: Vec<f64> = rows
            .iter()
            .filter_map(|row| row.difference.map(|difference| difference.value()))
            .collect();
        let average_difference = if differences.is_empty() {
            None
        } else {
            Some(Percentage::new(
                differences.iter().sum::<f64>() / (differences.len() as f64),
            ))
        };

        Self {
            total,
            compared,
            improved,
            regressed,
            average_difference,
        }
    }
}
