//!
//! Relative gas differences.
//!

use crate::comparison::aggregation::FunctionData;
use crate::comparison::report::function::FunctionComparison;
use crate::comparison::report::function::FunctionDiffEntry;
use crate::model::compiler::CompilerIdentity;
use crate::model::record::measurement::Gas;

///
/// A signed percentage rounded to two decimal places.
///
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    ///
    /// Rounds `value` to two decimal places.
    ///
    pub fn new(value: f64) -> Self {
        let rounded = (value * 100.0).round() / 100.0;
        // -0.00 is displayed as 0.00
        Self(if rounded == 0.0 { 0.0 } else { rounded })
    }

    ///
    /// The rounded value.
    ///
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl serde::Serialize for Percentage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

///
/// Percentage difference of `gas` against `base`.
///
/// Returns `None` if `base` is zero.
///
pub fn difference(gas: Gas, base: Gas) -> Option<Percentage> {
    if base == 0.0 {
        return None;
    }
    Some(Percentage::new(
        (gas - base) / base * 100.0,
    ))
}

///
/// Computes the gas differences of every function against the function baseline.
///
/// Functions without a baseline measurement are skipped, as well as the ones
/// whose baseline gas is zero.
///
pub fn function_differences(
    functions: Vec<FunctionData<'_>>,
    baseline: &CompilerIdentity,
) -> Vec<FunctionComparison> {
    functions
        .into_iter()
        .filter_map(|function| {
            let Some(base_gas) = function
                .entries
                .iter()
                .find(|entry| entry.compiler == baseline)
                .map(|entry| entry.gas)
            else {
                tracing::debug!(
                    function = function.signature,
                    %baseline,
                    "Skipping function without a baseline measurement"
                );
                return None;
            };
            if base_gas == 0.0 {
                tracing::debug!(
                    function = function.signature,
                    %baseline,
                    "Skipping function with zero baseline gas"
                );
                return None;
            }

            let versions = function
                .entries
                .into_iter()
                .filter(|entry| {
                    entry.compiler == baseline
                        || entry.compiler.toolchain.is_reference()
                        || entry.compiler.is_candidate_via_ir()
                })
                .filter_map(|entry| {
                    Some(FunctionDiffEntry {
                        compiler: entry.compiler.to_owned(),
                        gas: entry.gas,
                        compiler_settings: entry.compiler_settings.to_owned(),
                        base_gas,
                        difference: difference(entry.gas, base_gas)?,
                    })
                })
                .collect();
            Some(FunctionComparison {
                name: function.signature.to_owned(),
                versions,
            })
        })
        .collect()
}
