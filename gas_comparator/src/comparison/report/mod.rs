//!
//! Comparison report of a single contract.
//!

pub mod deployment;
pub mod function;
pub mod row;
pub mod selection;
pub mod statistics;
pub mod summary;

use crate::comparison::aggregation;
use crate::comparison::baseline::Baseline;
use crate::comparison::difference;
use crate::comparison::grouping::ContractGroup;
use crate::comparison::ranking;
use crate::model::compiler::toolchain::Toolchain;
use crate::model::compiler::CompilerIdentity;
use crate::model::record::measurement::MeasurementRecord;

use self::deployment::DeploymentDifference;
use self::deployment::DeploymentEntry;
use self::function::FunctionComparison;
use self::row::MethodRow;
use self::selection::VersionPair;
use self::statistics::PairStatistics;

///
/// Comparison report of a single contract.
///
/// There are two reference points:
/// - function gas differences are computed against `function_baseline`,
/// - deployment gas differences are computed against the first ranked
///   deployment entry, see [`ContractComparison::deployment_baseline`].
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractComparison {
    /// Contract identifier.
    pub contract_name: String,
    /// The candidate toolchain build all function differences are computed against.
    pub function_baseline: CompilerIdentity,
    /// Per-function comparisons, in order of discovery.
    pub results: Vec<FunctionComparison>,
    /// Ranked deployment measurements.
    pub deployment: Vec<DeploymentEntry>,
    /// Number of functions with a function baseline.
    pub method_count: usize,
    /// The contract measurement records.
    pub contract_objects: Vec<MeasurementRecord>,
}

impl ContractComparison {
    ///
    /// Builds the report of a contract group with a resolved function baseline.
    ///
    pub fn build(group: &ContractGroup<'_>, baseline: Baseline<'_>) -> Self {
        let function_baseline = baseline.record.compiler.to_owned();

        let functions = aggregation::aggregate(group);
        let results = difference::function_differences(functions, &function_baseline);
        let method_count = results.len();

        let mut deployment: Vec<DeploymentEntry> = group
            .measurements
            .iter()
            .map(|measurement| DeploymentEntry {
                compiler: measurement.compiler.to_owned(),
                gas: measurement.deployment.gas,
                compiler_settings: group.settings_of(&measurement.compiler).to_owned(),
            })
            .collect();
        ranking::rank(deployment.as_mut_slice());

        Self {
            contract_name: group.contract.to_owned(),
            function_baseline,
            results,
            deployment,
            method_count,
            contract_objects: group
                .measurements
                .iter()
                .map(|measurement| (*measurement).to_owned())
                .collect(),
        }
    }

    ///
    /// The deployment entry all deployment differences are computed against.
    ///
    pub fn deployment_baseline(&self) -> Option<&DeploymentEntry> {
        self.deployment.first()
    }

    ///
    /// Ranked deployment measurements with their differences against the deployment baseline.
    ///
    pub fn deployment_differences(&self) -> Vec<DeploymentDifference<'_>> {
        let base_gas = match self.deployment_baseline() {
            Some(baseline) => baseline.gas,
            None => return vec![],
        };
        self.deployment
            .iter()
            .map(|entry| DeploymentDifference {
                compiler: &entry.compiler,
                gas: entry.gas,
                difference: difference::difference(entry.gas, base_gas),
            })
            .collect()
    }

    ///
    /// Distinct compiler builds of `toolchain`, in order of discovery.
    ///
    pub fn versions(&self, toolchain: Toolchain) -> Vec<&CompilerIdentity> {
        let mut versions: Vec<&CompilerIdentity> = Vec::new();
        for record in self.contract_objects.iter() {
            if record.compiler.toolchain == toolchain && !versions.contains(&&record.compiler) {
                versions.push(&record.compiler);
            }
        }
        versions
    }

    ///
    /// The first discovered version of each toolchain.
    ///
    pub fn default_pair(&self) -> VersionPair {
        let first_version = |toolchain: Toolchain| {
            self.contract_objects
                .iter()
                .find(|record| record.compiler.toolchain == toolchain)
                .map(|record| record.compiler.version.clone())
                .unwrap_or_default()
        };
        VersionPair::new(first_version(Toolchain::Solx), first_version(Toolchain::Solc))
    }

    ///
    /// Number of functions where the selected candidate version is strictly
    /// cheaper than the selected reference version.
    ///
    pub fn efficiency_count(&self, pair: &VersionPair) -> usize {
        self.results
            .iter()
            .filter(|function| {
                match (
                    function.version(Toolchain::Solx, pair.candidate.as_str()),
                    function.version(Toolchain::Solc, pair.reference.as_str()),
                ) {
                    (Some(candidate), Some(reference)) => candidate.gas < reference.gas,
                    _ => false,
                }
            })
            .count()
    }

    ///
    /// Method table rows for the selected version pair.
    ///
    pub fn method_rows(&self, pair: &VersionPair) -> Vec<MethodRow<'_>> {
        self.results
            .iter()
            .map(|function| {
                let candidate_gas = function
                    .version(Toolchain::Solx, pair.candidate.as_str())
                    .map(|entry| entry.gas);
                let reference_gas = function
                    .version(Toolchain::Solc, pair.reference.as_str())
                    .map(|entry| entry.gas);
                let difference = match (candidate_gas, reference_gas) {
                    (Some(candidate), Some(reference)) => {
                        difference::difference(candidate, reference)
                    }
                    _ => None,
                };
                MethodRow {
                    name: function.name.as_str(),
                    short_name: function.short_name(),
                    candidate_gas,
                    reference_gas,
                    difference,
                }
            })
            .collect()
    }

    ///
    /// Improvement statistics for the selected version pair.
    ///
    pub fn pair_statistics(&self, pair: &VersionPair) -> PairStatistics {
        let rows = self.method_rows(pair);
        PairStatistics::from_rows(self.method_count, rows.as_slice())
    }
}
