//!
//! JSON report.
//!

use crate::comparison::report::deployment::DeploymentDifference;
use crate::comparison::report::row::MethodRow;
use crate::comparison::report::selection::VersionPair;
use crate::comparison::report::statistics::PairStatistics;
use crate::comparison::report::summary::Summary;
use crate::comparison::report::ContractComparison;
use crate::output::project::ProjectComparison;

///
/// Contract report with the values derived for the selected version pair.
///
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ContractReport<'a> {
    #[serde(flatten)]
    comparison: &'a ContractComparison,
    deployment_differences: Vec<DeploymentDifference<'a>>,
    selected_versions: VersionPair,
    method_rows: Vec<MethodRow<'a>>,
    statistics: PairStatistics,
    efficiency_count: usize,
}

///
/// Project report.
///
#[derive(Debug, serde::Serialize)]
struct ProjectReport<'a> {
    project: &'a str,
    contracts: Vec<ContractReport<'a>>,
    summary: Summary<'a>,
}

impl<'a> From<&'a ProjectComparison> for ProjectReport<'a> {
    fn from(project: &'a ProjectComparison) -> Self {
        let contracts = project
            .contracts
            .iter()
            .map(|comparison| {
                let pair = project.pair(comparison);
                ContractReport {
                    comparison,
                    deployment_differences: comparison.deployment_differences(),
                    method_rows: comparison.method_rows(&pair),
                    statistics: comparison.pair_statistics(&pair),
                    efficiency_count: comparison.efficiency_count(&pair),
                    selected_versions: pair,
                }
            })
            .collect();
        Self {
            project: project.project.as_str(),
            contracts,
            summary: project.summary(),
        }
    }
}

///
/// JSON report of all compared projects.
///
#[derive(Debug, Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl TryFrom<&[ProjectComparison]> for Json {
    type Error = serde_json::Error;

    fn try_from(projects: &[ProjectComparison]) -> Result<Self, Self::Error> {
        let reports: Vec<ProjectReport> = projects.iter().map(ProjectReport::from).collect();
        let content = serde_json::to_string_pretty(&reports)?;
        Ok(Self { content })
    }
}
