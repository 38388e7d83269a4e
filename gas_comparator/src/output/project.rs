//!
//! Comparison results of a single project.
//!

use crate::comparison::report::selection::VersionPair;
use crate::comparison::report::summary::Summary;
use crate::comparison::report::ContractComparison;

///
/// Comparison results of a single project.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectComparison {
    /// Project identifier.
    pub project: String,
    /// Per-contract comparison reports.
    pub contracts: Vec<ContractComparison>,
    /// Candidate version selected by the user.
    pub candidate_version: Option<String>,
    /// Reference version selected by the user.
    pub reference_version: Option<String>,
}

impl ProjectComparison {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(project: String, contracts: Vec<ContractComparison>) -> Self {
        Self {
            project,
            contracts,
            candidate_version: None,
            reference_version: None,
        }
    }

    ///
    /// Sets the version pair selected by the user.
    /// The omitted versions fall back to the first discovered ones of each contract.
    ///
    pub fn with_versions(
        mut self,
        candidate_version: Option<String>,
        reference_version: Option<String>,
    ) -> Self {
        self.candidate_version = candidate_version;
        self.reference_version = reference_version;
        self
    }

    ///
    /// Returns the version pair selected for `comparison`.
    ///
    pub fn pair(&self, comparison: &ContractComparison) -> VersionPair {
        let default = comparison.default_pair();
        VersionPair::new(
            self.candidate_version
                .clone()
                .unwrap_or(default.candidate),
            self.reference_version
                .clone()
                .unwrap_or(default.reference),
        )
    }

    ///
    /// Summarizes the project over all its contracts.
    ///
    pub fn summary(&self) -> Summary<'_> {
        Summary::new(self.contracts.as_slice(), |comparison| self.pair(comparison))
    }
}
