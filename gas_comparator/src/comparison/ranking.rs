//!
//! Ranking of deployment measurements.
//!

use crate::comparison::report::deployment::DeploymentEntry;
use crate::model::compiler::CompilerIdentity;

///
/// Deployment ranking priority, highest first.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// Optimized default pipeline builds of the reference toolchain.
    OptimizedReference,
    /// Other builds of the reference toolchain.
    Reference,
    /// Builds of the candidate toolchain.
    Candidate,
}

impl From<&CompilerIdentity> for Priority {
    fn from(compiler: &CompilerIdentity) -> Self {
        if compiler.is_optimized_reference() {
            Self::OptimizedReference
        } else if compiler.toolchain.is_reference() {
            Self::Reference
        } else {
            Self::Candidate
        }
    }
}

///
/// Sorts deployment entries by priority.
///
/// The sort is stable, so entries of equal priority keep their input order.
///
pub fn rank(entries: &mut [DeploymentEntry]) {
    entries.sort_by_key(|entry| Priority::from(&entry.compiler));
}
