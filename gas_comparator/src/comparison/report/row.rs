//!
//! A method table row for a selected version pair.
//!

use crate::comparison::difference::Percentage;
use crate::model::record::measurement::Gas;

///
/// A method table row for a selected version pair.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRow<'a> {
    /// Function signature.
    pub name: &'a str,
    /// Function name without the parameter list.
    pub short_name: &'a str,
    /// Gas cost with the selected candidate version.
    pub candidate_gas: Option<Gas>,
    /// Gas cost with the selected reference version.
    pub reference_gas: Option<Gas>,
    /// Difference of the candidate against the reference, in percent.
    pub difference: Option<Percentage>,
}

impl MethodRow<'_> {
    ///
    /// Whether the candidate is strictly cheaper than the reference.
    ///
    pub fn is_improved(&self) -> bool {
        match (self.candidate_gas, self.reference_gas) {
            (Some(candidate), Some(reference)) => candidate < reference,
            _ => false,
        }
    }

    ///
    /// Whether the candidate is strictly more expensive than the reference.
    ///
    pub fn is_regressed(&self) -> bool {
        match (self.candidate_gas, self.reference_gas) {
            (Some(candidate), Some(reference)) => candidate > reference,
            _ => false,
        }
    }
}
