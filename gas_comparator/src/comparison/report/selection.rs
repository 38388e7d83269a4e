//!
//! Selected pair of compiler versions.
//!

///
/// Selected pair of compiler versions, one of each toolchain.
///
/// An empty version matches nothing.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionPair {
    /// Version of the candidate toolchain.
    pub candidate: String,
    /// Version of the reference toolchain.
    pub reference: String,
}

impl VersionPair {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(candidate: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
            reference: reference.into(),
        }
    }
}

impl std::fmt::Display for VersionPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "solx {} vs solc {}", self.candidate, self.reference)
    }
}
