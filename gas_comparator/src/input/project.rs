//!
//! Gas reports of a single project.
//!

use crate::comparison;
use crate::comparison::report::ContractComparison;
use crate::comparison::Options;
use crate::model::compiler::markers::Markers;
use crate::model::compiler::toolchain::Toolchain;
use crate::model::record::Record;

///
/// Gas reports of a single project, one record collection per toolchain.
///
/// Records are kept as raw JSON until ingestion, so that malformed ones can
/// be skipped individually.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectReports {
    /// The reference toolchain records.
    #[serde(default)]
    pub solc: Vec<serde_json::Value>,
    /// The candidate toolchain records.
    #[serde(default)]
    pub solx: Vec<serde_json::Value>,
}

impl ProjectReports {
    ///
    /// Appends the records of `toolchain`.
    ///
    pub fn extend(&mut self, toolchain: Toolchain, records: Vec<serde_json::Value>) {
        match toolchain {
            Toolchain::Solc => self.solc.extend(records),
            Toolchain::Solx => self.solx.extend(records),
        }
    }

    ///
    /// Ingests both record collections and compares them.
    ///
    pub fn compare(
        &self,
        markers: &Markers,
        options: &Options,
    ) -> Result<Vec<ContractComparison>, comparison::error::Error> {
        let reference = Record::ingest(self.solc.as_slice(), markers);
        let candidate = Record::ingest(self.solx.as_slice(), markers);
        comparison::compare(reference.as_slice(), candidate.as_slice(), options)
    }
}
