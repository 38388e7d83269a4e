//!
//! Version text markers.
//!

use regex::Regex;

use crate::model::compiler::pipeline::Pipeline;

///
/// Version text markers.
///
/// Reports encode the pipeline and optimization flags into the free-form
/// version string. The markers are applied once when a record is ingested.
///
#[derive(Debug, Clone)]
pub struct Markers {
    /// Matches versions built with the alternate pipeline.
    pub alternate_pipeline: Regex,
    /// Matches optimized builds.
    pub optimized: Regex,
}

impl Markers {
    /// The default alternate pipeline marker.
    pub const ALTERNATE_PIPELINE_DEFAULT: &'static str = "via-ir";

    /// The default optimization marker.
    pub const OPTIMIZED_DEFAULT: &'static str = "opt";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(alternate_pipeline: &str, optimized: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            alternate_pipeline: Regex::new(alternate_pipeline)?,
            optimized: Regex::new(optimized)?,
        })
    }

    ///
    /// Returns the pipeline encoded in `version`.
    ///
    pub fn pipeline(&self, version: &str) -> Pipeline {
        if self.alternate_pipeline.is_match(version) {
            Pipeline::ViaIR
        } else {
            Pipeline::Default
        }
    }

    ///
    /// Whether `version` denotes an optimized build.
    ///
    pub fn is_optimized(&self, version: &str) -> bool {
        self.optimized.is_match(version)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            alternate_pipeline: Regex::new(regex::escape(Self::ALTERNATE_PIPELINE_DEFAULT).as_str())
                .expect("Always valid"),
            optimized: Regex::new(regex::escape(Self::OPTIMIZED_DEFAULT).as_str())
                .expect("Always valid"),
        }
    }
}
