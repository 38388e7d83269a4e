//!
//! Compiler identity of a measurement or settings record.
//!

pub mod markers;
pub mod pipeline;
pub mod toolchain;

use self::markers::Markers;
use self::pipeline::Pipeline;
use self::toolchain::Toolchain;

///
/// Compiler identity of a measurement or settings record.
///
/// Two identities are equal if their toolchains and version strings are equal.
/// The pipeline and optimization tags are derived from the version.
///
#[derive(Debug, Clone, serde::Serialize)]
pub struct CompilerIdentity {
    /// The toolchain.
    #[serde(rename = "type")]
    pub toolchain: Toolchain,
    /// Free-form version text.
    pub version: String,
    /// Code generation pipeline.
    pub pipeline: Pipeline,
    /// Whether the build is optimized.
    pub optimized: bool,
}

impl CompilerIdentity {
    ///
    /// Creates an identity, deriving the pipeline and optimization tags from `version`.
    ///
    pub fn new(toolchain: Toolchain, version: String, markers: &Markers) -> Self {
        let pipeline = markers.pipeline(version.as_str());
        let optimized = markers.is_optimized(version.as_str());
        Self {
            toolchain,
            version,
            pipeline,
            optimized,
        }
    }

    ///
    /// Whether this is the default pipeline of the candidate toolchain,
    /// which serves as the function baseline.
    ///
    pub fn is_function_baseline_candidate(&self) -> bool {
        self.toolchain.is_candidate() && self.pipeline == Pipeline::Default
    }

    ///
    /// Whether this is an alternate pipeline build of the candidate toolchain.
    ///
    pub fn is_candidate_via_ir(&self) -> bool {
        self.toolchain.is_candidate() && self.pipeline == Pipeline::ViaIR
    }

    ///
    /// Whether this is an optimized default pipeline build of the reference toolchain.
    ///
    pub fn is_optimized_reference(&self) -> bool {
        self.toolchain.is_reference() && self.optimized && self.pipeline == Pipeline::Default
    }

    ///
    /// Whether the identity refers to `toolchain` at `version`.
    ///
    pub fn matches(&self, toolchain: Toolchain, version: &str) -> bool {
        self.toolchain == toolchain && self.version == version
    }
}

impl PartialEq for CompilerIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.toolchain == other.toolchain && self.version == other.version
    }
}

impl Eq for CompilerIdentity {}

impl std::hash::Hash for CompilerIdentity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.toolchain.hash(state);
        self.version.hash(state);
    }
}

impl std::fmt::Display for CompilerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.toolchain, self.version)
    }
}
