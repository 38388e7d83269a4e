//!
//! Code generation pipeline of a compiler build.
//!

///
/// Code generation pipeline of a compiler build.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Pipeline {
    /// The default pipeline.
    #[default]
    #[serde(rename = "default")]
    Default,
    /// The alternate pipeline going through Yul.
    #[serde(rename = "via-ir")]
    ViaIR,
}

impl std::fmt::Display for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pipeline::Default => write!(f, "default"),
            Pipeline::ViaIR => write!(f, "via-ir"),
        }
    }
}
