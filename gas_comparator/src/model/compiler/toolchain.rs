//!
//! Compiler toolchain.
//!

use std::str::FromStr;

///
/// Compiler toolchain.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Toolchain {
    /// The reference toolchain, whose measurements are the conventional point of comparison.
    Solc,
    /// The candidate toolchain under evaluation.
    Solx,
}

impl Toolchain {
    ///
    /// Whether this is the reference toolchain.
    ///
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Solc)
    }

    ///
    /// Whether this is the candidate toolchain.
    ///
    pub fn is_candidate(&self) -> bool {
        matches!(self, Self::Solx)
    }
}

impl FromStr for Toolchain {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "solc" => Ok(Self::Solc),
            "solx" => Ok(Self::Solx),
            _ => Err(anyhow::anyhow!(
                "Unknown toolchain `{}`. Supported toolchains: {}",
                string,
                vec![Self::Solc, Self::Solx]
                    .into_iter()
                    .map(|toolchain| toolchain.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            )),
        }
    }
}

impl std::fmt::Display for Toolchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Toolchain::Solc => write!(f, "solc"),
            Toolchain::Solx => write!(f, "solx"),
        }
    }
}
