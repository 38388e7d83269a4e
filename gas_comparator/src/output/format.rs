//!
//! Output report format.
//!

///
/// Output report format.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Format {
    /// Human-readable colored report.
    #[default]
    Text,
    /// JSON format, corresponds to the inner data model of the comparator.
    Json,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            string => anyhow::bail!(
                "Unknown report format `{string}`. Supported formats: {}",
                vec![Self::Text, Self::Json]
                    .into_iter()
                    .map(|element| element.to_string().to_lowercase())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "json"),
        }
    }
}
