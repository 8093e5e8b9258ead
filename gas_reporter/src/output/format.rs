//!
//! Process output format.
//!

///
/// Process output format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The rendered report comment.
    #[default]
    Html,
    /// The JSON array of the matching raw method records.
    Json,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            string => anyhow::bail!(
                "Unknown output format `{string}`. Supported formats: {}",
                [Self::Html, Self::Json]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Html => write!(f, "html"),
            Format::Json => write!(f, "json"),
        }
    }
}
