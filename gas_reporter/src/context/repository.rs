//!
//! The source-control repository.
//!

use std::str::FromStr;

///
/// The source-control repository, as in `owner/name`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The repository owner login.
    pub owner: String,
    /// The repository name.
    pub name: String,
}

impl FromStr for Repository {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_owned(),
                    name: name.to_owned(),
                })
            }
            _ => anyhow::bail!("Invalid repository `{string}`. Expected `owner/name`"),
        }
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
