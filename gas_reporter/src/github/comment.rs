//!
//! The pull request comment.
//!

///
/// The pull request comment. Only the fields the reporter reads are deserialized.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Comment {
    /// The comment identifier. Later comments have greater identifiers.
    pub id: u64,
    /// The comment body. A missing body reads as empty.
    #[serde(default)]
    pub body: String,
}

impl Comment {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(id: u64, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}
