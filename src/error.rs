use std::path::PathBuf;

use thiserror::Error;

/// PSL engine error types
#[derive(Error, Debug)]
pub enum PslError {
    /// The input name is not structurally usable: blank after trimming,
    /// starting with a separator, or carrying a URL scheme marker.
    #[error("Invalid name `{name}`: {reason}")]
    InvalidInput { name: String, reason: &'static str },

    /// The name resolves to a bare public suffix with no registrable
    /// label beneath it.
    #[error("`{0}` is not allowed according to Registry policy")]
    NotAllowed(String),

    /// A rule declaration was built from empty text.
    #[error("Rule text is empty")]
    EmptyRule,

    /// Failed to read a rule-list file.
    #[error("Failed to read list file `{path}`: {source}")]
    ListFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PslError {
    /// True for the two name-classification failures (`InvalidInput`,
    /// `NotAllowed`). The `domain` facade collapses exactly these into
    /// `None`; anything else would indicate a setup problem.
    pub fn is_name_error(&self) -> bool {
        matches!(self, PslError::InvalidInput { .. } | PslError::NotAllowed(_))
    }
}

pub type Result<T> = std::result::Result<T, PslError>;
