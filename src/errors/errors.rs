use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    source_text: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, source_text: impl Into<String>) -> Self {
        Error {
            internal_error: error_impl,
            source_text: source_text.into(),
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The text the error was detected in (a directive line or a statement).
    pub fn get_source_text(&self) -> &str {
        &self.source_text
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MalformedMacroDirective { .. } => "MalformedMacroDirective",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::RecursionLimitExceeded { .. } => "RecursionLimitExceeded",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MalformedMacroDirective { .. } => ErrorTip::Suggestion(String::from(
                "A macro needs both a name and a value: `#define NAME VALUE`",
            )),
            ErrorImpl::InvalidAssignmentTarget { target } => ErrorTip::Suggestion(format!(
                "`{}` is not a variable, declare it or add it to the scope",
                target
            )),
            ErrorImpl::RecursionLimitExceeded { limit } => ErrorTip::Suggestion(format!(
                "Brackets or operators nest deeper than {} levels, raise `max_depth` if this is intended",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in `{}`", self.internal_error, self.source_text)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("malformed macro directive: {directive:?}")]
    MalformedMacroDirective { directive: String },
    #[error("invalid assignment target: {target:?}")]
    InvalidAssignmentTarget { target: String },
    #[error("nesting exceeds the recursion limit of {limit}")]
    RecursionLimitExceeded { limit: usize },
}
