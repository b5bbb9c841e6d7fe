use proc_macro2::Span;
use thiserror::Error as ThisError;

///
/// GenerateError
///
/// Generation-time failure. Every variant carries the span of the tokens that
/// caused it so the proc-macro layer can point rustc at the right place.
///

#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error("too many arguments: {count} supplied, at most {max} are supported")]
    CapacityExceeded {
        count: usize,
        max: usize,
        span: Span,
    },

    #[error("expected (type, field) pairs, found {count} arguments")]
    OddPairList { count: usize, span: Span },

    #[error("expected at least one {what}")]
    EmptyList { what: &'static str, span: Span },

    #[error("invalid enumerator: {message}")]
    InvalidEnumerator { message: String, span: Span },

    #[error("invalid option: {message}")]
    InvalidOption { message: String, span: Span },

    #[error(transparent)]
    Syntax(#[from] syn::Error),
}

impl GenerateError {
    /// Span the error should be reported at.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::CapacityExceeded { span, .. }
            | Self::OddPairList { span, .. }
            | Self::EmptyList { span, .. }
            | Self::InvalidEnumerator { span, .. }
            | Self::InvalidOption { span, .. } => *span,
            Self::Syntax(err) => err.span(),
        }
    }

    pub(crate) fn capacity(count: usize, span: Span) -> Self {
        Self::CapacityExceeded {
            count,
            max: crate::MAX_ARITY,
            span,
        }
    }

    pub(crate) fn invalid_enumerator(message: impl Into<String>, span: Span) -> Self {
        Self::InvalidEnumerator {
            message: message.into(),
            span,
        }
    }
}

impl From<darling::Error> for GenerateError {
    fn from(err: darling::Error) -> Self {
        Self::Syntax(syn::Error::new(err.span(), err.to_string()))
    }
}

impl From<GenerateError> for syn::Error {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Syntax(err) => err,
            other => Self::new(other.span(), other.to_string()),
        }
    }
}
