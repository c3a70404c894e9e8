use crate::format::Format;

/// Errors raised by format adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The input is not valid for the format, or its root is not a mapping.
    /// `message` is the underlying parser's diagnostic, verbatim.
    #[error("failed to decode {format} document: {message}")]
    Decode { format: Format, message: String },

    /// The tree could not be serialized in the format.
    #[error("failed to encode {format} document: {message}")]
    Encode { format: Format, message: String },

    /// A format name or file extension was not recognized.
    #[error("unknown format: {0}")]
    UnknownFormat(String),
}

impl FormatError {
    pub(crate) fn decode(format: Format, message: impl ToString) -> Self {
        Self::Decode {
            format,
            message: message.to_string(),
        }
    }

    pub(crate) fn encode(format: Format, message: impl ToString) -> Self {
        Self::Encode {
            format,
            message: message.to_string(),
        }
    }

    /// The underlying diagnostic message.
    pub fn message(&self) -> &str {
        match self {
            Self::Decode { message, .. } | Self::Encode { message, .. } => message,
            Self::UnknownFormat(name) => name,
        }
    }

    /// The format that raised the error, if any.
    pub fn format(&self) -> Option<Format> {
        match self {
            Self::Decode { format, .. } | Self::Encode { format, .. } => Some(*format),
            Self::UnknownFormat(_) => None,
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    pub fn is_encode(&self) -> bool {
        matches!(self, Self::Encode { .. })
    }
}

/// Convenience alias for format results.
pub type FormatResult<T> = Result<T, FormatError>;
