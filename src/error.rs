use thiserror::Error;

pub type Result<T, E = DescriptorError> = std::result::Result<T, E>;

/// Everything that can go wrong when comparing, averaging, converting
/// or parsing descriptors. All of these are caused by the input alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DescriptorError {
    #[error("descriptor length mismatch: expected {expected} components, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("descriptor {index} of the set has {found} components, expected {expected}")]
    InconsistentSet {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("descriptor component {index} is not finite")]
    NonFinite { index: usize },

    #[error("cannot aggregate an empty descriptor set")]
    EmptyInput,

    #[error("expected {expected} numeric tokens, found only {found}")]
    InsufficientTokens { expected: usize, found: usize },

    #[error("token {position} ({token:?}) is not a valid component: {reason}")]
    InvalidToken {
        position: usize,
        token: String,
        reason: String,
    },

    #[error("expected exactly {expected} tokens, found extra token {token:?} at position {position}")]
    TrailingTokens {
        expected: usize,
        position: usize,
        token: String,
    },

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<DescriptorError>,
    },
}

impl DescriptorError {
    /// Attach a 1-based line number to an error raised while reading a single line.
    pub fn at_line(self, line: usize) -> Self {
        Self::Line {
            line,
            source: Box::new(self),
        }
    }
}
